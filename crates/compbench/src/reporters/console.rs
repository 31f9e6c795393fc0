// Dweve compbench - Compression Level Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Console reporter for run results.

use crate::core::measurement::RunResult;
use crate::harness::aggregator::aggregate_results;

/// Formats the compact per-artifact summary printed after a run.
pub fn format_summary(run: &RunResult) -> String {
    let agg = aggregate_results(run);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(72)));
    out.push_str("COMPRESSION BENCHMARK SUMMARY\n");
    out.push_str(&format!("{}\n", "=".repeat(72)));
    out.push_str(&format!(
        "Files: {}  Measurements: {}  Total time: {:.3} ms\n",
        agg.total_files, agg.total_measurements, agg.total_time_ms
    ));

    for file in &run.files {
        out.push_str(&format!("\n{} ({} bytes)\n", file.name, file.original_size));
        out.push_str(&format!(
            "  {:<10} {:>6} {:>10} {:>12} {:>8} {:>8}\n",
            "algorithm", "best", "ratio", "size", "saved", "fastest"
        ));
        for summary in agg.for_file(&file.id) {
            out.push_str(&format!(
                "  {:<10} {:>6} {:>10.4} {:>12} {:>7.1}% {:>8}\n",
                summary.algorithm,
                summary.best_level,
                summary.best_ratio,
                summary.best_size,
                summary.best_savings_pct,
                summary.fastest_level
            ));
        }
    }

    if !run.notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in &run.notes {
            out.push_str(&format!("  - {}\n", note));
        }
    }
    out.push_str(&format!("{}\n", "=".repeat(72)));
    out
}

/// Prints the summary to stdout.
pub fn print_summary(run: &RunResult) {
    print!("{}", format_summary(run));
}
