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

//! Result aggregation.
//!
//! Condenses each (artifact, algorithm) sweep into the numbers a reader
//! looks for first: the best ratio and where it was reached, the fastest
//! level, and how long the sweep took.

use crate::core::measurement::{AlgorithmResult, FileResult, RunResult};
use serde::{Deserialize, Serialize};

/// Summary of one algorithm's sweep over one artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    /// Artifact id.
    pub artifact: String,
    /// Algorithm name.
    pub algorithm: String,
    /// Level reaching the lowest ratio (lowest such level on ties).
    pub best_level: u32,
    /// Lowest ratio.
    pub best_ratio: f64,
    /// Compressed size at `best_level`.
    pub best_size: u64,
    /// Percentage of the original saved at `best_level`.
    pub best_savings_pct: f64,
    /// Level with the lowest time.
    pub fastest_level: u32,
    /// Time at `fastest_level`, in milliseconds.
    pub fastest_time_ms: f64,
    /// Sum of all call times, in milliseconds.
    pub total_time_ms: f64,
}

/// Aggregated results for a whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResults {
    /// Number of artifacts.
    pub total_files: usize,
    /// Number of timed compression calls.
    pub total_measurements: usize,
    /// Sum of all call times, in milliseconds.
    pub total_time_ms: f64,
    /// Per-(artifact, algorithm) summaries, in run order.
    pub summaries: Vec<AlgorithmSummary>,
}

impl AggregatedResults {
    /// Summaries for one artifact.
    pub fn for_file<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a AlgorithmSummary> {
        self.summaries.iter().filter(move |s| s.artifact == id)
    }
}

/// Summarizes one algorithm result. Returns `None` when it has no
/// measurements.
pub fn summarize_algorithm(artifact: &str, result: &AlgorithmResult) -> Option<AlgorithmSummary> {
    let best = result.best_ratio()?;
    let fastest = result.fastest()?;
    Some(AlgorithmSummary {
        artifact: artifact.to_string(),
        algorithm: result.algorithm.clone(),
        best_level: best.level,
        best_ratio: best.ratio,
        best_size: best.size,
        best_savings_pct: best.savings_pct(),
        fastest_level: fastest.level,
        fastest_time_ms: fastest.time_ms,
        total_time_ms: result.total_time_ms(),
    })
}

/// Summarizes every algorithm of one artifact.
pub fn summarize_file(file: &FileResult) -> Vec<AlgorithmSummary> {
    file.algorithms
        .iter()
        .filter_map(|a| summarize_algorithm(&file.id, a))
        .collect()
}

/// Aggregates a whole run.
pub fn aggregate_results(run: &RunResult) -> AggregatedResults {
    let summaries: Vec<AlgorithmSummary> = run.files.iter().flat_map(summarize_file).collect();
    AggregatedResults {
        total_files: run.files.len(),
        total_measurements: run.measurement_count(),
        total_time_ms: summaries.iter().map(|s| s.total_time_ms).sum(),
        summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::Measurement;
    use std::path::PathBuf;

    fn m(level: u32, time_ms: f64, size: u64) -> Measurement {
        Measurement {
            level,
            time_ms,
            size,
            ratio: size as f64 / 1000.0,
        }
    }

    fn file(id: &str) -> FileResult {
        FileResult {
            id: id.to_string(),
            name: id.to_uppercase(),
            path: PathBuf::from(format!("/{}", id)),
            original_size: 1000,
            chart: None,
            algorithms: vec![
                AlgorithmResult::new("gzip", vec![m(1, 1.0, 400), m(2, 2.0, 350), m(3, 4.0, 350)]),
                AlgorithmResult::new("zstd", vec![m(1, 0.5, 380), m(2, 0.8, 300)]),
            ],
        }
    }

    #[test]
    fn test_summarize_algorithm() {
        let f = file("a");
        let summary = summarize_algorithm("a", &f.algorithms[0]).unwrap();
        assert_eq!(summary.best_level, 2);
        assert_eq!(summary.best_size, 350);
        assert!((summary.best_savings_pct - 65.0).abs() < 1e-9);
        assert_eq!(summary.fastest_level, 1);
        assert!((summary.total_time_ms - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_algorithm_has_no_summary() {
        assert!(summarize_algorithm("a", &AlgorithmResult::new("gzip", Vec::new())).is_none());
    }

    #[test]
    fn test_aggregate_results() {
        let mut run = RunResult::new();
        run.push(file("a"));
        run.push(file("b"));

        let agg = aggregate_results(&run);
        assert_eq!(agg.total_files, 2);
        assert_eq!(agg.total_measurements, 10);
        assert_eq!(agg.summaries.len(), 4);
        assert!((agg.total_time_ms - 2.0 * 8.3).abs() < 1e-9);
        assert_eq!(agg.for_file("b").count(), 2);
        assert_eq!(agg.summaries[0].artifact, "a");
        assert_eq!(agg.summaries[3].algorithm, "zstd");
    }
}
