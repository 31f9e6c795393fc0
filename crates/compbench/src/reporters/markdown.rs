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

//! Markdown export for run results.

use crate::core::measurement::{FileResult, RunResult};
use crate::error::{BenchError, Result};
use crate::harness::aggregator::summarize_file;
use std::fs;
use std::path::Path;

/// Report title.
pub const REPORT_TITLE: &str = "Compression Level Benchmark";

/// Renders the report as Markdown.
///
/// Artifacts appear in run order, each with its original size, chart
/// reference and one table row per (algorithm, level).
pub fn render_markdown(run: &RunResult) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", REPORT_TITLE));
    md.push_str(&format!("**Timestamp:** {}\n\n", run.timestamp));

    if !run.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &run.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    if !run.files.is_empty() {
        md.push_str("## Summary\n\n");
        md.push_str("| File | Algorithm | Best Level | Best Ratio | Size (bytes) | Fastest Level | Total Time (ms) |\n");
        md.push_str("|------|-----------|------------|------------|--------------|---------------|-----------------|\n");
        for file in &run.files {
            for summary in summarize_file(file) {
                md.push_str(&format!(
                    "| {} | {} | {} | {:.4} | {} | {} | {:.3} |\n",
                    escape_text(&file.name),
                    escape_text(&summary.algorithm),
                    summary.best_level,
                    summary.best_ratio,
                    summary.best_size,
                    summary.fastest_level,
                    summary.total_time_ms
                ));
            }
        }
        md.push('\n');
    }

    for file in &run.files {
        push_file_section(&mut md, file);
    }

    md
}

fn push_file_section(md: &mut String, file: &FileResult) {
    md.push_str(&format!("## {}\n\n", escape_text(&file.name)));
    md.push_str(&format!("**Original size:** {} bytes\n\n", file.original_size));

    if let Some(chart) = &file.chart {
        // Markdown links always use forward slashes.
        let link = chart.to_string_lossy().replace('\\', "/");
        md.push_str(&format!("![{}]({})\n\n", escape_text(&file.name), link));
    }

    md.push_str("| Algorithm | Level | Time (ms) | Size (bytes) | Ratio |\n");
    md.push_str("|-----------|-------|-----------|--------------|-------|\n");
    for algorithm in &file.algorithms {
        for m in &algorithm.measurements {
            md.push_str(&format!(
                "| {} | {} | {:.3} | {} | {:.4} |\n",
                escape_text(&algorithm.algorithm),
                m.level,
                m.time_ms,
                m.size,
                m.ratio
            ));
        }
    }
    md.push('\n');
}

/// Backslash-escapes characters that would split a table cell or close
/// link text.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '|' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Writes the Markdown report to `path`.
pub fn export_markdown(run: &RunResult, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(run)).map_err(|e| BenchError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::{AlgorithmResult, Measurement};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file(id: &str, name: &str) -> FileResult {
        FileResult {
            id: id.to_string(),
            name: name.to_string(),
            path: PathBuf::from(format!("/nm/{}", id)),
            original_size: 1000,
            chart: Some(PathBuf::from("charts").join(format!("{}.svg", id))),
            algorithms: vec![AlgorithmResult::new(
                "gzip",
                vec![
                    Measurement {
                        level: 1,
                        time_ms: 0.12345,
                        size: 500,
                        ratio: 0.5,
                    },
                    Measurement {
                        level: 2,
                        time_ms: 1.5,
                        size: 333,
                        ratio: 0.333,
                    },
                ],
            )],
        }
    }

    fn run() -> RunResult {
        let mut run = RunResult::new();
        run.push(file("vue", "vue.global.prod.js"));
        run.push(file("jquery", "jquery.min.js"));
        run.add_note("single sample");
        run
    }

    #[test]
    fn test_file_section() {
        let md = render_markdown(&run());
        assert!(md.starts_with("# Compression Level Benchmark"));
        assert!(md.contains("## vue.global.prod.js\n"));
        assert!(md.contains("**Original size:** 1000 bytes"));
        assert!(md.contains("![vue.global.prod.js](charts/vue.svg)"));
        assert!(md.contains("| Algorithm | Level | Time (ms) | Size (bytes) | Ratio |"));
        assert!(md.contains("| gzip | 1 | 0.123 | 500 | 0.5000 |"));
        assert!(md.contains("| gzip | 2 | 1.500 | 333 | 0.3330 |"));
    }

    #[test]
    fn test_declaration_order() {
        let md = render_markdown(&run());
        let vue = md.find("## vue.global.prod.js").unwrap();
        let jquery = md.find("## jquery.min.js").unwrap();
        assert!(vue < jquery);
    }

    #[test]
    fn test_summary_and_notes() {
        let md = render_markdown(&run());
        assert!(md.contains("## Notes\n\n- single sample\n"));
        assert!(md.contains("| vue.global.prod.js | gzip | 2 | 0.3330 | 333 | 1 | 1.623 |"));
    }

    #[test]
    fn test_missing_chart_omits_image() {
        let mut run = run();
        run.files[0].chart = None;
        let md = render_markdown(&run);
        assert!(!md.contains("](charts/vue.svg)"));
        assert!(md.contains("](charts/jquery.svg)"));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut run = RunResult::new();
        let mut odd = file("odd", "a|b].js");
        odd.algorithms[0].algorithm = "x|y".to_string();
        run.push(odd);
        let md = render_markdown(&run);
        assert!(md.contains("## a\\|b\\].js\n"));
        assert!(md.contains("![a\\|b\\].js](charts/odd.svg)"));
        assert!(md.contains("| x\\|y | 1 | 0.123 | 500 | 0.5000 |"));
        assert!(md.contains("| a\\|b\\].js | x\\|y | 2 |"));
        assert!(!md.contains("a|b"));
    }

    #[test]
    fn test_export_markdown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.md");
        export_markdown(&run(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("## jquery.min.js"));
    }

    #[test]
    fn test_export_markdown_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("results.md");
        assert!(matches!(
            export_markdown(&run(), &path),
            Err(BenchError::Write { .. })
        ));
    }
}
