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

//! Run command - full benchmark pass

use super::Source;
use compbench::core::config::DEFAULT_REPORT_NAME;
use compbench::{BenchConfig, BenchmarkRunner, ExportFormat, Result};
use std::path::PathBuf;

/// Options of the `run` command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Where artifacts come from.
    pub source: Source,
    /// Directory receiving charts and reports.
    pub output_dir: PathBuf,
    /// Markdown report file name.
    pub report_name: String,
    /// Algorithm filter; empty sweeps all.
    pub algorithms: Vec<String>,
    /// Also export JSON.
    pub json: bool,
    /// Print the console summary.
    pub console: bool,
    /// Log per-artifact progress.
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            output_dir: PathBuf::from(compbench::core::config::DEFAULT_OUTPUT_DIR),
            report_name: DEFAULT_REPORT_NAME.to_string(),
            algorithms: Vec::new(),
            json: false,
            console: true,
            verbose: false,
        }
    }
}

impl RunOptions {
    /// Maps the options onto a benchmark configuration.
    pub fn to_config(&self) -> BenchConfig {
        let mut formats = vec![ExportFormat::Markdown];
        if self.json {
            formats.push(ExportFormat::Json);
        }
        if self.console {
            formats.push(ExportFormat::Console);
        }

        let config = BenchConfig::new(&self.output_dir)
            .with_report_name(&self.report_name)
            .with_export_formats(formats)
            .with_verbose(self.verbose);
        let config = self
            .algorithms
            .iter()
            .fold(config, |config, name| config.with_algorithm(name));
        self.source.configure(config)
    }
}

/// Runs the benchmark and writes every enabled report.
///
/// # Errors
///
/// Returns the first benchmark error: an unresolved artifact, a codec or
/// chart failure, or an unwritable output directory.
pub fn run(options: &RunOptions) -> Result<()> {
    let artifacts = options.source.artifacts()?;
    let runner = BenchmarkRunner::new(options.to_config())?;

    let result = runner.run(&artifacts)?;
    let written = runner.write_reports(&result)?;

    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_config() {
        let options = RunOptions {
            source: Source {
                search_roots: vec![PathBuf::from("/site")],
                catalog: None,
                only: vec!["vue".to_string()],
            },
            output_dir: PathBuf::from("out"),
            algorithms: vec!["zstd".to_string()],
            json: true,
            console: false,
            ..RunOptions::default()
        };

        let config = options.to_config();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.search_roots, vec![PathBuf::from("/site")]);
        assert_eq!(config.artifacts, vec!["vue".to_string()]);
        assert_eq!(config.algorithms, vec!["zstd".to_string()]);
        assert!(config.has_format(ExportFormat::Json));
        assert!(!config.has_format(ExportFormat::Console));
        assert!(config.has_format(ExportFormat::Markdown));
    }
}
