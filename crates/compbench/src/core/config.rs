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

//! Centralized benchmark configuration.
//!
//! The configuration is an explicit value handed to the runner. Nothing in
//! the library reads the process environment; the CLI maps its flags and the
//! `COMPBENCH_VERBOSE` toggle onto this struct.

use std::path::{Path, PathBuf};

/// Default output directory for charts and reports.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Default chart subdirectory, relative to the output directory.
pub const DEFAULT_CHARTS_DIR: &str = "charts";

/// Default Markdown report file name.
pub const DEFAULT_REPORT_NAME: &str = "results.md";

/// Default JSON export file name.
pub const DEFAULT_JSON_NAME: &str = "results.json";

/// Environment variable the CLI reads for the verbose toggle.
pub const VERBOSE_ENV: &str = "COMPBENCH_VERBOSE";

/// Export format options for benchmark reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Markdown document with chart references and per-level tables.
    Markdown,
    /// JSON dump of the full run result.
    Json,
    /// Console summary for immediate feedback.
    Console,
}

/// Benchmark run configuration.
///
/// # Example
///
/// ```no_run
/// use compbench::core::config::{BenchConfig, ExportFormat};
///
/// let config = BenchConfig::default()
///     .with_output_dir("out")
///     .with_search_root("/srv/site")
///     .with_export_format(ExportFormat::Json)
///     .with_verbose(true);
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Emit per-artifact progress narration.
    pub verbose: bool,
    /// Directory receiving charts and reports.
    pub output_dir: PathBuf,
    /// Chart subdirectory, relative to `output_dir`.
    pub charts_dir: PathBuf,
    /// Markdown report file name, relative to `output_dir`.
    pub report_name: String,
    /// Directories from which installed packages are looked up, in order.
    pub search_roots: Vec<PathBuf>,
    /// Restrict the sweep to these algorithm names (empty means all).
    pub algorithms: Vec<String>,
    /// Restrict the run to these artifact ids (empty means all).
    pub artifacts: Vec<String>,
    /// Export formats for reports.
    pub export_formats: Vec<ExportFormat>,
}

impl BenchConfig {
    /// Creates a configuration writing to `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            verbose: false,
            output_dir: output_dir.into(),
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            report_name: DEFAULT_REPORT_NAME.to_string(),
            search_roots: Vec::new(),
            algorithms: Vec::new(),
            artifacts: Vec::new(),
            export_formats: vec![ExportFormat::Markdown, ExportFormat::Console],
        }
    }

    /// Sets the verbose toggle.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the Markdown report file name.
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = name.into();
        self
    }

    /// Appends a package search root.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_roots.push(root.into());
        self
    }

    /// Restricts the sweep to one more algorithm.
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithms.push(name.into());
        self
    }

    /// Restricts the run to one more artifact id.
    pub fn with_artifact(mut self, id: impl Into<String>) -> Self {
        self.artifacts.push(id.into());
        self
    }

    /// Adds an export format.
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        if !self.export_formats.contains(&format) {
            self.export_formats.push(format);
        }
        self
    }

    /// Sets all export formats.
    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.export_formats = formats;
        self
    }

    /// Returns whether a specific export format is enabled.
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.export_formats.contains(&format)
    }

    /// Absolute-or-relative path of the chart directory.
    pub fn charts_path(&self) -> PathBuf {
        self.output_dir.join(&self.charts_dir)
    }

    /// Path of the Markdown report.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_name)
    }

    /// Path of the JSON export.
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(DEFAULT_JSON_NAME)
    }

    /// Chart path for an artifact, relative to the output directory.
    ///
    /// Reports embed this path so they stay valid when the output directory
    /// is moved as a whole.
    pub fn chart_relative_path(&self, artifact_id: &str, extension: &str) -> PathBuf {
        self.charts_dir.join(format!("{}.{}", artifact_id, extension))
    }

    /// Search roots to use, falling back to `cwd` when none are configured.
    pub fn effective_search_roots(&self, cwd: &Path) -> Vec<PathBuf> {
        if self.search_roots.is_empty() {
            vec![cwd.to_path_buf()]
        } else {
            self.search_roots.clone()
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
