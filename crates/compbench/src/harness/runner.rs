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

//! Benchmark runner driving resolution, sweeps, charts and reports.

use crate::core::config::{BenchConfig, ExportFormat};
use crate::core::measurement::{FileResult, RunResult};
use crate::core::registry::AlgorithmRegistry;
use crate::error::{BenchError, Result};
use crate::fixtures::catalog::select;
use crate::fixtures::resolver::{
    resolve, ArtifactSpec, NodeModulesLocator, PackageLocator, ResolvedArtifact,
};
use crate::harness::sweep::sweep;
use crate::reporters::chart::{ChartRenderer, ChartSpec, SvgChartRenderer};
use crate::reporters::{console, json, markdown};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Note attached to every run result.
pub const SINGLE_SAMPLE_NOTE: &str =
    "Each time is a single wall-clock sample without warm-up; treat small differences as noise.";

/// Resolution outcome of one artifact, as reported by [`BenchmarkRunner::check`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactStatus {
    /// Artifact id.
    pub id: String,
    /// Owning package.
    pub package: String,
    /// Resolved file, or the resolution error.
    pub resolution: Result<ResolvedArtifact>,
}

/// Runner for a full benchmark pass.
///
/// Artifacts are processed sequentially in declaration order. Any error
/// aborts the run; nothing is reported for a failed run.
pub struct BenchmarkRunner {
    config: BenchConfig,
    registry: AlgorithmRegistry,
    locator: Box<dyn PackageLocator>,
    renderer: Box<dyn ChartRenderer>,
}

impl BenchmarkRunner {
    /// Creates a runner with the standard registry, restricted to
    /// `config.algorithms`, and a `node_modules` locator over the configured
    /// search roots (the current directory when none are set).
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for unknown algorithm names.
    pub fn new(config: BenchConfig) -> Result<Self> {
        let registry = AlgorithmRegistry::standard().retain(&config.algorithms)?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let locator = NodeModulesLocator::with_base(config.effective_search_roots(&cwd), &cwd);
        Ok(Self {
            config,
            registry,
            locator: Box::new(locator),
            renderer: Box::new(SvgChartRenderer::default()),
        })
    }

    /// Replaces the algorithm registry.
    pub fn with_registry(mut self, registry: AlgorithmRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the package locator.
    pub fn with_locator(mut self, locator: Box<dyn PackageLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Replaces the chart renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn ChartRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Codecs this runner sweeps.
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Resolves every selected artifact without reading or sweeping it.
    pub fn check(&self, artifacts: &[ArtifactSpec]) -> Result<Vec<ArtifactStatus>> {
        let selected = select(artifacts.to_vec(), &self.config.artifacts)?;
        Ok(selected
            .iter()
            .map(|spec| ArtifactStatus {
                id: spec.id.clone(),
                package: spec.package.clone(),
                resolution: resolve(spec, self.locator.as_ref()),
            })
            .collect())
    }

    /// Runs the benchmark over `artifacts`.
    ///
    /// Every artifact is resolved before any sweep starts, so a missing
    /// artifact fails the run without writing anything.
    pub fn run(&self, artifacts: &[ArtifactSpec]) -> Result<RunResult> {
        let selected = select(artifacts.to_vec(), &self.config.artifacts)?;
        if selected.is_empty() {
            return Err(BenchError::invalid_config(
                "artifacts",
                "no artifacts to benchmark",
            ));
        }
        if self.registry.is_empty() {
            return Err(BenchError::invalid_config(
                "algorithms",
                "no algorithms to sweep",
            ));
        }

        let resolved = selected
            .iter()
            .map(|spec| {
                let artifact = resolve(spec, self.locator.as_ref())?;
                if artifact.candidate > 0 {
                    warn!(
                        artifact = %artifact.id,
                        "skipped {} missing candidate(s), using {}",
                        artifact.candidate,
                        artifact.path.display()
                    );
                }
                Ok(artifact)
            })
            .collect::<Result<Vec<_>>>()?;

        let charts_dir = self.config.charts_path();
        fs::create_dir_all(&charts_dir).map_err(|e| BenchError::write(&charts_dir, e))?;

        if self.config.verbose {
            info!(
                artifacts = resolved.len(),
                calls_per_artifact = self.registry.sweep_size(),
                "sweeping {}",
                self.registry.names().join(", ")
            );
        }

        let mut run = RunResult::new();
        run.add_note(SINGLE_SAMPLE_NOTE);
        for artifact in &resolved {
            run.push(self.run_artifact(artifact)?);
        }

        if self.config.verbose {
            info!(
                files = run.files.len(),
                measurements = run.measurement_count(),
                "benchmark complete"
            );
        }
        Ok(run)
    }

    fn run_artifact(&self, artifact: &ResolvedArtifact) -> Result<FileResult> {
        if self.config.verbose {
            info!(artifact = %artifact.id, path = %artifact.path.display(), "benchmarking {}", artifact.name);
        }

        let raw = fs::read(&artifact.path).map_err(|e| BenchError::read(&artifact.path, e))?;
        let algorithms = sweep(&artifact.id, &raw, &self.registry)?;

        let mut file = FileResult {
            id: artifact.id.clone(),
            name: artifact.name.clone(),
            path: artifact.path.clone(),
            original_size: raw.len() as u64,
            chart: None,
            algorithms,
        };

        let image = self.renderer.render(&ChartSpec::from_file_result(&file))?;
        let relative = self
            .config
            .chart_relative_path(&file.id, self.renderer.extension());
        let target = self.config.output_dir.join(&relative);
        fs::write(&target, image).map_err(|e| BenchError::write(&target, e))?;
        file.chart = Some(relative);

        if self.config.verbose {
            info!(
                artifact = %file.id,
                original_size = file.original_size,
                measurements = file.measurement_count(),
                "chart written to {}",
                target.display()
            );
        }
        Ok(file)
    }

    /// Writes the reports enabled in the configuration and returns the
    /// files written.
    pub fn write_reports(&self, run: &RunResult) -> Result<Vec<PathBuf>> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| BenchError::write(output_dir, e))?;

        let mut written = Vec::new();
        if self.config.has_format(ExportFormat::Markdown) {
            let path = self.config.report_path();
            markdown::export_markdown(run, &path)?;
            written.push(path);
        }
        if self.config.has_format(ExportFormat::Json) {
            let path = self.config.json_path();
            json::export_json(run, &path)?;
            written.push(path);
        }
        if self.config.has_format(ExportFormat::Console) {
            console::print_summary(run);
        }

        if self.config.verbose {
            for path in &written {
                info!("wrote {}", path.display());
            }
        }
        Ok(written)
    }
}
