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

//! Compression level benchmarks over real-world web artifacts.
//!
//! Sweeps every level of gzip, brotli and zstd over payloads found in
//! installed packages (framework bundles, a stylesheet, a web font),
//! records the time, size and ratio of each call, renders one ratio chart
//! per artifact and writes a Markdown report.
//!
//! ## Pipeline
//!
//! 1. **Resolve** each [`ArtifactSpec`] to its first existing candidate
//! 2. **Sweep** every (algorithm, level) pair once over the raw bytes
//! 3. **Chart** the ratio per level, one line per algorithm
//! 4. **Report** to Markdown, and optionally JSON and the console
//!
//! ## Usage
//!
//! ```no_run
//! use compbench::{default_artifacts, BenchConfig, BenchmarkRunner};
//!
//! let runner = BenchmarkRunner::new(BenchConfig::default())?;
//! let run = runner.run(&default_artifacts())?;
//! runner.write_reports(&run)?;
//! # Ok::<(), compbench::BenchError>(())
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod reporters;

pub use crate::core::{
    AlgorithmRegistry, AlgorithmResult, BenchConfig, Codec, ExportFormat, FileResult,
    Measurement, RunResult,
};
pub use error::{BenchError, Result};
pub use fixtures::{default_artifacts, load_catalog, resolve, ArtifactSpec, Candidate};
pub use harness::{sweep, ArtifactStatus, BenchmarkRunner};
