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

//! Error types for compression benchmark runs.
//!
//! Every variant is fatal to the run: the harness never produces a partial
//! report, so errors simply propagate to the driver.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during a benchmark run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// No candidate location existed for a declared artifact.
    #[error("artifact '{id}' not found; tried:\n{}", format_attempted(.attempted))]
    ArtifactNotFound {
        /// Artifact id
        id: String,
        /// Every path probed, in probe order
        attempted: Vec<PathBuf>,
    },

    /// The codec rejected the input or level, or failed internally.
    #[error("{algorithm} compression failed at level {level}: {message}")]
    Compression {
        /// Algorithm name
        algorithm: String,
        /// Level being swept
        level: u32,
        /// Underlying error message
        message: String,
    },

    /// A sweep did not produce exactly one measurement per declared level.
    #[error("{algorithm} swept levels {swept:?}, declared {declared:?}")]
    LevelCoverage {
        /// Algorithm name
        algorithm: String,
        /// Levels the codec declares, ascending
        declared: Vec<u32>,
        /// Levels actually measured, in sweep order
        swept: Vec<u32>,
    },

    /// Chart rendering failed for an artifact.
    #[error("failed to render chart for '{artifact}': {message}")]
    Render {
        /// Artifact id
        artifact: String,
        /// Reason for failure
        message: String,
    },

    /// A chart, report, or output directory could not be written.
    #[error("failed to write '{}': {message}", .path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A resolved artifact could not be read.
    #[error("failed to read '{}': {message}", .path.display())]
    Read {
        /// Source path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The artifact has zero bytes, so no ratio can be computed.
    #[error("artifact '{id}' is empty")]
    EmptyArtifact {
        /// Artifact id
        id: String,
    },

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Artifact catalog could not be parsed.
    #[error("invalid artifact catalog: {0}")]
    Catalog(String),
}

impl BenchError {
    /// Wraps an I/O failure on a write path.
    pub fn write(path: impl AsRef<Path>, err: io::Error) -> Self {
        BenchError::Write {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Wraps an I/O failure on a read path.
    pub fn read(path: impl AsRef<Path>, err: io::Error) -> Self {
        BenchError::Read {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Shorthand for [`BenchError::InvalidConfig`].
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

fn format_attempted(attempted: &[PathBuf]) -> String {
    if attempted.is_empty() {
        return "  (no paths probed)".to_string();
    }
    attempted
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
