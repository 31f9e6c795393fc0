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

//! Result model shared by the sweep engine and the reporters.
//!
//! `Measurement` and `AlgorithmResult` are produced by the sweep engine only;
//! the runner assembles `FileResult` and `RunResult`.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// One compression call: one artifact, one algorithm, one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Compression level.
    pub level: u32,
    /// Wall-clock time of the single call, in fractional milliseconds.
    pub time_ms: f64,
    /// Compressed size in bytes.
    pub size: u64,
    /// `size / original_size`; lower is better.
    pub ratio: f64,
}

impl Measurement {
    /// Builds a measurement from a timed call.
    ///
    /// `original_size` must be non-zero.
    pub fn new(level: u32, elapsed: Duration, size: u64, original_size: u64) -> Self {
        debug_assert!(original_size > 0);
        Self {
            level,
            time_ms: elapsed.as_secs_f64() * 1000.0,
            size,
            ratio: size as f64 / original_size as f64,
        }
    }

    /// Bytes saved relative to the original, as a percentage.
    pub fn savings_pct(&self) -> f64 {
        (1.0 - self.ratio) * 100.0
    }
}

/// All measurements for one (artifact, algorithm) pair, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Algorithm name.
    pub algorithm: String,
    /// One entry per declared level, ascending.
    pub measurements: Vec<Measurement>,
}

impl AlgorithmResult {
    /// Wraps measurements already in sweep order.
    pub fn new(algorithm: impl Into<String>, measurements: Vec<Measurement>) -> Self {
        Self {
            algorithm: algorithm.into(),
            measurements,
        }
    }

    /// Checks that the measurements cover `levels` exactly, in order.
    pub fn validate(&self, levels: RangeInclusive<u32>) -> Result<()> {
        let swept: Vec<u32> = self.measurements.iter().map(|m| m.level).collect();
        let declared: Vec<u32> = levels.collect();
        if swept != declared {
            return Err(BenchError::LevelCoverage {
                algorithm: self.algorithm.clone(),
                declared,
                swept,
            });
        }
        Ok(())
    }

    /// Measurement with the lowest ratio; ties go to the lower level.
    pub fn best_ratio(&self) -> Option<&Measurement> {
        self.measurements
            .iter()
            .fold(None, |best: Option<&Measurement>, m| match best {
                Some(b) if b.ratio <= m.ratio => Some(b),
                _ => Some(m),
            })
    }

    /// Measurement with the lowest time; ties go to the lower level.
    pub fn fastest(&self) -> Option<&Measurement> {
        self.measurements
            .iter()
            .fold(None, |best: Option<&Measurement>, m| match best {
                Some(b) if b.time_ms <= m.time_ms => Some(b),
                _ => Some(m),
            })
    }

    /// Total time spent sweeping this algorithm, in milliseconds.
    pub fn total_time_ms(&self) -> f64 {
        self.measurements.iter().map(|m| m.time_ms).sum()
    }

    /// `(level, ratio)` points for charting.
    pub fn ratio_points(&self) -> Vec<(u32, f64)> {
        self.measurements.iter().map(|m| (m.level, m.ratio)).collect()
    }
}

/// All results for one artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Artifact id.
    pub id: String,
    /// Display name of the resolved candidate.
    pub name: String,
    /// Resolved absolute path.
    pub path: PathBuf,
    /// Uncompressed size in bytes.
    pub original_size: u64,
    /// Chart path relative to the output directory, once rendered.
    pub chart: Option<PathBuf>,
    /// Per-algorithm results, in registry order.
    pub algorithms: Vec<AlgorithmResult>,
}

impl FileResult {
    /// Number of measurements across all algorithms.
    pub fn measurement_count(&self) -> usize {
        self.algorithms.iter().map(|a| a.measurements.len()).sum()
    }
}

/// Complete output of a run, in artifact declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Run timestamp (RFC 3339).
    pub timestamp: String,
    /// Per-artifact results.
    pub files: Vec<FileResult>,
    /// Free-form notes rendered into reports.
    pub notes: Vec<String>,
}

impl RunResult {
    /// Empty run stamped with the current UTC time.
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            files: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Appends an artifact result; call in declaration order.
    pub fn push(&mut self, file: FileResult) {
        self.files.push(file);
    }

    /// Adds a note shown in every report.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Total number of measurements in the run.
    pub fn measurement_count(&self) -> usize {
        self.files.iter().map(FileResult::measurement_count).sum()
    }
}

impl Default for RunResult {
    fn default() -> Self {
        Self::new()
    }
}
