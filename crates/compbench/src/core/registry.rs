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

//! Compression algorithm catalog.
//!
//! The registry is an immutable value built once and passed explicitly to the
//! sweep engine. Each entry exposes its name, the full level range of the
//! underlying codec, and a side-effect free `compress` operation.

use crate::error::{BenchError, Result};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::ops::RangeInclusive;

/// A compression algorithm under test.
///
/// Implementations must be referentially transparent: the same
/// `(input, level)` always yields the same output, and calls share no
/// mutable state.
pub trait Codec: Send + Sync {
    /// Unique algorithm name, used in charts and reports.
    fn name(&self) -> &str;

    /// Every valid level, ascending.
    fn levels(&self) -> RangeInclusive<u32>;

    /// Compresses `input` at `level`.
    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>>;
}

/// gzip via `flate2`, levels 1..=9.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gzip;

impl Codec for Gzip {
    fn name(&self) -> &str {
        "gzip"
    }

    fn levels(&self) -> RangeInclusive<u32> {
        1..=9
    }

    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
        encoder
            .write_all(input)
            .map_err(|e| codec_error(self.name(), level, e))?;
        encoder.finish().map_err(|e| codec_error(self.name(), level, e))
    }
}

/// Brotli window size (log2), matching the encoder's default.
const BROTLI_LGWIN: u32 = 22;

/// Brotli via the `brotli` crate, qualities 0..=11.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brotli;

impl Codec for Brotli {
    fn name(&self) -> &str {
        "brotli"
    }

    fn levels(&self) -> RangeInclusive<u32> {
        0..=11
    }

    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>> {
        let mut writer = brotli::CompressorWriter::new(Vec::new(), 4096, level, BROTLI_LGWIN);
        writer
            .write_all(input)
            .map_err(|e| codec_error(self.name(), level, e))?;
        Ok(writer.into_inner())
    }
}

/// Zstandard via the `zstd` crate, levels 1..=22.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zstd;

impl Codec for Zstd {
    fn name(&self) -> &str {
        "zstd"
    }

    fn levels(&self) -> RangeInclusive<u32> {
        1..=22
    }

    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>> {
        zstd::encode_all(input, level as i32).map_err(|e| codec_error(self.name(), level, e))
    }
}

fn codec_error(algorithm: &str, level: u32, err: impl fmt::Display) -> BenchError {
    BenchError::Compression {
        algorithm: algorithm.to_string(),
        level,
        message: err.to_string(),
    }
}

/// Ordered, immutable catalog of codecs.
pub struct AlgorithmRegistry {
    codecs: Vec<Box<dyn Codec>>,
}

impl AlgorithmRegistry {
    /// Builds a registry from codecs in sweep order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] when two codecs share a name or a
    /// codec declares an empty level range.
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for codec in &codecs {
            if !seen.insert(codec.name().to_string()) {
                return Err(BenchError::invalid_config(
                    "algorithms",
                    format!("duplicate algorithm '{}'", codec.name()),
                ));
            }
            if codec.levels().is_empty() {
                return Err(BenchError::invalid_config(
                    "algorithms",
                    format!("algorithm '{}' declares no levels", codec.name()),
                ));
            }
        }
        Ok(Self { codecs })
    }

    /// gzip, brotli and zstd over their full level ranges.
    pub fn standard() -> Self {
        Self {
            codecs: vec![Box::new(Gzip), Box::new(Brotli), Box::new(Zstd)],
        }
    }

    /// Keeps only the named codecs, preserving registry order.
    ///
    /// An empty filter keeps everything.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for names not in the registry.
    pub fn retain(self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self);
        }
        if let Some(unknown) = names.iter().find(|n| self.get(n).is_none()) {
            return Err(BenchError::invalid_config(
                "algorithm",
                format!(
                    "unknown algorithm '{}' (available: {})",
                    unknown,
                    self.names().join(", ")
                ),
            ));
        }
        let codecs = self
            .codecs
            .into_iter()
            .filter(|c| names.iter().any(|n| n == c.name()))
            .collect();
        Ok(Self { codecs })
    }

    /// Codecs in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Codec + 'static)> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    /// Looks up a codec by name.
    pub fn get(&self, name: &str) -> Option<&(dyn Codec + 'static)> {
        self.iter().find(|c| c.name() == name)
    }

    /// Codec names in sweep order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Number of codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// True when no codec is registered.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Total number of (algorithm, level) pairs in one sweep.
    pub fn sweep_size(&self) -> usize {
        self.iter().map(|c| c.levels().count()).sum()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|c| (c.name(), c.levels())))
            .finish()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
