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

//! Level sweep over one input buffer.
//!
//! Every (algorithm, level) pair is compressed exactly once, in registry
//! order and ascending level order. There is no warm-up and no repetition:
//! each timing is a single wall-clock sample.

use crate::core::measurement::{AlgorithmResult, Measurement};
use crate::core::registry::{AlgorithmRegistry, Codec};
use crate::error::{BenchError, Result};
use std::time::Instant;
use tracing::debug;

/// Sweeps every codec in `registry` over `raw`.
///
/// # Errors
///
/// - [`BenchError::EmptyArtifact`] when `raw` is empty (`id` names it)
/// - [`BenchError::Compression`] from the first failing call; no partial
///   results are returned
///
/// # Example
///
/// ```no_run
/// use compbench::core::AlgorithmRegistry;
/// use compbench::harness::sweep::sweep;
///
/// let data = std::fs::read("bundle.js").unwrap();
/// let results = sweep("bundle", &data, &AlgorithmRegistry::standard()).unwrap();
/// for algorithm in &results {
///     println!("{}: {} levels", algorithm.algorithm, algorithm.measurements.len());
/// }
/// ```
pub fn sweep(id: &str, raw: &[u8], registry: &AlgorithmRegistry) -> Result<Vec<AlgorithmResult>> {
    if raw.is_empty() {
        return Err(BenchError::EmptyArtifact { id: id.to_string() });
    }
    let original_size = raw.len() as u64;

    registry
        .iter()
        .map(|codec| sweep_codec(codec, raw, original_size))
        .collect()
}

fn sweep_codec(codec: &dyn Codec, raw: &[u8], original_size: u64) -> Result<AlgorithmResult> {
    let levels = codec.levels();
    let mut measurements = Vec::with_capacity(levels.clone().count());

    for level in levels.clone() {
        let start = Instant::now();
        let compressed = codec.compress(raw, level)?;
        let elapsed = start.elapsed();

        let measurement = Measurement::new(level, elapsed, compressed.len() as u64, original_size);
        debug!(
            algorithm = codec.name(),
            level,
            size = measurement.size,
            ratio = measurement.ratio,
            "{:.3} ms",
            measurement.time_ms
        );
        measurements.push(measurement);
    }

    let result = AlgorithmResult::new(codec.name(), measurements);
    result.validate(levels)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::RangeInclusive;

    /// Returns a fixed output length per level.
    struct FixedSizes {
        name: &'static str,
        sizes: Vec<(u32, usize)>,
    }

    impl Codec for FixedSizes {
        fn name(&self) -> &str {
            self.name
        }

        fn levels(&self) -> RangeInclusive<u32> {
            self.sizes[0].0..=self.sizes[self.sizes.len() - 1].0
        }

        fn compress(&self, _input: &[u8], level: u32) -> Result<Vec<u8>> {
            let (_, size) = self
                .sizes
                .iter()
                .find(|(l, _)| *l == level)
                .ok_or_else(|| BenchError::Compression {
                    algorithm: self.name.to_string(),
                    level,
                    message: "unsupported level".to_string(),
                })?;
            Ok(vec![0u8; *size])
        }
    }

    /// Fails at one level.
    struct FailsAt(u32);

    impl Codec for FailsAt {
        fn name(&self) -> &str {
            "broken"
        }

        fn levels(&self) -> RangeInclusive<u32> {
            1..=5
        }

        fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>> {
            if level == self.0 {
                return Err(BenchError::Compression {
                    algorithm: "broken".to_string(),
                    level,
                    message: "codec exploded".to_string(),
                });
            }
            Ok(input.to_vec())
        }
    }

    fn stub_registry() -> AlgorithmRegistry {
        AlgorithmRegistry::new(vec![Box::new(FixedSizes {
            name: "stub",
            sizes: vec![(1, 500), (2, 400), (3, 300)],
        })])
        .unwrap()
    }

    #[test]
    fn test_stub_ratios() {
        let raw = vec![7u8; 1000];
        let results = sweep("stub", &raw, &stub_registry()).unwrap();

        assert_eq!(results.len(), 1);
        let stub = &results[0];
        assert_eq!(stub.algorithm, "stub");
        let levels: Vec<u32> = stub.measurements.iter().map(|m| m.level).collect();
        let sizes: Vec<u64> = stub.measurements.iter().map(|m| m.size).collect();
        let ratios: Vec<f64> = stub.measurements.iter().map(|m| m.ratio).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(sizes, vec![500, 400, 300]);
        for (actual, expected) in ratios.iter().zip([0.5, 0.4, 0.3]) {
            assert!((actual - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_registry_order_preserved() {
        let registry = AlgorithmRegistry::new(vec![
            Box::new(FixedSizes {
                name: "second",
                sizes: vec![(0, 10), (1, 9)],
            }),
            Box::new(FixedSizes {
                name: "first",
                sizes: vec![(4, 8), (5, 7), (6, 6)],
            }),
        ])
        .unwrap();

        let results = sweep("a", &[1u8; 20], &registry).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert_eq!(results[1].measurements.len(), 3);
    }

    #[test]
    fn test_compression_error_aborts() {
        let registry = AlgorithmRegistry::new(vec![Box::new(FailsAt(3))]).unwrap();
        match sweep("a", b"payload", &registry) {
            Err(BenchError::Compression { level, message, .. }) => {
                assert_eq!(level, 3);
                assert!(message.contains("exploded"));
            }
            other => panic!("Expected Compression error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        match sweep("empty", &[], &stub_registry()) {
            Err(BenchError::EmptyArtifact { id }) => assert_eq!(id, "empty"),
            other => panic!("Expected EmptyArtifact, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_registry_sweep() {
        let raw = "function add(a, b) { return a + b; }\n".repeat(100).into_bytes();
        let registry = AlgorithmRegistry::standard();
        let results = sweep("snippet", &raw, &registry).unwrap();

        for (codec, result) in registry.iter().zip(&results) {
            assert_eq!(result.measurements.len(), codec.levels().count());
            for m in &result.measurements {
                assert!(m.ratio > 0.0);
                assert!(m.time_ms >= 0.0);
                let expected = m.size as f64 / raw.len() as f64;
                assert!((m.ratio - expected).abs() < 1e-12);
            }
        }
    }
}
