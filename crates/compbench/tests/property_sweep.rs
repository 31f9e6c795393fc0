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

//! Property-based tests for the sweep engine.
//!
//! # Properties Tested
//!
//! 1. **Coverage**: one measurement per declared level, strictly ascending
//! 2. **Ratio**: `ratio == size / original` and `ratio > 0`
//! 3. **Determinism**: identical input gives identical sizes

use compbench::error::Result;
use compbench::{sweep, AlgorithmRegistry, Codec};
use proptest::prelude::*;
use std::ops::RangeInclusive;

/// Emits `len * (level + 1) / (max + 1)` bytes, at least one.
struct Scaled {
    min: u32,
    max: u32,
}

impl Codec for Scaled {
    fn name(&self) -> &str {
        "scaled"
    }

    fn levels(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    fn compress(&self, input: &[u8], level: u32) -> Result<Vec<u8>> {
        let len = input.len() * (level as usize + 1) / (self.max as usize + 1);
        Ok(vec![0u8; len.max(1)])
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every declared level is measured once, in ascending order
    #[test]
    fn prop_levels_cover_declared_range(
        min in 0u32..5,
        span in 0u32..10,
        len in 1usize..4096
    ) {
        let registry = AlgorithmRegistry::new(vec![Box::new(Scaled { min, max: min + span })])
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let input = vec![1u8; len];

        let results = sweep("prop", &input, &registry)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let levels: Vec<u32> = results[0].measurements.iter().map(|m| m.level).collect();
        prop_assert_eq!(levels, (min..=min + span).collect::<Vec<_>>());
    }

    /// Property: ratio is size over original and always positive
    #[test]
    fn prop_ratio_matches_size(len in 1usize..4096, max in 1u32..12) {
        let registry = AlgorithmRegistry::new(vec![Box::new(Scaled { min: 1, max })])
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let input = vec![9u8; len];

        let results = sweep("prop", &input, &registry)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for m in &results[0].measurements {
            prop_assert!(m.ratio > 0.0);
            prop_assert!(m.time_ms >= 0.0);
            prop_assert!((m.ratio - m.size as f64 / len as f64).abs() < 1e-12);
        }
    }

    /// Property: real codecs are deterministic across sweeps
    #[test]
    fn prop_gzip_sizes_deterministic(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
        let registry = AlgorithmRegistry::standard()
            .retain(&["gzip".to_string()])
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let first = sweep("prop", &data, &registry)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = sweep("prop", &data, &registry)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let sizes = |r: &[compbench::AlgorithmResult]| -> Vec<u64> {
            r[0].measurements.iter().map(|m| m.size).collect()
        };
        prop_assert_eq!(sizes(&first), sizes(&second));
    }
}
