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

//! Codec throughput across levels.
//!
//! Complements the single-sample sweep with criterion's repeated sampling
//! on a synthetic JavaScript-like payload.
//!
//! ```bash
//! cargo bench --package compbench --bench codecs
//! ```

use compbench::core::AlgorithmRegistry;
use compbench::sweep;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn payload() -> Vec<u8> {
    let mut js = String::new();
    for i in 0..2_000 {
        js.push_str(&format!(
            "function handler{i}(event){{if(event.type===\"click\"){{return state[{i}]+{i};}}}}\n"
        ));
    }
    js.into_bytes()
}

fn bench_codec_levels(c: &mut Criterion) {
    let data = payload();
    let registry = AlgorithmRegistry::standard();

    for codec in registry.iter() {
        let mut group = c.benchmark_group(format!("compress/{}", codec.name()));
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.sample_size(10);

        for level in codec.levels() {
            group.bench_with_input(BenchmarkId::from_parameter(level), &data, |b, input| {
                b.iter(|| codec.compress(black_box(input), level))
            });
        }

        group.finish();
    }
}

fn bench_full_sweep(c: &mut Criterion) {
    let data = payload();
    let registry = AlgorithmRegistry::standard().retain(&["gzip".to_string()]);

    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);
    if let Ok(registry) = registry {
        group.bench_function("gzip", |b| {
            b.iter(|| sweep("payload", black_box(&data), &registry))
        });
    }
    group.finish();
}

criterion_group!(codec_benches, bench_codec_levels, bench_full_sweep);
criterion_main!(codec_benches);
