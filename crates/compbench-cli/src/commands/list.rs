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

//! List command - catalog and resolution status

use super::Source;
use compbench::{AlgorithmRegistry, ArtifactStatus, BenchConfig, BenchmarkRunner, Result};

/// Options of the `list` command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Where artifacts come from.
    pub source: Source,
    /// Also print every probed path of missing artifacts.
    pub verbose: bool,
}

/// One status line: id, package, then the resolved path or `missing`.
pub fn format_status(status: &ArtifactStatus) -> String {
    let outcome = match &status.resolution {
        Ok(resolved) => format!(
            "{} (candidate {})",
            resolved.path.display(),
            resolved.candidate + 1
        ),
        Err(_) => "missing".to_string(),
    };
    format!("{:<16} {:<24} {}", status.id, status.package, outcome)
}

/// Registry listing: one line per codec, then the sweep size.
pub fn format_algorithms(registry: &AlgorithmRegistry) -> String {
    let mut out = String::from("Algorithms:\n");
    for codec in registry.iter() {
        let levels = codec.levels();
        out.push_str(&format!(
            "  {:<8} levels {}..={}\n",
            codec.name(),
            levels.start(),
            levels.end()
        ));
    }
    out.push_str(&format!(
        "  {} compression calls per artifact\n",
        registry.sweep_size()
    ));
    out
}

/// Prints the algorithm registry and each artifact's resolution status.
///
/// Missing artifacts are reported, not treated as errors; with `verbose`
/// every probed path is printed as well.
pub fn list(options: &ListOptions) -> Result<()> {
    let artifacts = options.source.artifacts()?;
    let config = options
        .source
        .configure(BenchConfig::default().with_verbose(options.verbose));
    let runner = BenchmarkRunner::new(config)?;

    print!("{}", format_algorithms(runner.registry()));
    println!();
    println!("{:<16} {:<24} {}", "ARTIFACT", "PACKAGE", "LOCATION");
    let statuses = runner.check(&artifacts)?;
    for status in &statuses {
        println!("{}", format_status(status));
        if let (true, Err(e)) = (options.verbose, &status.resolution) {
            for line in e.to_string().lines().skip(1) {
                println!("{:<16} {}", "", line.trim());
            }
        }
    }

    let missing = statuses.iter().filter(|s| s.resolution.is_err()).count();
    println!();
    println!(
        "{} of {} artifacts resolved",
        statuses.len() - missing,
        statuses.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compbench::fixtures::ResolvedArtifact;
    use compbench::BenchError;
    use std::path::PathBuf;

    #[test]
    fn test_format_algorithms() {
        let text = format_algorithms(&AlgorithmRegistry::standard());
        assert!(text.starts_with("Algorithms:\n"));
        assert!(text.contains("  gzip     levels 1..=9\n"));
        assert!(text.contains("  brotli   levels 0..=11\n"));
        assert!(text.contains("  zstd     levels 1..=22\n"));
        assert!(text.ends_with("  43 compression calls per artifact\n"));

        let gzip = AlgorithmRegistry::standard()
            .retain(&["gzip".to_string()])
            .unwrap();
        assert!(format_algorithms(&gzip).contains("  9 compression calls per artifact"));
    }

    #[test]
    fn test_format_status() {
        let found = ArtifactStatus {
            id: "lodash".to_string(),
            package: "lodash".to_string(),
            resolution: Ok(ResolvedArtifact {
                id: "lodash".to_string(),
                name: "lodash.min.js".to_string(),
                path: PathBuf::from("/nm/lodash/lodash.min.js"),
                candidate: 0,
            }),
        };
        let line = format_status(&found);
        assert!(line.starts_with("lodash"));
        assert!(line.ends_with("/nm/lodash/lodash.min.js (candidate 1)"));

        let missing = ArtifactStatus {
            id: "vue".to_string(),
            package: "vue".to_string(),
            resolution: Err(BenchError::ArtifactNotFound {
                id: "vue".to_string(),
                attempted: Vec::new(),
            }),
        };
        assert!(format_status(&missing).ends_with("missing"));
    }
}
