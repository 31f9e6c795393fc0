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

//! Artifact catalogs.
//!
//! The built-in catalog covers typical front-end payloads: framework
//! bundles, a utility library, a stylesheet and a web font. A JSON file with
//! the same shape can replace it.

use crate::error::{BenchError, Result};
use crate::fixtures::resolver::{ArtifactSpec, Candidate};
use std::collections::HashSet;
use std::path::Path;

/// The built-in artifact list, in report order.
pub fn default_artifacts() -> Vec<ArtifactSpec> {
    vec![
        // React 19 dropped the UMD builds.
        ArtifactSpec::new("react-dom", "react-dom", "react-dom")
            .with_candidate(
                Candidate::new(["umd", "react-dom.production.min.js"])
                    .with_name("react-dom.production.min.js (UMD)"),
            )
            .with_candidate(
                Candidate::new(["cjs", "react-dom.production.min.js"])
                    .with_name("react-dom.production.min.js (CJS)"),
            )
            .with_candidate(
                Candidate::new(["cjs", "react-dom-client.production.js"])
                    .with_name("react-dom-client.production.js"),
            ),
        ArtifactSpec::new("vue", "vue.global.prod.js", "vue")
            .with_candidate(Candidate::new(["dist", "vue.global.prod.js"])),
        ArtifactSpec::new("lodash", "lodash.min.js", "lodash")
            .with_candidate(Candidate::new(["lodash.min.js"])),
        ArtifactSpec::new("jquery", "jquery.min.js", "jquery")
            .with_candidate(Candidate::new(["dist", "jquery.min.js"])),
        ArtifactSpec::new("bootstrap-css", "bootstrap.min.css", "bootstrap")
            .with_candidate(Candidate::new(["dist", "css", "bootstrap.min.css"])),
        // Newer @fontsource releases moved font files under files/.
        ArtifactSpec::new("roboto", "Roboto 400 (woff2)", "@fontsource/roboto")
            .with_candidate(Candidate::new(["files", "roboto-latin-400-normal.woff2"]))
            .with_candidate(Candidate::new(["roboto-latin-400-normal.woff2"])),
    ]
}

/// Parses a JSON catalog: an array of artifact specs.
pub fn parse_catalog(json: &str) -> Result<Vec<ArtifactSpec>> {
    let artifacts: Vec<ArtifactSpec> =
        serde_json::from_str(json).map_err(|e| BenchError::Catalog(e.to_string()))?;
    validate_catalog(&artifacts)?;
    Ok(artifacts)
}

/// Loads a JSON catalog from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<ArtifactSpec>> {
    let json = std::fs::read_to_string(path).map_err(|e| BenchError::read(path, e))?;
    parse_catalog(&json)
}

/// Checks every spec and id uniqueness.
pub fn validate_catalog(artifacts: &[ArtifactSpec]) -> Result<()> {
    if artifacts.is_empty() {
        return Err(BenchError::Catalog("catalog declares no artifacts".to_string()));
    }
    let mut ids = HashSet::new();
    for artifact in artifacts {
        artifact.validate()?;
        if !ids.insert(artifact.id.as_str()) {
            return Err(BenchError::Catalog(format!(
                "duplicate artifact id '{}'",
                artifact.id
            )));
        }
    }
    Ok(())
}

/// Keeps the artifacts whose ids are listed, preserving catalog order.
///
/// An empty filter keeps everything.
pub fn select(artifacts: Vec<ArtifactSpec>, ids: &[String]) -> Result<Vec<ArtifactSpec>> {
    if ids.is_empty() {
        return Ok(artifacts);
    }
    if let Some(unknown) = ids.iter().find(|id| !artifacts.iter().any(|a| &a.id == *id)) {
        return Err(BenchError::invalid_config(
            "only",
            format!("unknown artifact '{}'", unknown),
        ));
    }
    Ok(artifacts
        .into_iter()
        .filter(|a| ids.contains(&a.id))
        .collect())
}
