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

//! Artifact resolution against installed packages.
//!
//! Third-party bundles move files around between releases, so each artifact
//! declares an ordered list of candidate locations inside its package. The
//! resolver returns the first candidate that exists and fails with every
//! probed path when none does.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// One possible location of an artifact inside its package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Path segments relative to the package root.
    pub segments: Vec<String>,
    /// Display name used when this candidate wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Candidate {
    /// Creates a candidate from path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    /// Overrides the display name for this candidate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Joins the segments onto a package root.
    pub fn path_in(&self, package_root: &Path) -> PathBuf {
        self.segments
            .iter()
            .fold(package_root.to_path_buf(), |path, segment| path.join(segment))
    }
}

/// Static declaration of a benchmark input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Short unique id, also used for chart file names.
    pub id: String,
    /// Default display name.
    pub name: String,
    /// Owning package, e.g. `react-dom` or `@fontsource/roboto`.
    pub package: String,
    /// Candidate locations, tried in order.
    pub candidates: Vec<Candidate>,
}

impl ArtifactSpec {
    /// Spec with no candidates yet; add them with [`Self::with_candidate`].
    pub fn new(id: impl Into<String>, name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            package: package.into(),
            candidates: Vec::new(),
        }
    }

    /// Appends a candidate.
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Rejects specs that could never resolve.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(BenchError::invalid_config("id", "artifact id is empty"));
        }
        if self.id.contains(['/', '\\']) {
            return Err(BenchError::invalid_config(
                "id",
                format!("artifact id '{}' must not contain path separators", self.id),
            ));
        }
        if self.package.trim().is_empty() {
            return Err(BenchError::invalid_config(
                "package",
                format!("artifact '{}' has no package", self.id),
            ));
        }
        if self.candidates.is_empty() {
            return Err(BenchError::invalid_config(
                "candidates",
                format!("artifact '{}' declares no candidates", self.id),
            ));
        }
        if let Some(i) = self.candidates.iter().position(|c| c.segments.is_empty()) {
            return Err(BenchError::invalid_config(
                "candidates",
                format!("candidate {} of artifact '{}' has no path", i, self.id),
            ));
        }
        Ok(())
    }
}

/// An artifact pinned to a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Artifact id.
    pub id: String,
    /// Display name of the winning candidate.
    pub name: String,
    /// Absolute path of the winning candidate.
    pub path: PathBuf,
    /// Index of the winning candidate.
    pub candidate: usize,
}

/// Finds where a package is installed.
pub trait PackageLocator {
    /// Returns the package root, or every path probed when the package is
    /// not installed.
    fn locate(&self, package: &str) -> std::result::Result<PathBuf, Vec<PathBuf>>;
}

/// Node-style lookup: `<dir>/node_modules/<package>` for each search root
/// and each of its ancestors, nearest first.
#[derive(Debug, Clone)]
pub struct NodeModulesLocator {
    roots: Vec<PathBuf>,
}

impl NodeModulesLocator {
    /// Locator over `roots`; relative roots are taken from the current
    /// directory.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::with_base(roots, &cwd)
    }

    /// Locator over `roots`, joining relative roots onto `base`.
    ///
    /// Roots are normalized lexically so the ancestor walk climbs real
    /// parent directories instead of stopping at `.` or `..`.
    pub fn with_base(roots: Vec<PathBuf>, base: &Path) -> Self {
        let roots = roots
            .into_iter()
            .map(|root| normalize(&base.join(root)))
            .collect();
        Self { roots }
    }
}

impl PackageLocator for NodeModulesLocator {
    fn locate(&self, package: &str) -> std::result::Result<PathBuf, Vec<PathBuf>> {
        let mut probed: Vec<PathBuf> = Vec::new();
        for root in &self.roots {
            for dir in root.ancestors() {
                let package_root = package
                    .split('/')
                    .fold(dir.join("node_modules"), |path, part| path.join(part));
                let manifest = package_root.join("package.json");
                if manifest.is_file() {
                    return Ok(package_root);
                }
                // Roots sharing ancestors probe the same manifests.
                if !probed.contains(&manifest) {
                    probed.push(manifest);
                }
            }
        }
        Err(probed)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the filesystem root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Resolves an artifact to its first existing candidate.
///
/// # Errors
///
/// Returns [`BenchError::ArtifactNotFound`] listing every probed path when
/// the package is not installed or none of its candidates exist.
pub fn resolve(spec: &ArtifactSpec, locator: &dyn PackageLocator) -> Result<ResolvedArtifact> {
    spec.validate()?;

    let package_root = locator
        .locate(&spec.package)
        .map_err(|attempted| BenchError::ArtifactNotFound {
            id: spec.id.clone(),
            attempted,
        })?;

    let mut attempted = Vec::with_capacity(spec.candidates.len());
    for (index, candidate) in spec.candidates.iter().enumerate() {
        let path = candidate.path_in(&package_root);
        if path.is_file() {
            debug!(artifact = %spec.id, path = %path.display(), "resolved candidate {}", index);
            return Ok(ResolvedArtifact {
                id: spec.id.clone(),
                name: candidate.name.clone().unwrap_or_else(|| spec.name.clone()),
                path,
                candidate: index,
            });
        }
        debug!(artifact = %spec.id, path = %path.display(), "candidate missing");
        attempted.push(path);
    }

    Err(BenchError::ArtifactNotFound {
        id: spec.id.clone(),
        attempted,
    })
}
