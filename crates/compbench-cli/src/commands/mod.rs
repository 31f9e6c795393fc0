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

//! CLI command implementations

mod list;
mod run;

pub use list::{format_status, list, ListOptions};
pub use run::{run, RunOptions};

use compbench::fixtures::{default_artifacts, load_catalog};
use compbench::{ArtifactSpec, BenchConfig, Result};
use std::path::PathBuf;

/// Artifact source shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Source {
    /// Package search roots; empty means the current directory.
    pub search_roots: Vec<PathBuf>,
    /// JSON catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
    /// Artifact id filter.
    pub only: Vec<String>,
}

impl Source {
    /// Loads the catalog file, or the built-in catalog.
    pub fn artifacts(&self) -> Result<Vec<ArtifactSpec>> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(default_artifacts()),
        }
    }

    /// Applies search roots and the artifact filter to a configuration.
    pub fn configure(&self, config: BenchConfig) -> BenchConfig {
        let config = self
            .search_roots
            .iter()
            .fold(config, |config, root| config.with_search_root(root));
        self.only
            .iter()
            .fold(config, |config, id| config.with_artifact(id))
    }
}
