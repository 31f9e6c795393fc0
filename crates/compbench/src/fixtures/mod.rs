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

//! Benchmark input management.
//!
//! - **catalog**: Built-in and JSON artifact catalogs
//! - **resolver**: Candidate-path resolution inside installed packages

pub mod catalog;
pub mod resolver;

pub use catalog::{default_artifacts, load_catalog, parse_catalog, select, validate_catalog};
pub use resolver::{
    resolve, ArtifactSpec, Candidate, NodeModulesLocator, PackageLocator, ResolvedArtifact,
};
