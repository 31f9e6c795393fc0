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

//! compbench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **run**: Resolve the catalog, sweep every level, write charts and reports
//! - **list**: Show the catalog with each artifact's resolution status
//!
//! # Examples
//!
//! ```no_run
//! use compbench_cli::commands::{list, ListOptions};
//!
//! list(&ListOptions::default())?;
//! # Ok::<(), compbench::BenchError>(())
//! ```

pub mod cli;
pub mod commands;
