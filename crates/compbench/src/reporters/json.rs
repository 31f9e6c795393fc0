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

//! JSON export for run results.

use crate::core::measurement::RunResult;
use crate::error::{BenchError, Result};
use std::fs;
use std::path::Path;

/// Serializes the run result as pretty-printed JSON.
pub fn to_json(run: &RunResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(run)
}

/// Exports the run result as JSON.
pub fn export_json(run: &RunResult, path: &Path) -> Result<()> {
    let json = to_json(run).map_err(|e| BenchError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| BenchError::write(path, e))
}
