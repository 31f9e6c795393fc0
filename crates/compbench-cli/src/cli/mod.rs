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

//! CLI command definitions and argument parsing.

use crate::commands::{self, ListOptions, RunOptions};
use clap::{Args, Subcommand};
use compbench::Result;
use std::path::PathBuf;

/// Where artifacts come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory from which installed packages are looked up (repeatable,
    /// defaults to the current directory)
    #[arg(long = "search-root", value_name = "DIR")]
    pub search_roots: Vec<PathBuf>,

    /// JSON catalog replacing the built-in artifact list
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Only benchmark this artifact id (repeatable)
    #[arg(long = "only", value_name = "ID")]
    pub only: Vec<String>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark and write charts and reports
    ///
    /// Resolves every artifact first; a missing artifact fails the run before
    /// anything is written.
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for charts and reports
        #[arg(short, long, value_name = "DIR", default_value = compbench::core::config::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Markdown report file name inside the output directory
        #[arg(long, value_name = "NAME", default_value = compbench::core::config::DEFAULT_REPORT_NAME)]
        report_name: String,

        /// Only sweep this algorithm (repeatable: gzip, brotli, zstd)
        #[arg(short, long = "algorithm", value_name = "NAME")]
        algorithms: Vec<String>,

        /// Also export results.json
        #[arg(long)]
        json: bool,

        /// Skip the console summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the catalog and where each artifact resolves
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Propagates any benchmark error; every error is fatal.
    pub fn execute(self, verbose: bool) -> Result<()> {
        match self {
            Commands::Run {
                source,
                output_dir,
                report_name,
                algorithms,
                json,
                quiet,
            } => commands::run(&RunOptions {
                source: source.into(),
                output_dir,
                report_name,
                algorithms,
                json,
                console: !quiet,
                verbose,
            }),
            Commands::List { source } => commands::list(&ListOptions {
                source: source.into(),
                verbose,
            }),
        }
    }
}

impl From<SourceArgs> for commands::Source {
    fn from(args: SourceArgs) -> Self {
        commands::Source {
            search_roots: args.search_roots,
            catalog: args.catalog,
            only: args.only,
        }
    }
}
