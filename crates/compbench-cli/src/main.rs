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

//! compbench command line interface

use clap::Parser;
use compbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// compbench - compression level benchmarks for web artifacts
///
/// Sweeps every gzip, brotli and zstd level over payloads found in
/// installed packages and writes charts plus a Markdown report.
///
/// # Examples
///
/// ```bash
/// # Benchmark the built-in catalog from the current project
/// compbench run
///
/// # Only lodash, gzip only, with a JSON export
/// compbench run --only lodash --algorithm gzip --json
///
/// # Show which artifacts resolve
/// compbench list --search-root ../site
/// ```
#[derive(Parser)]
#[command(name = "compbench")]
#[command(author, version, about = "compbench - compression level benchmarks for web artifacts", long_about = None)]
struct Cli {
    /// Narrate progress on stderr
    #[arg(
        short,
        long,
        global = true,
        env = compbench::core::VERBOSE_ENV,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "compbench=info"
    } else {
        "compbench=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command.execute(cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
