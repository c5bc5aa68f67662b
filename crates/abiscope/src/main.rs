// ABIScope - Contract Interface Analyzer
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! ABIScope - Contract Interface Analyzer
//!
//! Turns a JSON interface manifest into UI-ready metadata, canonical
//! signatures, and input validation results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

mod cmd;
mod utils;

/// Command-line interface for ABIScope
#[derive(Debug, Parser)]
#[command(name = "abiscope")]
#[command(about = "ABIScope - Analyze smart-contract interface manifests")]
#[command(version)]
pub struct Cli {
    /// Analyzer configuration file (TOML)
    #[arg(long, global = true, env = "ABISCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write logs to a file under the system temp directory
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a manifest and print the result as JSON
    Analyze {
        /// Manifest file, or `-` for stdin
        manifest: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Fail on malformed or too deeply nested manifests instead of
        /// printing an empty interface
        #[arg(long)]
        strict: bool,
    },
    /// Print canonical signatures, functions first, then events
    Signatures {
        /// Manifest file, or `-` for stdin
        manifest: PathBuf,

        /// Prefix each line with its selector (functions) or topic (events)
        #[arg(long)]
        selectors: bool,
    },
    /// Validate argument values for a function or the constructor
    Validate {
        /// Manifest file, or `-` for stdin
        manifest: PathBuf,

        /// Function name or canonical signature; `constructor` for the constructor
        #[arg(long, short)]
        function: String,

        /// Argument value as `name=value`; unnamed inputs are `param<index>`
        #[arg(long = "arg", short, value_parser = utils::parse_key_val)]
        args: Vec<(String, String)>,
    },
    /// Encode a UI value for a type and print it as JSON
    Encode {
        /// ABI type, e.g. `uint256[]`
        #[arg(long = "type", short)]
        ty: String,

        /// Value as typed by a user
        value: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    abiscope_common::init_logging("abiscope", cli.log_file)?;

    let config = utils::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Analyze { manifest, pretty, strict } => {
            cmd::analyze(manifest, config, *pretty, *strict)
        }
        Commands::Signatures { manifest, selectors } => {
            cmd::signatures(manifest, config, *selectors)
        }
        Commands::Validate { manifest, function, args } => {
            cmd::validate(manifest, config, function, args)
        }
        Commands::Encode { ty, value } => cmd::encode(ty, value),
    }
}
