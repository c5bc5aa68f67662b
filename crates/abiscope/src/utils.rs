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

//! Utility functions for the ABIScope binary

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use abiscope_engine::AnalyzerConfig;
use eyre::{Result, WrapErr};
use tracing::debug;

/// Read manifest text from a file, or from stdin when the path is `-`.
pub fn read_manifest(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).wrap_err("Failed to read manifest from stdin")?;
        return Ok(text);
    }

    debug!("Reading manifest from {:?}", path);
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read manifest {}", path.display()))
}

/// Load the analyzer configuration, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config {}", path.display())),
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Parse a `name=value` pair. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s.split_once('=').ok_or_else(|| format!("expected name=value, found `{s}`"))?;
    Ok((key.trim().to_string(), value.to_string()))
}
