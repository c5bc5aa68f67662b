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

use std::{collections::HashMap, path::Path};

use abiscope_engine::{validate_all, validate_parameters, AnalyzerConfig, InterfaceAnalyzer};
use eyre::{bail, eyre, Result};
use tracing::debug;

use crate::utils::read_manifest;

/// Validate named argument values against a function's inputs, or against
/// the constructor's when `function` is `constructor`.
///
/// Prints the per-field error map as JSON and fails when it is non-empty.
pub fn validate(
    path: &Path,
    config: AnalyzerConfig,
    function: &str,
    args: &[(String, String)],
) -> Result<()> {
    let text = read_manifest(path)?;
    let interface = InterfaceAnalyzer::new(config).try_analyze(text)?;
    let values: HashMap<String, String> = args.iter().cloned().collect();

    let errors = if function == "constructor" {
        let inputs = interface
            .constructor_inputs()
            .ok_or_else(|| eyre!("manifest declares no constructor"))?;
        validate_parameters(inputs, &values)
    } else {
        let target = if function.contains('(') {
            interface.find_by_signature(function)
        } else {
            interface.find_function(function)
        };
        let target = target.ok_or_else(|| eyre!("function `{function}` not found in manifest"))?;
        debug!(signature = %target.canonical_signature, "Validating arguments");
        validate_all(target, &values)
    };

    println!("{}", serde_json::to_string_pretty(&errors)?);
    if !errors.is_empty() {
        bail!("{} invalid argument(s)", errors.len());
    }
    Ok(())
}
