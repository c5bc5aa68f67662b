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

use std::path::Path;

use abiscope_engine::{AnalyzerConfig, InterfaceAnalyzer};
use alloy_primitives::{hex, keccak256};
use eyre::Result;

use crate::utils::read_manifest;

/// Print one canonical signature per line: functions in sorted order, then
/// events in manifest order.
pub fn signatures(path: &Path, config: AnalyzerConfig, selectors: bool) -> Result<()> {
    let text = read_manifest(path)?;
    let interface = InterfaceAnalyzer::new(config).try_analyze(text)?;

    for function in interface.functions() {
        let signature = &function.canonical_signature;
        if selectors {
            let hash = keccak256(signature.as_bytes());
            println!("{} {signature}", hex::encode_prefixed(&hash[..4]));
        } else {
            println!("{signature}");
        }
    }

    for event in interface.events() {
        let signature = &event.canonical_signature;
        if selectors {
            println!("{} {signature}", keccak256(signature.as_bytes()));
        } else {
            println!("{signature}");
        }
    }

    Ok(())
}
