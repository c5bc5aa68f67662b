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
use eyre::Result;
use tracing::info;

use crate::utils::read_manifest;

/// Analyze a manifest and print the interface as JSON.
pub fn analyze(path: &Path, config: AnalyzerConfig, pretty: bool, strict: bool) -> Result<()> {
    let text = read_manifest(path)?;
    let analyzer = InterfaceAnalyzer::new(config);

    let interface = if strict { analyzer.try_analyze(text)? } else { analyzer.analyze(text) };
    info!(
        functions = interface.functions().len(),
        events = interface.event_count(),
        "Analyzed {}",
        path.display()
    );

    let json = if pretty {
        serde_json::to_string_pretty(&interface)?
    } else {
        serde_json::to_string(&interface)?
    };
    println!("{json}");
    Ok(())
}
