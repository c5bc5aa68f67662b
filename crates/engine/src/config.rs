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

//! Analyzer configuration.
//!
//! Configuration can be built in code with the `with_*` methods or loaded from
//! a TOML file:
//!
//! ```toml
//! max_depth = 16
//!
//! [cost]
//! base = 21000
//! per_input = 5000
//! array_penalty = 20000
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigError;

/// Default ceiling on parameter nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Parameters of the rough cost heuristic for state-changing functions.
///
/// The estimate is `base + per_input * inputs`, plus `array_penalty` when any
/// input is an array. It is a labeled approximation, not a gas model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Flat cost of any transaction.
    pub base: u64,
    /// Added per input parameter.
    pub per_input: u64,
    /// Added once when any input is an array.
    pub array_penalty: u64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self { base: 21_000, per_input: 5_000, array_penalty: 20_000 }
    }
}

/// Configuration for the interface analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum parameter nesting depth before a manifest is rejected.
    pub max_depth: usize,
    /// Cost heuristic parameters.
    pub cost: CostModel,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, cost: CostModel::default() }
    }
}

impl AnalyzerConfig {
    /// Set the nesting depth ceiling
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the cost heuristic parameters
    pub fn with_cost_model(mut self, cost: CostModel) -> Self {
        self.cost = cost;
        self
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded analyzer configuration from {:?}", path);
        Ok(config)
    }

    /// Save the configuration as pretty TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!("Saved analyzer configuration to {:?}", path);
        Ok(())
    }
}
