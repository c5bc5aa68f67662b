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

use thiserror::Error;

/// Errors that can occur while analyzing an interface manifest.
///
/// The lenient entry points ([`crate::analyze_interface`] and
/// [`crate::InterfaceAnalyzer::analyze`]) never surface these: they log the
/// error and return an empty interface instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The manifest text is not valid JSON.
    #[error("failed to parse interface manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// The manifest is valid JSON but not a descriptor list.
    #[error("unexpected manifest shape: {0}")]
    ManifestShape(String),

    /// A parameter tree is nested deeper than the configured ceiling.
    #[error("parameters of `{descriptor}` are nested {depth} levels deep (limit {limit})")]
    DepthExceeded {
        /// Name of the offending descriptor.
        descriptor: String,
        /// Observed nesting depth.
        depth: usize,
        /// Configured ceiling.
        limit: usize,
    },
}

/// Errors raised while loading an [`crate::AnalyzerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised while coercing UI input into a typed ABI value.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// The parameter's canonical type is not a valid ABI type.
    #[error("unsupported type `{ty}`: {source}")]
    UnsupportedType {
        /// Canonical type string.
        ty: String,
        /// Underlying parser error.
        #[source]
        source: alloy_dyn_abi::Error,
    },

    /// The input does not parse as a value of the type.
    #[error("invalid value for `{ty}`: {source}")]
    InvalidValue {
        /// Canonical type string.
        ty: String,
        /// Underlying parser error.
        #[source]
        source: alloy_dyn_abi::Error,
    },
}
