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

//! Whole-manifest analysis.
//!
//! A manifest arrives either as descriptors or as text. Text is accepted in
//! the shapes commonly found in the wild:
//!
//! - a JSON array of descriptors (compiler `--abi` output)
//! - an object with an `abi` field holding such an array (build artifacts)
//! - a JSON string containing either of the above (explorer API responses)
//!
//! Malformed text is a soft failure: [`analyze_interface`] logs it and returns
//! an empty interface. Use [`try_analyze_interface`] to observe the error.

use abiscope_common::types::{
    descriptors_from_json_abi, AnalyzedInterface, DescriptorKind, RawDescriptor, RawParameter,
};
use alloy_json_abi::JsonAbi;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{analyze_event, analyze_function, analyze_parameter, classify};
use crate::{AnalysisError, AnalyzerConfig};

/// An interface manifest, structured or serialized.
#[derive(Debug, Clone)]
pub enum ManifestInput {
    /// Already-deserialized descriptors.
    Descriptors(Vec<RawDescriptor>),
    /// Serialized manifest text.
    Text(String),
}

impl From<Vec<RawDescriptor>> for ManifestInput {
    fn from(descriptors: Vec<RawDescriptor>) -> Self {
        Self::Descriptors(descriptors)
    }
}

impl From<String> for ManifestInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ManifestInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<&JsonAbi> for ManifestInput {
    fn from(abi: &JsonAbi) -> Self {
        Self::Descriptors(descriptors_from_json_abi(abi))
    }
}

/// Parse manifest text into descriptors.
pub fn parse_manifest(text: &str) -> Result<Vec<RawDescriptor>, AnalysisError> {
    let value: Value = serde_json::from_str(text)?;
    descriptors_from_value(value, true)
}

fn descriptors_from_value(
    value: Value,
    allow_nested: bool,
) -> Result<Vec<RawDescriptor>, AnalysisError> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut object) if allow_nested => match object.remove("abi") {
            Some(abi) => descriptors_from_value(abi, false),
            None => Err(AnalysisError::ManifestShape("object without an `abi` field".into())),
        },
        Value::String(inner) if allow_nested => {
            descriptors_from_value(serde_json::from_str(&inner)?, false)
        }
        other => Err(AnalysisError::ManifestShape(format!(
            "expected a descriptor array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Analyzes whole manifests with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct InterfaceAnalyzer {
    config: AnalyzerConfig,
}

impl InterfaceAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The analyzer's configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a manifest, degrading any failure to an empty interface.
    pub fn analyze(&self, input: impl Into<ManifestInput>) -> AnalyzedInterface {
        self.try_analyze(input).unwrap_or_else(|error| {
            warn!(%error, "Manifest could not be analyzed; treating it as empty");
            AnalyzedInterface::empty()
        })
    }

    /// Analyze a manifest, reporting parse failures and depth violations.
    pub fn try_analyze(
        &self,
        input: impl Into<ManifestInput>,
    ) -> Result<AnalyzedInterface, AnalysisError> {
        let descriptors = match input.into() {
            ManifestInput::Descriptors(descriptors) => descriptors,
            ManifestInput::Text(text) => parse_manifest(&text)?,
        };
        self.analyze_descriptors(&descriptors)
    }

    fn analyze_descriptors(
        &self,
        descriptors: &[RawDescriptor],
    ) -> Result<AnalyzedInterface, AnalysisError> {
        self.check_depth(descriptors)?;

        let mut functions = Vec::new();
        let mut events = Vec::new();
        let mut constructor_inputs = None;

        for descriptor in descriptors {
            match descriptor.kind {
                DescriptorKind::Function => {
                    functions.push(analyze_function(descriptor, &self.config.cost))
                }
                DescriptorKind::Event => events.push(analyze_event(descriptor)),
                DescriptorKind::Constructor => {
                    constructor_inputs =
                        Some(descriptor.inputs.iter().map(analyze_parameter).collect())
                }
                DescriptorKind::Other => {
                    debug!(name = descriptor.name_or_empty(), "Skipping non-analyzable descriptor")
                }
            }
        }

        let interface = AnalyzedInterface::new(functions, events, constructor_inputs);
        info!(
            functions = interface.functions().len(),
            read = interface.read_count(),
            write = interface.write_count(),
            payable = interface.payable_count(),
            events = interface.event_count(),
            "Interface analyzed"
        );
        Ok(interface)
    }

    fn check_depth(&self, descriptors: &[RawDescriptor]) -> Result<(), AnalysisError> {
        let limit = self.config.max_depth;
        for descriptor in descriptors {
            let depth = descriptor_depth(descriptor);
            if depth > limit {
                return Err(AnalysisError::DepthExceeded {
                    descriptor: descriptor.name_or_empty().to_string(),
                    depth,
                    limit,
                });
            }
        }
        Ok(())
    }
}

/// Nesting depth of a descriptor's parameter trees. Every struct level and
/// every array suffix counts, so `uint256[][]` is as deep as a struct
/// wrapping a struct wrapping a scalar.
fn descriptor_depth(descriptor: &RawDescriptor) -> usize {
    descriptor.inputs.iter().chain(&descriptor.outputs).map(parameter_depth).max().unwrap_or(0)
}

fn parameter_depth(param: &RawParameter) -> usize {
    let own = 1 + classify(&param.ty).arity();
    own + param.components().iter().map(parameter_depth).max().unwrap_or(0)
}

/// Analyze a manifest with the default configuration. Never fails: malformed
/// input yields an empty interface.
pub fn analyze_interface(input: impl Into<ManifestInput>) -> AnalyzedInterface {
    InterfaceAnalyzer::default().analyze(input)
}

/// Analyze a manifest with the default configuration, reporting failures.
pub fn try_analyze_interface(
    input: impl Into<ManifestInput>,
) -> Result<AnalyzedInterface, AnalysisError> {
    InterfaceAnalyzer::default().try_analyze(input)
}
