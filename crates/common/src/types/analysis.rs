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

//! Enriched analysis results.
//!
//! Everything here is produced in one pass by the engine and never mutated
//! afterwards; re-analysis always yields a fresh [`AnalyzedInterface`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationRule;

/// The input widget a UI should render for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// A 20-byte address input.
    Address,
    /// A boolean toggle.
    Checkbox,
    /// A (possibly very large) integer input.
    Number,
    /// A hex byte-string input.
    Bytes,
    /// Free text; also used for unrecognized types.
    Text,
    /// A list editor over an element type.
    Array,
    /// A nested sub-form over the parameter's children.
    Tuple,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Address => "address",
            Self::Checkbox => "checkbox",
            Self::Number => "number",
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Array => "array",
            Self::Tuple => "tuple",
        };
        f.write_str(name)
    }
}

/// Enriched metadata for a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    /// Parameter name as declared; may be empty.
    pub name: String,
    /// Raw type string as declared.
    #[serde(rename = "type")]
    pub ty: String,
    /// Compiler-provided type annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Indexed flag, only set for event parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    /// Widget a UI should render.
    pub widget_kind: WidgetKind,
    /// Placeholder text for the input.
    pub placeholder: String,
    /// Ordered validation rules.
    pub validation_rules: Vec<ValidationRule>,
    /// Deterministic example value.
    pub example: String,
    /// Prose description; filled in by documentation tooling, never by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Analyzed sub-components of structured types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ParameterInfo>>,
}

impl ParameterInfo {
    /// Label for display: the declared name, or `param{index}` when unnamed.
    pub fn display_name(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("param{index}")
        } else {
            self.name.clone()
        }
    }

    /// Analyzed children, or an empty slice for non-structured parameters.
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Read/write/payable classification of a function.
///
/// The variant order is the sort order used for function listings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FunctionCategory {
    /// `view` or `pure`: no state change, no transaction needed.
    Read,
    /// Changes state, accepts no value.
    Write,
    /// Changes state and accepts native value.
    Payable,
}

impl FunctionCategory {
    /// Classifies a `stateMutability` string. Anything that is not `view`,
    /// `pure`, or `payable` is a write.
    pub fn from_state_mutability(state_mutability: &str) -> Self {
        match state_mutability {
            "view" | "pure" => Self::Read,
            "payable" => Self::Payable,
            _ => Self::Write,
        }
    }
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Payable => write!(f, "payable"),
        }
    }
}

/// How involved a function's input form is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Up to two scalar inputs.
    Simple,
    /// Three or four scalar inputs.
    Medium,
    /// Five or more inputs, or any array or structured input.
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Medium => write!(f, "medium"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// Rough execution-cost estimate.
///
/// This is a heuristic derived only from the parameter list. It is not a gas
/// model and must not be used to set gas limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CostEstimate {
    /// Read-only call; costs nothing when called off-chain.
    NoCost,
    /// Approximate gas for a state-changing call.
    Approximate {
        /// Estimated gas units.
        gas: u64,
    },
}

impl CostEstimate {
    /// Estimated gas, or `None` for read-only calls.
    pub fn gas(&self) -> Option<u64> {
        match self {
            Self::NoCost => None,
            Self::Approximate { gas } => Some(*gas),
        }
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCost => write!(f, "no cost"),
            Self::Approximate { gas } => write!(f, "~{gas} gas"),
        }
    }
}

/// A fully analyzed function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedFunction {
    /// Function name.
    pub name: String,
    /// Canonical signature, e.g. `swap((address,uint24),bool)`.
    pub canonical_signature: String,
    /// Effective state mutability.
    pub state_mutability: String,
    /// Analyzed inputs.
    pub inputs: Vec<ParameterInfo>,
    /// Analyzed outputs.
    pub outputs: Vec<ParameterInfo>,
    /// True iff `category` is [`FunctionCategory::Read`].
    pub is_read_only: bool,
    /// True iff `category` is [`FunctionCategory::Payable`].
    pub requires_value: bool,
    /// Read/write/payable classification.
    pub category: FunctionCategory,
    /// Input-form complexity tier.
    pub complexity: Complexity,
    /// Rough cost estimate.
    pub cost_estimate: CostEstimate,
}

/// A fully analyzed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEvent {
    /// Event name.
    pub name: String,
    /// Canonical signature, e.g. `Transfer(address,address,uint256)`.
    pub canonical_signature: String,
    /// Analyzed parameters, with their indexed flags.
    pub parameters: Vec<ParameterInfo>,
}

/// The analysis of a whole interface manifest.
///
/// Functions are kept sorted by category (read, write, payable) and then by
/// name. The summary counts are computed from the lists at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedInterface {
    functions: Vec<AnalyzedFunction>,
    events: Vec<AnalyzedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constructor_inputs: Option<Vec<ParameterInfo>>,
    read_count: usize,
    write_count: usize,
    payable_count: usize,
    event_count: usize,
}

impl AnalyzedInterface {
    /// Builds the aggregate, sorting functions and deriving the counts.
    pub fn new(
        mut functions: Vec<AnalyzedFunction>,
        events: Vec<AnalyzedEvent>,
        constructor_inputs: Option<Vec<ParameterInfo>>,
    ) -> Self {
        functions.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

        let count = |category| functions.iter().filter(|f| f.category == category).count();
        let read_count = count(FunctionCategory::Read);
        let write_count = count(FunctionCategory::Write);
        let payable_count = count(FunctionCategory::Payable);
        let event_count = events.len();

        Self {
            functions,
            events,
            constructor_inputs,
            read_count,
            write_count,
            payable_count,
            event_count,
        }
    }

    /// An interface with nothing analyzable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sorted functions.
    pub fn functions(&self) -> &[AnalyzedFunction] {
        &self.functions
    }

    /// Events in manifest order.
    pub fn events(&self) -> &[AnalyzedEvent] {
        &self.events
    }

    /// Constructor inputs, if the manifest declared a constructor.
    pub fn constructor_inputs(&self) -> Option<&[ParameterInfo]> {
        self.constructor_inputs.as_deref()
    }

    /// Number of read functions.
    pub fn read_count(&self) -> usize {
        self.read_count
    }

    /// Number of write functions.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Number of payable functions.
    pub fn payable_count(&self) -> usize {
        self.payable_count
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// True when there are no functions, events, or constructor.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.events.is_empty() && self.constructor_inputs.is_none()
    }

    /// First function with the given name. Overloads share a name; use
    /// [`Self::find_by_signature`] to pick a specific one.
    pub fn find_function(&self, name: &str) -> Option<&AnalyzedFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// The function with the given canonical signature.
    pub fn find_by_signature(&self, signature: &str) -> Option<&AnalyzedFunction> {
        self.functions.iter().find(|f| f.canonical_signature == signature)
    }

    /// Functions of one category, in sorted order.
    pub fn functions_in(
        &self,
        category: FunctionCategory,
    ) -> impl Iterator<Item = &AnalyzedFunction> + '_ {
        self.functions.iter().filter(move |f| f.category == category)
    }
}
