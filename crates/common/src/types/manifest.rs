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

//! Raw interface-manifest types.
//!
//! These mirror the JSON ABI emitted by Solidity compilers and block explorers,
//! but are deliberately lenient: type strings are kept verbatim (vendor or
//! novel types must not make the whole manifest unreadable), missing fields
//! take their ABI defaults, and unknown descriptor kinds are preserved as
//! [`DescriptorKind::Other`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single parameter of a function, event, or constructor.
///
/// Structured (`tuple`) parameters own their sub-components, so a parameter is a
/// finite, acyclic tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameter {
    /// Parameter name; may be empty for unnamed parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw type string, e.g. `uint256`, `tuple[2]`, `bytes32[]`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub ty: String,
    /// Compiler-provided type annotation, e.g. `struct Pool.Key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    /// Whether this event parameter is indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    /// Sub-components of a structured type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<RawParameter>>,
}

impl RawParameter {
    /// Creates an unnamed-or-named parameter with no components.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into(), ..Default::default() }
    }

    /// Attaches sub-components, turning this into a structured parameter.
    pub fn with_components(mut self, components: Vec<Self>) -> Self {
        self.components = Some(components);
        self
    }

    /// Marks the parameter as indexed (event parameters only).
    pub fn with_indexed(mut self, indexed: bool) -> Self {
        self.indexed = Some(indexed);
        self
    }

    /// Returns the declared sub-components, or an empty slice.
    pub fn components(&self) -> &[Self] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// The kind of a top-level manifest entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DescriptorKind {
    /// A callable function. Entries without a `type` field are functions.
    #[default]
    Function,
    /// An event.
    Event,
    /// The contract constructor.
    Constructor,
    /// Anything else: `fallback`, `receive`, `error`, or vendor kinds.
    Other,
}

impl From<String> for DescriptorKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "function" => Self::Function,
            "event" => Self::Event,
            "constructor" => Self::Constructor,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Event => write!(f, "event"),
            Self::Constructor => write!(f, "constructor"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A top-level manifest entry: a function, event, constructor, or other item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDescriptor {
    /// Entry kind, from the manifest's `type` field.
    #[serde(rename = "type", default)]
    pub kind: DescriptorKind,
    /// Entry name; constructors and fallbacks have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared state mutability (`pure`, `view`, `nonpayable`, `payable`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    /// Pre-0.4.16 flag meaning `view`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    /// Pre-0.4.16 flag meaning `payable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
    /// Input parameters (event parameters for events).
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<RawParameter>,
    /// Output parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub outputs: Vec<RawParameter>,
}

impl RawDescriptor {
    /// Creates a function descriptor with the given name and mutability.
    pub fn function(name: impl Into<String>, state_mutability: impl Into<String>) -> Self {
        Self {
            kind: DescriptorKind::Function,
            name: Some(name.into()),
            state_mutability: Some(state_mutability.into()),
            ..Default::default()
        }
    }

    /// Creates an event descriptor with the given name.
    pub fn event(name: impl Into<String>) -> Self {
        Self { kind: DescriptorKind::Event, name: Some(name.into()), ..Default::default() }
    }

    /// Creates a constructor descriptor.
    pub fn constructor() -> Self {
        Self { kind: DescriptorKind::Constructor, ..Default::default() }
    }

    /// Sets the input parameters.
    pub fn with_inputs(mut self, inputs: Vec<RawParameter>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Sets the output parameters.
    pub fn with_outputs(mut self, outputs: Vec<RawParameter>) -> Self {
        self.outputs = outputs;
        self
    }

    /// The entry name, or an empty string when absent.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The state mutability, honoring the legacy `constant`/`payable` flags and
    /// defaulting to `nonpayable`.
    pub fn effective_state_mutability(&self) -> &str {
        if let Some(mutability) = self.state_mutability.as_deref() {
            return mutability;
        }
        match (self.payable, self.constant) {
            (Some(true), _) => "payable",
            (_, Some(true)) => "view",
            _ => "nonpayable",
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
