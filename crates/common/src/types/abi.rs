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

//! Conversions from strictly-typed `alloy-json-abi` items into raw descriptors,
//! for callers that already hold a parsed [`JsonAbi`].

use alloy_json_abi::{
    Constructor, Event, EventParam, Function, JsonAbi, Param, StateMutability,
};

use super::{DescriptorKind, RawDescriptor, RawParameter};

fn mutability_str(mutability: StateMutability) -> &'static str {
    match mutability {
        StateMutability::Pure => "pure",
        StateMutability::View => "view",
        StateMutability::NonPayable => "nonpayable",
        StateMutability::Payable => "payable",
    }
}

/// Struct types always carry their component list, even an empty one, so that
/// `tuple` with no fields canonicalizes to `()` as it does from manifest text.
fn convert_components(ty: &str, components: &[Param]) -> Option<Vec<RawParameter>> {
    let is_struct = ty == "tuple" || ty.starts_with("tuple[");
    if components.is_empty() && !is_struct {
        None
    } else {
        Some(components.iter().map(RawParameter::from).collect())
    }
}

impl From<&Param> for RawParameter {
    fn from(param: &Param) -> Self {
        Self {
            name: param.name.clone(),
            ty: param.ty.clone(),
            internal_type: param.internal_type.as_ref().map(ToString::to_string),
            indexed: None,
            components: convert_components(&param.ty, &param.components),
        }
    }
}

impl From<&EventParam> for RawParameter {
    fn from(param: &EventParam) -> Self {
        Self {
            name: param.name.clone(),
            ty: param.ty.clone(),
            internal_type: param.internal_type.as_ref().map(ToString::to_string),
            indexed: Some(param.indexed),
            components: convert_components(&param.ty, &param.components),
        }
    }
}

impl From<&Function> for RawDescriptor {
    fn from(function: &Function) -> Self {
        Self {
            kind: DescriptorKind::Function,
            name: Some(function.name.clone()),
            state_mutability: Some(mutability_str(function.state_mutability).to_string()),
            constant: None,
            payable: None,
            inputs: function.inputs.iter().map(Into::into).collect(),
            outputs: function.outputs.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Event> for RawDescriptor {
    fn from(event: &Event) -> Self {
        Self {
            kind: DescriptorKind::Event,
            name: Some(event.name.clone()),
            inputs: event.inputs.iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl From<&Constructor> for RawDescriptor {
    fn from(constructor: &Constructor) -> Self {
        Self {
            kind: DescriptorKind::Constructor,
            state_mutability: Some(mutability_str(constructor.state_mutability).to_string()),
            inputs: constructor.inputs.iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Flattens a parsed [`JsonAbi`] into raw descriptors: constructor first, then
/// functions and events in the ABI's own iteration order. Fallback, receive,
/// and error items have no counterpart in the analysis and are skipped.
pub fn descriptors_from_json_abi(abi: &JsonAbi) -> Vec<RawDescriptor> {
    abi.constructor
        .iter()
        .map(RawDescriptor::from)
        .chain(abi.functions().map(RawDescriptor::from))
        .chain(abi.events().map(RawDescriptor::from))
        .collect()
}
