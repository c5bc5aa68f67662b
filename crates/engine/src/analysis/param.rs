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

//! Recursive parameter enrichment.

use abiscope_common::types::{ParameterInfo, RawParameter, WidgetKind};

use super::{classify, example, rules_for, BaseType, TypeCategory, TypeClass};

/// Analyze a function or constructor parameter. The `indexed` flag is dropped.
pub fn analyze_parameter(param: &RawParameter) -> ParameterInfo {
    analyze(param, false)
}

/// Analyze an event parameter, keeping its `indexed` flag.
pub fn analyze_event_parameter(param: &RawParameter) -> ParameterInfo {
    analyze(param, true)
}

fn analyze(param: &RawParameter, keep_indexed: bool) -> ParameterInfo {
    let class = classify(&param.ty);

    // Components of a struct are never indexed themselves.
    let children = match (&param.components, class.is_tuple_based()) {
        (Some(components), true) => Some(components.iter().map(analyze_parameter).collect()),
        _ => None,
    };

    ParameterInfo {
        name: param.name.clone(),
        ty: param.ty.clone(),
        internal_type: param.internal_type.clone(),
        indexed: if keep_indexed { param.indexed } else { None },
        widget_kind: widget_kind(&class),
        placeholder: placeholder(&class),
        validation_rules: rules_for(&class, &param.name),
        example: example(&param.ty),
        description: None,
        children,
    }
}

/// The input widget for a classified type.
pub fn widget_kind(class: &TypeClass<'_>) -> WidgetKind {
    match class.category() {
        TypeCategory::Address => WidgetKind::Address,
        TypeCategory::Boolean => WidgetKind::Checkbox,
        TypeCategory::SignedInteger | TypeCategory::UnsignedInteger => WidgetKind::Number,
        TypeCategory::ByteSequence => WidgetKind::Bytes,
        TypeCategory::String | TypeCategory::Text => WidgetKind::Text,
        TypeCategory::DynamicArray | TypeCategory::FixedArray => WidgetKind::Array,
        TypeCategory::Tuple => WidgetKind::Tuple,
    }
}

/// Placeholder text for a classified type. Arrays wrap their element's
/// placeholder as `[<element>, ...]`.
pub fn placeholder(class: &TypeClass<'_>) -> String {
    let scalar = scalar_placeholder(class.base());
    let arity = class.arity();
    if arity == 0 {
        return scalar;
    }
    format!("{}{scalar}{}", "[".repeat(arity), ", ...]".repeat(arity))
}

fn scalar_placeholder(base: BaseType) -> String {
    match base {
        BaseType::Address => "0x...".to_string(),
        BaseType::Bool => "true or false".to_string(),
        BaseType::String => "Enter text".to_string(),
        BaseType::Uint(256) => "Amount (e.g., 1000000000000000000)".to_string(),
        BaseType::Uint(bits) => format!("Number (uint{bits})"),
        BaseType::Int(bits) => format!("Signed number (int{bits})"),
        BaseType::FixedBytes(size) => format!("0x... ({size} bytes)"),
        BaseType::Bytes => "0x...".to_string(),
        BaseType::Tuple => "Structured value".to_string(),
        BaseType::Unknown => "Enter value".to_string(),
    }
}
