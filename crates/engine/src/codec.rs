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

//! Conversion between UI strings and execution values.
//!
//! [`encode`] and [`decode`] are deliberately loose: they shape values for a
//! call-execution collaborator without checking them, and integers always
//! travel as strings so that no precision is lost. [`coerce`] is the strict
//! counterpart and produces a typed [`DynSolValue`].

use abiscope_common::types::RawParameter;
use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::hex;
use serde_json::Value;
use tracing::warn;

use crate::analysis::{canonical_type, classify, BaseType, TypeCategory};
use crate::{CoerceError, DEFAULT_MAX_DEPTH};

/// Turn a UI string into an execution value for the given type.
///
/// - `bool`: `true` when the input is `"true"` in any case, `false` otherwise
/// - integers: the trimmed text as a JSON string
/// - arrays: a JSON array literal, or else a comma-separated list whose
///   elements are encoded with the element type; brackets may be omitted
/// - `tuple`: a JSON object or array literal, or else the text itself
/// - everything else: the text itself
///
/// Array types nested deeper than [`DEFAULT_MAX_DEPTH`] are passed through as
/// text.
pub fn encode(ty: &str, ui: &str) -> Value {
    let class = classify(ty);
    if class.arity() > DEFAULT_MAX_DEPTH {
        warn!(arity = class.arity(), limit = DEFAULT_MAX_DEPTH, "array nesting too deep to encode");
        return Value::String(ui.to_string());
    }

    if let Some(element) = class.element_type() {
        let trimmed = ui.trim();
        if let Ok(Value::Array(items)) = serde_json::from_str(trimmed) {
            return Value::Array(items);
        }
        // Drop enclosing brackets only when they wrap the whole list.
        let inner = match trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            Some(inner) if split_elements(trimmed).len() == 1 => inner,
            _ => trimmed,
        };
        return Value::Array(
            split_elements(inner).iter().map(|item| encode(element, unquote(item))).collect(),
        );
    }

    match class.category() {
        TypeCategory::Boolean => Value::Bool(ui.trim().eq_ignore_ascii_case("true")),
        TypeCategory::SignedInteger | TypeCategory::UnsignedInteger => {
            Value::String(ui.trim().to_string())
        }
        TypeCategory::Tuple => match serde_json::from_str(ui.trim()) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
            _ => Value::String(ui.to_string()),
        },
        _ => Value::String(ui.to_string()),
    }
}

/// Turn an execution result into display text.
///
/// Scalars print bare, with integers at full precision. Byte results that
/// arrive as arrays of octets are shown as `0x`-prefixed hex; other arrays and
/// objects are printed as compact JSON.
pub fn decode(ty: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => {
            let class = classify(ty);
            let is_bytes = !class.is_array()
                && matches!(class.base(), BaseType::Bytes | BaseType::FixedBytes(_));
            match octets(items) {
                Some(bytes) if is_bytes => hex::encode_prefixed(bytes),
                _ => value.to_string(),
            }
        }
        Value::Object(_) => value.to_string(),
    }
}

/// Strictly coerce a UI string into a typed value for `param`.
///
/// Struct parameters are resolved to their canonical tuple type first, so the
/// input uses tuple syntax, e.g. `(0x..., 100)`.
pub fn coerce(param: &RawParameter, ui: &str) -> Result<DynSolValue, CoerceError> {
    let ty = canonical_type(param);
    let sol_type = DynSolType::parse(&ty)
        .map_err(|source| CoerceError::UnsupportedType { ty: ty.clone(), source })?;
    sol_type.coerce_str(ui.trim()).map_err(|source| CoerceError::InvalidValue { ty, source })
}

/// Split a comma-separated list at the top level, honoring brackets and
/// quoted strings.
fn split_elements(list: &str) -> Vec<&str> {
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escape_next = false;
    let mut start = 0;

    for (i, ch) in list.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match (quote, ch) {
            (Some(_), '\\') => escape_next = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(' | '[' | '{') => depth += 1,
            (None, ')' | ']' | '}') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                elements.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = list[start..].trim();
    if !last.is_empty() || !elements.is_empty() {
        elements.push(last);
    }
    elements
}

fn unquote(item: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| item.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)))
        .unwrap_or(item)
}

fn octets(items: &[Value]) -> Option<Vec<u8>> {
    items.iter().map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok())).collect()
}
