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

//! Deterministic example values.
//!
//! Examples must be reproducible (golden-file tests depend on them) and must
//! stay inside the representable range of the declared width.

use serde_json::{Map, Value};

use super::{classify, BaseType, TypeClass};

/// Placeholder address used in examples.
pub const EXAMPLE_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";

/// Placeholder sentence used for `string` examples.
pub const EXAMPLE_STRING: &str = "Hello, World!";

/// Produce an example value for a type string.
///
/// Scalars yield their literal form; arrays yield a one-element JSON array
/// around the element's example; a bare `tuple` yields `{}`.
pub fn example(ty: &str) -> String {
    let class = classify(ty);
    let scalar = scalar_example(&class);
    if !class.is_array() {
        return match scalar {
            Value::String(s) => s,
            other => other.to_string(),
        };
    }

    // One bracket pair per suffix around the JSON-encoded element.
    let arity = class.arity();
    format!("{}{scalar}{}", "[".repeat(arity), "]".repeat(arity))
}

fn scalar_example(class: &TypeClass<'_>) -> Value {
    let literal = match class.base() {
        BaseType::Address => EXAMPLE_ADDRESS.to_string(),
        BaseType::Bool => "true".to_string(),
        BaseType::String => EXAMPLE_STRING.to_string(),
        BaseType::Uint(bits) => uint_example(bits).to_string(),
        BaseType::Int(_) => "100".to_string(),
        BaseType::FixedBytes(size) => format!("0x{}", "00".repeat(size.into())),
        BaseType::Bytes => "0x00".to_string(),
        BaseType::Tuple => return Value::Object(Map::new()),
        BaseType::Unknown => String::new(),
    };
    Value::String(literal)
}

/// Tiered by width so that the value always fits.
fn uint_example(bits: u16) -> &'static str {
    match bits {
        0..=8 => "255",
        9..=32 => "1000",
        33..=128 => "100000",
        // one token unit at 18 decimals
        _ => "1000000000000000000",
    }
}
