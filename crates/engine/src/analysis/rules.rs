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

//! Per-type validation rules attached to analyzed parameters.

use abiscope_common::types::{RuleBound, RuleKind, ValidationRule};

use super::{classify, TypeCategory, TypeClass};

/// Build the ordered validation rules for a parameter.
///
/// The order is fixed: `required` (skipped for booleans), then the shape check
/// for the category, then a `max-length` bound for fixed-size byte strings.
/// Arrays and tuples only get `required`; their elements are validated through
/// the analyzed children.
pub fn build_rules(ty: &str, name: &str) -> Vec<ValidationRule> {
    rules_for(&classify(ty), name)
}

pub(crate) fn rules_for(class: &TypeClass<'_>, name: &str) -> Vec<ValidationRule> {
    let label = if name.is_empty() { "Value" } else { name };
    let category = class.category();
    let mut rules = Vec::with_capacity(3);

    if category != TypeCategory::Boolean {
        rules.push(ValidationRule::new(RuleKind::Required, format!("{label} is required")));
    }

    match category {
        TypeCategory::Address => rules.push(ValidationRule::new(
            RuleKind::AddressShape,
            "Invalid address: expected 0x followed by 40 hex characters",
        )),
        TypeCategory::UnsignedInteger => rules.push(ValidationRule::new(
            RuleKind::UnsignedIntegerShape,
            "Must be a non-negative integer",
        )),
        TypeCategory::SignedInteger => {
            rules.push(ValidationRule::new(RuleKind::SignedIntegerShape, "Must be an integer"))
        }
        TypeCategory::ByteSequence => {
            rules.push(ValidationRule::new(RuleKind::ByteShape, "Must be hex starting with 0x"));
            if let Some(size) = class.width() {
                let max_len = 2 + 2 * u64::from(size);
                rules.push(ValidationRule::with_bound(
                    RuleKind::MaxLength,
                    RuleBound::Number(max_len),
                    format!("Must be {size} bytes ({max_len} characters including 0x)"),
                ));
            }
        }
        TypeCategory::Boolean
        | TypeCategory::String
        | TypeCategory::DynamicArray
        | TypeCategory::FixedArray
        | TypeCategory::Tuple
        | TypeCategory::Text => {}
    }

    rules
}
