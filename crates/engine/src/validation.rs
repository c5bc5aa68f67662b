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

//! Validation of user-supplied values.
//!
//! Two entry points:
//!
//! - [`validate`] checks a single literal against a type string, for ad-hoc
//!   checks outside a pre-built rule set.
//! - [`validate_all`] checks a map of named values against the rules stored in
//!   an [`AnalyzedFunction`], reporting at most one message per field.
//!
//! Values are trimmed before checking.

use std::collections::{BTreeMap, HashMap};

use abiscope_common::types::{
    AnalyzedFunction, ParameterInfo, RuleBound, RuleKind, ValidationOutcome, ValidationRule,
};
use regex::Regex;
use tracing::warn;

use crate::analysis::{classify, rules_for};

/// Whether `value` satisfies a single rule.
pub fn evaluate_rule(rule: &ValidationRule, value: &str) -> bool {
    let value = value.trim();
    match rule.kind {
        RuleKind::Required => !value.is_empty(),
        RuleKind::AddressShape => is_address(value),
        RuleKind::UnsignedIntegerShape => is_digits(value),
        RuleKind::SignedIntegerShape => is_digits(value.strip_prefix('-').unwrap_or(value)),
        RuleKind::ByteShape => value.starts_with("0x"),
        RuleKind::MaxLength => match max_length(rule) {
            Some(max) => value.len() as u64 <= max,
            None => {
                warn!(bound = ?rule.bound, "max-length rule without a numeric bound");
                true
            }
        },
        RuleKind::Pattern => match &rule.bound {
            Some(RuleBound::Text(pattern)) => match Regex::new(pattern) {
                Ok(regex) => regex.is_match(value),
                Err(error) => {
                    warn!(%pattern, %error, "Ignoring pattern rule with an invalid expression");
                    true
                }
            },
            _ => {
                warn!(bound = ?rule.bound, "pattern rule without a textual bound");
                true
            }
        },
    }
}

/// The first failing rule for `value`, if any.
pub fn first_failure<'r>(rules: &'r [ValidationRule], value: &str) -> Option<&'r ValidationRule> {
    rules.iter().find(|rule| !evaluate_rule(rule, value))
}

/// Validate a single literal against a type string.
///
/// Scalars are checked with the same rules the analyzer would build. Arrays
/// accept either a JSON array or, as a fallback, a bare non-empty value that
/// is treated as a single element.
pub fn validate(ty: &str, raw_value: &str) -> ValidationOutcome {
    let class = classify(ty);
    let value = raw_value.trim();

    if class.is_array() {
        if value.is_empty() {
            return ValidationOutcome::fail("Value is required");
        }
        if value.starts_with('[') && serde_json::from_str::<Vec<serde_json::Value>>(value).is_err()
        {
            return ValidationOutcome::fail("Invalid array: expected a JSON array");
        }
        return ValidationOutcome::ok();
    }

    match first_failure(&rules_for(&class, ""), value) {
        Some(rule) => ValidationOutcome::fail(rule.message.clone()),
        None => ValidationOutcome::ok(),
    }
}

/// Validate named values against a function's inputs.
///
/// Values are looked up by each input's display name (the declared name, or
/// `param{index}` for unnamed inputs); a missing value is treated as empty.
/// Only fields that fail appear in the result.
pub fn validate_all(
    function: &AnalyzedFunction,
    values: &HashMap<String, String>,
) -> BTreeMap<String, String> {
    validate_parameters(&function.inputs, values)
}

/// Validate named values against any parameter list, e.g. constructor inputs.
pub fn validate_parameters(
    parameters: &[ParameterInfo],
    values: &HashMap<String, String>,
) -> BTreeMap<String, String> {
    parameters
        .iter()
        .enumerate()
        .filter_map(|(index, param)| {
            let key = param.display_name(index);
            let value = values.get(&key).map(String::as_str).unwrap_or_default();
            first_failure(&param.validation_rules, value).map(|rule| (key, rule.message.clone()))
        })
        .collect()
}

fn max_length(rule: &ValidationRule) -> Option<u64> {
    match rule.bound.as_ref()? {
        RuleBound::Number(max) => Some(*max),
        RuleBound::Text(text) => text.parse().ok(),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_function, example};
    use crate::CostModel;
    use abiscope_common::types::{RawDescriptor, RawParameter};

    #[test]
    fn test_validate_address() {
        assert!(validate("address", "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").valid);
        assert!(!validate("address", "0x742d35").valid);
        assert!(!validate("address", "742d35Cc6634C0532925a3b844Bc9e7595f0bEb0ab").valid);
        assert!(!validate("address", "0xZZ2d35Cc6634C0532925a3b844Bc9e7595f0bEb0").valid);

        let outcome = validate("address", "");
        assert_eq!(outcome.error.as_deref(), Some("Value is required"));
    }

    #[test]
    fn test_validate_integers() {
        assert!(validate("uint256", "123456789012345678901234567890").valid);
        assert!(!validate("uint256", "-1").valid);
        assert!(!validate("uint256", "1.5").valid);
        assert!(validate("int256", "-42").valid);
        assert!(validate("int8", "42").valid);
        assert!(!validate("int8", "-").valid);
        assert!(!validate("int8", "4-2").valid);
    }

    #[test]
    fn test_validate_bytes() {
        assert!(validate("bytes", "0xdeadbeef").valid);
        assert!(!validate("bytes", "deadbeef").valid);
        assert!(validate("bytes4", "0xdeadbeef").valid);

        let outcome = validate("bytes4", "0xdeadbeef00");
        assert!(!outcome.valid);
        assert!(outcome.error.unwrap().contains("4 bytes"));
    }

    #[test]
    fn test_validate_bool_and_unknown() {
        assert!(validate("bool", "").valid);
        assert!(validate("felt252", "anything").valid);
        assert!(!validate("felt252", "  ").valid);
    }

    #[test]
    fn test_validate_arrays() {
        assert!(validate("string[]", r#"["a","b"]"#).valid);
        assert!(validate("address[]", "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").valid);
        assert!(!validate("uint256[]", "").valid);
        assert!(!validate("uint256[]", "[1, 2").valid);
    }

    #[test]
    fn test_examples_pass_validation() {
        for bits in [8, 16, 32, 64, 128, 256] {
            let ty = format!("uint{bits}");
            assert!(validate(&ty, &example(&ty)).valid, "{ty}");
        }
        for size in 1..=32 {
            let ty = format!("bytes{size}");
            assert!(validate(&ty, &example(&ty)).valid, "{ty}");
        }
        for ty in ["address", "bool", "string", "int256", "bytes", "uint256[]", "tuple[2]"] {
            assert!(validate(ty, &example(ty)).valid, "{ty}");
        }
    }

    #[test]
    fn test_validate_all_short_circuits() {
        let descriptor = RawDescriptor::function("transfer", "nonpayable").with_inputs(vec![
            RawParameter::new("to", "address"),
            RawParameter::new("amount", "uint256"),
            RawParameter::new("", "bytes4"),
        ]);
        let function = analyze_function(&descriptor, &CostModel::default());

        let mut values = HashMap::new();
        values.insert("to".to_string(), "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0".to_string());
        values.insert("param2".to_string(), "nothex".to_string());

        let errors = validate_all(&function, &values);
        assert_eq!(errors.len(), 2);
        assert!(!errors.contains_key("to"));
        // Empty amount fails both `required` and the shape check; only the first is reported.
        assert_eq!(errors["amount"], "amount is required");
        assert_eq!(errors["param2"], "Must be hex starting with 0x");
    }

    #[test]
    fn test_validate_all_accepts_valid_input() {
        let descriptor = RawDescriptor::function("approve", "nonpayable").with_inputs(vec![
            RawParameter::new("spender", "address"),
            RawParameter::new("amount", "uint256"),
        ]);
        let function = analyze_function(&descriptor, &CostModel::default());

        let values = HashMap::from([
            ("spender".to_string(), "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0".to_string()),
            ("amount".to_string(), " 1000 ".to_string()),
        ]);
        assert!(validate_all(&function, &values).is_empty());
    }

    #[test]
    fn test_pattern_rule() {
        let rule = ValidationRule::with_bound(
            RuleKind::Pattern,
            RuleBound::Text("^[a-z]+$".into()),
            "lowercase only",
        );
        assert!(evaluate_rule(&rule, "abc"));
        assert!(!evaluate_rule(&rule, "ABC"));

        let broken =
            ValidationRule::with_bound(RuleKind::Pattern, RuleBound::Text("(".into()), "broken");
        assert!(evaluate_rule(&broken, "anything"));
    }
}
