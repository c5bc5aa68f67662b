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

use std::fmt;

use serde::{Deserialize, Serialize};

/// The check a [`ValidationRule`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// The value must be non-empty.
    Required,
    /// `0x` followed by exactly 40 hex characters.
    AddressShape,
    /// Decimal digits only.
    UnsignedIntegerShape,
    /// Optional leading `-`, then decimal digits.
    SignedIntegerShape,
    /// Must start with `0x`.
    ByteShape,
    /// At most `bound` characters.
    MaxLength,
    /// Must match the regular expression in `bound`.
    Pattern,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::AddressShape => "address-shape",
            Self::UnsignedIntegerShape => "unsigned-integer-shape",
            Self::SignedIntegerShape => "signed-integer-shape",
            Self::ByteShape => "byte-shape",
            Self::MaxLength => "max-length",
            Self::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

/// Rule parameter: a numeric length bound or a textual pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleBound {
    /// Numeric bound, e.g. a maximum length.
    Number(u64),
    /// Textual bound, e.g. a regular expression.
    Text(String),
}

/// A single, framework-neutral validation rule.
///
/// Rules are ordered; a validator evaluates them in order and stops at the
/// first failure for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// What the rule checks.
    pub kind: RuleKind,
    /// Optional parameter of the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<RuleBound>,
    /// Message reported when the rule fails.
    pub message: String,
}

impl ValidationRule {
    /// A rule without a bound.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self { kind, bound: None, message: message.into() }
    }

    /// A rule with a bound.
    pub fn with_bound(kind: RuleKind, bound: RuleBound, message: impl Into<String>) -> Self {
        Self { kind, bound: Some(bound), message: message.into() }
    }
}

/// Result of validating a single literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the value passed every check.
    pub valid: bool,
    /// The first failure message, when invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    /// A passing outcome.
    pub fn ok() -> Self {
        Self { valid: true, error: None }
    }

    /// A failing outcome with the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self { valid: false, error: Some(message.into()) }
    }
}
