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

//! Classification of raw ABI type strings.
//!
//! Type strings follow `base[suffix]*` where `base` is one of `address`,
//! `bool`, `string`, `uint<N>`, `int<N>`, `bytes<N>`, `bytes`, or `tuple`, and
//! each suffix is `[]` or `[k]`. Anything else classifies as
//! [`TypeCategory::Text`] so that vendor-specific types never block analysis.

use std::fmt;

/// The scalar (or structured) type at the root of a type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// `address`
    Address,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `int<N>`, bits in 8..=256
    Int(u16),
    /// `uint<N>`, bits in 8..=256
    Uint(u16),
    /// `bytes<N>`, size in 1..=32
    FixedBytes(u8),
    /// dynamic `bytes`
    Bytes,
    /// structured `tuple`
    Tuple,
    /// anything unrecognized
    Unknown,
}

/// One trailing array suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayDim {
    /// `[]`
    Dynamic,
    /// `[k]`, k > 0
    Fixed(usize),
}

/// Semantic category of a whole type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// `address`
    Address,
    /// `bool`
    Boolean,
    /// `int<N>`
    SignedInteger,
    /// `uint<N>`
    UnsignedInteger,
    /// `bytes` or `bytes<N>`
    ByteSequence,
    /// `string`
    String,
    /// outermost suffix is `[]`
    DynamicArray,
    /// outermost suffix is `[k]`
    FixedArray,
    /// `tuple`
    Tuple,
    /// fallback for unrecognized types
    Text,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Address => "address",
            Self::Boolean => "boolean",
            Self::SignedInteger => "signed-integer",
            Self::UnsignedInteger => "unsigned-integer",
            Self::ByteSequence => "byte-sequence",
            Self::String => "string",
            Self::DynamicArray => "dynamic-array",
            Self::FixedArray => "fixed-array",
            Self::Tuple => "tuple",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// The classification of a type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeClass<'a> {
    raw: &'a str,
    base_len: usize,
    base: BaseType,
    dims: Vec<ArrayDim>,
}

impl<'a> TypeClass<'a> {
    /// The original type string.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The base type.
    pub fn base(&self) -> BaseType {
        self.base
    }

    /// Array suffixes in source order (innermost first).
    pub fn dims(&self) -> &[ArrayDim] {
        &self.dims
    }

    /// Number of trailing array suffixes.
    pub fn arity(&self) -> usize {
        self.dims.len()
    }

    /// Whether the type has at least one array suffix.
    pub fn is_array(&self) -> bool {
        !self.dims.is_empty()
    }

    /// Whether the base type is `tuple`, bare or array-of.
    pub fn is_tuple_based(&self) -> bool {
        self.base == BaseType::Tuple
    }

    /// Bits for integers, bytes for `bytes<N>`.
    pub fn width(&self) -> Option<u16> {
        match self.base {
            BaseType::Int(bits) | BaseType::Uint(bits) => Some(bits),
            BaseType::FixedBytes(size) => Some(size.into()),
            _ => None,
        }
    }

    /// Category of the type as a whole; the outermost suffix wins over the base.
    pub fn category(&self) -> TypeCategory {
        match self.dims.last() {
            Some(ArrayDim::Dynamic) => TypeCategory::DynamicArray,
            Some(ArrayDim::Fixed(_)) => TypeCategory::FixedArray,
            None => match self.base {
                BaseType::Address => TypeCategory::Address,
                BaseType::Bool => TypeCategory::Boolean,
                BaseType::String => TypeCategory::String,
                BaseType::Int(_) => TypeCategory::SignedInteger,
                BaseType::Uint(_) => TypeCategory::UnsignedInteger,
                BaseType::FixedBytes(_) | BaseType::Bytes => TypeCategory::ByteSequence,
                BaseType::Tuple => TypeCategory::Tuple,
                BaseType::Unknown => TypeCategory::Text,
            },
        }
    }

    /// The base type string, e.g. `tuple` for `tuple[2][]`.
    pub fn base_str(&self) -> &'a str {
        &self.raw[..self.base_len]
    }

    /// All array suffixes verbatim, e.g. `[2][]` for `tuple[2][]`.
    pub fn array_suffix(&self) -> &'a str {
        &self.raw[self.base_len..]
    }

    /// The element type of an array: the type string without its outermost suffix.
    pub fn element_type(&self) -> Option<&'a str> {
        if !self.is_array() {
            return None;
        }
        self.raw.rfind('[').map(|open| &self.raw[..open])
    }
}

/// Classify a raw type string. Total: unrecognized input yields
/// [`TypeCategory::Text`].
pub fn classify(ty: &str) -> TypeClass<'_> {
    let unknown = || TypeClass { raw: ty, base_len: ty.len(), base: BaseType::Unknown, dims: vec![] };

    let mut dims = Vec::new();
    let mut rest = ty;
    while let Some(body) = rest.strip_suffix(']') {
        let Some(open) = body.rfind('[') else {
            return unknown();
        };
        let dim = match &body[open + 1..] {
            "" => ArrayDim::Dynamic,
            len => match parse_decimal::<usize>(len) {
                Some(k) => ArrayDim::Fixed(k),
                None => return unknown(),
            },
        };
        dims.push(dim);
        rest = &body[..open];
    }
    dims.reverse();

    let base = parse_base(rest);
    if base == BaseType::Unknown {
        return unknown();
    }

    TypeClass { raw: ty, base_len: rest.len(), base, dims }
}

fn parse_base(base: &str) -> BaseType {
    match base {
        "address" => return BaseType::Address,
        "bool" => return BaseType::Bool,
        "string" => return BaseType::String,
        "bytes" => return BaseType::Bytes,
        "tuple" => return BaseType::Tuple,
        "uint" => return BaseType::Uint(256),
        "int" => return BaseType::Int(256),
        _ => {}
    }

    if let Some(bits) = base.strip_prefix("uint").and_then(parse_decimal::<u16>) {
        if bits % 8 == 0 && (8..=256).contains(&bits) {
            return BaseType::Uint(bits);
        }
    } else if let Some(bits) = base.strip_prefix("int").and_then(parse_decimal::<u16>) {
        if bits % 8 == 0 && (8..=256).contains(&bits) {
            return BaseType::Int(bits);
        }
    } else if let Some(size) = base.strip_prefix("bytes").and_then(parse_decimal::<u16>) {
        if (1..=32).contains(&size) {
            return BaseType::FixedBytes(size as u8);
        }
    }

    BaseType::Unknown
}

/// Parses a positive decimal without sign or leading zeros.
fn parse_decimal<T: std::str::FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}
