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

//! Canonical signatures.
//!
//! The output is the exact string hashed for selector and topic derivation, so
//! it must match what Solidity hashes byte for byte. Structs expand to
//! parenthesized component lists and array suffixes are kept verbatim.

use abiscope_common::types::{RawDescriptor, RawParameter};

use super::classify;

/// The canonical wire type of a parameter.
///
/// `tuple` with components becomes `(<c1>,<c2>,...)`; a tuple array keeps its
/// suffixes, e.g. `(address,uint256)[]`. Every other type is returned as-is.
pub fn canonical_type(param: &RawParameter) -> String {
    let class = classify(&param.ty);
    match &param.components {
        Some(components) if class.is_tuple_based() => {
            let mut out = String::with_capacity(param.ty.len() + 16 * components.len());
            out.push('(');
            for (i, component) in components.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&canonical_type(component));
            }
            out.push(')');
            out.push_str(class.array_suffix());
            out
        }
        _ => param.ty.clone(),
    }
}

/// The canonical signature of a descriptor: `name(<canonical inputs>)`.
pub fn signature_of(descriptor: &RawDescriptor) -> String {
    let inputs: Vec<String> = descriptor.inputs.iter().map(canonical_type).collect();
    format!("{}({})", descriptor.name_or_empty(), inputs.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(ty: &str) -> RawParameter {
        RawParameter::new("", ty)
    }

    #[test]
    fn test_scalar_types_unchanged() {
        for ty in ["address", "uint256", "bytes32[]", "string[2][]", "felt252"] {
            assert_eq!(canonical_type(&p(ty)), ty);
        }
    }

    #[test]
    fn test_tuple_array() {
        let param = p("tuple[]").with_components(vec![p("address"), p("uint256")]);
        assert_eq!(canonical_type(&param), "(address,uint256)[]");
    }

    #[test]
    fn test_fixed_and_multi_dimensional_tuple_arrays() {
        let param = p("tuple[3]").with_components(vec![p("bool")]);
        assert_eq!(canonical_type(&param), "(bool)[3]");

        let param = p("tuple[2][]").with_components(vec![p("bytes4"), p("int24")]);
        assert_eq!(canonical_type(&param), "(bytes4,int24)[2][]");
    }

    #[test]
    fn test_deeply_nested_tuples() {
        let param = p("tuple").with_components(vec![
            p("address"),
            p("tuple[]").with_components(vec![
                p("uint8"),
                p("tuple").with_components(vec![p("bytes"), p("string[]")]),
            ]),
            p("uint256"),
        ]);
        assert_eq!(canonical_type(&param), "(address,(uint8,(bytes,string[]))[],uint256)");
    }

    #[test]
    fn test_tuple_without_components_unchanged() {
        assert_eq!(canonical_type(&p("tuple")), "tuple");
    }

    #[test]
    fn test_signature_of() {
        let descriptor = RawDescriptor::function("transfer", "nonpayable")
            .with_inputs(vec![p("address"), p("uint256")]);
        assert_eq!(signature_of(&descriptor), "transfer(address,uint256)");

        let descriptor = RawDescriptor::function("pause", "nonpayable");
        assert_eq!(signature_of(&descriptor), "pause()");
    }
}
