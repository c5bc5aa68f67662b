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

//! Function and event analysis.

use abiscope_common::types::{
    AnalyzedEvent, AnalyzedFunction, Complexity, CostEstimate, FunctionCategory, RawDescriptor,
    RawParameter,
};
use tracing::trace;

use super::{analyze_event_parameter, analyze_parameter, classify, signature_of, TypeCategory};
use crate::CostModel;

/// Analyze a function descriptor.
///
/// The category is derived from the effective state mutability alone, and
/// `is_read_only` / `requires_value` are derived from the category.
pub fn analyze_function(descriptor: &RawDescriptor, cost_model: &CostModel) -> AnalyzedFunction {
    let state_mutability = descriptor.effective_state_mutability().to_string();
    let category = FunctionCategory::from_state_mutability(&state_mutability);
    let complexity = complexity_of(&descriptor.inputs);
    let cost_estimate = estimate_cost(category, &descriptor.inputs, cost_model);
    let canonical_signature = signature_of(descriptor);

    trace!(
        signature = %canonical_signature,
        %category,
        %complexity,
        %cost_estimate,
        "Analyzed function"
    );

    AnalyzedFunction {
        name: descriptor.name_or_empty().to_string(),
        canonical_signature,
        state_mutability,
        inputs: descriptor.inputs.iter().map(analyze_parameter).collect(),
        outputs: descriptor.outputs.iter().map(analyze_parameter).collect(),
        is_read_only: category == FunctionCategory::Read,
        requires_value: category == FunctionCategory::Payable,
        category,
        complexity,
        cost_estimate,
    }
}

/// Analyze an event descriptor.
pub fn analyze_event(descriptor: &RawDescriptor) -> AnalyzedEvent {
    let canonical_signature = signature_of(descriptor);
    trace!(signature = %canonical_signature, "Analyzed event");

    AnalyzedEvent {
        name: descriptor.name_or_empty().to_string(),
        canonical_signature,
        parameters: descriptor.inputs.iter().map(analyze_event_parameter).collect(),
    }
}

/// Complexity tier of an input list.
///
/// `complex` for five or more inputs or any array or structured input,
/// `medium` for three or four, `simple` otherwise.
pub fn complexity_of(inputs: &[RawParameter]) -> Complexity {
    let has_composite = inputs.iter().any(|input| {
        let class = classify(&input.ty);
        class.is_array() || class.category() == TypeCategory::Tuple
    });

    if inputs.len() >= 5 || has_composite {
        Complexity::Complex
    } else if inputs.len() >= 3 {
        Complexity::Medium
    } else {
        Complexity::Simple
    }
}

/// Rough cost estimate. Read functions cost nothing; everything else pays the
/// base, a per-input increment, and an array penalty when any input is an array.
pub fn estimate_cost(
    category: FunctionCategory,
    inputs: &[RawParameter],
    cost_model: &CostModel,
) -> CostEstimate {
    if category == FunctionCategory::Read {
        return CostEstimate::NoCost;
    }

    let per_input = cost_model.per_input.saturating_mul(inputs.len() as u64);
    let mut gas = cost_model.base.saturating_add(per_input);
    if inputs.iter().any(|input| classify(&input.ty).is_array()) {
        gas = gas.saturating_add(cost_model.array_penalty);
    }

    CostEstimate::Approximate { gas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abiscope_common::types::WidgetKind;

    fn p(name: &str, ty: &str) -> RawParameter {
        RawParameter::new(name, ty)
    }

    #[test]
    fn test_transfer_is_write() {
        let descriptor = RawDescriptor::function("transfer", "nonpayable")
            .with_inputs(vec![p("to", "address"), p("amount", "uint256")])
            .with_outputs(vec![p("", "bool")]);

        let function = analyze_function(&descriptor, &CostModel::default());
        assert_eq!(function.category, FunctionCategory::Write);
        assert_eq!(function.canonical_signature, "transfer(address,uint256)");
        assert!(!function.is_read_only);
        assert!(!function.requires_value);
        assert_eq!(function.complexity, Complexity::Simple);
        assert_eq!(function.cost_estimate, CostEstimate::Approximate { gas: 31_000 });
        assert_eq!(function.inputs[0].widget_kind, WidgetKind::Address);
        assert_eq!(function.inputs[1].widget_kind, WidgetKind::Number);
        assert_eq!(function.outputs[0].widget_kind, WidgetKind::Checkbox);
    }

    #[test]
    fn test_missing_mutability_defaults_to_nonpayable() {
        let mut descriptor = RawDescriptor::function("poke", "nonpayable");
        descriptor.state_mutability = None;

        let function = analyze_function(&descriptor, &CostModel::default());
        assert_eq!(function.state_mutability, "nonpayable");
        assert_eq!(function.category, FunctionCategory::Write);
    }

    #[test]
    fn test_view_and_payable_categories() {
        let view = analyze_function(&RawDescriptor::function("owner", "view"), &CostModel::default());
        assert!(view.is_read_only);
        assert_eq!(view.cost_estimate, CostEstimate::NoCost);

        let pure = analyze_function(&RawDescriptor::function("f", "pure"), &CostModel::default());
        assert_eq!(pure.category, FunctionCategory::Read);

        let payable =
            analyze_function(&RawDescriptor::function("deposit", "payable"), &CostModel::default());
        assert!(payable.requires_value);
        assert_eq!(payable.category, FunctionCategory::Payable);
        assert_eq!(payable.cost_estimate, CostEstimate::Approximate { gas: 21_000 });
    }

    #[test]
    fn test_complexity_tiers() {
        let scalars = |n: usize| (0..n).map(|i| p(&format!("a{i}"), "uint256")).collect::<Vec<_>>();
        assert_eq!(complexity_of(&scalars(0)), Complexity::Simple);
        assert_eq!(complexity_of(&scalars(2)), Complexity::Simple);
        assert_eq!(complexity_of(&scalars(3)), Complexity::Medium);
        assert_eq!(complexity_of(&scalars(4)), Complexity::Medium);
        assert_eq!(complexity_of(&scalars(5)), Complexity::Complex);
        assert_eq!(complexity_of(&[p("ids", "uint256[]")]), Complexity::Complex);
        assert_eq!(complexity_of(&[p("key", "tuple")]), Complexity::Complex);
    }

    #[test]
    fn test_array_penalty() {
        let model = CostModel { base: 100, per_input: 10, array_penalty: 1000 };
        let inputs = [p("to", "address"), p("ids", "uint256[]")];
        assert_eq!(
            estimate_cost(FunctionCategory::Write, &inputs, &model),
            CostEstimate::Approximate { gas: 1120 }
        );
        assert_eq!(estimate_cost(FunctionCategory::Read, &inputs, &model), CostEstimate::NoCost);
    }

    #[test]
    fn test_event_keeps_indexed_flags() {
        let descriptor = RawDescriptor::event("Transfer").with_inputs(vec![
            p("from", "address").with_indexed(true),
            p("to", "address").with_indexed(true),
            p("value", "uint256").with_indexed(false),
        ]);

        let event = analyze_event(&descriptor);
        assert_eq!(event.canonical_signature, "Transfer(address,address,uint256)");
        assert_eq!(event.parameters.len(), 3);
        assert_eq!(event.parameters[0].indexed, Some(true));
        assert_eq!(event.parameters[2].indexed, Some(false));
    }
}
