//! Property-based tests for the calculation engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every row and the total satisfy min <= mid <= good
//! - The total is the row-wise sum
//! - Productivity savings grow strictly with the hourly cost; direct savings don't move
//! - Usage intensities stay within [0, 1]
//! - Realized value never exceeds the mid-case annual savings

use proptest::prelude::*;
use roimap::roi::{compute_savings, evaluate, CaseValues, InputSet, UsageModel};

fn input_set() -> impl Strategy<Value = InputSet> {
    (
        (0.0..500_000.0f64, 0.0..100_000.0f64, 0.0..500.0f64),
        (0.0..5_000.0f64, 0u64..5_000, 0.0..1e9f64, 0.0..50_000.0f64),
        (1u32..=12, 0u64..10_000, 0u64..1_000, 0u64..1_000),
    )
        .prop_map(
            |(
                (platform, implementation, hourly),
                (per_order, orders, material, legacy),
                (month, work_orders, forward, inverse),
            )| InputSet {
                platform_annual_cost: platform,
                implementation_cost: implementation,
                hourly_cost: hourly,
                lab_cost_per_order: per_order,
                annual_orders: orders,
                material_spend_annual: material,
                legacy_tool_cost_annual: legacy,
                current_month: month,
                actual_work_orders: work_orders,
                actual_forward_predictions: forward,
                actual_inverse_predictions: inverse,
                ..InputSet::default()
            },
        )
}

fn usage_model() -> impl Strategy<Value = UsageModel> {
    (0.0..=1.0f64, 1.0..1_000.0f64).prop_map(|(w, target)| UsageModel {
        work_order_weight: w,
        prediction_weight: 1.0 - w,
        prediction_maturity_target: target,
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_cases_are_ordered(input in input_set()) {
        let table = compute_savings(&input);

        for row in &table.rows {
            prop_assert!(row.cases.is_ordered(), "{:?} not ordered", row.driver);
        }
        prop_assert!(table.total.is_ordered());
    }

    #[test]
    fn prop_total_is_row_sum(input in input_set()) {
        let table = compute_savings(&input);
        let sum: CaseValues = table.rows.iter().map(|r| r.cases).sum();

        prop_assert!(close(sum.min, table.total.min));
        prop_assert!(close(sum.mid, table.total.mid));
        prop_assert!(close(sum.good, table.total.good));
    }

    #[test]
    fn prop_evaluation_is_deterministic(input in input_set(), model in usage_model()) {
        prop_assert_eq!(evaluate(&input, &model), evaluate(&input, &model));
    }

    #[test]
    fn prop_savings_monotonic_in_hourly_cost(input in input_set(), extra in 1.0..100.0f64) {
        let higher = InputSet { hourly_cost: input.hourly_cost + extra, ..input.clone() };

        let base = compute_savings(&input);
        let raised = compute_savings(&higher);

        prop_assert_eq!(base.rows.len(), raised.rows.len());
        for (before, after) in base.rows.iter().zip(&raised.rows) {
            prop_assert_eq!(before.driver, after.driver);
            if before.driver.is_productivity() {
                prop_assert!(after.cases.min > before.cases.min, "{:?} min", before.driver);
                prop_assert!(after.cases.mid > before.cases.mid, "{:?} mid", before.driver);
                prop_assert!(after.cases.good > before.cases.good, "{:?} good", before.driver);
            } else {
                prop_assert_eq!(after.cases, before.cases);
            }
        }
        prop_assert!(raised.total.mid > base.total.mid);
    }

    #[test]
    fn prop_intensities_bounded(input in input_set(), model in usage_model()) {
        let (_, state) = evaluate(&input, &model);

        for value in [state.work_order_intensity, state.prediction_intensity, state.usage_intensity] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn prop_realized_value_within_annual_mid(input in input_set(), model in usage_model()) {
        let (table, state) = evaluate(&input, &model);

        prop_assert!(state.realized_value_to_date >= 0.0);
        prop_assert!(state.realized_value_to_date <= table.total.mid + 1e-6);
        prop_assert_eq!(state.realized_path.len(), state.current_month as usize);
        prop_assert_eq!(state.monthly_projection.mid.len(), 12);
    }

    #[test]
    fn prop_roi_and_payback_finite(input in input_set()) {
        let (_, state) = evaluate(&input, &UsageModel::default());

        prop_assert!(state.summary.roi_percent.is_finite());
        prop_assert!(state.summary.payback_months.is_finite());
        prop_assert!(state.summary.payback_months >= 0.0);
    }
}
