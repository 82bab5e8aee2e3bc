//! Last-line-of-defense clamping for engine inputs.
//!
//! Inputs are expected to be validated at the boundary (see
//! `config::validation`). The engine still refuses to turn a stray negative
//! or non-finite figure into negative savings: such values are clamped to
//! zero and a warning is logged.

use tracing::warn;

use super::models::InputSet;

pub const FIRST_MONTH: u32 = 1;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Pure function: clamp a single amount to a finite, non-negative value.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp_field(name: &str, value: f64) -> f64 {
    let clamped = non_negative(value);
    if clamped != value {
        warn!(field = name, value, "clamping invalid input to zero");
    }
    clamped
}

pub fn clamp_month(month: u32) -> u32 {
    month.clamp(FIRST_MONTH, MONTHS_PER_YEAR)
}

/// Return a copy of `input` whose amounts are finite and non-negative and
/// whose month lies in 1..=12.
pub fn sanitize_inputs(input: &InputSet) -> InputSet {
    let current_month = clamp_month(input.current_month);
    if current_month != input.current_month {
        warn!(
            month = input.current_month,
            clamped = current_month,
            "current month outside 1..=12"
        );
    }

    InputSet {
        platform_annual_cost: clamp_field("platform_annual_cost", input.platform_annual_cost),
        implementation_cost: clamp_field("implementation_cost", input.implementation_cost),
        total_fte: clamp_field("total_fte", input.total_fte),
        formulation_dev_fte: clamp_field("formulation_dev_fte", input.formulation_dev_fte),
        hourly_cost: clamp_field("hourly_cost", input.hourly_cost),
        lab_cost_per_order: clamp_field("lab_cost_per_order", input.lab_cost_per_order),
        hours_per_new_formulation: clamp_field(
            "hours_per_new_formulation",
            input.hours_per_new_formulation,
        ),
        hours_per_adjustment: clamp_field("hours_per_adjustment", input.hours_per_adjustment),
        material_spend_annual: clamp_field("material_spend_annual", input.material_spend_annual),
        legacy_tool_cost_annual: clamp_field(
            "legacy_tool_cost_annual",
            input.legacy_tool_cost_annual,
        ),
        current_month,
        ..input.clone()
    }
}
