use tracing::debug;

use super::catalog::{
    total_productivity_hours_mid, DriverKey, DIRECT_RATIOS, PRODUCTIVITY_DRIVERS,
};
use super::models::{CaseValues, InputSet, Methodology, SavingsRow, SavingsTable};
use super::sanitize::sanitize_inputs;

/// Build the full savings table for an input set.
///
/// Productivity drivers come first, in catalog order, followed by legacy
/// replacement, lab expense reduction and material optimization. The table
/// is rebuilt from scratch on every call.
pub fn compute_savings(input: &InputSet) -> SavingsTable {
    let input = sanitize_inputs(input);

    let mut rows: Vec<SavingsRow> = PRODUCTIVITY_DRIVERS
        .iter()
        .map(|driver| SavingsRow {
            driver: driver.key,
            cases: driver.hours.priced_at(input.hourly_cost),
            methodology: Methodology::Productivity {
                mid_hours: driver.hours.mid,
                hourly_cost: input.hourly_cost,
            },
        })
        .collect();

    rows.extend(direct_rows(&input));

    let total: CaseValues = rows.iter().map(|row| row.cases).sum();

    debug!(
        rows = rows.len(),
        min = total.min,
        mid = total.mid,
        good = total.good,
        "computed savings table"
    );

    SavingsTable {
        rows,
        total,
        productivity_hours_mid: total_productivity_hours_mid(),
    }
}

fn direct_rows(input: &InputSet) -> [SavingsRow; 3] {
    let lab_spend = input.lab_spend();

    [
        SavingsRow {
            driver: DriverKey::LegacyReplacement,
            cases: CaseValues::flat(input.legacy_tool_cost_annual),
            methodology: Methodology::LegacyOffset {
                annual_cost: input.legacy_tool_cost_annual,
            },
        },
        SavingsRow {
            driver: DriverKey::LabExpenseReduction,
            cases: DIRECT_RATIOS.lab_reduction.apply(lab_spend),
            methodology: Methodology::LabReduction { lab_spend },
        },
        SavingsRow {
            driver: DriverKey::MaterialOptimization,
            cases: DIRECT_RATIOS
                .material_optimization
                .apply(input.material_spend_annual),
            methodology: Methodology::MaterialOptimization {
                material_spend: input.material_spend_annual,
            },
        },
    ]
}
