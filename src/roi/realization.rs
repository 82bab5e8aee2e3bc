use tracing::debug;

use super::models::{CaseSeries, FinancialSummary, InputSet, RealizationState, SavingsTable};
use super::sanitize::{sanitize_inputs, MONTHS_PER_YEAR};
use super::usage::UsageModel;

/// Headline metrics from the mid-case savings total.
///
/// ROI is 0 when nothing is invested and payback is 0 when there are no
/// mid-case savings; neither ever divides by zero.
pub fn compute_financial_summary(savings: &SavingsTable, input: &InputSet) -> FinancialSummary {
    let input = sanitize_inputs(input);
    let total_investment = input.total_investment();
    let mid_savings = savings.total.mid;
    let net_profit = mid_savings - total_investment;

    let roi_percent = if total_investment > 0.0 {
        net_profit / total_investment * 100.0
    } else {
        0.0
    };

    let payback_months = if mid_savings > 0.0 {
        total_investment / (mid_savings / MONTHS_PER_YEAR as f64)
    } else {
        0.0
    };

    FinancialSummary {
        total_investment,
        total_savings: savings.total,
        net_profit,
        roi_percent,
        payback_months,
    }
}

/// Realization tracking with the default usage weights and targets.
pub fn compute_realization(savings: &SavingsTable, input: &InputSet) -> RealizationState {
    compute_realization_with(savings, input, &UsageModel::default())
}

pub fn compute_realization_with(
    savings: &SavingsTable,
    input: &InputSet,
    usage_model: &UsageModel,
) -> RealizationState {
    let input = sanitize_inputs(input);
    let summary = compute_financial_summary(savings, &input);
    let intensity = usage_model.intensity(&input);

    let elapsed = input.current_month as f64 / MONTHS_PER_YEAR as f64;
    let realized_value_to_date = savings.total.mid * intensity.blended * elapsed;

    debug!(
        month = input.current_month,
        usage_intensity = intensity.blended,
        realized = realized_value_to_date,
        "computed realization"
    );

    RealizationState {
        summary,
        monthly_projection: CaseSeries {
            min: cumulative_projection(savings.total.min),
            mid: cumulative_projection(savings.total.mid),
            good: cumulative_projection(savings.total.good),
        },
        work_order_intensity: intensity.work_orders,
        prediction_intensity: intensity.predictions,
        usage_intensity: intensity.blended,
        current_month: input.current_month,
        realized_value_to_date,
        realized_path: realized_path(realized_value_to_date, input.current_month),
    }
}

/// Pure function: linear (non-compounding) accrual of an annual total over months 1..=12.
pub fn cumulative_projection(annual_total: f64) -> Vec<f64> {
    let monthly = annual_total / MONTHS_PER_YEAR as f64;
    (1..=MONTHS_PER_YEAR).map(|m| monthly * m as f64).collect()
}

/// Pure function: `points` evenly spaced values from 0 to `end`, inclusive.
///
/// Display smoothing only. A single point is just `end`.
pub fn realized_path(end: f64, points: u32) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![end],
        n => {
            let step = end / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_projection_is_linear() {
        let series = cumulative_projection(1200.0);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0], 100.0);
        assert_eq!(series[5], 600.0);
        assert_eq!(series[11], 1200.0);
    }

    #[test]
    fn test_realized_path_endpoints() {
        let path = realized_path(500.0, 6);
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], 0.0);
        assert_eq!(path[5], 500.0);
        assert!(path.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_realized_path_single_month() {
        assert_eq!(realized_path(42.0, 1), vec![42.0]);
        assert!(realized_path(42.0, 0).is_empty());
    }
}
