//! Usage-intensity blend.
//!
//! Usage counters are a manually reported snapshot, one per evaluation.
//! Each signal is turned into a ratio against its target, clamped to
//! [0, 1], and the two ratios are blended with fixed weights.

use serde::{Deserialize, Serialize};

use super::models::InputSet;

/// Combined forward + inverse predictions treated as full maturity.
pub const PREDICTION_MATURITY_TARGET: f64 = 300.0;
pub const WORK_ORDER_WEIGHT: f64 = 0.5;
pub const PREDICTION_WEIGHT: f64 = 0.5;

pub fn default_work_order_weight() -> f64 {
    WORK_ORDER_WEIGHT
}

pub fn default_prediction_weight() -> f64 {
    PREDICTION_WEIGHT
}

pub fn default_prediction_maturity_target() -> f64 {
    PREDICTION_MATURITY_TARGET
}

/// Weights and targets of the usage blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageModel {
    /// Weight of the work-order signal (0.0-1.0)
    #[serde(default = "default_work_order_weight")]
    pub work_order_weight: f64,

    /// Weight of the prediction signal (0.0-1.0)
    #[serde(default = "default_prediction_weight")]
    pub prediction_weight: f64,

    /// Combined prediction count that counts as full usage
    #[serde(default = "default_prediction_maturity_target")]
    pub prediction_maturity_target: f64,
}

impl Default for UsageModel {
    fn default() -> Self {
        Self {
            work_order_weight: default_work_order_weight(),
            prediction_weight: default_prediction_weight(),
            prediction_maturity_target: default_prediction_maturity_target(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageIntensity {
    pub work_orders: f64,
    pub predictions: f64,
    pub blended: f64,
}

/// Pure function: `actual / target` clamped to [0, 1]; 0 when there is no target.
pub fn usage_ratio(actual: f64, target: f64) -> f64 {
    if target > 0.0 && target.is_finite() {
        (actual / target).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl UsageModel {
    pub fn intensity(&self, input: &InputSet) -> UsageIntensity {
        let work_orders = usage_ratio(
            input.actual_work_orders as f64,
            input.annual_orders as f64,
        );
        let predictions = usage_ratio(
            input.combined_predictions() as f64,
            self.prediction_maturity_target,
        );
        let blended = (self.work_order_weight * work_orders
            + self.prediction_weight * predictions)
            .clamp(0.0, 1.0);

        UsageIntensity {
            work_orders,
            predictions,
            blended,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_ratio_zero_target() {
        assert_eq!(usage_ratio(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_usage_ratio_caps_at_one() {
        assert_eq!(usage_ratio(900.0, 300.0), 1.0);
    }

    #[test]
    fn test_intensity_equal_split() {
        let input = InputSet {
            annual_orders: 250,
            actual_work_orders: 125,
            actual_forward_predictions: 300,
            ..InputSet::default()
        };

        let intensity = UsageModel::default().intensity(&input);

        assert!((intensity.work_orders - 0.5).abs() < 1e-12);
        assert_eq!(intensity.predictions, 1.0);
        assert!((intensity.blended - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_without_orders_uses_predictions_only() {
        let input = InputSet {
            annual_orders: 0,
            actual_work_orders: 40,
            actual_inverse_predictions: 150,
            ..InputSet::default()
        };

        let intensity = UsageModel::default().intensity(&input);

        assert_eq!(intensity.work_orders, 0.0);
        assert!((intensity.blended - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_custom_maturity_target() {
        let model = UsageModel {
            prediction_maturity_target: 100.0,
            ..UsageModel::default()
        };
        let input = InputSet {
            actual_forward_predictions: 50,
            ..InputSet::default()
        };

        assert!((model.intensity(&input).predictions - 0.5).abs() < 1e-12);
    }
}
