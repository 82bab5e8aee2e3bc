//! Validation with error accumulation for configuration.
//!
//! Every rule runs and every failure is collected, so a user sees all
//! input problems in one pass. The engine clamps bad values on its own as
//! a last resort; this is where they are rejected with a message.
//!
//! # Example
//!
//! ```rust
//! use roimap::config::validation::validate_config;
//! use roimap::config::RoiConfig;
//!
//! let config = RoiConfig::default();
//! assert!(validate_config(&config).is_success());
//! ```

use crate::effects::{combine_validations, validation_from_errors, InputValidation};
use crate::errors::RoiError;
use crate::locale::Locale;

use super::core::{FieldKind, RoiConfig, NUMERIC_FIELDS};

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Pure function: check a single field value against its kind.
pub fn check_field(name: &str, kind: FieldKind, value: f64) -> Option<RoiError> {
    if !value.is_finite() {
        return Some(RoiError::validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }

    match kind {
        FieldKind::Amount if value < 0.0 => Some(RoiError::validation(format!(
            "{name} must be non-negative, got {value}"
        ))),
        FieldKind::Count if value < 0.0 || value.fract() != 0.0 => {
            Some(RoiError::validation(format!(
                "{name} must be a non-negative whole number, got {value}"
            )))
        }
        FieldKind::Month if !(1.0..=12.0).contains(&value) || value.fract() != 0.0 => {
            Some(RoiError::validation(format!(
                "{name} must be a whole month in 1..=12, got {value}"
            )))
        }
        FieldKind::Weight if !(0.0..=1.0).contains(&value) => Some(RoiError::validation(
            format!("{name} out of range: {value} (must be 0.0-1.0)"),
        )),
        FieldKind::Target if value <= 0.0 => Some(RoiError::validation(format!(
            "{name} must be greater than zero, got {value}"
        ))),
        _ => None,
    }
}

fn validate_numeric_fields(config: &RoiConfig) -> InputValidation<()> {
    let errors = NUMERIC_FIELDS
        .iter()
        .filter_map(|(name, kind)| {
            config
                .field(name)
                .and_then(|value| check_field(name, *kind, value))
        })
        .collect();

    validation_from_errors(errors)
}

/// Weights of the usage blend must sum to 1.0.
fn validate_weight_sum(config: &RoiConfig) -> InputValidation<()> {
    let model = config.usage_model();
    let sum = model.work_order_weight + model.prediction_weight;

    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        validation_from_errors(vec![RoiError::validation(format!(
            "work_order_weight and prediction_weight must sum to 1.0, but sum to {sum:.3}"
        ))])
    } else {
        validation_from_errors(Vec::new())
    }
}

fn validate_currency(config: &RoiConfig) -> InputValidation<()> {
    let errors = config
        .currency()
        .filter(|id| Locale::find(id).is_none())
        .map(|id| vec![RoiError::UnknownCurrency(id.to_string())])
        .unwrap_or_default();

    validation_from_errors(errors)
}

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &RoiConfig) -> InputValidation<()> {
    let validations = vec![
        validate_numeric_fields(config),
        validate_weight_sum(config),
        validate_currency(config),
    ];

    combine_validations(validations).map(|_| ())
}
