//! `--set key=value` overrides applied on top of the loaded config.

use crate::effects::{validation_from_errors, InputValidation};
use crate::errors::RoiError;

use super::core::RoiConfig;

/// A single parsed `key=value` override.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOverride {
    pub key: String,
    pub value: f64,
}

/// Pure function: parse one `key=value` pair.
pub fn parse_override(raw: &str) -> Result<FieldOverride, RoiError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| RoiError::parse(format!("expected key=value, got '{raw}'")))?;

    let key = key.trim();
    let value = value.trim().replace('_', "");
    let value: f64 = value
        .parse()
        .map_err(|_| RoiError::parse(format!("{key}: '{value}' is not a number")))?;

    Ok(FieldOverride {
        key: key.to_string(),
        value,
    })
}

/// Apply every override, collecting malformed pairs and unknown keys.
pub fn apply_overrides(config: &mut RoiConfig, raw: &[String]) -> InputValidation<()> {
    let mut errors = Vec::new();

    for pair in raw {
        match parse_override(pair) {
            Ok(FieldOverride { key, value }) => match config.field_mut(&key) {
                Some(slot) => *slot = Some(value),
                None => errors.push(RoiError::parse(format!("unknown input field '{key}'"))),
            },
            Err(e) => errors.push(e),
        }
    }

    validation_from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::into_result;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("hourly_cost=95.5").unwrap(),
            FieldOverride {
                key: "hourly_cost".to_string(),
                value: 95.5
            }
        );
        assert_eq!(
            parse_override("material_spend_annual = 250_000_000").unwrap().value,
            250_000_000.0
        );
    }

    #[test]
    fn test_parse_override_rejects_garbage() {
        assert!(parse_override("hourly_cost").is_err());
        assert!(parse_override("hourly_cost=lots").is_err());
    }

    #[test]
    fn test_apply_overrides_sets_fields() {
        let mut config = RoiConfig::default();
        let raw = vec!["hourly_cost=100".to_string(), "current_month=6".to_string()];

        assert!(apply_overrides(&mut config, &raw).is_success());
        assert_eq!(config.labor.hourly_cost, Some(100.0));
        assert_eq!(config.usage.current_month, Some(6.0));
    }

    #[test]
    fn test_apply_overrides_collects_errors() {
        let mut config = RoiConfig::default();
        let raw = vec![
            "nonsense=1".to_string(),
            "hourly_cost".to_string(),
            "annual_orders=300".to_string(),
        ];

        let errors = into_result(apply_overrides(&mut config, &raw)).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(config.lab.annual_orders, Some(300.0));
    }
}
