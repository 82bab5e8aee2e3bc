//! `.roimap.toml` configuration.
//!
//! Every section and field is optional; unset fields take the default
//! session values. Amounts are in the base currency and are converted at
//! the locale boundary, never here.

mod core;
mod loader;
pub mod overrides;
pub mod validation;

pub use self::core::{
    field_kind, AssumptionsConfig, DisplayConfig, FieldKind, InvestmentConfig, LabConfig,
    LaborConfig, RdActivityConfig, RoiConfig, ScaleConfig, UsageConfig, NUMERIC_FIELDS,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use overrides::{apply_overrides, parse_override, FieldOverride};
pub use validation::validate_config;

use crate::effects::{combine_validations, InputValidation};
use crate::roi::{InputSet, UsageModel};

/// Inputs and usage blend ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub inputs: InputSet,
    pub usage_model: UsageModel,
    pub currency: Option<String>,
}

/// Apply overrides, validate, and resolve the engine inputs.
///
/// Override and validation errors are reported together.
pub fn resolve(mut config: RoiConfig, overrides: &[String]) -> InputValidation<ResolvedInputs> {
    let applied = apply_overrides(&mut config, overrides);
    let validated = validate_config(&config);

    combine_validations(vec![applied, validated]).map(|_| ResolvedInputs {
        inputs: config.to_input_set(),
        usage_model: config.usage_model(),
        currency: config.currency().map(str::to_string),
    })
}
