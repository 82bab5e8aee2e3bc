use crate::config::{self, load_config};
use crate::effects::into_result;
use crate::errors::RoiError;
use anyhow::Result;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub config: Option<PathBuf>,
    pub overrides: Vec<String>,
}

/// Validate inputs and assumptions, printing every problem found.
pub fn validate_inputs(cfg: ValidateConfig) -> Result<()> {
    let loaded = load_config(cfg.config.as_deref())?;

    match into_result(config::resolve(loaded, &cfg.overrides)) {
        Ok(resolved) => {
            println!("✓ Inputs are valid");
            println!(
                "  month {} of 12, currency {}",
                resolved.inputs.current_month,
                resolved.currency.as_deref().unwrap_or("usd")
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("✗ Found {} problem(s):", errors.len());
            for error in &errors {
                eprintln!("  - {error}");
            }
            Err(RoiError::validation(format!("{} problem(s) in inputs", errors.len())).into())
        }
    }
}
