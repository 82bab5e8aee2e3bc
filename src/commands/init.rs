use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Commented default configuration; every value matches the built-in default.
pub const DEFAULT_CONFIG: &str = r#"# roimap configuration
#
# Amounts are in USD; reports convert them with `--currency` or [display].
# Remove or comment out a line to use the built-in default.

[investment]
platform_annual_cost = 50000
implementation_cost = 10000

[labor]
total_fte = 10
formulation_dev_fte = 3
hourly_cost = 80

[lab]
lab_cost_per_order = 800
annual_orders = 250
sem_images_per_year = 2000

[rd_activity]
new_formulations_per_year = 30
formulation_adjustments_per_year = 70
hours_per_new_formulation = 60
hours_per_adjustment = 30

[scale]
material_spend_annual = 100_000_000
legacy_tool_cost_annual = 4000

# Usage snapshot, updated as the rollout progresses
[usage]
current_month = 1
actual_work_orders = 0
actual_experiments = 0
actual_models_created = 0
actual_forward_predictions = 0
actual_inverse_predictions = 0

# Usage blend; the two weights must sum to 1.0
[assumptions]
work_order_weight = 0.5
prediction_weight = 0.5
prediction_maturity_target = 300

[display]
currency = "usd"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, validate_config, RoiConfig};
    use crate::roi::{InputSet, UsageModel};
    use tempfile::TempDir;

    #[test]
    fn test_default_template_matches_builtin_defaults() {
        let config: RoiConfig = parse_config(DEFAULT_CONFIG).unwrap();

        assert!(validate_config(&config).is_success());
        assert_eq!(config.to_input_set(), InputSet::default());
        assert_eq!(config.usage_model(), UsageModel::default());
        assert_eq!(config.currency(), Some("usd"));
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[labor]\nhourly_cost = 1\n").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[labor]\nhourly_cost = 1\n");

        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
