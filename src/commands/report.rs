use crate::cli;
use crate::config::{self, load_config};
use crate::effects::run_validation;
use crate::formatting::FormattingConfig;
use crate::io::create_writer;
use crate::locale::Locale;
use crate::report::build_report;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct ReportConfig {
    pub config: Option<PathBuf>,
    pub currency: Option<cli::Currency>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub overrides: Vec<String>,
    pub plain: bool,
}

pub fn handle_report(cfg: ReportConfig) -> Result<()> {
    // --currency wins over [display] currency
    let loaded = load_config(cfg.config.as_deref())?
        .with_currency(cfg.currency.map(cli::Currency::id));
    let resolved = run_validation(config::resolve(loaded, &cfg.overrides))?;

    let locale = Locale::resolve(resolved.currency.as_deref())?;
    debug!(currency = locale.id, rate = locale.rate, "resolved locale");

    let report = build_report(
        &resolved.inputs,
        locale,
        &resolved.usage_model,
        Utc::now(),
    );
    info!(
        roi_percent = report.summary.roi_percent,
        payback_months = report.summary.payback_months,
        realized = report.realization.realized_value_to_date,
        "report built"
    );

    let formatting = if cfg.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let mut writer = create_writer(cfg.format.into(), cfg.output.as_deref(), formatting)
        .context("Failed to open report output")?;
    writer
        .write_report(&report)
        .context("Failed to write report")?;

    if let Some(path) = &cfg.output {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}
