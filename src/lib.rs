// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod effects;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod locale;
pub mod report;
pub mod roi;

// Re-export commonly used types
pub use crate::errors::RoiError;

pub use crate::roi::{
    compute_financial_summary, compute_realization, compute_realization_with, compute_savings,
    evaluate, Case, CaseValues, DriverKey, FinancialSummary, InputSet, Methodology,
    RealizationState, SavingsRow, SavingsTable, UsageModel,
};

pub use crate::config::{load_config, RoiConfig};

pub use crate::locale::Locale;

pub use crate::report::{build_report, Report};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
