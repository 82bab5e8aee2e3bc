//! Calculation engine.
//!
//! Two pure, stateless stages evaluated in order:
//!
//! 1. [`compute_savings`] maps an [`InputSet`] to a [`SavingsTable`] of
//!    per-driver min/mid/good estimates.
//! 2. [`compute_realization`] turns the table's totals plus the usage
//!    counters into ROI, payback, a 12-month projection and a usage-weighted
//!    realized value.
//!
//! Nothing here performs I/O or keeps state between calls; the engine never
//! fails and degenerate denominators yield 0.

pub mod catalog;
pub mod models;
pub mod realization;
pub mod sanitize;
pub mod savings;
pub mod usage;


pub use catalog::{DriverKey, HourTriple, ProductivityDriver, DIRECT_RATIOS, PRODUCTIVITY_DRIVERS};
pub use models::{
    Case, CaseSeries, CaseValues, FinancialSummary, InputSet, Methodology, RealizationState,
    SavingsRow, SavingsTable,
};
pub use realization::{compute_financial_summary, compute_realization, compute_realization_with};
pub use savings::compute_savings;
pub use usage::{UsageIntensity, UsageModel};

/// Run both stages for an input set.
pub fn evaluate(input: &InputSet, usage_model: &UsageModel) -> (SavingsTable, RealizationState) {
    let savings = compute_savings(input);
    let realization = compute_realization_with(&savings, input, usage_model);
    (savings, realization)
}
