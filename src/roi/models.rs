use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::DriverKey;

/// Complete set of business inputs for one evaluation.
///
/// Currency fields are in a single implicit unit; conversion between
/// currencies happens before a value reaches the engine (see
/// [`InputSet::converted`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    // Investment
    pub platform_annual_cost: f64,
    pub implementation_cost: f64,

    // Labor
    pub total_fte: f64,
    pub formulation_dev_fte: f64,
    pub hourly_cost: f64,

    // Lab
    pub lab_cost_per_order: f64,
    pub annual_orders: u64,
    pub sem_images_per_year: u64,

    // R&D activity: carried for display, not consumed by the formulas
    pub new_formulations_per_year: u64,
    pub formulation_adjustments_per_year: u64,
    pub hours_per_new_formulation: f64,
    pub hours_per_adjustment: f64,

    // Scale
    pub material_spend_annual: f64,
    pub legacy_tool_cost_annual: f64,

    // Usage tracking
    pub current_month: u32,
    pub actual_work_orders: u64,
    pub actual_experiments: u64,
    pub actual_models_created: u64,
    pub actual_forward_predictions: u64,
    pub actual_inverse_predictions: u64,
}

impl Default for InputSet {
    fn default() -> Self {
        Self {
            platform_annual_cost: 50_000.0,
            implementation_cost: 10_000.0,
            total_fte: 10.0,
            formulation_dev_fte: 3.0,
            hourly_cost: 80.0,
            lab_cost_per_order: 800.0,
            annual_orders: 250,
            sem_images_per_year: 2_000,
            new_formulations_per_year: 30,
            formulation_adjustments_per_year: 70,
            hours_per_new_formulation: 60.0,
            hours_per_adjustment: 30.0,
            material_spend_annual: 100_000_000.0,
            legacy_tool_cost_annual: 4_000.0,
            current_month: 1,
            actual_work_orders: 0,
            actual_experiments: 0,
            actual_models_created: 0,
            actual_forward_predictions: 0,
            actual_inverse_predictions: 0,
        }
    }
}

impl InputSet {
    /// Scale every currency-valued field by `rate`.
    ///
    /// Counts, hours and FTE figures are left untouched.
    pub fn converted(&self, rate: f64) -> Self {
        Self {
            platform_annual_cost: self.platform_annual_cost * rate,
            implementation_cost: self.implementation_cost * rate,
            hourly_cost: self.hourly_cost * rate,
            lab_cost_per_order: self.lab_cost_per_order * rate,
            material_spend_annual: self.material_spend_annual * rate,
            legacy_tool_cost_annual: self.legacy_tool_cost_annual * rate,
            ..self.clone()
        }
    }

    pub fn total_investment(&self) -> f64 {
        self.platform_annual_cost + self.implementation_cost
    }

    pub fn lab_spend(&self) -> f64 {
        self.lab_cost_per_order * self.annual_orders as f64
    }

    pub fn combined_predictions(&self) -> u64 {
        self.actual_forward_predictions
            .saturating_add(self.actual_inverse_predictions)
    }
}

/// The three estimate cases reported for every driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Min,
    Mid,
    Good,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Min, Case::Mid, Case::Good];

    pub fn label(self) -> &'static str {
        match self {
            Case::Min => "Min",
            Case::Mid => "Mid",
            Case::Good => "Good",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A currency value for each of the min/mid/good cases.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseValues {
    pub min: f64,
    pub mid: f64,
    pub good: f64,
}

impl CaseValues {
    pub const ZERO: CaseValues = CaseValues {
        min: 0.0,
        mid: 0.0,
        good: 0.0,
    };

    pub fn flat(value: f64) -> Self {
        Self {
            min: value,
            mid: value,
            good: value,
        }
    }

    pub fn get(&self, case: Case) -> f64 {
        match case {
            Case::Min => self.min,
            Case::Mid => self.mid,
            Case::Good => self.good,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.mid && self.mid <= self.good
    }
}

impl std::ops::Add for CaseValues {
    type Output = CaseValues;

    fn add(self, rhs: Self) -> Self::Output {
        CaseValues {
            min: self.min + rhs.min,
            mid: self.mid + rhs.mid,
            good: self.good + rhs.good,
        }
    }
}

impl std::iter::Sum for CaseValues {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(CaseValues::ZERO, |acc, v| acc + v)
    }
}

/// How a row's values were derived, with the figures needed to explain it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", rename_all = "snake_case")]
pub enum Methodology {
    /// `hours × hourly cost`
    #[serde(rename = "prod")]
    Productivity { mid_hours: f64, hourly_cost: f64 },
    /// Flat offset of the legacy tooling cost.
    #[serde(rename = "leg")]
    LegacyOffset { annual_cost: f64 },
    /// Share of total lab spend.
    #[serde(rename = "lab")]
    LabReduction { lab_spend: f64 },
    /// Share of annual raw material spend.
    #[serde(rename = "mat")]
    MaterialOptimization { material_spend: f64 },
}

impl Methodology {
    pub fn key(&self) -> &'static str {
        match self {
            Methodology::Productivity { .. } => "prod",
            Methodology::LegacyOffset { .. } => "leg",
            Methodology::LabReduction { .. } => "lab",
            Methodology::MaterialOptimization { .. } => "mat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRow {
    pub driver: DriverKey,
    pub cases: CaseValues,
    pub methodology: Methodology,
}

/// Savings rows in catalog order plus their column totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsTable {
    pub rows: Vec<SavingsRow>,
    pub total: CaseValues,
    /// Narrative figure only; no dollar amount is derived from it.
    pub productivity_hours_mid: f64,
}

impl SavingsTable {
    pub fn row(&self, driver: DriverKey) -> Option<&SavingsRow> {
        self.rows.iter().find(|row| row.driver == driver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_investment: f64,
    pub total_savings: CaseValues,
    pub net_profit: f64,
    /// 0 when there is no investment.
    pub roi_percent: f64,
    /// 0 when there are no mid-case savings.
    pub payback_months: f64,
}

/// One 12-point cumulative series per case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSeries {
    pub min: Vec<f64>,
    pub mid: Vec<f64>,
    pub good: Vec<f64>,
}

impl CaseSeries {
    pub fn get(&self, case: Case) -> &[f64] {
        match case {
            Case::Min => &self.min,
            Case::Mid => &self.mid,
            Case::Good => &self.good,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizationState {
    pub summary: FinancialSummary,
    /// Cumulative linear accrual for months 1..=12.
    pub monthly_projection: CaseSeries,
    pub work_order_intensity: f64,
    pub prediction_intensity: f64,
    pub usage_intensity: f64,
    pub current_month: u32,
    pub realized_value_to_date: f64,
    /// Evenly spaced points from 0 to `realized_value_to_date`, one per
    /// elapsed month. This is a smoothing of a single snapshot for charting,
    /// not a measured history.
    pub realized_path: Vec<f64>,
}
