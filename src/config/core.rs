use serde::{Deserialize, Serialize};

use crate::roi::{InputSet, UsageModel};

/// Investment figures (base currency)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvestmentConfig {
    pub platform_annual_cost: Option<f64>,
    pub implementation_cost: Option<f64>,
}

/// Labor and personnel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaborConfig {
    pub total_fte: Option<f64>,
    pub formulation_dev_fte: Option<f64>,
    pub hourly_cost: Option<f64>,
}

/// Lab and data volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    pub lab_cost_per_order: Option<f64>,
    pub annual_orders: Option<f64>,
    pub sem_images_per_year: Option<f64>,
}

/// R&D activity (reported, not used in the savings formulas)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RdActivityConfig {
    pub new_formulations_per_year: Option<f64>,
    pub formulation_adjustments_per_year: Option<f64>,
    pub hours_per_new_formulation: Option<f64>,
    pub hours_per_adjustment: Option<f64>,
}

/// Scale and legacy tooling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    pub material_spend_annual: Option<f64>,
    pub legacy_tool_cost_annual: Option<f64>,
}

/// Manually reported usage snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageConfig {
    pub current_month: Option<f64>,
    pub actual_work_orders: Option<f64>,
    pub actual_experiments: Option<f64>,
    pub actual_models_created: Option<f64>,
    pub actual_forward_predictions: Option<f64>,
    pub actual_inverse_predictions: Option<f64>,
}

/// Overrides for the usage blend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssumptionsConfig {
    pub work_order_weight: Option<f64>,
    pub prediction_weight: Option<f64>,
    pub prediction_maturity_target: Option<f64>,
}

/// Presentation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Locale id: usd, eur, krw or jpy
    pub currency: Option<String>,
}

/// How a numeric field is validated and converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Finite, non-negative amount (currency, hours, FTE)
    Amount,
    /// Finite, non-negative whole number
    Count,
    /// Whole number in 1..=12
    Month,
    /// Weight in 0.0..=1.0
    Weight,
    /// Finite, strictly positive amount
    Target,
}

/// Root configuration structure for roimap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    #[serde(default)]
    pub investment: InvestmentConfig,

    #[serde(default)]
    pub labor: LaborConfig,

    #[serde(default)]
    pub lab: LabConfig,

    #[serde(default)]
    pub rd_activity: RdActivityConfig,

    #[serde(default)]
    pub scale: ScaleConfig,

    #[serde(default)]
    pub usage: UsageConfig,

    #[serde(default)]
    pub assumptions: AssumptionsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Every numeric field name with its kind, in config order.
pub const NUMERIC_FIELDS: [(&str, FieldKind); 23] = [
    ("platform_annual_cost", FieldKind::Amount),
    ("implementation_cost", FieldKind::Amount),
    ("total_fte", FieldKind::Amount),
    ("formulation_dev_fte", FieldKind::Amount),
    ("hourly_cost", FieldKind::Amount),
    ("lab_cost_per_order", FieldKind::Amount),
    ("annual_orders", FieldKind::Count),
    ("sem_images_per_year", FieldKind::Count),
    ("new_formulations_per_year", FieldKind::Count),
    ("formulation_adjustments_per_year", FieldKind::Count),
    ("hours_per_new_formulation", FieldKind::Amount),
    ("hours_per_adjustment", FieldKind::Amount),
    ("material_spend_annual", FieldKind::Amount),
    ("legacy_tool_cost_annual", FieldKind::Amount),
    ("current_month", FieldKind::Month),
    ("actual_work_orders", FieldKind::Count),
    ("actual_experiments", FieldKind::Count),
    ("actual_models_created", FieldKind::Count),
    ("actual_forward_predictions", FieldKind::Count),
    ("actual_inverse_predictions", FieldKind::Count),
    ("work_order_weight", FieldKind::Weight),
    ("prediction_weight", FieldKind::Weight),
    ("prediction_maturity_target", FieldKind::Target),
];

pub fn field_kind(name: &str) -> Option<FieldKind> {
    NUMERIC_FIELDS
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, kind)| *kind)
}

impl RoiConfig {
    /// Value configured for a numeric field, if set.
    pub fn field(&self, name: &str) -> Option<f64> {
        match name {
            "platform_annual_cost" => self.investment.platform_annual_cost,
            "implementation_cost" => self.investment.implementation_cost,
            "total_fte" => self.labor.total_fte,
            "formulation_dev_fte" => self.labor.formulation_dev_fte,
            "hourly_cost" => self.labor.hourly_cost,
            "lab_cost_per_order" => self.lab.lab_cost_per_order,
            "annual_orders" => self.lab.annual_orders,
            "sem_images_per_year" => self.lab.sem_images_per_year,
            "new_formulations_per_year" => self.rd_activity.new_formulations_per_year,
            "formulation_adjustments_per_year" => {
                self.rd_activity.formulation_adjustments_per_year
            }
            "hours_per_new_formulation" => self.rd_activity.hours_per_new_formulation,
            "hours_per_adjustment" => self.rd_activity.hours_per_adjustment,
            "material_spend_annual" => self.scale.material_spend_annual,
            "legacy_tool_cost_annual" => self.scale.legacy_tool_cost_annual,
            "current_month" => self.usage.current_month,
            "actual_work_orders" => self.usage.actual_work_orders,
            "actual_experiments" => self.usage.actual_experiments,
            "actual_models_created" => self.usage.actual_models_created,
            "actual_forward_predictions" => self.usage.actual_forward_predictions,
            "actual_inverse_predictions" => self.usage.actual_inverse_predictions,
            "work_order_weight" => self.assumptions.work_order_weight,
            "prediction_weight" => self.assumptions.prediction_weight,
            "prediction_maturity_target" => self.assumptions.prediction_maturity_target,
            _ => None,
        }
    }

    /// Mutable slot for a numeric field; `None` for unknown names.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Option<f64>> {
        let slot = match name {
            "platform_annual_cost" => &mut self.investment.platform_annual_cost,
            "implementation_cost" => &mut self.investment.implementation_cost,
            "total_fte" => &mut self.labor.total_fte,
            "formulation_dev_fte" => &mut self.labor.formulation_dev_fte,
            "hourly_cost" => &mut self.labor.hourly_cost,
            "lab_cost_per_order" => &mut self.lab.lab_cost_per_order,
            "annual_orders" => &mut self.lab.annual_orders,
            "sem_images_per_year" => &mut self.lab.sem_images_per_year,
            "new_formulations_per_year" => &mut self.rd_activity.new_formulations_per_year,
            "formulation_adjustments_per_year" => {
                &mut self.rd_activity.formulation_adjustments_per_year
            }
            "hours_per_new_formulation" => &mut self.rd_activity.hours_per_new_formulation,
            "hours_per_adjustment" => &mut self.rd_activity.hours_per_adjustment,
            "material_spend_annual" => &mut self.scale.material_spend_annual,
            "legacy_tool_cost_annual" => &mut self.scale.legacy_tool_cost_annual,
            "current_month" => &mut self.usage.current_month,
            "actual_work_orders" => &mut self.usage.actual_work_orders,
            "actual_experiments" => &mut self.usage.actual_experiments,
            "actual_models_created" => &mut self.usage.actual_models_created,
            "actual_forward_predictions" => &mut self.usage.actual_forward_predictions,
            "actual_inverse_predictions" => &mut self.usage.actual_inverse_predictions,
            "work_order_weight" => &mut self.assumptions.work_order_weight,
            "prediction_weight" => &mut self.assumptions.prediction_weight,
            "prediction_maturity_target" => &mut self.assumptions.prediction_maturity_target,
            _ => return None,
        };
        Some(slot)
    }

    /// Build the engine inputs, filling unset fields from session defaults.
    ///
    /// Expects a config that passed validation; counts are truncated to
    /// whole numbers.
    pub fn to_input_set(&self) -> InputSet {
        let d = InputSet::default();
        let amount = |name: &str, default: f64| self.field(name).unwrap_or(default);
        let count = |name: &str, default: u64| {
            self.field(name)
                .map(|v| v.max(0.0) as u64)
                .unwrap_or(default)
        };

        InputSet {
            platform_annual_cost: amount("platform_annual_cost", d.platform_annual_cost),
            implementation_cost: amount("implementation_cost", d.implementation_cost),
            total_fte: amount("total_fte", d.total_fte),
            formulation_dev_fte: amount("formulation_dev_fte", d.formulation_dev_fte),
            hourly_cost: amount("hourly_cost", d.hourly_cost),
            lab_cost_per_order: amount("lab_cost_per_order", d.lab_cost_per_order),
            annual_orders: count("annual_orders", d.annual_orders),
            sem_images_per_year: count("sem_images_per_year", d.sem_images_per_year),
            new_formulations_per_year: count(
                "new_formulations_per_year",
                d.new_formulations_per_year,
            ),
            formulation_adjustments_per_year: count(
                "formulation_adjustments_per_year",
                d.formulation_adjustments_per_year,
            ),
            hours_per_new_formulation: amount(
                "hours_per_new_formulation",
                d.hours_per_new_formulation,
            ),
            hours_per_adjustment: amount("hours_per_adjustment", d.hours_per_adjustment),
            material_spend_annual: amount("material_spend_annual", d.material_spend_annual),
            legacy_tool_cost_annual: amount("legacy_tool_cost_annual", d.legacy_tool_cost_annual),
            current_month: count("current_month", d.current_month as u64).clamp(1, 12) as u32,
            actual_work_orders: count("actual_work_orders", d.actual_work_orders),
            actual_experiments: count("actual_experiments", d.actual_experiments),
            actual_models_created: count("actual_models_created", d.actual_models_created),
            actual_forward_predictions: count(
                "actual_forward_predictions",
                d.actual_forward_predictions,
            ),
            actual_inverse_predictions: count(
                "actual_inverse_predictions",
                d.actual_inverse_predictions,
            ),
        }
    }

    /// Usage blend with any `[assumptions]` overrides applied.
    pub fn usage_model(&self) -> UsageModel {
        let d = UsageModel::default();
        UsageModel {
            work_order_weight: self
                .assumptions
                .work_order_weight
                .unwrap_or(d.work_order_weight),
            prediction_weight: self
                .assumptions
                .prediction_weight
                .unwrap_or(d.prediction_weight),
            prediction_maturity_target: self
                .assumptions
                .prediction_maturity_target
                .unwrap_or(d.prediction_maturity_target),
        }
    }

    pub fn currency(&self) -> Option<&str> {
        self.display.currency.as_deref()
    }

    /// Replace `[display] currency` when `currency` is given.
    pub fn with_currency(mut self, currency: Option<&str>) -> Self {
        if let Some(id) = currency {
            self.display.currency = Some(id.to_string());
        }
        self
    }
}
