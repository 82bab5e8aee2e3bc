//! Report assembly: engine results plus chart payloads and narrative text,
//! rendered in one locale.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::formatting::{format_amount, format_months, format_percent, format_quantity};
use crate::locale::{render, Locale};
use crate::roi::{
    evaluate, Case, DriverKey, FinancialSummary, InputSet, RealizationState, SavingsTable,
    UsageModel,
};

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub roimap_version: String,
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub symbol: String,
    pub rate: f64,
}

/// One bar pair of the benefits-vs-costs chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenefitsVsCosts {
    pub case: Case,
    pub savings: f64,
    pub investment: f64,
}

/// One slice of the savings composition chart (mid case).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionEntry {
    pub driver: DriverKey,
    pub label: String,
    pub mid_value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub benefits_vs_costs: Vec<BenefitsVsCosts>,
    pub composition: Vec<CompositionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Narrative {
    pub executive_summary: String,
    pub usage_commentary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub inputs: InputSet,
    pub savings: SavingsTable,
    pub summary: FinancialSummary,
    pub realization: RealizationState,
    pub charts: Charts,
    pub narrative: Narrative,
    #[serde(skip)]
    pub locale: Locale,
}

/// Build a report for base-currency `inputs` in `locale`.
///
/// Inputs are converted into the locale's currency before evaluation, so
/// every figure in the report is in that currency.
pub fn build_report(
    inputs: &InputSet,
    locale: Locale,
    usage_model: &UsageModel,
    generated_at: DateTime<Utc>,
) -> Report {
    let inputs = inputs.converted(locale.rate);
    let (savings, realization) = evaluate(&inputs, usage_model);
    let summary = realization.summary;

    let charts = Charts {
        benefits_vs_costs: benefits_vs_costs(&summary),
        composition: composition(&savings, &locale),
    };
    let narrative = Narrative {
        executive_summary: executive_summary(&locale, &inputs, &savings, &summary),
        usage_commentary: usage_commentary(&locale, &realization),
    };

    Report {
        metadata: ReportMetadata {
            roimap_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at,
            currency: locale.id.to_string(),
            symbol: locale.symbol.to_string(),
            rate: locale.rate,
        },
        inputs,
        savings,
        summary,
        realization,
        charts,
        narrative,
        locale,
    }
}

/// Pure function: savings per case against the (case-independent) investment.
pub fn benefits_vs_costs(summary: &FinancialSummary) -> Vec<BenefitsVsCosts> {
    Case::ALL
        .iter()
        .map(|&case| BenefitsVsCosts {
            case,
            savings: summary.total_savings.get(case),
            investment: summary.total_investment,
        })
        .collect()
}

/// Pure function: each row's share of the mid-case total.
pub fn composition(savings: &SavingsTable, locale: &Locale) -> Vec<CompositionEntry> {
    let total = savings.total.mid;
    savings
        .rows
        .iter()
        .map(|row| CompositionEntry {
            driver: row.driver,
            label: locale.driver_label(row.driver).to_string(),
            mid_value: row.cases.mid,
            share: if total > 0.0 { row.cases.mid / total } else { 0.0 },
        })
        .collect()
}

pub fn executive_summary(
    locale: &Locale,
    inputs: &InputSet,
    savings: &SavingsTable,
    summary: &FinancialSummary,
) -> String {
    render(
        locale.summary,
        &[
            ("fte", format_quantity(inputs.total_fte)),
            ("hrs", format_amount(savings.productivity_hours_mid)),
            ("sym", locale.symbol.to_string()),
            ("savings", format_amount(summary.total_savings.mid)),
            ("cost", format_amount(inputs.platform_annual_cost)),
            ("roi", format_percent(summary.roi_percent)),
            ("pb", format_months(summary.payback_months)),
        ],
    )
}

pub fn usage_commentary(locale: &Locale, realization: &RealizationState) -> String {
    format!(
        "Month {} of 12: usage intensity {}% (work orders {}%, predictions {}%). \
         Realized value to date: {} of {} projected mid-case annual savings.",
        realization.current_month,
        format_percent(realization.usage_intensity * 100.0),
        format_percent(realization.work_order_intensity * 100.0),
        format_percent(realization.prediction_intensity * 100.0),
        locale.money(realization.realized_value_to_date),
        locale.money(realization.summary.total_savings.mid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EUR, USD};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_default_report_in_usd() {
        let report = build_report(
            &InputSet::default(),
            USD,
            &UsageModel::default(),
            fixed_time(),
        );

        assert_eq!(report.metadata.currency, "usd");
        assert_eq!(report.charts.benefits_vs_costs.len(), 3);
        assert_eq!(report.charts.composition.len(), 10);
        assert!(report.charts.benefits_vs_costs.iter().all(|b| b.investment == 60_000.0));
        assert_eq!(
            report.narrative.executive_summary,
            "Executive Summary: With the platform, your 10-person R&D team typically saves \
             ~3,440 hours annually, equivalent to $419,200 in recovered productivity. At an \
             annual investment of $50,000, the ROI is 599% with a payback of 1.7 months."
        );
    }

    #[test]
    fn test_executive_summary_keeps_fractional_fte() {
        let inputs = InputSet {
            total_fte: 2.5,
            ..InputSet::default()
        };
        let report = build_report(&inputs, USD, &UsageModel::default(), fixed_time());

        assert!(report
            .narrative
            .executive_summary
            .contains("your 2.5-person R&D team"));
    }

    #[test]
    fn test_composition_shares_sum_to_one() {
        let report = build_report(
            &InputSet::default(),
            USD,
            &UsageModel::default(),
            fixed_time(),
        );

        let total: f64 = report.charts.composition.iter().map(|c| c.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_composition_zero_total_has_zero_shares() {
        let inputs = InputSet {
            hourly_cost: 0.0,
            lab_cost_per_order: 0.0,
            material_spend_annual: 0.0,
            legacy_tool_cost_annual: 0.0,
            ..InputSet::default()
        };
        let report = build_report(&inputs, USD, &UsageModel::default(), fixed_time());

        assert!(report.charts.composition.iter().all(|c| c.share == 0.0));
    }

    #[test]
    fn test_report_converts_currency_fields() {
        let usd = build_report(&InputSet::default(), USD, &UsageModel::default(), fixed_time());
        let eur = build_report(&InputSet::default(), EUR, &UsageModel::default(), fixed_time());

        assert!((eur.summary.total_savings.mid - usd.summary.total_savings.mid * 0.92).abs() < 1e-6);
        assert!((eur.summary.roi_percent - usd.summary.roi_percent).abs() < 1e-9);
        assert_eq!(eur.inputs.annual_orders, usd.inputs.annual_orders);
        assert_eq!(eur.charts.composition[0].label, "Verbesserte Zusammenarbeit");
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&InputSet::default(), USD, &UsageModel::default(), fixed_time());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["metadata"]["symbol"], "$");
        assert_eq!(json["charts"]["benefits_vs_costs"][0]["case"], "min");
        assert_eq!(json["savings"]["rows"][0]["driver"], "collab");
        assert_eq!(json["savings"]["rows"][7]["methodology"]["key"], "leg");
        assert!(json.get("locale").is_none());
    }

    #[test]
    fn test_usage_commentary() {
        let report = build_report(&InputSet::default(), USD, &UsageModel::default(), fixed_time());
        assert!(report.narrative.usage_commentary.starts_with("Month 1 of 12: usage intensity 0%"));
    }
}
