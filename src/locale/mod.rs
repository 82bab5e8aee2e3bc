//! Currency and language boundary adapter.
//!
//! A [`Locale`] bundles a currency descriptor (symbol plus conversion rate
//! from the base unit) with the display strings for one language. Strings
//! are keyed by stable identifiers ([`DriverKey`], methodology keys) and are
//! only applied when rendering; the engine never sees them.

use crate::errors::RoiError;
use crate::formatting::format_amount;
use crate::roi::{DriverKey, Methodology};

/// Headline metric labels
#[derive(Debug, Clone, Copy)]
pub struct MetricLabels {
    pub savings: &'static str,
    pub profit: &'static str,
    pub roi: &'static str,
    pub payback: &'static str,
}

/// Table and chart headings
#[derive(Debug, Clone, Copy)]
pub struct TableLabels {
    pub driver: &'static str,
    pub method: &'static str,
    pub benefits_title: &'static str,
    pub composition_title: &'static str,
    pub table_title: &'static str,
}

/// Methodology templates keyed by methodology key.
///
/// Placeholders: `{h}` hours, `{s}` currency symbol, `{c}` hourly cost,
/// `{v}` base value.
#[derive(Debug, Clone, Copy)]
pub struct MethodTemplates {
    pub prod: &'static str,
    pub leg: &'static str,
    pub lab: &'static str,
    pub mat: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Multiplier from the base currency into this one.
    pub rate: f64,
    /// Executive summary; placeholders `{fte}`, `{hrs}`, `{sym}`, `{savings}`,
    /// `{cost}`, `{roi}`, `{pb}`.
    pub summary: &'static str,
    pub metrics: MetricLabels,
    pub table: TableLabels,
    pub methods: MethodTemplates,
    drivers: [&'static str; 10],
}

pub const USD: Locale = Locale {
    id: "usd",
    name: "USD ($)",
    symbol: "$",
    rate: 1.0,
    summary: "Executive Summary: With the platform, your {fte}-person R&D team typically saves ~{hrs} hours annually, equivalent to {sym}{savings} in recovered productivity. At an annual investment of {sym}{cost}, the ROI is {roi}% with a payback of {pb} months.",
    metrics: MetricLabels {
        savings: "Annual Savings (Mid)",
        profit: "Net Profit (Year 1)",
        roi: "ROI (%)",
        payback: "Payback Period (Months)",
    },
    table: TableLabels {
        driver: "Value Driver",
        method: "Calculation Methodology",
        benefits_title: "Annual Benefits vs. Costs",
        composition_title: "Savings Composition",
        table_title: "Detailed Savings Calculation Table",
    },
    methods: MethodTemplates {
        prod: "{h} hrs × {s}{c}/hr",
        leg: "Direct offset of {s}{v} systems",
        lab: "10/20/30% reduction of {s}{v} spend",
        mat: "0.01/0.1/0.5% optimization of {s}{v} spend",
    },
    drivers: [
        "Improved Collaboration",
        "Prevented Double-Work",
        "Enhanced Data Analytics",
        "AI Image Analysis (SEM)",
        "AI Data Extraction (TDS)",
        "AI Material Development",
        "AI Formulation Adjustment",
        "Legacy Tool Replacement",
        "Reduced Lab Expenses",
        "Material Optimization",
    ],
};

pub const EUR: Locale = Locale {
    id: "eur",
    name: "EUR (€)",
    symbol: "€",
    rate: 0.92,
    summary: "Executive Summary: Mit der Plattform spart Ihr {fte}-köpfiges Team ca. {hrs} Stunden jährlich, was {sym}{savings} entspricht. ROI: {roi}%, Amortisation: {pb} Monate.",
    metrics: MetricLabels {
        savings: "Ersparnis (Mittel)",
        profit: "Nettogewinn (Jahr 1)",
        roi: "ROI (%)",
        payback: "Amortisation (Monate)",
    },
    table: TableLabels {
        driver: "Werttreiber",
        method: "Berechnungsmethodik",
        benefits_title: "Nutzen vs. Kosten",
        composition_title: "Zusammensetzung",
        table_title: "Detaillierte Berechnungstabelle",
    },
    methods: MethodTemplates {
        prod: "{h} Std × {s}{c}/Std",
        leg: "Direkter Versatz von {s}{v} Systemen",
        lab: "10/20/30% Senkung der {s}{v} Ausgaben",
        mat: "0,01/0,1/0,5% Optimierung der {s}{v} Ausgaben",
    },
    drivers: [
        "Verbesserte Zusammenarbeit",
        "Vermeidung von Doppelarbeit",
        "Erweiterte Datenanalyse",
        "KI-Bildanalyse (SEM)",
        "KI-Datenextraktion (TDS)",
        "KI-Materialentwicklung",
        "KI-Formulierungsanpassung",
        "Ersatz von Altsystemen",
        "Reduzierte Laborkosten",
        "Materialoptimierung",
    ],
};

pub const KRW: Locale = Locale {
    id: "krw",
    name: "KRW (₩)",
    symbol: "₩",
    rate: 1320.0,
    summary: "Executive Summary: 플랫폼을 통해 {fte}명의 R&D 팀은 연간 약 {hrs}시간을 절약하며, 이는 {sym}{savings} 이상의 가치가 있습니다. ROI: {roi}%, 회수 기간: {pb}개월.",
    metrics: MetricLabels {
        savings: "연간 절감액 (중간)",
        profit: "순이익 (1년차)",
        roi: "ROI (%)",
        payback: "회수 기간 (개월)",
    },
    table: TableLabels {
        driver: "가치 동인",
        method: "계산 방법론",
        benefits_title: "편익 vs 비용",
        composition_title: "절감액 구성",
        table_title: "상세 계산표",
    },
    methods: MethodTemplates {
        prod: "{h} 시간 × {s}{c}/시간",
        leg: "{s}{v} 시스템 직접 대체",
        lab: "총 지출 {s}{v}의 10/20/30% 절감",
        mat: "총 지출 {s}{v}의 0.01/0.1/0.5% 최적화",
    },
    drivers: [
        "협업 효율성 향상",
        "중복 작업 방지",
        "데이터 분석 강화",
        "AI 이미지 분석 (SEM)",
        "AI 데이터 추출 (TDS)",
        "AI 소재 개발",
        "AI 배합 조정",
        "기존 시스템 대체",
        "실험 비용 절감",
        "원자재 최적화",
    ],
};

pub const JPY: Locale = Locale {
    id: "jpy",
    name: "JPY (¥)",
    symbol: "¥",
    rate: 150.0,
    summary: "Executive Summary: プラットフォームの導入により、{fte}名のR&Dチームは年間約{hrs}時間を削減し、{sym}{savings}相当の生産性向上を実現します。ROI: {roi}%, 回収期間: {pb}ヶ月.",
    metrics: MetricLabels {
        savings: "年間節約額 (中間)",
        profit: "純利益 (初年度)",
        roi: "ROI (%)",
        payback: "回収期間 (ヶ月)",
    },
    table: TableLabels {
        driver: "価値ドライバー",
        method: "計算方法",
        benefits_title: "便益 vs コスト",
        composition_title: "節約額の内訳",
        table_title: "詳細計算表",
    },
    methods: MethodTemplates {
        prod: "{h} 時間 × {s}{c}/時",
        leg: "{s}{v} システムの直接削減",
        lab: "年間支出 {s}{v} の 10/20/30% 削減",
        mat: "年間支出 {s}{v} の 0.01/0.1/0.5% 最適化",
    },
    drivers: [
        "コラボレーションの改善",
        "重複作業の防止",
        "データ分析の強化",
        "AI画像解析 (SEM)",
        "AIデータ抽出 (TDS)",
        "AI材料開発",
        "AI配合調整",
        "レガシーシステムの置換",
        "ラボ経費の削減",
        "原材料の最適化",
    ],
};

pub const LOCALES: [Locale; 4] = [USD, EUR, KRW, JPY];

/// Pure function: replace `{name}` placeholders with their values.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

impl Default for Locale {
    fn default() -> Self {
        USD
    }
}

impl Locale {
    pub fn find(id: &str) -> Option<Locale> {
        let id = id.trim().to_lowercase();
        LOCALES.into_iter().find(|locale| locale.id == id)
    }

    /// Like [`Locale::find`], but an unknown id is an error.
    pub fn resolve(id: Option<&str>) -> Result<Locale, RoiError> {
        match id {
            None => Ok(Locale::default()),
            Some(id) => Locale::find(id).ok_or_else(|| RoiError::UnknownCurrency(id.to_string())),
        }
    }

    pub fn driver_label(&self, key: DriverKey) -> &'static str {
        let index = DriverKey::ALL
            .iter()
            .position(|k| *k == key)
            .unwrap_or_default();
        self.drivers[index]
    }

    /// Amount with this locale's symbol, e.g. `$4,000`.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{}", self.symbol, format_amount(amount))
    }

    /// Human-readable explanation of how a row was computed.
    pub fn methodology(&self, methodology: &Methodology) -> String {
        let symbol = ("s", self.symbol.to_string());
        match *methodology {
            Methodology::Productivity {
                mid_hours,
                hourly_cost,
            } => render(
                self.methods.prod,
                &[
                    ("h", format_amount(mid_hours)),
                    symbol,
                    ("c", format_amount(hourly_cost)),
                ],
            ),
            Methodology::LegacyOffset { annual_cost } => render(
                self.methods.leg,
                &[symbol, ("v", format_amount(annual_cost))],
            ),
            Methodology::LabReduction { lab_spend } => {
                render(self.methods.lab, &[symbol, ("v", format_amount(lab_spend))])
            }
            Methodology::MaterialOptimization { material_spend } => render(
                self.methods.mat,
                &[symbol, ("v", format_amount(material_spend))],
            ),
        }
    }
}
