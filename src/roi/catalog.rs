//! Fixed catalog of savings drivers.
//!
//! Productivity drivers are declared as data: each one carries explicit
//! min/mid/good annual hour figures, and every dollar value is derived from
//! those triples by the same rule (`hours * hourly_cost`). The three directly
//! priced drivers are appended after the productivity drivers and use the
//! ratios in [`DirectRatios`].
//!
//! Drivers are identified by [`DriverKey`], never by display label, so the
//! engine behaves identically under every locale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::CaseValues;

/// Stable identifier of a savings driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DriverKey {
    #[serde(rename = "collab")]
    Collaboration,
    #[serde(rename = "double")]
    DoubleWork,
    #[serde(rename = "analytics")]
    Analytics,
    #[serde(rename = "sem_ai")]
    SemImageAnalysis,
    #[serde(rename = "data_ai")]
    DataExtraction,
    #[serde(rename = "mat_dev")]
    MaterialDevelopment,
    #[serde(rename = "form_adj")]
    FormulationAdjustment,
    #[serde(rename = "legacy")]
    LegacyReplacement,
    #[serde(rename = "lab_red")]
    LabExpenseReduction,
    #[serde(rename = "mat_opt")]
    MaterialOptimization,
}

impl DriverKey {
    /// Every driver in table order: productivity drivers first, direct drivers last.
    pub const ALL: [DriverKey; 10] = [
        DriverKey::Collaboration,
        DriverKey::DoubleWork,
        DriverKey::Analytics,
        DriverKey::SemImageAnalysis,
        DriverKey::DataExtraction,
        DriverKey::MaterialDevelopment,
        DriverKey::FormulationAdjustment,
        DriverKey::LegacyReplacement,
        DriverKey::LabExpenseReduction,
        DriverKey::MaterialOptimization,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DriverKey::Collaboration => "collab",
            DriverKey::DoubleWork => "double",
            DriverKey::Analytics => "analytics",
            DriverKey::SemImageAnalysis => "sem_ai",
            DriverKey::DataExtraction => "data_ai",
            DriverKey::MaterialDevelopment => "mat_dev",
            DriverKey::FormulationAdjustment => "form_adj",
            DriverKey::LegacyReplacement => "legacy",
            DriverKey::LabExpenseReduction => "lab_red",
            DriverKey::MaterialOptimization => "mat_opt",
        }
    }

    /// True for the hours-based drivers that scale with the hourly cost.
    pub fn is_productivity(self) -> bool {
        PRODUCTIVITY_DRIVERS.iter().any(|driver| driver.key == self)
    }
}

impl fmt::Display for DriverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual hours recovered by a productivity driver, per case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourTriple {
    pub min: f64,
    pub mid: f64,
    pub good: f64,
}

impl HourTriple {
    pub const fn new(min: f64, mid: f64, good: f64) -> Self {
        Self { min, mid, good }
    }

    /// Dollar value of each case at the given hourly cost.
    pub fn priced_at(&self, hourly_cost: f64) -> CaseValues {
        CaseValues {
            min: self.min * hourly_cost,
            mid: self.mid * hourly_cost,
            good: self.good * hourly_cost,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.mid && self.mid <= self.good
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductivityDriver {
    pub key: DriverKey,
    pub hours: HourTriple,
}

/// Hours-based drivers, in table order.
pub const PRODUCTIVITY_DRIVERS: [ProductivityDriver; 7] = [
    ProductivityDriver {
        key: DriverKey::Collaboration,
        hours: HourTriple::new(132.0, 264.0, 440.0),
    },
    ProductivityDriver {
        key: DriverKey::DoubleWork,
        hours: HourTriple::new(220.0, 440.0, 660.0),
    },
    ProductivityDriver {
        key: DriverKey::Analytics,
        hours: HourTriple::new(308.0, 528.0, 880.0),
    },
    ProductivityDriver {
        key: DriverKey::SemImageAnalysis,
        hours: HourTriple::new(167.0, 333.0, 500.0),
    },
    ProductivityDriver {
        key: DriverKey::DataExtraction,
        hours: HourTriple::new(50.0, 120.0, 200.0),
    },
    ProductivityDriver {
        key: DriverKey::MaterialDevelopment,
        hours: HourTriple::new(540.0, 810.0, 1080.0),
    },
    ProductivityDriver {
        key: DriverKey::FormulationAdjustment,
        hours: HourTriple::new(630.0, 945.0, 1260.0),
    },
];

/// Sum of mid-case hours across the productivity drivers.
pub fn total_productivity_hours_mid() -> f64 {
    PRODUCTIVITY_DRIVERS.iter().map(|d| d.hours.mid).sum()
}

/// Fractions of a spend figure credited as savings, per case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaseRatios {
    pub min: f64,
    pub mid: f64,
    pub good: f64,
}

impl CaseRatios {
    pub fn apply(&self, base: f64) -> CaseValues {
        CaseValues {
            min: base * self.min,
            mid: base * self.mid,
            good: base * self.good,
        }
    }
}

/// Ratios used by the spend-based direct drivers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectRatios {
    pub lab_reduction: CaseRatios,
    pub material_optimization: CaseRatios,
}

pub const DIRECT_RATIOS: DirectRatios = DirectRatios {
    lab_reduction: CaseRatios {
        min: 0.10,
        mid: 0.20,
        good: 0.30,
    },
    material_optimization: CaseRatios {
        min: 0.0001,
        mid: 0.001,
        good: 0.005,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_triples_are_ordered() {
        for driver in PRODUCTIVITY_DRIVERS {
            assert!(driver.hours.is_ordered(), "{} is not ordered", driver.key);
        }
    }

    #[test]
    fn test_total_productivity_hours_mid() {
        assert_eq!(total_productivity_hours_mid(), 3440.0);
    }

    #[test]
    fn test_driver_keys_are_unique() {
        let mut keys: Vec<&str> = DriverKey::ALL.iter().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), DriverKey::ALL.len());
    }

    #[test]
    fn test_direct_drivers_are_not_productivity() {
        assert!(DriverKey::Analytics.is_productivity());
        assert!(!DriverKey::LegacyReplacement.is_productivity());
        assert!(!DriverKey::LabExpenseReduction.is_productivity());
        assert!(!DriverKey::MaterialOptimization.is_productivity());
    }

    #[test]
    fn test_direct_ratios_are_ordered() {
        for ratios in [
            DIRECT_RATIOS.lab_reduction,
            DIRECT_RATIOS.material_optimization,
        ] {
            assert!(ratios.min <= ratios.mid && ratios.mid <= ratios.good);
        }
    }
}
