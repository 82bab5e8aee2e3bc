use crate::formatting::format_amount;
use crate::locale::Locale;
use crate::roi::{DriverKey, DIRECT_RATIOS, PRODUCTIVITY_DRIVERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

fn hours_cell(hours: f64) -> Cell {
    Cell::new(format_amount(hours)).set_alignment(CellAlignment::Right)
}

fn ratio_text(min: f64, mid: f64, good: f64) -> String {
    format!("{}% / {}% / {}%", min * 100.0, mid * 100.0, good * 100.0)
}

/// How a directly priced driver is valued.
fn direct_basis(key: DriverKey) -> String {
    let lab = DIRECT_RATIOS.lab_reduction;
    let material = DIRECT_RATIOS.material_optimization;
    match key {
        DriverKey::LegacyReplacement => "legacy tool cost".to_string(),
        DriverKey::LabExpenseReduction => {
            format!("{} of lab spend", ratio_text(lab.min, lab.mid, lab.good))
        }
        DriverKey::MaterialOptimization => format!(
            "{} of material spend",
            ratio_text(material.min, material.mid, material.good)
        ),
        _ => String::new(),
    }
}

/// Pure function: the driver catalog as a table.
pub fn render_drivers(locale: &Locale) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", locale.table.driver, "Min h", "Mid h", "Good h"]);

    for driver in &PRODUCTIVITY_DRIVERS {
        table.add_row(vec![
            Cell::new(driver.key.as_str()),
            Cell::new(locale.driver_label(driver.key)),
            hours_cell(driver.hours.min),
            hours_cell(driver.hours.mid),
            hours_cell(driver.hours.good),
        ]);
    }

    let mut direct_table = Table::new();
    direct_table.load_preset(UTF8_FULL);
    direct_table.set_header(vec!["Key", locale.table.driver, "Basis"]);
    for key in DriverKey::ALL.into_iter().filter(|key| !key.is_productivity()) {
        direct_table.add_row(vec![
            Cell::new(key.as_str()),
            Cell::new(locale.driver_label(key)),
            Cell::new(direct_basis(key)),
        ]);
    }

    format!("{table}\n{direct_table}")
}

pub fn list_drivers(locale: &Locale) {
    println!("{}", render_drivers(locale));
}
