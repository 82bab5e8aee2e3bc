//! Terminal styling and number formatting for reports.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// No colors, regardless of environment
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn positive(&self, text: &str) -> String;
    fn negative(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn positive(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn negative(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn positive(&self, text: &str) -> String {
        text.to_string()
    }

    fn negative(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the formatter for a formatting config.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    match config.color {
        ColorMode::Never => Box::new(PlainFormatter),
        _ => Box::new(ColoredFormatter::new(config)),
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Whole-unit amount with thousands separators, e.g. `1,234,567`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Count-like quantity that may be fractional, e.g. `2.5` FTE.
///
/// Whole values group like [`format_amount`]; others keep up to two decimals.
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return format_amount(value);
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((whole, frac)) => match whole.parse::<f64>() {
            Ok(w) if w.abs() >= 1_000.0 => format!("{}.{frac}", format_amount(w)),
            _ => trimmed.to_string(),
        },
        None => format_amount(value),
    }
}

/// Percent value with no decimals and a thousands separator, e.g. `1,234`.
pub fn format_percent(value: f64) -> String {
    format_amount(value)
}

/// Months with one decimal, e.g. `1.7`.
pub fn format_months(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "0.0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(419_200.0), "419,200");
        assert_eq!(format_amount(553_344_000.0), "553,344,000");
    }

    #[test]
    fn test_format_amount_rounds_and_signs() {
        assert_eq!(format_amount(1_234.5), "1,235");
        assert_eq!(format_amount(-60_000.0), "-60,000");
        assert_eq!(format_amount(-0.2), "0");
        assert_eq!(format_amount(f64::NAN), "0");
    }

    #[test]
    fn test_format_quantity_keeps_fractions() {
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(1_500.75), "1,500.75");
        assert_eq!(format_quantity(3.999), "4");
    }

    #[test]
    fn test_format_months_one_decimal() {
        assert_eq!(format_months(1.717557), "1.7");
        assert_eq!(format_months(0.0), "0.0");
    }

    #[test]
    fn test_plain_formatter_is_identity() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.header("ROI"), "ROI");
        assert_eq!(formatter.negative("-1"), "-1");
    }

    #[test]
    fn test_colored_formatter_respects_never() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.bold("x"), "x");
    }
}
