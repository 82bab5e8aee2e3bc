use crate::formatting::{
    format_amount, format_months, format_percent, formatter_for, FormattingConfig,
    OutputFormatter, PlainFormatter,
};
use crate::report::Report;
use crate::roi::{Case, SavingsTable};
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, Table};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_savings_table(report)?;
        self.write_charts(report)?;
        self.write_realization(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# ROI Report ({})", report.locale.name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", report.metadata.roimap_version)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.narrative.executive_summary)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &Report) -> anyhow::Result<()> {
        let labels = report.locale.metrics;
        let summary = &report.summary;

        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for (label, value) in [
            (labels.savings, report.locale.money(summary.total_savings.mid)),
            (labels.profit, report.locale.money(summary.net_profit)),
            (labels.roi, format!("{}%", format_percent(summary.roi_percent))),
            (labels.payback, format_months(summary.payback_months)),
        ] {
            writeln!(self.writer, "| {label} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_savings_table(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", report.locale.table.table_title)?;
        writeln!(self.writer)?;
        let mut table = savings_table(report);
        table.load_preset(ASCII_MARKDOWN);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_charts(&mut self, report: &Report) -> anyhow::Result<()> {
        let locale = &report.locale;

        writeln!(self.writer, "## {}", locale.table.benefits_title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Case | Savings | Investment |")?;
        writeln!(self.writer, "|------|--------:|-----------:|")?;
        for bar in &report.charts.benefits_vs_costs {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                bar.case,
                locale.money(bar.savings),
                locale.money(bar.investment)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## {}", locale.table.composition_title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {} | Mid | Share |", locale.table.driver)?;
        writeln!(self.writer, "|---|---:|---:|")?;
        for slice in &report.charts.composition {
            writeln!(
                self.writer,
                "| {} | {} | {}% |",
                slice.label,
                locale.money(slice.mid_value),
                format_percent(slice.share * 100.0)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_realization(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Value Realization")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.narrative.usage_commentary)?;
        writeln!(self.writer)?;

        let mut table = projection_table(report);
        table.load_preset(ASCII_MARKDOWN);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

/// Human-readable report for a terminal or plain text file.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let locale = &report.locale;
        let summary = &report.summary;
        let f = &self.formatter;

        writeln!(
            self.writer,
            "{}",
            f.header(&format!("ROI Dashboard ({})", locale.name))
        )?;
        writeln!(self.writer)?;

        let profit = locale.money(summary.net_profit);
        let profit = if summary.net_profit < 0.0 {
            f.negative(&profit)
        } else {
            f.positive(&profit)
        };
        writeln!(
            self.writer,
            "  {:<28} {}",
            locale.metrics.savings,
            f.bold(&locale.money(summary.total_savings.mid))
        )?;
        writeln!(self.writer, "  {:<28} {}", locale.metrics.profit, profit)?;
        writeln!(
            self.writer,
            "  {:<28} {}%",
            locale.metrics.roi,
            format_percent(summary.roi_percent)
        )?;
        writeln!(
            self.writer,
            "  {:<28} {}",
            locale.metrics.payback,
            format_months(summary.payback_months)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.narrative.executive_summary)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", f.header(locale.table.table_title))?;
        let mut table = savings_table(report);
        table.load_preset(UTF8_FULL);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", f.header(locale.table.benefits_title))?;
        for bar in &report.charts.benefits_vs_costs {
            writeln!(
                self.writer,
                "  {:<5} {:>16} vs {:>14}",
                bar.case.label(),
                locale.money(bar.savings),
                locale.money(bar.investment)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", f.header("Value Realization"))?;
        writeln!(self.writer, "{}", report.narrative.usage_commentary)?;
        let mut table = projection_table(report);
        table.load_preset(UTF8_FULL);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer, "{}", f.dim(&format!("roimap {}", report.metadata.roimap_version)))?;
        self.writer.flush()?;
        Ok(())
    }
}

fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Driver rows with min/mid/good columns and a total row.
fn savings_table(report: &Report) -> Table {
    let locale = &report.locale;
    let savings: &SavingsTable = &report.savings;
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(locale.table.driver),
        Cell::new(locale.table.method),
        Cell::new(Case::Min.label()),
        Cell::new(Case::Mid.label()),
        Cell::new(Case::Good.label()),
    ]);

    for row in &savings.rows {
        let mut cells = vec![
            Cell::new(locale.driver_label(row.driver)),
            Cell::new(locale.methodology(&row.methodology)),
        ];
        cells.extend(
            Case::ALL
                .iter()
                .map(|&case| amount_cell(locale.money(row.cases.get(case)))),
        );
        table.add_row(cells);
    }

    let mut total = vec![Cell::new("Total"), Cell::new("")];
    total.extend(
        Case::ALL
            .iter()
            .map(|&case| amount_cell(locale.money(savings.total.get(case)))),
    );
    table.add_row(total);
    table
}

/// Cumulative projection per case for the whole year. Realized value is
/// filled in only for elapsed months.
fn projection_table(report: &Report) -> Table {
    let locale = &report.locale;
    let realization = &report.realization;
    let mut table = Table::new();
    table.set_header(vec!["Month", "Min", "Mid", "Good", "Realized"]);

    let months = realization.monthly_projection.mid.len();
    for month in 0..months {
        let mut cells = vec![Cell::new(month + 1)];
        cells.extend(Case::ALL.iter().map(|&case| {
            let value = realization
                .monthly_projection
                .get(case)
                .get(month)
                .copied()
                .unwrap_or_default();
            amount_cell(locale.money(value))
        }));
        let realized = realization
            .realized_path
            .get(month)
            .map(|&value| locale.money(value))
            .unwrap_or_default();
        cells.push(amount_cell(realized));
        table.add_row(cells);
    }
    table
}

/// Destination stream: a file when `output` is given, stdout otherwise.
fn destination(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer = destination(output)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal if output.is_some() => {
            Box::new(TerminalWriter::new(writer, Box::new(PlainFormatter)))
        }
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatter_for(formatting))),
    })
}
