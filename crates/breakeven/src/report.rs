//! Printable break-even report
//!
//! Inputs, the break-even point, the current month's results, and a coarse
//! summary table, as plain text or Markdown.

use std::fmt::Write as FmtWrite;

use serde::{Deserialize, Serialize};

use crate::core::{
    format_currency, format_quantity, format_units, BreakEvenResult, Evaluation, Field, Scenario,
    ScenarioSeries, SeriesDomain, SeriesPoint,
};

/// Report title
pub const REPORT_TITLE: &str = "Break-Even Report - Artisan Bakery";

/// Output flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// GitHub-flavoured Markdown
    Markdown,
}

/// Report over one scenario
#[derive(Debug, Clone)]
pub struct Report {
    scenario: Scenario,
    evaluation: Evaluation,
    table: Vec<SeriesPoint>,
}

impl Report {
    /// Rows in the summary table after the zero row
    pub const TABLE_ROWS: u32 = 5;

    /// Builds a report with the table spanning `0..=5000`
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self::with_max_quantity(scenario, SeriesDomain::DEFAULT_MAX_QUANTITY)
    }

    /// Builds a report with the table spanning `0..=max_quantity`
    #[must_use]
    pub fn with_max_quantity(scenario: Scenario, max_quantity: u32) -> Self {
        let domain = SeriesDomain::summary(max_quantity, Self::TABLE_ROWS);
        Self {
            scenario,
            evaluation: scenario.evaluate(),
            table: ScenarioSeries::with_domain(&scenario, domain).collect(),
        }
    }

    /// The evaluated scenario
    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Summary table rows
    #[must_use]
    pub fn table(&self) -> &[SeriesPoint] {
        &self.table
    }

    /// Break-even line, two decimals or an explanation for the sentinel
    fn break_even_text(&self) -> String {
        if self.evaluation.has_break_even() {
            format!("{:.2}", self.evaluation.break_even_quantity)
        } else {
            "not reachable (price does not exceed variable cost)".to_string()
        }
    }

    /// Units missing before break-even, when below it
    fn shortfall(&self) -> Option<u32> {
        (!self.evaluation.is_profitable).then(|| self.evaluation.units_to_break_even())
    }

    /// Renders in the requested format
    pub fn render(&self, format: ReportFormat) -> BreakEvenResult<String> {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Markdown => self.render_markdown(),
        }
    }

    fn render_text(&self) -> BreakEvenResult<String> {
        let s = &self.scenario;
        let e = &self.evaluation;
        let mut out = String::new();

        writeln!(out, "{REPORT_TITLE}")?;
        writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(out)?;
        writeln!(out, "{:<28}{}", format!("{}:", Field::FixedCost), format_currency(s.fixed_cost))?;
        writeln!(
            out,
            "{:<28}{}",
            format!("{}:", Field::VariableCost),
            format_currency(s.variable_cost_per_unit)
        )?;
        writeln!(out, "{:<28}{}", format!("{}:", Field::Price), format_currency(s.price_per_unit))?;
        writeln!(out)?;
        writeln!(out, "{:<28}{}", "Break-even point in units:", self.break_even_text())?;
        writeln!(out)?;
        writeln!(out, "Results for {} units sold", format_quantity(f64::from(s.quantity_sold)))?;
        writeln!(out, "  {:<16}{}", "Revenue:", format_currency(e.revenue))?;
        writeln!(out, "  {:<16}{}", "Total costs:", format_currency(e.total_costs))?;
        writeln!(out, "  {:<16}{}", "Profit:", format_currency(e.profit))?;
        writeln!(out, "  {}", e.status())?;
        if let Some(missing) = self.shortfall() {
            writeln!(out, "  {:<16}{}", "Still needed:", format_units(f64::from(missing)))?;
        }
        writeln!(out)?;
        writeln!(out, "Summary of revenue, costs and profit")?;
        writeln!(
            out,
            "{:>10}  {:>16}  {:>16}  {:>16}",
            "Quantity", "Revenue ($)", "Total cost ($)", "Profit ($)"
        )?;
        for row in &self.table {
            writeln!(
                out,
                "{:>10}  {:>16}  {:>16}  {:>16}",
                row.quantity,
                format_quantity(row.revenue),
                format_quantity(row.total_cost),
                format_quantity(row.profit)
            )?;
        }
        Ok(out)
    }

    fn render_markdown(&self) -> BreakEvenResult<String> {
        let s = &self.scenario;
        let e = &self.evaluation;
        let mut out = String::new();

        writeln!(out, "# {REPORT_TITLE}")?;
        writeln!(out)?;
        writeln!(out, "- **{}:** {}", Field::FixedCost, format_currency(s.fixed_cost))?;
        writeln!(
            out,
            "- **{}:** {}",
            Field::VariableCost,
            format_currency(s.variable_cost_per_unit)
        )?;
        writeln!(out, "- **{}:** {}", Field::Price, format_currency(s.price_per_unit))?;
        writeln!(out)?;
        writeln!(out, "**Break-even point in units:** {}", self.break_even_text())?;
        writeln!(out)?;
        writeln!(
            out,
            "## Results for {} units sold",
            format_quantity(f64::from(s.quantity_sold))
        )?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|---|---:|")?;
        writeln!(out, "| Revenue | {} |", format_currency(e.revenue))?;
        writeln!(out, "| Total costs | {} |", format_currency(e.total_costs))?;
        writeln!(out, "| Profit | {} |", format_currency(e.profit))?;
        if let Some(missing) = self.shortfall() {
            writeln!(out, "| Units still needed | {} |", format_quantity(f64::from(missing)))?;
        }
        writeln!(out)?;
        let marker = if e.status().is_warning() { "> **Warning:**" } else { "> **OK:**" };
        writeln!(out, "{marker} {}", e.status())?;
        writeln!(out)?;
        writeln!(out, "## Summary of revenue, costs and profit")?;
        writeln!(out)?;
        writeln!(out, "| Quantity | Revenue ($) | Total cost ($) | Profit ($) |")?;
        writeln!(out, "|---:|---:|---:|---:|")?;
        for row in &self.table {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                row.quantity,
                format_quantity(row.revenue),
                format_quantity(row.total_cost),
                format_quantity(row.profit)
            )?;
        }
        Ok(out)
    }
}
