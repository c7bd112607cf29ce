//! Report command handler

use breakeven::core::Scenario;
use breakeven::report::{Report, ReportFormat};
use tracing::info;

use super::resolve_scenario;
use crate::commands::ReportArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputReporter;

/// Execute the report command
pub fn execute_report(
    config: &CliConfig,
    args: &ReportArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let format = ReportFormat::from(args.format);
    info!(?format, max_quantity = args.max_quantity, "generating report");
    reporter.emit(&render_report(scenario, args.max_quantity, format)?)
}

/// Renders the report for a validated scenario
pub fn render_report(
    scenario: Scenario,
    max_quantity: u32,
    format: ReportFormat,
) -> CliResult<String> {
    if max_quantity == 0 {
        return Err(CliError::invalid_argument("--max-quantity must be positive"));
    }
    Ok(Report::with_max_quantity(scenario, max_quantity).render(format)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let text = render_report(Scenario::default(), 5_000, ReportFormat::Text).unwrap();
        assert!(text.starts_with("Break-Even Report - Artisan Bakery"));
        assert!(text.contains("500.00"));
        assert!(text.contains("Break-even point exceeded! The bakery is profitable."));
    }

    #[test]
    fn test_markdown_report() {
        let md = render_report(Scenario::default(), 5_000, ReportFormat::Markdown).unwrap();
        assert!(md.starts_with("# Break-Even Report - Artisan Bakery"));
        assert!(md.contains("| Revenue | $2,000,000 |"));
        assert!(md.contains("| 5000 | 10,000,000 |"));
    }

    #[test]
    fn test_zero_max_quantity_rejected() {
        let err = render_report(Scenario::default(), 0, ReportFormat::Text).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }
}
