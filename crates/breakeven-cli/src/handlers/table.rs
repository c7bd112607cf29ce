//! Table command handler

use breakeven::core::{format_currency, Scenario, ScenarioSeries, SeriesDomain, SeriesPoint};
use tracing::info;

use super::{checked_domain, resolve_scenario};
use crate::commands::TableArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, OutputReporter};

/// Execute the table command
pub fn execute_table(
    config: &CliConfig,
    args: &TableArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let domain = checked_domain(args.max_quantity, args.step)?;
    info!(rows = domain.len(), "rendering series table");
    reporter.emit(&render_table(&scenario, domain, args.format.into())?)
}

/// Renders the series over `domain`
pub fn render_table(
    scenario: &Scenario,
    domain: SeriesDomain,
    format: OutputFormat,
) -> CliResult<String> {
    let points: Vec<SeriesPoint> = ScenarioSeries::with_domain(scenario, domain).collect();
    match format {
        OutputFormat::Text => Ok(render_text(&points)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&points)?),
    }
}

fn render_text(points: &[SeriesPoint]) -> String {
    let mut out = format!(
        "{:>10}  {:>16}  {:>16}  {:>16}\n",
        "Quantity", "Revenue", "Total cost", "Profit"
    );
    for p in points {
        out.push_str(&format!(
            "{:>10}  {:>16}  {:>16}  {:>16}\n",
            p.quantity,
            format_currency(p.revenue),
            format_currency(p.total_cost),
            format_currency(p.profit)
        ));
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_header_and_51_rows() {
        let text =
            render_table(&Scenario::default(), SeriesDomain::default(), OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 52);
        assert!(text.lines().next().unwrap().contains("Quantity"));
    }

    #[test]
    fn test_table_rows_match_model() {
        let domain = SeriesDomain::new(1_000, 500);
        let text = render_table(&Scenario::default(), domain, OutputFormat::Text).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("$-500,000"));
        assert!(rows[1].trim_start().starts_with("500"));
        assert!(rows[1].trim_end().ends_with("$0"));
        assert!(rows[2].contains("$2,000,000"));
    }

    #[test]
    fn test_oversized_grid_is_rejected_before_rendering() {
        let args = TableArgs {
            max_quantity: u32::MAX,
            step: 1,
            ..TableArgs::default()
        };
        let err = execute_table(&CliConfig::new(), &args, &OutputReporter::new(false, true))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_table_json() {
        let domain = SeriesDomain::new(200, 100);
        let json = render_table(&Scenario::default(), domain, OutputFormat::Json).unwrap();
        let points: Vec<SeriesPoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].quantity, 200);
        assert!((points[2].revenue - 400_000.0).abs() < f64::EPSILON);
    }
}
