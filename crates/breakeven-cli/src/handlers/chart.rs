//! Chart command handler

use breakeven::chart::{ChartConfig, ChartRenderer};
use breakeven::core::Scenario;
use tracing::info;

use super::{checked_domain, resolve_scenario};
use crate::commands::ChartArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::OutputReporter;

/// Execute the chart command, writing the SVG document to stdout
pub fn execute_chart(
    config: &CliConfig,
    args: &ChartArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let svg = render_chart(&scenario, args)?;
    info!(bytes = svg.len(), width = args.width, height = args.height, "chart rendered");
    reporter.emit(&svg)
}

/// Builds the chart configuration from arguments and renders it
pub fn render_chart(scenario: &Scenario, args: &ChartArgs) -> CliResult<String> {
    let domain = checked_domain(args.max_quantity, args.step)?;
    let mut chart_config = ChartConfig::new(args.width, args.height);
    if let Some(title) = &args.title {
        chart_config = chart_config.with_title(title.as_str());
    }
    let svg = ChartRenderer::with_config(chart_config).render_with_domain(scenario, domain)?;
    Ok(svg)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_chart() {
        let svg = render_chart(&Scenario::default(), &ChartArgs::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("Revenue vs Total Costs"));
        assert!(svg.contains("BE: 500 units"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_custom_size_and_title() {
        let args = ChartArgs {
            width: 640,
            height: 400,
            title: Some("Croissant line".to_string()),
            ..ChartArgs::default()
        };
        let svg = render_chart(&Scenario::default(), &args).unwrap();
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"400\""));
        assert!(svg.contains("Croissant line"));
    }

    #[test]
    fn test_render_rejects_oversized_grid() {
        let args = ChartArgs {
            max_quantity: u32::MAX,
            step: 1,
            ..ChartArgs::default()
        };
        let err = render_chart(&Scenario::default(), &args).unwrap_err();
        assert!(matches!(err, crate::error::CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_render_break_even_beyond_domain_has_no_marker() {
        let scenario = Scenario::default().with_fixed_cost(10_000_000.0);
        let svg = render_chart(&scenario, &ChartArgs::default()).unwrap();
        assert!(!svg.contains("class=\"break-even\""));
    }
}
