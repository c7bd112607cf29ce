//! Sensitivity command handler

use breakeven::core::{
    format_currency, format_quantity, Scenario, SensitivityAnalysis, SensitivityPoint,
};
use tracing::info;

use super::resolve_scenario;
use crate::commands::SensitivityArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, OutputReporter};

/// Execute the sensitivity command
pub fn execute_sensitivity(
    config: &CliConfig,
    args: &SensitivityArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let analysis = SensitivityAnalysis::analyze(&scenario);
    info!(
        price_points = analysis.price.len(),
        cost_points = analysis.variable_cost.len(),
        "sensitivity sweeps computed"
    );
    reporter.emit(&render_sensitivity(&scenario, &analysis, args.format.into())?)
}

/// Renders both sweeps
pub fn render_sensitivity(
    scenario: &Scenario,
    analysis: &SensitivityAnalysis,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
        OutputFormat::Text => {
            let mut out = String::new();
            write_sweep(
                &mut out,
                &format!(
                    "Break-even vs sale price (variable cost {})",
                    format_currency(scenario.variable_cost_per_unit)
                ),
                "Price",
                &analysis.price,
            );
            out.push('\n');
            write_sweep(
                &mut out,
                &format!(
                    "Break-even vs variable cost (sale price {})",
                    format_currency(scenario.price_per_unit)
                ),
                "Variable cost",
                &analysis.variable_cost,
            );
            Ok(out)
        }
    }
}

fn write_sweep(out: &mut String, title: &str, column: &str, points: &[SensitivityPoint]) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("{column:>16}  {:>16}\n", "Break-even units"));
    for p in points {
        out.push_str(&format!(
            "{:>16}  {:>16}\n",
            format_currency(p.parameter_value),
            format_quantity(p.break_even_quantity)
        ));
    }
}
