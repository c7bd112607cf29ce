//! Evaluate command handler

use breakeven::core::{
    format_currency, format_units, BreakEvenModel, Evaluation, ProfitStatus, Scenario,
};
use serde::Serialize;
use tracing::info;

use super::resolve_scenario;
use crate::commands::EvaluateArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, OutputReporter};

/// Printed when the unit margin leaves no break-even point
pub const NO_BREAK_EVEN_WARNING: &str =
    "Sale price does not exceed variable cost; the break-even point is reported as 0.";

#[derive(Debug, Serialize)]
struct EvaluationOutput<'a> {
    scenario: &'a Scenario,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    status: ProfitStatus,
    message: &'static str,
}

/// Execute the evaluate command
pub fn execute_evaluate(
    config: &CliConfig,
    args: &EvaluateArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let evaluation = BreakEvenModel::evaluate(&scenario);
    info!(
        profit = evaluation.profit,
        break_even = evaluation.break_even_quantity,
        "scenario evaluated"
    );

    let format = OutputFormat::from(args.format);
    reporter.emit(&render_evaluation(&scenario, &evaluation, format)?)?;

    if format == OutputFormat::Text {
        if !evaluation.has_break_even() {
            reporter.warning(NO_BREAK_EVEN_WARNING);
        }
        reporter.status(evaluation.status())?;
    }
    Ok(())
}

/// Renders the four headline metrics
pub fn render_evaluation(
    scenario: &Scenario,
    evaluation: &Evaluation,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(evaluation)),
        OutputFormat::Json => {
            let status = evaluation.status();
            let output = EvaluationOutput {
                scenario,
                evaluation,
                status,
                message: status.message(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

fn render_text(evaluation: &Evaluation) -> String {
    let rows = [
        ("Revenue:", format_currency(evaluation.revenue)),
        ("Total costs:", format_currency(evaluation.total_costs)),
        ("Profit:", format_currency(evaluation.profit)),
        ("Break-even point:", format_units(evaluation.break_even_quantity)),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<20}{value}\n"));
    }
    out
}
