//! Tui command handler

use std::io::IsTerminal;

use breakeven::core::{Scenario, ScenarioDefaults};
use breakeven::tui::{self, BreakEvenApp};
use tracing::info;

use super::{effective_validator, resolve_scenario};
use crate::commands::TuiArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Execute the tui command
pub fn execute_tui(config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    if !std::io::stdout().is_terminal() {
        return Err(CliError::terminal("stdout is not a terminal"));
    }
    let app = build_app(config, args)?;
    info!(scenario = ?app.scenario(), "launching terminal UI");
    tui::run(app).map_err(|e| CliError::terminal(e.to_string()))
}

/// App seeded with the command-line scenario; `r` returns to it
pub fn build_app(config: &CliConfig, args: &TuiArgs) -> CliResult<BreakEvenApp> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let validator = effective_validator(config, &args.scenario);
    let defaults = seeded_defaults(&config.defaults, scenario);
    Ok(BreakEvenApp::with_defaults(defaults).with_validator(validator))
}

fn seeded_defaults(base: &ScenarioDefaults, scenario: Scenario) -> ScenarioDefaults {
    ScenarioDefaults {
        fixed_cost: scenario.fixed_cost,
        variable_cost_per_unit: scenario.variable_cost_per_unit,
        price_per_unit: scenario.price_per_unit,
        quantity_sold: scenario.quantity_sold,
        ..base.clone()
    }
}
