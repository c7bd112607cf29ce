//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module pairs a pure `render_*` function, which builds the
//! command output as a string, with an `execute_*` function that resolves
//! the scenario and writes the result.

pub mod chart;
pub mod config;
pub mod evaluate;
pub mod report;
pub mod sensitivity;
pub mod table;
#[cfg(feature = "tui")]
pub mod tui;

pub use chart::{execute_chart, render_chart};
pub use config::{execute_config, render_config};
pub use evaluate::{execute_evaluate, render_evaluation};
pub use report::{execute_report, render_report};
pub use sensitivity::{execute_sensitivity, render_sensitivity};
pub use table::{execute_table, render_table};
#[cfg(feature = "tui")]
pub use tui::execute_tui;

use breakeven::core::{InputValidator, Scenario, SeriesDomain};
use tracing::debug;

use crate::commands::ScenarioArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Most grid points a table or chart will evaluate
pub const MAX_SERIES_POINTS: usize = 100_000;

/// Validator after applying per-command overrides
#[must_use]
pub fn effective_validator(config: &CliConfig, args: &ScenarioArgs) -> InputValidator {
    let mut validator = config.validator.clone();
    if args.allow_negative {
        validator = validator.with_allow_negative(true);
    }
    if args.no_quantity_limit {
        validator = validator.with_max_quantity(None);
    }
    validator
}

/// Validates the scenario typed on the command line
pub fn resolve_scenario(config: &CliConfig, args: &ScenarioArgs) -> CliResult<Scenario> {
    let scenario = effective_validator(config, args).validate(args.scenario())?;
    debug!(?scenario, "scenario accepted");
    Ok(scenario)
}

/// Builds the series grid for `--max-quantity`/`--step`, rejecting grids
/// larger than [`MAX_SERIES_POINTS`]
pub fn checked_domain(max_quantity: u32, step: u32) -> CliResult<SeriesDomain> {
    let domain = SeriesDomain::new(max_quantity, step);
    if domain.len() > MAX_SERIES_POINTS {
        return Err(CliError::invalid_argument(format!(
            "--max-quantity {max_quantity} with --step {} gives {} points (limit {MAX_SERIES_POINTS}); raise --step",
            domain.step,
            domain.len()
        )));
    }
    Ok(domain)
}
