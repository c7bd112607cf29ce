//! Break-even CLI library
//!
//! Argument definitions, configuration, output, and command handlers for
//! the `breakeven` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    ChartArgs, Cli, ColorArg, Commands, ConfigArgs, DataFormat, EvaluateArgs, ReportArgs,
    ReportFormatArg, ScenarioArgs, SensitivityArgs, TableArgs, TuiArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, OutputReporter};
