//! CLI command definitions using clap

use breakeven::core::{Scenario, ScenarioDefaults, SeriesDomain};
use breakeven::report::ReportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Break-even calculator for a small bakery
#[derive(Parser, Debug)]
#[command(name = "breakeven")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute revenue, costs, profit and the break-even point
    Evaluate(EvaluateArgs),

    /// Print revenue, total cost and profit across a quantity range
    Table(TableArgs),

    /// Render the revenue vs. total cost chart as SVG on stdout
    Chart(ChartArgs),

    /// Show how the break-even point moves with price and variable cost
    Sensitivity(SensitivityArgs),

    /// Print a full break-even report
    Report(ReportArgs),

    /// Interactive terminal calculator
    Tui(TuiArgs),

    /// Show the effective configuration as JSON
    Config(ConfigArgs),
}

/// Scenario inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Monthly fixed cost
    #[arg(long, default_value_t = ScenarioDefaults::FIXED_COST, allow_negative_numbers = true)]
    pub fixed_cost: f64,

    /// Variable cost per unit
    #[arg(
        long,
        default_value_t = ScenarioDefaults::VARIABLE_COST,
        allow_negative_numbers = true
    )]
    pub variable_cost: f64,

    /// Sale price per unit
    #[arg(long, default_value_t = ScenarioDefaults::PRICE, allow_negative_numbers = true)]
    pub price: f64,

    /// Units sold per month
    #[arg(long, default_value_t = ScenarioDefaults::QUANTITY)]
    pub quantity: u32,

    /// Accept negative monetary amounts
    #[arg(long)]
    pub allow_negative: bool,

    /// Accept quantities above the slider ceiling
    #[arg(long)]
    pub no_quantity_limit: bool,
}

impl Default for ScenarioArgs {
    fn default() -> Self {
        Self {
            fixed_cost: ScenarioDefaults::FIXED_COST,
            variable_cost: ScenarioDefaults::VARIABLE_COST,
            price: ScenarioDefaults::PRICE,
            quantity: ScenarioDefaults::QUANTITY,
            allow_negative: false,
            no_quantity_limit: false,
        }
    }
}

impl ScenarioArgs {
    /// The scenario as typed, before validation
    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        Scenario::new(self.fixed_cost, self.variable_cost, self.price, self.quantity)
    }
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Default)]
pub struct EvaluateArgs {
    /// Scenario inputs
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: DataFormat,
}

/// Arguments for the table command
#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Scenario inputs
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Largest quantity in the table
    #[arg(long, default_value_t = SeriesDomain::DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,

    /// Quantity increment between rows
    #[arg(
        long,
        default_value_t = SeriesDomain::DEFAULT_STEP,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub step: u32,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: DataFormat,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            scenario: ScenarioArgs::default(),
            max_quantity: SeriesDomain::DEFAULT_MAX_QUANTITY,
            step: SeriesDomain::DEFAULT_STEP,
            format: DataFormat::Text,
        }
    }
}

/// Arguments for the chart command
#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// Scenario inputs
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Document width in pixels
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(200..))]
    pub width: u32,

    /// Document height in pixels
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u32).range(200..))]
    pub height: u32,

    /// Largest quantity on the x axis
    #[arg(long, default_value_t = SeriesDomain::DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,

    /// Quantity increment between plotted points
    #[arg(
        long,
        default_value_t = SeriesDomain::DEFAULT_STEP,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub step: u32,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            scenario: ScenarioArgs::default(),
            width: 800,
            height: 500,
            max_quantity: SeriesDomain::DEFAULT_MAX_QUANTITY,
            step: SeriesDomain::DEFAULT_STEP,
            title: None,
        }
    }
}

/// Arguments for the sensitivity command
#[derive(Parser, Debug, Default)]
pub struct SensitivityArgs {
    /// Scenario inputs
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: DataFormat,
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Scenario inputs
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormatArg,

    /// Largest quantity in the summary table
    #[arg(long, default_value_t = SeriesDomain::DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            scenario: ScenarioArgs::default(),
            format: ReportFormatArg::Text,
            max_quantity: SeriesDomain::DEFAULT_MAX_QUANTITY,
        }
    }
}

/// Arguments for the tui command
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Starting scenario
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// Arguments for the config command
#[derive(Parser, Debug, Default)]
pub struct ConfigArgs {
    /// Scenario the configuration would start from
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// Data output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<DataFormat> for OutputFormat {
    fn from(arg: DataFormat) -> Self {
        match arg {
            DataFormat::Text => Self::Text,
            DataFormat::Json => Self::Json,
        }
    }
}

/// Report format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormatArg {
    /// Plain text
    #[default]
    Text,
    /// Markdown
    Markdown,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => Self::Text,
            ReportFormatArg::Markdown => Self::Markdown,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
