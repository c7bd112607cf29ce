//! Breakeven: command-line break-even calculator
//!
//! ## Usage
//!
//! ```bash
//! breakeven evaluate                          # Default bakery scenario
//! breakeven evaluate --price 1800 -f json     # Machine-readable metrics
//! breakeven chart > breakeven.svg             # Revenue vs. cost chart
//! breakeven report --format markdown          # Full report
//! breakeven tui                               # Interactive calculator
//! ```

use breakeven_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, OutputReporter,
    Verbosity,
};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(&config);
    debug!(?config, "configuration built");

    let reporter = OutputReporter::from_config(&config);

    match cli.command {
        Commands::Evaluate(args) => handlers::execute_evaluate(&config, &args, &reporter),
        Commands::Table(args) => handlers::execute_table(&config, &args, &reporter),
        Commands::Chart(args) => handlers::execute_chart(&config, &args, &reporter),
        Commands::Sensitivity(args) => handlers::execute_sensitivity(&config, &args, &reporter),
        Commands::Report(args) => handlers::execute_report(&config, &args, &reporter),
        Commands::Config(args) => handlers::execute_config(&config, &args, &reporter),
        #[cfg(feature = "tui")]
        Commands::Tui(args) => handlers::execute_tui(&config, &args),
        #[cfg(not(feature = "tui"))]
        Commands::Tui(_) => Err(breakeven_cli::CliError::terminal(
            "terminal UI not enabled. Rebuild with --features tui",
        )),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
