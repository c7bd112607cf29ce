//! Output formatting and status reporting

use breakeven::core::ProfitStatus;
use console::{style, Term};
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Machine or human output for data commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Writes command results to stdout and diagnostics to stderr
#[derive(Debug)]
pub struct OutputReporter {
    out: Term,
    err: Term,
    /// Whether to color the stderr status and warning lines
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for OutputReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl OutputReporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Reporter for a CLI configuration.
    ///
    /// Styled lines only go to stderr, so color follows stderr's terminal
    /// detection; stdout may be redirected independently.
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.color.should_color_stderr(), config.verbosity.is_quiet())
    }

    /// Writes a command result verbatim; never suppressed
    pub fn emit(&self, text: &str) -> CliResult<()> {
        self.out.write_str(text)?;
        if !text.ends_with('\n') {
            self.out.write_line("")?;
        }
        Ok(())
    }

    /// Prints the profitability verdict on stderr
    pub fn status(&self, status: ProfitStatus) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        self.err.write_line(&self.status_line(status))?;
        Ok(())
    }

    /// Verdict with a colored or plain prefix
    #[must_use]
    pub fn status_line(&self, status: ProfitStatus) -> String {
        let prefix = match (status.is_warning(), self.use_color) {
            (true, true) => style("⚠").yellow().bold().to_string(),
            (true, false) => "WARN".to_string(),
            (false, true) => style("✓").green().bold().to_string(),
            (false, false) => "OK".to_string(),
        };
        let message = if self.use_color {
            let styled = if status.is_warning() {
                style(status.message()).yellow()
            } else {
                style(status.message()).green()
            };
            styled.to_string()
        } else {
            status.message().to_string()
        };
        format!("{prefix} {message}")
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_reporter_flags() {
        let reporter = OutputReporter::new(false, true);
        assert!(!reporter.use_color);
        assert!(reporter.quiet);
    }

    #[test]
    fn test_from_config_follows_color_choice() {
        use crate::config::{ColorChoice, Verbosity};

        let config = CliConfig::new().with_color(ColorChoice::Always);
        assert!(OutputReporter::from_config(&config).use_color);

        let config = CliConfig::new()
            .with_color(ColorChoice::Never)
            .with_verbosity(Verbosity::Quiet);
        let reporter = OutputReporter::from_config(&config);
        assert!(!reporter.use_color);
        assert!(reporter.quiet);
    }

    #[test]
    fn test_from_config_auto_matches_stderr_detection() {
        let config = CliConfig::new();
        assert_eq!(
            OutputReporter::from_config(&config).use_color,
            config.color.should_color_stderr()
        );
    }

    #[test]
    fn test_status_line_plain() {
        let reporter = OutputReporter::new(false, false);
        assert_eq!(
            reporter.status_line(ProfitStatus::Profitable),
            "OK Break-even point exceeded! The bakery is profitable."
        );
        assert_eq!(
            reporter.status_line(ProfitStatus::BelowBreakEven),
            "WARN Break-even point not reached yet."
        );
    }

    #[test]
    fn test_status_line_colored_keeps_message() {
        let reporter = OutputReporter::new(true, false);
        let line = reporter.status_line(ProfitStatus::BelowBreakEven);
        assert!(line.contains("Break-even point not reached yet."));
    }

    #[test]
    fn test_quiet_messages_do_not_panic() {
        let reporter = OutputReporter::new(false, true);
        reporter.warning("hidden");
    }
}
