//! Config command handler

use breakeven::core::Scenario;
use serde::Serialize;

use super::{effective_validator, resolve_scenario};
use crate::commands::ConfigArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::OutputReporter;

#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    #[serde(flatten)]
    config: &'a CliConfig,
    scenario: Scenario,
}

/// Execute the config command
pub fn execute_config(
    config: &CliConfig,
    args: &ConfigArgs,
    reporter: &OutputReporter,
) -> CliResult<()> {
    let scenario = resolve_scenario(config, &args.scenario)?;
    let effective = config
        .clone()
        .with_validator(effective_validator(config, &args.scenario));
    reporter.emit(&render_config(&effective, scenario)?)
}

/// Configuration plus the starting scenario as pretty JSON
pub fn render_config(config: &CliConfig, scenario: Scenario) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(&EffectiveConfig { config, scenario })?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    #[test]
    fn test_render_default_config() {
        let json = render_config(&CliConfig::new(), Scenario::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verbosity"], "Normal");
        assert_eq!(value["color"], "Auto");
        assert_eq!(value["defaults"]["fixed_cost_step"], 10_000.0);
        assert_eq!(value["validator"]["allow_negative"], false);
        assert_eq!(value["validator"]["max_quantity"], 5_000);
        assert_eq!(value["scenario"]["price_per_unit"], 2_000.0);
    }

    #[test]
    fn test_render_reflects_overrides() {
        let config = CliConfig::new().with_verbosity(Verbosity::Debug);
        let json = render_config(&config, Scenario::default().with_quantity(7)).unwrap();
        assert!(json.contains("\"Debug\""));
        assert!(json.contains("\"quantity_sold\": 7"));
    }
}
