//! Sensitivity of the break-even quantity to price and variable cost

use serde::{Deserialize, Serialize};

use super::model::break_even_quantity;
use super::scenario::Scenario;

/// One sample of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Value of the swept input
    pub parameter_value: f64,
    /// Break-even quantity at that value
    pub break_even_quantity: f64,
}

/// Both sweeps for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityAnalysis {
    /// Price varied, variable cost fixed
    pub price: Vec<SensitivityPoint>,
    /// Variable cost varied, price fixed
    pub variable_cost: Vec<SensitivityPoint>,
}

impl SensitivityAnalysis {
    /// Samples per sweep
    pub const STEPS: usize = 10;
    /// Lower end of the band as a fraction of the base value
    pub const LOWER: f64 = 0.8;
    /// Width of the band as a fraction of the base value
    pub const SPAN: f64 = 0.4;

    /// Runs both sweeps
    #[must_use]
    pub fn analyze(scenario: &Scenario) -> Self {
        Self {
            price: price_sweep(scenario),
            variable_cost: variable_cost_sweep(scenario),
        }
    }
}

/// Values `base * (0.8 + 0.04 * i)` for `i` in `0..10`
fn band(base: f64) -> impl Iterator<Item = f64> {
    let increment = SensitivityAnalysis::SPAN / SensitivityAnalysis::STEPS as f64;
    (0..SensitivityAnalysis::STEPS)
        .map(move |i| base * (SensitivityAnalysis::LOWER + increment * i as f64))
}

/// Break-even quantity as price moves through `[0.8, 1.2)` of its value
#[must_use]
pub fn price_sweep(scenario: &Scenario) -> Vec<SensitivityPoint> {
    band(scenario.price_per_unit)
        .map(|price| SensitivityPoint {
            parameter_value: price,
            break_even_quantity: break_even_quantity(
                scenario.fixed_cost,
                scenario.variable_cost_per_unit,
                price,
            ),
        })
        .collect()
}

/// Break-even quantity as variable cost moves through `[0.8, 1.2)` of its value
#[must_use]
pub fn variable_cost_sweep(scenario: &Scenario) -> Vec<SensitivityPoint> {
    band(scenario.variable_cost_per_unit)
        .map(|cost| SensitivityPoint {
            parameter_value: cost,
            break_even_quantity: break_even_quantity(
                scenario.fixed_cost,
                cost,
                scenario.price_per_unit,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_price_sweep_values() {
        let sweep = price_sweep(&Scenario::default());
        assert_eq!(sweep.len(), 10);
        assert!(close(sweep[0].parameter_value, 1_600.0));
        assert!(close(sweep[9].parameter_value, 2_320.0));
        // 500000 / (1600 - 1000)
        assert!(close(sweep[0].break_even_quantity, 500_000.0 / 600.0));
    }

    #[test]
    fn test_price_sweep_decreasing() {
        let sweep = price_sweep(&Scenario::default());
        assert!(sweep
            .windows(2)
            .all(|w| w[1].break_even_quantity < w[0].break_even_quantity));
    }

    #[test]
    fn test_variable_cost_sweep_increasing() {
        let sweep = variable_cost_sweep(&Scenario::default());
        assert_eq!(sweep.len(), 10);
        assert!(close(sweep[0].parameter_value, 800.0));
        assert!(sweep
            .windows(2)
            .all(|w| w[1].break_even_quantity > w[0].break_even_quantity));
    }

    #[test]
    fn test_sweep_hits_degenerate_margin() {
        // Price band reaches below the variable cost
        let s = Scenario::new(100.0, 1_000.0, 1_100.0, 0);
        let sweep = price_sweep(&s);
        assert_eq!(sweep[0].break_even_quantity, 0.0);
        assert!(sweep[9].break_even_quantity > 0.0);
    }

    #[test]
    fn test_zero_base_value() {
        let s = Scenario::default().with_variable_cost(0.0);
        let sweep = variable_cost_sweep(&s);
        assert!(sweep.iter().all(|p| p.parameter_value == 0.0));
        assert!(sweep.iter().all(|p| close(p.break_even_quantity, 250.0)));
    }

    #[test]
    fn test_analyze_contains_both() {
        let a = SensitivityAnalysis::analyze(&Scenario::default());
        assert_eq!(a.price.len(), SensitivityAnalysis::STEPS);
        assert_eq!(a.variable_cost.len(), SensitivityAnalysis::STEPS);
    }
}
