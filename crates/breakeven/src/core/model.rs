//! Linear-cost break-even model
//!
//! Closed-form and total: every input tuple evaluates, and a non-positive
//! unit margin yields a break-even quantity of `0` instead of a division.

use serde::{Deserialize, Serialize};

use super::scenario::Scenario;

/// Units needed for revenue to cover fixed plus variable costs.
///
/// Returns `0.0` when price does not exceed variable cost.
#[must_use]
pub fn break_even_quantity(
    fixed_cost: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
) -> f64 {
    let margin = price_per_unit - variable_cost_per_unit;
    if margin > 0.0 {
        fixed_cost / margin
    } else {
        0.0
    }
}

/// Stateless evaluator for [`Scenario`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEvenModel;

impl BreakEvenModel {
    /// Computes every derived value for a scenario
    #[must_use]
    pub fn evaluate(scenario: &Scenario) -> Evaluation {
        let quantity = f64::from(scenario.quantity_sold);
        let revenue = scenario.price_per_unit * quantity;
        let variable_costs = scenario.variable_cost_per_unit * quantity;
        let total_costs = variable_costs + scenario.fixed_cost;
        let unit_margin = scenario.unit_margin();
        let break_even_quantity = break_even_quantity(
            scenario.fixed_cost,
            scenario.variable_cost_per_unit,
            scenario.price_per_unit,
        );

        Evaluation {
            quantity_sold: scenario.quantity_sold,
            revenue,
            variable_costs,
            total_costs,
            profit: revenue - total_costs,
            unit_margin,
            break_even_quantity,
            break_even_revenue: break_even_quantity * scenario.price_per_unit,
            is_profitable: quantity >= break_even_quantity,
        }
    }
}

/// Derived values for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Quantity the evaluation was computed for
    pub quantity_sold: u32,
    /// `price * quantity`
    pub revenue: f64,
    /// `variable_cost * quantity`
    pub variable_costs: f64,
    /// `variable_costs + fixed_cost`
    pub total_costs: f64,
    /// `revenue - total_costs`
    pub profit: f64,
    /// `price - variable_cost`
    pub unit_margin: f64,
    /// `fixed_cost / unit_margin`, or `0` for a non-positive margin
    pub break_even_quantity: f64,
    /// Sales amount at the break-even quantity
    pub break_even_revenue: f64,
    /// `quantity_sold >= break_even_quantity`
    pub is_profitable: bool,
}

impl Evaluation {
    /// True when the margin is positive and the break-even point exists.
    ///
    /// Distinguishes the degenerate sentinel from a genuine zero break-even
    /// (zero fixed cost).
    #[must_use]
    pub fn has_break_even(&self) -> bool {
        self.unit_margin > 0.0
    }

    /// Whole units still missing before the break-even point
    #[must_use]
    pub fn units_to_break_even(&self) -> u32 {
        let needed = self.break_even_quantity.ceil() - f64::from(self.quantity_sold);
        if needed > 0.0 {
            needed.min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }

    /// Status message category for this evaluation
    #[must_use]
    pub const fn status(&self) -> ProfitStatus {
        if self.is_profitable {
            ProfitStatus::Profitable
        } else {
            ProfitStatus::BelowBreakEven
        }
    }
}

/// Conditional status shown under the metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitStatus {
    /// Quantity sold is below the break-even quantity
    BelowBreakEven,
    /// Break-even reached or exceeded
    Profitable,
}

impl ProfitStatus {
    /// Human-readable message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BelowBreakEven => "Break-even point not reached yet.",
            Self::Profitable => "Break-even point exceeded! The bakery is profitable.",
        }
    }

    /// True for the warning variant
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::BelowBreakEven)
    }
}

impl std::fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== break_even_quantity tests =====

    #[test]
    fn test_break_even_positive_margin() {
        assert_eq!(break_even_quantity(500_000.0, 1_000.0, 2_000.0), 500.0);
    }

    #[test]
    fn test_break_even_zero_margin() {
        assert_eq!(break_even_quantity(500_000.0, 1_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn test_break_even_negative_margin() {
        assert_eq!(break_even_quantity(500_000.0, 2_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn test_break_even_fractional() {
        let q = break_even_quantity(1_000.0, 0.0, 3.0);
        assert!((q - 333.333_333).abs() < 1e-3);
    }

    // ===== BreakEvenModel tests =====

    #[test]
    fn test_evaluate_default_scenario() {
        let e = BreakEvenModel::evaluate(&Scenario::default());
        assert_eq!(e.revenue, 2_000_000.0);
        assert_eq!(e.variable_costs, 1_000_000.0);
        assert_eq!(e.total_costs, 1_500_000.0);
        assert_eq!(e.profit, 500_000.0);
        assert_eq!(e.unit_margin, 1_000.0);
        assert_eq!(e.break_even_quantity, 500.0);
        assert_eq!(e.break_even_revenue, 1_000_000.0);
        assert!(e.is_profitable);
    }

    #[test]
    fn test_evaluate_degenerate_margin() {
        for fixed in [0.0, 1.0, 500_000.0, 9e9] {
            let s = Scenario::new(fixed, 1_000.0, 1_000.0, 10);
            assert_eq!(s.evaluate().break_even_quantity, 0.0);
            assert!(!s.evaluate().has_break_even());
        }
    }

    #[test]
    fn test_evaluate_zero_quantity() {
        let e = Scenario::default().with_quantity(0).evaluate();
        assert_eq!(e.revenue, 0.0);
        assert_eq!(e.variable_costs, 0.0);
        assert_eq!(e.profit, -500_000.0);
        assert!(!e.is_profitable);
    }

    #[test]
    fn test_evaluate_exactly_at_break_even() {
        let e = Scenario::default().with_quantity(500).evaluate();
        assert_eq!(e.profit, 0.0);
        assert!(e.is_profitable);
    }

    #[test]
    fn test_evaluate_degenerate_always_profitable_flag() {
        // Sentinel 0 makes every quantity satisfy quantity >= break-even
        let e = Scenario::new(500_000.0, 3_000.0, 2_000.0, 0).evaluate();
        assert!(e.is_profitable);
        assert!(e.profit < 0.0);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let s = Scenario::new(12_345.0, 7.5, 19.25, 321);
        assert_eq!(s.evaluate(), s.evaluate());
    }

    // ===== Evaluation helper tests =====

    #[test]
    fn test_units_to_break_even() {
        assert_eq!(Scenario::default().with_quantity(100).evaluate().units_to_break_even(), 400);
        assert_eq!(Scenario::default().evaluate().units_to_break_even(), 0);
    }

    #[test]
    fn test_units_to_break_even_rounds_up() {
        let e = Scenario::new(1_000.0, 0.0, 3.0, 0).evaluate();
        assert_eq!(e.units_to_break_even(), 334);
    }

    #[test]
    fn test_has_break_even_zero_fixed_cost() {
        let e = Scenario::new(0.0, 1.0, 2.0, 0).evaluate();
        assert_eq!(e.break_even_quantity, 0.0);
        assert!(e.has_break_even());
    }

    // ===== ProfitStatus tests =====

    #[test]
    fn test_status_below() {
        let e = Scenario::default().with_quantity(499).evaluate();
        assert_eq!(e.status(), ProfitStatus::BelowBreakEven);
        assert!(e.status().is_warning());
    }

    #[test]
    fn test_status_profitable() {
        let e = Scenario::default().evaluate();
        assert_eq!(e.status(), ProfitStatus::Profitable);
        assert!(!e.status().is_warning());
    }

    #[test]
    fn test_status_display() {
        assert!(format!("{}", ProfitStatus::BelowBreakEven).contains("not reached"));
        assert!(format!("{}", ProfitStatus::Profitable).contains("profitable"));
    }

    #[test]
    fn test_evaluation_serialize() {
        let json = serde_json::to_value(Scenario::default().evaluate()).unwrap();
        assert_eq!(json["break_even_quantity"], 500.0);
        assert_eq!(json["is_profitable"], true);
    }
}
