//! Scenario inputs
//!
//! A scenario is the four scalars a user adjusts. It has no identity beyond
//! the current tuple and is rebuilt from input on every evaluation.

use serde::{Deserialize, Serialize};

use super::model::{BreakEvenModel, Evaluation};

/// Unit economics for one sales period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Cost incurred regardless of volume
    pub fixed_cost: f64,
    /// Cost incurred per unit sold
    pub variable_cost_per_unit: f64,
    /// Revenue per unit sold
    pub price_per_unit: f64,
    /// Units sold in the period
    pub quantity_sold: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        ScenarioDefaults::default().scenario()
    }
}

impl Scenario {
    /// Creates a scenario from its four inputs
    #[must_use]
    pub const fn new(
        fixed_cost: f64,
        variable_cost_per_unit: f64,
        price_per_unit: f64,
        quantity_sold: u32,
    ) -> Self {
        Self {
            fixed_cost,
            variable_cost_per_unit,
            price_per_unit,
            quantity_sold,
        }
    }

    /// Sets the fixed cost
    #[must_use]
    pub const fn with_fixed_cost(mut self, fixed_cost: f64) -> Self {
        self.fixed_cost = fixed_cost;
        self
    }

    /// Sets the variable cost per unit
    #[must_use]
    pub const fn with_variable_cost(mut self, variable_cost_per_unit: f64) -> Self {
        self.variable_cost_per_unit = variable_cost_per_unit;
        self
    }

    /// Sets the sale price per unit
    #[must_use]
    pub const fn with_price(mut self, price_per_unit: f64) -> Self {
        self.price_per_unit = price_per_unit;
        self
    }

    /// Sets the quantity sold
    #[must_use]
    pub const fn with_quantity(mut self, quantity_sold: u32) -> Self {
        self.quantity_sold = quantity_sold;
        self
    }

    /// Price minus variable cost
    #[must_use]
    pub fn unit_margin(&self) -> f64 {
        self.price_per_unit - self.variable_cost_per_unit
    }

    /// Runs the break-even model on this scenario
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        BreakEvenModel::evaluate(self)
    }
}

/// One of the four scenario inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// `fixed_cost`
    FixedCost,
    /// `variable_cost_per_unit`
    VariableCost,
    /// `price_per_unit`
    Price,
    /// `quantity_sold`
    Quantity,
}

impl Field {
    /// All inputs in display order
    pub const ALL: [Self; 4] = [Self::FixedCost, Self::VariableCost, Self::Price, Self::Quantity];

    /// Control label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FixedCost => "Monthly fixed cost",
            Self::VariableCost => "Variable cost per unit",
            Self::Price => "Sale price per unit",
            Self::Quantity => "Units sold per month",
        }
    }

    /// Next input, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FixedCost => Self::VariableCost,
            Self::VariableCost => Self::Price,
            Self::Price => Self::Quantity,
            Self::Quantity => Self::FixedCost,
        }
    }

    /// Previous input, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::FixedCost => Self::Quantity,
            Self::VariableCost => Self::FixedCost,
            Self::Price => Self::VariableCost,
            Self::Quantity => Self::Price,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Default inputs and control increments
///
/// Kept as an explicit value so front-ends can override them without
/// touching shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefaults {
    /// Starting fixed cost
    pub fixed_cost: f64,
    /// Starting variable cost per unit
    pub variable_cost_per_unit: f64,
    /// Starting price per unit
    pub price_per_unit: f64,
    /// Starting quantity sold
    pub quantity_sold: u32,
    /// Increment for the fixed cost control
    pub fixed_cost_step: f64,
    /// Increment for the variable cost control
    pub variable_cost_step: f64,
    /// Increment for the price control
    pub price_step: f64,
    /// Increment for the quantity slider
    pub quantity_step: u32,
    /// Upper bound of the quantity slider
    pub max_quantity: u32,
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        Self {
            fixed_cost: Self::FIXED_COST,
            variable_cost_per_unit: Self::VARIABLE_COST,
            price_per_unit: Self::PRICE,
            quantity_sold: Self::QUANTITY,
            fixed_cost_step: 10_000.0,
            variable_cost_step: 100.0,
            price_step: 100.0,
            quantity_step: 100,
            max_quantity: Self::MAX_QUANTITY,
        }
    }
}

impl ScenarioDefaults {
    /// Default monthly fixed cost
    pub const FIXED_COST: f64 = 500_000.0;
    /// Default variable cost per unit
    pub const VARIABLE_COST: f64 = 1_000.0;
    /// Default sale price per unit
    pub const PRICE: f64 = 2_000.0;
    /// Default quantity sold
    pub const QUANTITY: u32 = 1_000;
    /// Default slider ceiling, matching the chart domain
    pub const MAX_QUANTITY: u32 = 5_000;

    /// Builds the starting scenario
    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        Scenario::new(
            self.fixed_cost,
            self.variable_cost_per_unit,
            self.price_per_unit,
            self.quantity_sold,
        )
    }
}
