//! Core break-even model
//!
//! Everything in here is a pure function of its inputs. Validation is a
//! separate gate: the model evaluates any tuple, the front-ends decide
//! which tuples to accept.

pub mod format;
pub mod model;
pub mod scenario;
pub mod sensitivity;
pub mod series;

pub use format::{format_currency, format_quantity, format_units};
pub use model::{break_even_quantity, BreakEvenModel, Evaluation, ProfitStatus};
pub use scenario::{Field, Scenario, ScenarioDefaults};
pub use sensitivity::{SensitivityAnalysis, SensitivityPoint};
pub use series::{ScenarioSeries, SeriesDomain, SeriesPoint};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for fallible library operations
pub type BreakEvenResult<T> = Result<T, BreakEvenError>;

/// Library error types
#[derive(Debug, Error)]
pub enum BreakEvenError {
    /// Input rejected by the validator
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Writing rendered output failed
    #[error("Render failed: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Reasons an input tuple is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// NaN or infinite amount
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Offending input
        field: Field,
        /// Rejected value
        value: f64,
    },

    /// Amount below zero
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Offending input
        field: Field,
        /// Rejected value
        value: f64,
    },

    /// Quantity beyond the slider range
    #[error("{} must be at most {max}, got {quantity}", Field::Quantity)]
    QuantityOutOfRange {
        /// Rejected quantity
        quantity: u32,
        /// Configured ceiling
        max: u32,
    },
}

/// Input gate for scenarios coming from users.
///
/// The reference behavior accepts anything; this validator rejects
/// non-finite amounts always, and negative amounts and out-of-range
/// quantities unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValidator {
    /// Accept negative monetary amounts
    pub allow_negative: bool,
    /// Ceiling for `quantity_sold`; `None` disables the check
    pub max_quantity: Option<u32>,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator {
    /// Strict validator: non-negative amounts, quantity within `0..=5000`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_negative: false,
            max_quantity: Some(ScenarioDefaults::MAX_QUANTITY),
        }
    }

    /// Validator that only rejects NaN and infinities
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_negative: true,
            max_quantity: None,
        }
    }

    /// Sets whether negative amounts are accepted
    #[must_use]
    pub const fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Sets the quantity ceiling
    #[must_use]
    pub const fn with_max_quantity(mut self, max: Option<u32>) -> Self {
        self.max_quantity = max;
        self
    }

    /// Checks a scenario, returning it unchanged when accepted
    pub fn validate(&self, scenario: Scenario) -> Result<Scenario, ValidationError> {
        self.check_amount(Field::FixedCost, scenario.fixed_cost)?;
        self.check_amount(Field::VariableCost, scenario.variable_cost_per_unit)?;
        self.check_amount(Field::Price, scenario.price_per_unit)?;

        if let Some(max) = self.max_quantity {
            if scenario.quantity_sold > max {
                return Err(ValidationError::QuantityOutOfRange {
                    quantity: scenario.quantity_sold,
                    max,
                });
            }
        }

        Ok(scenario)
    }

    fn check_amount(&self, field: Field, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field, value });
        }
        if !self.allow_negative && value < 0.0 {
            return Err(ValidationError::Negative { field, value });
        }
        Ok(())
    }
}
