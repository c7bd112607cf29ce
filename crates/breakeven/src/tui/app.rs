//! TUI application state
//!
//! Every input change goes through [`BreakEvenApp::apply`], which
//! recomputes the evaluation and the chart series before returning.

use tracing::{debug, warn};

use super::input::KeyAction;
use crate::core::{
    Evaluation, Field, InputValidator, Scenario, ScenarioDefaults, ScenarioSeries, SeriesPoint,
    ValidationError,
};

/// Steps applied by PageUp/PageDown
pub const LARGE_STEP: i32 = 10;

/// Break-even calculator state
#[derive(Debug)]
pub struct BreakEvenApp {
    /// Current inputs
    scenario: Scenario,
    /// Defaults and control increments
    defaults: ScenarioDefaults,
    /// Gate for directly entered scenarios
    validator: InputValidator,
    /// Input under the cursor
    focus: Field,
    /// Model output for `scenario`
    evaluation: Evaluation,
    /// Chart points for `scenario`
    series: Vec<SeriesPoint>,
    /// Last rejected input, cleared by the next accepted change
    error: Option<ValidationError>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for BreakEvenApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakEvenApp {
    /// Creates an app with the default scenario
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ScenarioDefaults::default())
    }

    /// Creates an app with custom defaults
    #[must_use]
    pub fn with_defaults(defaults: ScenarioDefaults) -> Self {
        let scenario = defaults.scenario();
        let validator = InputValidator::new().with_max_quantity(Some(defaults.max_quantity));
        Self {
            evaluation: scenario.evaluate(),
            series: ScenarioSeries::new(&scenario).collect(),
            scenario,
            defaults,
            validator,
            focus: Field::FixedCost,
            error: None,
            should_quit: false,
        }
    }

    /// Replaces the input validator
    #[must_use]
    pub fn with_validator(mut self, validator: InputValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Current inputs
    #[must_use]
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Model output for the current inputs
    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Chart points for the current inputs
    #[must_use]
    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    /// Defaults in use
    #[must_use]
    pub const fn defaults(&self) -> &ScenarioDefaults {
        &self.defaults
    }

    /// Input under the cursor
    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// Last rejected input
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves focus to the next input
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous input
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replaces the whole scenario after validation
    pub fn set_scenario(&mut self, scenario: Scenario) -> Result<(), ValidationError> {
        match self.validator.validate(scenario) {
            Ok(scenario) => {
                self.scenario = scenario;
                self.error = None;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "rejected scenario");
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Moves the focused input by `steps` increments.
    ///
    /// Amounts stop at zero; the quantity slider stays within
    /// `0..=max_quantity`.
    pub fn adjust(&mut self, steps: i32) {
        self.adjust_field(self.focus, steps);
    }

    /// Moves one input by `steps` increments
    pub fn adjust_field(&mut self, field: Field, steps: i32) {
        let d = &self.defaults;
        let s = &mut self.scenario;
        let steps_f = f64::from(steps);
        match field {
            Field::FixedCost => {
                s.fixed_cost = (s.fixed_cost + steps_f * d.fixed_cost_step).max(0.0);
            }
            Field::VariableCost => {
                s.variable_cost_per_unit =
                    (s.variable_cost_per_unit + steps_f * d.variable_cost_step).max(0.0);
            }
            Field::Price => s.price_per_unit = (s.price_per_unit + steps_f * d.price_step).max(0.0),
            Field::Quantity => {
                let next =
                    i64::from(s.quantity_sold) + i64::from(steps) * i64::from(d.quantity_step);
                s.quantity_sold = next.clamp(0, i64::from(d.max_quantity)) as u32;
            }
        }
        self.error = None;
        self.recompute();
    }

    /// Restores the default scenario
    pub fn reset(&mut self) {
        self.scenario = self.defaults.scenario();
        self.error = None;
        self.recompute();
    }

    /// Handles one key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::FocusNext => self.focus_next(),
            KeyAction::FocusPrevious => self.focus_previous(),
            KeyAction::Increase => self.adjust(1),
            KeyAction::Decrease => self.adjust(-1),
            KeyAction::IncreaseLarge => self.adjust(LARGE_STEP),
            KeyAction::DecreaseLarge => self.adjust(-LARGE_STEP),
            KeyAction::Reset => self.reset(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Re-runs the model and the chart series
    fn recompute(&mut self) {
        self.evaluation = self.scenario.evaluate();
        self.series = ScenarioSeries::new(&self.scenario).collect();
        debug!(
            revenue = self.evaluation.revenue,
            profit = self.evaluation.profit,
            break_even = self.evaluation.break_even_quantity,
            "recomputed scenario"
        );
    }

    /// Display value of one input
    #[must_use]
    pub fn field_display(&self, field: Field) -> String {
        use crate::core::{format_currency, format_quantity};
        match field {
            Field::FixedCost => format_currency(self.scenario.fixed_cost),
            Field::VariableCost => format_currency(self.scenario.variable_cost_per_unit),
            Field::Price => format_currency(self.scenario.price_per_unit),
            Field::Quantity => format!(
                "{} / {}",
                format_quantity(f64::from(self.scenario.quantity_sold)),
                format_quantity(f64::from(self.defaults.max_quantity))
            ),
        }
    }

    /// Fraction of the slider range covered by the quantity sold
    #[must_use]
    pub fn quantity_ratio(&self) -> f64 {
        if self.defaults.max_quantity == 0 {
            return 0.0;
        }
        (f64::from(self.scenario.quantity_sold) / f64::from(self.defaults.max_quantity)).min(1.0)
    }
}
