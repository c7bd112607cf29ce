//! Break-even calculator for a small bakery
//!
//! Given a monthly fixed cost, a variable cost per unit, a sale price per
//! unit, and a sales volume, computes revenue, total cost, profit, and the
//! break-even quantity, and renders them as text, SVG, or a terminal UI.
//!
//! # Example
//!
//! ```rust
//! use breakeven::prelude::*;
//!
//! let scenario = Scenario::default();
//! let eval = scenario.evaluate();
//! assert_eq!(eval.break_even_quantity, 500.0);
//! assert_eq!(format_currency(eval.profit), "$500,000");
//!
//! // Chart points: 0..=5000 in steps of 100
//! assert_eq!(ScenarioSeries::new(&scenario).count(), 51);
//!
//! // Price equal to variable cost: no break-even, sentinel 0
//! let flat = scenario.with_price(1_000.0);
//! assert_eq!(flat.evaluate().break_even_quantity, 0.0);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod chart;
pub mod core;
pub mod report;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chart::{ChartConfig, ChartMargins, ChartRenderer};
    pub use crate::core::{
        break_even_quantity, format_currency, format_quantity, format_units, BreakEvenError,
        BreakEvenModel, BreakEvenResult, Evaluation, Field, InputValidator, ProfitStatus,
        Scenario, ScenarioDefaults, ScenarioSeries, SensitivityAnalysis, SensitivityPoint,
        SeriesDomain, SeriesPoint, ValidationError,
    };
    pub use crate::report::{Report, ReportFormat};

    #[cfg(feature = "tui")]
    pub use crate::tui::{BreakEvenApp, InputHandler, KeyAction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = BreakEvenModel::evaluate(&Scenario::default());
        assert!(eval.is_profitable);
    }

    #[test]
    fn test_documented_scenario() {
        let e = Scenario::new(500_000.0, 1_000.0, 2_000.0, 1_000).evaluate();
        assert_eq!(e.revenue, 2_000_000.0);
        assert_eq!(e.total_costs, 1_500_000.0);
        assert_eq!(e.profit, 500_000.0);
        assert_eq!(e.break_even_quantity, 500.0);
        assert!(e.is_profitable);
    }

    #[test]
    fn test_documented_degenerate_scenario() {
        for fixed in [0.0, 123.0, 500_000.0] {
            let e = Scenario::new(fixed, 1_000.0, 1_000.0, 1_000).evaluate();
            assert_eq!(e.break_even_quantity, 0.0);
        }
    }

    #[test]
    fn test_end_to_end_outputs() {
        let s = Scenario::default();
        let svg = ChartRenderer::new().render(&s).unwrap();
        let text = Report::new(s).render(ReportFormat::Text).unwrap();
        assert!(svg.contains("BE: 500 units"));
        assert!(text.contains("500.00"));
    }
}
