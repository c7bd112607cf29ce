//! Chart data: a quantity sweep over fixed unit economics

use serde::{Deserialize, Serialize};

use super::scenario::Scenario;

/// Quantity grid the series sweeps: `0..=max_quantity` by `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDomain {
    /// Largest quantity on the grid (inclusive when a multiple of `step`)
    pub max_quantity: u32,
    /// Distance between consecutive quantities
    pub step: u32,
}

impl Default for SeriesDomain {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_QUANTITY, Self::DEFAULT_STEP)
    }
}

impl SeriesDomain {
    /// Default upper bound of the chart
    pub const DEFAULT_MAX_QUANTITY: u32 = 5_000;
    /// Default spacing of the chart grid
    pub const DEFAULT_STEP: u32 = 100;

    /// Creates a domain; a zero step is treated as `1`
    #[must_use]
    pub const fn new(max_quantity: u32, step: u32) -> Self {
        Self {
            max_quantity,
            step: if step == 0 { 1 } else { step },
        }
    }

    /// Coarse domain for summary tables: `step = max(1, max / rows)`
    #[must_use]
    pub const fn summary(max_quantity: u32, rows: u32) -> Self {
        let step = if rows == 0 { max_quantity } else { max_quantity / rows };
        Self::new(max_quantity, step)
    }

    /// Number of grid points
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.max_quantity / self.step) as usize + 1
    }

    /// Always false: quantity `0` is on every grid
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Quantity at grid index `index`
    #[must_use]
    pub const fn quantity_at(&self, index: usize) -> u32 {
        self.step * index as u32
    }
}

/// One evaluated grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Units sold
    pub quantity: u32,
    /// Revenue at this quantity
    pub revenue: f64,
    /// Fixed plus variable cost at this quantity
    pub total_cost: f64,
    /// `revenue - total_cost`
    pub profit: f64,
}

impl SeriesPoint {
    /// True when revenue strictly exceeds cost (the shaded region)
    #[must_use]
    pub fn in_profit(&self) -> bool {
        self.revenue > self.total_cost
    }
}

/// Lazy iterator of [`SeriesPoint`]s.
///
/// Only the scenario's fixed cost, variable cost, and price are used;
/// `quantity_sold` is ignored. Every constructor call starts a fresh sweep.
#[derive(Debug, Clone)]
pub struct ScenarioSeries {
    fixed_cost: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
    domain: SeriesDomain,
    next: usize,
}

impl ScenarioSeries {
    /// Sweeps the default domain (`0..=5000` by `100`, 51 points)
    #[must_use]
    pub fn new(scenario: &Scenario) -> Self {
        Self::with_domain(scenario, SeriesDomain::default())
    }

    /// Sweeps a custom domain
    #[must_use]
    pub fn with_domain(scenario: &Scenario, domain: SeriesDomain) -> Self {
        Self {
            fixed_cost: scenario.fixed_cost,
            variable_cost_per_unit: scenario.variable_cost_per_unit,
            price_per_unit: scenario.price_per_unit,
            domain,
            next: 0,
        }
    }

    /// The grid being swept
    #[must_use]
    pub const fn domain(&self) -> SeriesDomain {
        self.domain
    }

    /// Evaluates a single quantity with this series' unit economics
    #[must_use]
    pub fn point(&self, quantity: u32) -> SeriesPoint {
        let q = f64::from(quantity);
        let revenue = self.price_per_unit * q;
        let total_cost = self.fixed_cost + self.variable_cost_per_unit * q;
        SeriesPoint {
            quantity,
            revenue,
            total_cost,
            profit: revenue - total_cost,
        }
    }
}

impl Iterator for ScenarioSeries {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.domain.len() {
            return None;
        }
        let quantity = self.domain.quantity_at(self.next);
        self.next += 1;
        Some(self.point(quantity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.domain.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScenarioSeries {}

impl std::iter::FusedIterator for ScenarioSeries {}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== SeriesDomain tests =====

    #[test]
    fn test_default_domain() {
        let d = SeriesDomain::default();
        assert_eq!(d.max_quantity, 5_000);
        assert_eq!(d.step, 100);
        assert_eq!(d.len(), 51);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_zero_step_normalised() {
        let d = SeriesDomain::new(3, 0);
        assert_eq!(d.step, 1);
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_off_grid_maximum() {
        let d = SeriesDomain::new(250, 100);
        assert_eq!(d.len(), 3);
        assert_eq!(d.quantity_at(2), 200);
    }

    #[test]
    fn test_summary_domain() {
        assert_eq!(SeriesDomain::summary(10_000, 20), SeriesDomain::new(10_000, 500));
        assert_eq!(SeriesDomain::summary(10_000, 5).len(), 6);
        assert_eq!(SeriesDomain::summary(3, 5).step, 1);
        assert_eq!(SeriesDomain::summary(0, 5).len(), 1);
    }

    // ===== ScenarioSeries tests =====

    #[test]
    fn test_series_default_length() {
        let series = ScenarioSeries::new(&Scenario::default());
        assert_eq!(series.len(), 51);
        assert_eq!(series.count(), 51);
    }

    #[test]
    fn test_series_bounds_and_order() {
        let points: Vec<_> = ScenarioSeries::new(&Scenario::default()).collect();
        assert_eq!(points.first().unwrap().quantity, 0);
        assert_eq!(points.last().unwrap().quantity, 5_000);
        assert!(points.windows(2).all(|w| w[0].quantity < w[1].quantity));
    }

    #[test]
    fn test_series_values() {
        let points: Vec<_> = ScenarioSeries::new(&Scenario::default()).collect();
        let at_1000 = points[10];
        assert_eq!(at_1000.quantity, 1_000);
        assert_eq!(at_1000.revenue, 2_000_000.0);
        assert_eq!(at_1000.total_cost, 1_500_000.0);
        assert_eq!(at_1000.profit, 500_000.0);
    }

    #[test]
    fn test_series_ignores_quantity_sold() {
        let a: Vec<_> = ScenarioSeries::new(&Scenario::default().with_quantity(0)).collect();
        let b: Vec<_> = ScenarioSeries::new(&Scenario::default().with_quantity(4_200)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_series_is_restartable() {
        let s = Scenario::default();
        let first: Vec<_> = ScenarioSeries::new(&s).collect();
        let second: Vec<_> = ScenarioSeries::new(&s).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_fused() {
        let mut series = ScenarioSeries::with_domain(&Scenario::default(), SeriesDomain::new(0, 1));
        assert!(series.next().is_some());
        assert!(series.next().is_none());
        assert!(series.next().is_none());
    }

    #[test]
    fn test_in_profit() {
        let series = ScenarioSeries::new(&Scenario::default());
        assert!(!series.point(500).in_profit());
        assert!(series.point(600).in_profit());
        assert!(!series.point(400).in_profit());
    }

    #[test]
    fn test_size_hint_decreases() {
        let mut series = ScenarioSeries::new(&Scenario::default());
        series.next();
        assert_eq!(series.size_hint(), (50, Some(50)));
    }
}
