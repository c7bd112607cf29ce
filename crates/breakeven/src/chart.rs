//! SVG chart of revenue vs. total cost
//!
//! Renders the series as two polylines, shades the region where revenue
//! exceeds cost, and marks the break-even quantity with a dashed line.

use std::fmt::Write as FmtWrite;

use tracing::debug;

use crate::core::{
    format_currency, format_quantity, format_units, BreakEvenResult, Scenario, ScenarioSeries,
    SeriesDomain, SeriesPoint,
};

/// Revenue line color
pub const REVENUE_COLOR: &str = "#2e7d32";
/// Total cost line color
pub const COST_COLOR: &str = "#c62828";
/// Profit region fill
pub const PROFIT_FILL: &str = "#4caf50";
/// Break-even marker color
pub const MARKER_COLOR: &str = "#1565c0";

/// X axis title
pub const X_AXIS_LABEL: &str = "units sold";
/// Y axis title
pub const Y_AXIS_LABEL: &str = "currency amount";

/// Space reserved around the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartMargins {
    /// Above the plot (title)
    pub top: u32,
    /// Right of the plot (legend)
    pub right: u32,
    /// Below the plot (x ticks and label)
    pub bottom: u32,
    /// Left of the plot (y ticks and label)
    pub left: u32,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 50,
            right: 30,
            bottom: 60,
            left: 110,
        }
    }
}

/// Configuration for SVG rendering
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Document width in pixels
    pub width: u32,
    /// Document height in pixels
    pub height: u32,
    /// Plot margins
    pub margins: ChartMargins,
    /// Chart title
    pub title: String,
    /// Number of ticks per axis
    pub ticks: u32,
    /// Include XML declaration
    pub include_xml_declaration: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(800, 500)
    }
}

impl ChartConfig {
    /// Create a config with document dimensions
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margins: ChartMargins::default(),
            title: "Revenue vs Total Costs".to_string(),
            ticks: 5,
            include_xml_declaration: true,
        }
    }

    /// Set document dimensions
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set margins
    #[must_use]
    pub const fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Set title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set XML declaration inclusion
    #[must_use]
    pub const fn with_xml_declaration(mut self, include: bool) -> Self {
        self.include_xml_declaration = include;
        self
    }

    fn plot_width(&self) -> f64 {
        f64::from(
            self.width
                .saturating_sub(self.margins.left + self.margins.right)
                .max(1),
        )
    }

    fn plot_height(&self) -> f64 {
        f64::from(
            self.height
                .saturating_sub(self.margins.top + self.margins.bottom)
                .max(1),
        )
    }
}

/// Linear mapping from data space to SVG pixels
#[derive(Debug, Clone, Copy)]
struct Projection {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Projection {
    fn new(config: &ChartConfig, domain: SeriesDomain, points: &[SeriesPoint]) -> Self {
        let (mut y_min, mut y_max) = points
            .iter()
            .flat_map(|p| [p.revenue, p.total_cost])
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if (y_max - y_min).abs() < f64::EPSILON {
            y_max = y_min + 1.0;
        }
        let pad = (y_max - y_min) * 0.05;
        if y_min < 0.0 {
            y_min -= pad;
        }
        y_max += pad;

        Self {
            x_min: 0.0,
            x_max: f64::from(domain.max_quantity.max(1)),
            y_min,
            y_max,
            left: f64::from(config.margins.left),
            top: f64::from(config.margins.top),
            width: config.plot_width(),
            height: config.plot_height(),
        }
    }

    fn x(&self, value: f64) -> f64 {
        self.left + (value - self.x_min) / (self.x_max - self.x_min) * self.width
    }

    fn y(&self, value: f64) -> f64 {
        self.top + self.height - (value - self.y_min) / (self.y_max - self.y_min) * self.height
    }

    fn contains_x(&self, value: f64) -> bool {
        value >= self.x_min && value <= self.x_max
    }
}

/// Region where revenue exceeds cost: revenue edge left-to-right, cost edge
/// right-to-left, in data coordinates.
pub fn profit_regions(points: &[SeriesPoint]) -> Vec<Vec<(f64, f64)>> {
    let mut regions = Vec::new();
    let mut upper: Vec<(f64, f64)> = Vec::new();
    let mut lower: Vec<(f64, f64)> = Vec::new();

    let close = |upper: &mut Vec<(f64, f64)>, lower: &mut Vec<(f64, f64)>, out: &mut Vec<_>| {
        if !upper.is_empty() {
            let mut polygon = std::mem::take(upper);
            polygon.extend(lower.drain(..).rev());
            out.push(polygon);
        }
    };

    for (i, p) in points.iter().enumerate() {
        let diff = p.revenue - p.total_cost;
        let prev = i.checked_sub(1).map(|j| points[j]);

        if let Some(prev) = prev {
            let prev_diff = prev.revenue - prev.total_cost;
            let entering = prev_diff <= 0.0 && diff > 0.0;
            let leaving = prev_diff > 0.0 && diff <= 0.0;
            if entering || leaving {
                let t = prev_diff / (prev_diff - diff);
                let x = lerp(f64::from(prev.quantity), f64::from(p.quantity), t);
                let y = lerp(prev.revenue, p.revenue, t);
                upper.push((x, y));
                lower.push((x, y));
                if leaving {
                    close(&mut upper, &mut lower, &mut regions);
                }
            }
        }

        if diff > 0.0 {
            let x = f64::from(p.quantity);
            upper.push((x, p.revenue));
            lower.push((x, p.total_cost));
        }
    }
    close(&mut upper, &mut lower, &mut regions);
    regions
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// SVG renderer for the break-even chart
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    /// Create a renderer with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom config
    #[must_use]
    pub const fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Get the current config
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render over the default domain (`0..=5000` by `100`)
    pub fn render(&self, scenario: &Scenario) -> BreakEvenResult<String> {
        self.render_with_domain(scenario, SeriesDomain::default())
    }

    /// Render over a custom domain
    pub fn render_with_domain(
        &self,
        scenario: &Scenario,
        domain: SeriesDomain,
    ) -> BreakEvenResult<String> {
        let points: Vec<SeriesPoint> = ScenarioSeries::with_domain(scenario, domain).collect();
        let evaluation = scenario.evaluate();
        let proj = Projection::new(&self.config, domain, &points);
        debug!(points = points.len(), width = self.config.width, "rendering chart");

        let mut svg = String::with_capacity(8 * 1024);
        let (width, height) = (self.config.width, self.config.height);

        if self.config.include_xml_declaration {
            svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\" font-size=\"12\">"
        )?;
        writeln!(svg, "  <title>{}</title>", escape_xml(&self.config.title))?;
        writeln!(svg, "  <rect width=\"{width}\" height=\"{height}\" fill=\"white\"/>")?;

        self.write_grid(&mut svg, &proj)?;
        Self::write_profit_regions(&mut svg, &proj, &points)?;
        Self::write_polyline(&mut svg, &proj, &points, |p| p.revenue, REVENUE_COLOR, "revenue")?;
        Self::write_polyline(&mut svg, &proj, &points, |p| p.total_cost, COST_COLOR, "total-cost")?;

        if proj.contains_x(evaluation.break_even_quantity) {
            let x = proj.x(evaluation.break_even_quantity);
            writeln!(
                svg,
                "  <line class=\"break-even\" x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" \
                 stroke=\"{MARKER_COLOR}\" stroke-width=\"1.5\" stroke-dasharray=\"6,4\"/>",
                proj.top,
                proj.top + proj.height
            )?;
        }

        self.write_axes(&mut svg, &proj)?;
        self.write_legend(&mut svg, &proj, evaluation.break_even_quantity)?;
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn write_grid(&self, svg: &mut String, proj: &Projection) -> BreakEvenResult<()> {
        let ticks = self.config.ticks.max(1);
        svg.push_str("  <g class=\"grid\" stroke=\"#e0e0e0\" stroke-width=\"1\">\n");
        for i in 0..=ticks {
            let t = f64::from(i) / f64::from(ticks);
            let x = proj.left + t * proj.width;
            let y = proj.top + t * proj.height;
            writeln!(
                svg,
                "    <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\"/>",
                proj.top,
                proj.top + proj.height
            )?;
            writeln!(
                svg,
                "    <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\"/>",
                proj.left,
                proj.left + proj.width
            )?;
        }
        svg.push_str("  </g>\n");
        Ok(())
    }

    fn write_profit_regions(
        svg: &mut String,
        proj: &Projection,
        points: &[SeriesPoint],
    ) -> BreakEvenResult<()> {
        for region in profit_regions(points) {
            let coords: Vec<String> = region
                .iter()
                .map(|&(x, y)| format!("{:.1},{:.1}", proj.x(x), proj.y(y)))
                .collect();
            writeln!(
                svg,
                "  <polygon class=\"profit\" points=\"{}\" fill=\"{PROFIT_FILL}\" fill-opacity=\"0.2\" stroke=\"none\"/>",
                coords.join(" ")
            )?;
        }
        Ok(())
    }

    fn write_polyline(
        svg: &mut String,
        proj: &Projection,
        points: &[SeriesPoint],
        value: impl Fn(&SeriesPoint) -> f64,
        color: &str,
        class: &str,
    ) -> BreakEvenResult<()> {
        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{:.1},{:.1}", proj.x(f64::from(p.quantity)), proj.y(value(p))))
            .collect();
        writeln!(
            svg,
            "  <polyline class=\"{class}\" points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>",
            coords.join(" ")
        )?;
        Ok(())
    }

    fn write_axes(&self, svg: &mut String, proj: &Projection) -> BreakEvenResult<()> {
        let ticks = self.config.ticks.max(1);
        let bottom = proj.top + proj.height;
        let right = proj.left + proj.width;

        writeln!(
            svg,
            "  <path d=\"M{:.1},{:.1} V{bottom:.1} H{right:.1}\" fill=\"none\" stroke=\"#424242\"/>",
            proj.left, proj.top
        )?;

        for i in 0..=ticks {
            let t = f64::from(i) / f64::from(ticks);
            let qx = proj.x_min + t * (proj.x_max - proj.x_min);
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>",
                proj.x(qx),
                bottom + 18.0,
                format_quantity(qx)
            )?;
            let vy = proj.y_min + t * (proj.y_max - proj.y_min);
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>",
                proj.left - 8.0,
                proj.y(vy) + 4.0,
                format_currency(vy)
            )?;
        }

        writeln!(
            svg,
            "  <text class=\"x-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{X_AXIS_LABEL}</text>",
            proj.left + proj.width / 2.0,
            bottom + 45.0
        )?;
        let y_label_x = 18.0;
        let y_label_y = proj.top + proj.height / 2.0;
        writeln!(
            svg,
            "  <text class=\"y-label\" x=\"{y_label_x:.1}\" y=\"{y_label_y:.1}\" text-anchor=\"middle\" \
             transform=\"rotate(-90 {y_label_x:.1} {y_label_y:.1})\">{Y_AXIS_LABEL}</text>"
        )?;
        writeln!(
            svg,
            "  <text class=\"title\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>",
            f64::from(self.config.width) / 2.0,
            proj.top / 2.0 + 6.0,
            escape_xml(&self.config.title)
        )?;
        Ok(())
    }

    fn write_legend(
        &self,
        svg: &mut String,
        proj: &Projection,
        break_even_quantity: f64,
    ) -> BreakEvenResult<()> {
        let entries = [
            ("Revenue".to_string(), REVENUE_COLOR, "line"),
            ("Total Costs".to_string(), COST_COLOR, "line"),
            ("Profit".to_string(), PROFIT_FILL, "fill"),
            (format!("BE: {}", format_units(break_even_quantity)), MARKER_COLOR, "dash"),
        ];
        let x = proj.left + 12.0;
        let mut y = proj.top + 14.0;

        svg.push_str("  <g class=\"legend\">\n");
        for (label, color, kind) in entries {
            match kind {
                "fill" => writeln!(
                    svg,
                    "    <rect x=\"{x:.1}\" y=\"{:.1}\" width=\"20\" height=\"10\" fill=\"{color}\" fill-opacity=\"0.2\"/>",
                    y - 9.0
                )?,
                "dash" => writeln!(
                    svg,
                    "    <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"1.5\" stroke-dasharray=\"6,4\"/>",
                    y - 4.0,
                    x + 20.0,
                    y - 4.0
                )?,
                _ => writeln!(
                    svg,
                    "    <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"2\"/>",
                    y - 4.0,
                    x + 20.0,
                    y - 4.0
                )?,
            }
            writeln!(
                svg,
                "    <text x=\"{:.1}\" y=\"{y:.1}\">{}</text>",
                x + 26.0,
                escape_xml(&label)
            )?;
            y += 16.0;
        }
        svg.push_str("  </g>\n");
        Ok(())
    }
}
