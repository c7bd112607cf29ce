//! TUI rendering
//!
//! Inputs and metrics on top, status line, then the revenue vs. cost chart
//! with the profit region shaded and a vertical break-even marker.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::BreakEvenApp;
use crate::chart::{X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::core::{format_currency, format_quantity, format_units, Field, SeriesDomain};

/// Samples drawn between the two curves per profitable grid point
const SHADE_SAMPLES: u32 = 8;

/// Renders the calculator UI to the frame
pub fn render(app: &BreakEvenApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(BreakEvenUI::new(app), area);
}

/// Chart datasets owned for the duration of one draw
#[derive(Debug, Default)]
struct ChartData {
    revenue: Vec<(f64, f64)>,
    cost: Vec<(f64, f64)>,
    profit: Vec<(f64, f64)>,
    marker: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl ChartData {
    fn from_app(app: &BreakEvenApp) -> Self {
        let series = app.series();
        let revenue: Vec<(f64, f64)> = series
            .iter()
            .map(|p| (f64::from(p.quantity), p.revenue))
            .collect();
        let cost: Vec<(f64, f64)> = series
            .iter()
            .map(|p| (f64::from(p.quantity), p.total_cost))
            .collect();

        let profit = series
            .iter()
            .filter(|p| p.in_profit())
            .flat_map(|p| {
                let x = f64::from(p.quantity);
                (1..SHADE_SAMPLES).map(move |i| {
                    let t = f64::from(i) / f64::from(SHADE_SAMPLES);
                    (x, p.total_cost + (p.revenue - p.total_cost) * t)
                })
            })
            .collect();

        let (y_min, y_max) = revenue
            .iter()
            .chain(cost.iter())
            .map(|&(_, y)| y)
            .fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
        let y_max = if y_max - y_min < f64::EPSILON { y_min + 1.0 } else { y_max * 1.05 };

        let x_max = f64::from(SeriesDomain::DEFAULT_MAX_QUANTITY);
        let be = app.evaluation().break_even_quantity;
        let marker = if (0.0..=x_max).contains(&be) {
            vec![(be, y_min), (be, y_max)]
        } else {
            Vec::new()
        };

        Self {
            revenue,
            cost,
            profit,
            marker,
            x_bounds: [0.0, x_max],
            y_bounds: [y_min, y_max],
        }
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct BreakEvenUI<'a> {
    app: &'a BreakEvenApp,
}

impl<'a> BreakEvenUI<'a> {
    /// Creates a new UI widget over the app state
    #[must_use]
    pub const fn new(app: &'a BreakEvenApp) -> Self {
        Self { app }
    }

    /// Creates the main vertical layout
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(8), // Inputs + metrics
                Constraint::Length(3), // Status
                Constraint::Min(10),   // Chart
                Constraint::Length(1), // Help
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the four controls
    fn render_inputs(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Field::ALL
            .iter()
            .map(|&field| {
                let focused = field == self.app.focus();
                let marker = if focused { "▶ " } else { "  " };
                let style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut spans = vec![
                    Span::styled(format!("{marker}{:<24}", field.label()), style),
                    Span::styled(self.app.field_display(field), Style::default().fg(Color::Cyan)),
                ];
                if field == Field::Quantity {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        slider(self.app.quantity_ratio(), 12),
                        Style::default().fg(Color::Blue),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Scenario ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    /// Renders revenue, total costs, profit and break-even in two columns
    fn render_metrics(&self, area: Rect, buf: &mut Buffer) {
        let e = self.app.evaluation();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(columns[1]);

        let profit_color = if e.profit < 0.0 { Color::Red } else { Color::Green };
        metric(" Revenue ", format_currency(e.revenue), Color::Green).render(left[0], buf);
        metric(" Total Costs ", format_currency(e.total_costs), Color::Red).render(left[1], buf);
        metric(" Profit ", format_currency(e.profit), profit_color).render(right[0], buf);
        metric(
            " Break-even ",
            format_units(e.break_even_quantity),
            Color::Blue,
        )
        .render(right[1], buf);
    }

    /// Renders the warning/success message, or the last validation error
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let (text, color) = if let Some(err) = self.app.error() {
            (format!("✗ {err}"), Color::Red)
        } else {
            let evaluation = self.app.evaluation();
            let status = evaluation.status();
            if status.is_warning() {
                let missing = f64::from(evaluation.units_to_break_even());
                (format!("⚠ {status} {} to go.", format_units(missing)), Color::Yellow)
            } else {
                (format!("✓ {status}"), Color::Green)
            }
        };

        Paragraph::new(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    /// Renders the revenue vs. cost chart
    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let data = ChartData::from_app(self.app);
        let be_label = format!("BE: {}", format_units(self.app.evaluation().break_even_quantity));

        let mut datasets = vec![
            Dataset::default()
                .name("Profit")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::DarkGray))
                .data(&data.profit),
            Dataset::default()
                .name("Revenue")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&data.revenue),
            Dataset::default()
                .name("Total Costs")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&data.cost),
        ];
        if !data.marker.is_empty() {
            datasets.push(
                Dataset::default()
                    .name(be_label)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Color::Blue))
                    .data(&data.marker),
            );
        }

        let [x_lo, x_hi] = data.x_bounds;
        let [y_lo, y_hi] = data.y_bounds;
        let x_labels = vec![
            Span::raw(format_quantity(x_lo)),
            Span::raw(format_quantity((x_lo + x_hi) / 2.0)),
            Span::raw(format_quantity(x_hi)),
        ];
        let y_labels = vec![
            Span::raw(format_currency(y_lo)),
            Span::raw(format_currency((y_lo + y_hi) / 2.0)),
            Span::raw(format_currency(y_hi)),
        ];

        Chart::new(datasets)
            .block(
                Block::default()
                    .title(" Revenue vs Total Costs ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .x_axis(
                Axis::default()
                    .title(X_AXIS_LABEL)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(data.x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Y_AXIS_LABEL)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(data.y_bounds)
                    .labels(y_labels),
            )
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .render(area, buf);
    }

    /// Renders the one-line key help
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = HELP_SHORTCUTS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {desc}  "), Style::default().fg(Color::Gray)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for BreakEvenUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = self.create_layout(area);
        if chunks.len() < 4 {
            return;
        }

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(44), Constraint::Min(40)])
            .split(chunks[0]);

        self.render_inputs(top[0], buf);
        self.render_metrics(top[1], buf);
        self.render_status(chunks[1], buf);
        self.render_chart(chunks[2], buf);
        self.render_help(chunks[3], buf);
    }
}

/// Bordered single-value panel
fn metric(title: &str, value: String, color: Color) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}

/// Text slider, e.g. `[███░░░░░]`
fn slider(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Title for the main frame
pub const APP_TITLE: &str = " Break-Even Calculator - Artisan Bakery ";

/// Key help shown in the footer
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Tab/↑↓", "Select"),
    ("←/→", "Adjust"),
    ("PgUp/PgDn", "×10"),
    ("r", "Reset"),
    ("q", "Quit"),
];
