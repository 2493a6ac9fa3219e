//! Chart Assembly
//!
//! Turns one partition into a [`Figure`]: four marker series (three
//! competitor profits and the reward pool) laid out over composite-label
//! slots. [`render_svg`] draws a figure with `plotters`' SVG backend.
//!
//! ## X-axis modes
//! - `RowIndex`: one slot per row, vertical tick text
//! - `Category`: one slot per distinct label, rows sharing a label share it

use std::collections::HashMap;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use thiserror::Error;
use tracing::debug;

use crate::scenario::{Competitor, LabelStyle, Scenario};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw chart '{title}': {message}")]
    Draw { title: String, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisMode {
    RowIndex,
    Category,
}

impl XAxisMode {
    fn tick_transform(&self) -> FontTransform {
        match self {
            Self::RowIndex => FontTransform::Rotate270,
            Self::Category => FontTransform::Rotate90,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Cross,
    Triangle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerColor {
    Orange,
    Blue,
    Red,
    Green,
}

impl MarkerColor {
    pub fn rgb(&self) -> RGBColor {
        match self {
            Self::Orange => RGBColor(255, 165, 0),
            Self::Blue => RGBColor(0, 0, 255),
            Self::Red => RGBColor(255, 0, 0),
            Self::Green => RGBColor(0, 128, 0),
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub shape: MarkerShape,
    pub color: MarkerColor,
    /// Diameter in pixels.
    pub size: u32,
}

/// What a series plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trace {
    Profit(Competitor),
    TotalReward,
}

impl Trace {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Profit(Competitor::Stable),
            Self::Profit(Competitor::Moderate),
            Self::Profit(Competitor::Aggressive),
            Self::TotalReward,
        ]
    }

    pub fn name(&self) -> String {
        match self {
            Self::Profit(c) => format!("Competitor {} Profit ({})", c.number(), c.strategy()),
            Self::TotalReward => "Total Max Reward".to_string(),
        }
    }

    pub fn marker(&self, layout: &ChartLayout) -> Marker {
        let (shape, color) = match self {
            Self::Profit(Competitor::Stable) => (MarkerShape::Circle, MarkerColor::Orange),
            Self::Profit(Competitor::Moderate) => (MarkerShape::Cross, MarkerColor::Blue),
            Self::Profit(Competitor::Aggressive) => (MarkerShape::Triangle, MarkerColor::Red),
            Self::TotalReward => (MarkerShape::Square, MarkerColor::Green),
        };
        let size = match self {
            Self::TotalReward => layout.total_marker_size,
            Self::Profit(_) => layout.marker_size,
        };
        Marker { shape, color, size }
    }

    pub fn value(&self, row: &Scenario) -> f64 {
        match self {
            Self::Profit(c) => row.profit(*c),
            Self::TotalReward => row.max_reward,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub x_axis: XAxisMode,
    pub label_style: LabelStyle,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub title_font_size: f64,
    pub tick_font_size: f64,
    pub marker_size: u32,
    pub total_marker_size: u32,
    pub x_title: String,
    pub y_title: String,
    pub show_legend: bool,
}

impl ChartLayout {
    /// Row-per-slot layout used by the results-table dashboard.
    pub fn row_index() -> Self {
        Self {
            x_axis: XAxisMode::RowIndex,
            label_style: LabelStyle::Full,
            width: 1400,
            height: 700,
            margin: 20,
            x_label_area: 300,
            y_label_area: 90,
            title_font_size: 24.0,
            tick_font_size: 11.0,
            marker_size: 10,
            total_marker_size: 10,
            x_title: "Parameter Combination".to_string(),
            y_title: "Profit".to_string(),
            show_legend: true,
        }
    }

    /// Label-per-slot layout used by the synthetic fixtures.
    pub fn category() -> Self {
        Self {
            x_axis: XAxisMode::Category,
            label_style: LabelStyle::Compact,
            height: 600,
            x_label_area: 240,
            total_marker_size: 12,
            ..Self::row_index()
        }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::row_index()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub marker: Marker,
    /// `(slot, value)` pairs, one per row.
    pub points: Vec<(usize, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    /// Tick text for each x slot.
    pub slots: Vec<String>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn y_max(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, y)| *y))
            .fold(0.0, f64::max)
    }
}

/// Assigns each row to an x slot and returns the slot tick texts.
fn slot_rows(rows: &[Scenario], layout: &ChartLayout) -> (Vec<String>, Vec<usize>) {
    let labels: Vec<String> = rows
        .iter()
        .map(|r| r.composite_label(layout.label_style))
        .collect();

    match layout.x_axis {
        XAxisMode::RowIndex => {
            let slots = (0..labels.len()).collect();
            (labels, slots)
        }
        XAxisMode::Category => {
            let mut seen: HashMap<String, usize> = HashMap::new();
            let mut ticks = Vec::new();
            let mut slots = Vec::with_capacity(labels.len());
            for label in labels {
                let slot = *seen.entry(label.clone()).or_insert_with(|| {
                    ticks.push(label);
                    ticks.len() - 1
                });
                slots.push(slot);
            }
            (ticks, slots)
        }
    }
}

pub fn build_figure(rows: &[Scenario], title: &str, layout: &ChartLayout) -> Figure {
    let (ticks, slots) = slot_rows(rows, layout);

    let series = Trace::all()
        .into_iter()
        .map(|trace| Series {
            name: trace.name(),
            marker: trace.marker(layout),
            points: rows
                .iter()
                .zip(slots.iter())
                .map(|(row, &slot)| (slot, trace.value(row)))
                .collect(),
        })
        .collect();

    debug!(title, rows = rows.len(), slots = ticks.len(), "built figure");
    Figure {
        title: title.to_string(),
        slots: ticks,
        series,
    }
}

pub fn render_svg(figure: &Figure, layout: &ChartLayout) -> Result<String, RenderError> {
    let draw_error = |message: String| RenderError::Draw {
        title: figure.title.clone(),
        message,
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (layout.width, layout.height))
            .into_drawing_area();
        draw_figure(&root, figure, layout).map_err(|e| draw_error(e.to_string()))?;
        root.present().map_err(|e| draw_error(e.to_string()))?;
    }
    Ok(svg)
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    layout: &ChartLayout,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let slot_count = figure.slots.len().max(1);
    let mut y_max = figure.y_max() * 1.05;
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .caption(
            figure.title.as_str(),
            FontDesc::new(FontFamily::SansSerif, layout.title_font_size, FontStyle::Normal),
        )
        .margin(layout.margin)
        .set_label_area_size(LabelAreaPosition::Left, layout.y_label_area)
        .set_label_area_size(LabelAreaPosition::Bottom, layout.x_label_area)
        .build_cartesian_2d(-0.5..(slot_count as f64 - 0.5), 0.0..y_max)?;

    let slot_text = |v: &f64| {
        let slot = v.round();
        if (v - slot).abs() > 1e-6 || slot < 0.0 {
            return String::new();
        }
        figure.slots.get(slot as usize).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_labels(slot_count)
        .x_label_formatter(&slot_text)
        .x_label_style(
            FontDesc::new(FontFamily::SansSerif, layout.tick_font_size, FontStyle::Normal)
                .transform(layout.x_axis.tick_transform()),
        )
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc(layout.x_title.as_str())
        .y_desc(layout.y_title.as_str())
        .draw()?;

    for series in &figure.series {
        let style = series.marker.color.rgb().filled();
        let stroke = series.marker.color.rgb().stroke_width(2);
        let r = (series.marker.size / 2).max(1) as i32;
        let coords = series.points.iter().map(|&(slot, y)| (slot as f64, y));
        let name = series.name.as_str();

        match series.marker.shape {
            MarkerShape::Circle => {
                chart
                    .draw_series(coords.map(|c| Circle::new(c, r, style)))?
                    .label(name)
                    .legend(move |c| Circle::new(c, r, style));
            }
            MarkerShape::Cross => {
                chart
                    .draw_series(coords.map(|c| Cross::new(c, r, stroke)))?
                    .label(name)
                    .legend(move |c| Cross::new(c, r, stroke));
            }
            MarkerShape::Triangle => {
                chart
                    .draw_series(coords.map(|c| TriangleMarker::new(c, r, style)))?
                    .label(name)
                    .legend(move |c| TriangleMarker::new(c, r, style));
            }
            MarkerShape::Square => {
                chart
                    .draw_series(
                        coords.map(|c| EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], style)),
                    )?
                    .label(name)
                    .legend(move |(x, y)| Rectangle::new([(x - r, y - r), (x + r, y + r)], style));
            }
        }
    }

    if layout.show_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
    }

    Ok(())
}
