use eframe::egui::{pos2, vec2, Color32, Rect, Vec2};

use crate::color::TemperatureColorMap;
use crate::data::model::TemperatureDataset;

use super::scale::BandScale;

// ---------------------------------------------------------------------------
// Fixed proportions
// ---------------------------------------------------------------------------

/// Font unit all margins are derived from.
pub const FONT_SIZE: f32 = 16.0;
/// Horizontal pixels per year column.
pub const YEAR_WIDTH: f32 = 5.0;
/// Vertical pixels per month row.
pub const MONTH_HEIGHT: f32 = 33.0;

/// Margins reserved around the plot area for axis labels and the legend.
#[derive(Debug, Clone, Copy)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn chart() -> Self {
        Padding {
            left: 9.0 * FONT_SIZE,
            right: 9.0 * FONT_SIZE,
            top: FONT_SIZE,
            bottom: 8.0 * FONT_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart layout
// ---------------------------------------------------------------------------

/// Axis scales and plot-area geometry for one dataset.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    /// Plot area width, excluding padding.
    pub width: f32,
    /// Plot area height, excluding padding.
    pub height: f32,
    pub padding: Padding,
    /// Horizontal band scale over the distinct years.
    pub x: BandScale<i32>,
    /// Vertical band scale over the 12 month indices.
    pub y: BandScale<u32>,
}

impl ChartLayout {
    pub fn new(dataset: &TemperatureDataset) -> Self {
        let width = YEAR_WIDTH * (dataset.len() as f32 / 12.0).ceil();
        let height = MONTH_HEIGHT * 12.0;
        ChartLayout {
            width,
            height,
            padding: Padding::chart(),
            x: BandScale::new(dataset.years(), (0.0, width)),
            y: BandScale::new((0..12).collect(), (0.0, height)),
        }
    }

    /// Full canvas size: plot area plus padding.
    pub fn outer_size(&self) -> Vec2 {
        vec2(
            self.width + self.padding.left + self.padding.right,
            self.height + self.padding.top + self.padding.bottom,
        )
    }

    /// Years that receive an axis tick: decades only.
    pub fn x_ticks(&self) -> Vec<i32> {
        self.x
            .domain()
            .iter()
            .copied()
            .filter(|year| year % 10 == 0)
            .collect()
    }
}

/// Full month name for a 0-based month index.
pub fn month_label(month: u32) -> &'static str {
    chrono::Month::try_from((month + 1) as u8)
        .map(|m| m.name())
        .unwrap_or("?")
}

// ---------------------------------------------------------------------------
// Cell grid
// ---------------------------------------------------------------------------

/// One drawable cell with its inspectable data attributes.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Geometry in plot-local coordinates (origin at the plot's top-left).
    pub rect: Rect,
    pub year: i32,
    pub month: u32,
    pub variance: f64,
    /// Absolute temperature, `base_temperature + variance`.
    pub temperature: f64,
    pub color: Color32,
}

/// Build one cell per reading. The count always equals the reading count:
/// every year is in the x domain by construction and months are 0-11 after
/// normalization.
pub fn build_cells(
    dataset: &TemperatureDataset,
    layout: &ChartLayout,
    colors: &TemperatureColorMap,
) -> Vec<Cell> {
    let size = vec2(layout.x.bandwidth(), layout.y.bandwidth());
    dataset
        .readings
        .iter()
        .filter_map(|reading| {
            let x = layout.x.position(&reading.year)?;
            let y = layout.y.position(&reading.month)?;
            let temperature = dataset.temperature(reading);
            Some(Cell {
                rect: Rect::from_min_size(pos2(x, y), size),
                year: reading.year,
                month: reading.month,
                variance: reading.variance,
                temperature,
                color: colors.color_for(temperature),
            })
        })
        .collect()
}
