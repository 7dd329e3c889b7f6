use eframe::egui::{pos2, Color32, Rect};

use crate::color::{neutral_color, TemperatureColorMap};

use super::scale::LinearScale;

/// Width of the legend strip in pixels.
pub const LEGEND_WIDTH: f32 = 400.0;
/// Height of the legend strip in pixels.
pub const LEGEND_HEIGHT: f32 = 300.0 / crate::color::PALETTE_SIZE as f32;

/// One coloured rectangle of the legend strip.
#[derive(Debug, Clone)]
pub struct LegendSwatch {
    /// Geometry in legend-local coordinates (origin at the strip's top-left).
    pub rect: Rect,
    pub color: Color32,
}

/// One tick on the legend axis, at an interior bucket boundary.
#[derive(Debug, Clone)]
pub struct LegendTick {
    pub x: f32,
    pub label: String,
}

/// The legend: a horizontal strip of bucket swatches with boundary ticks.
#[derive(Debug, Clone)]
pub struct Legend {
    pub swatches: Vec<LegendSwatch>,
    pub ticks: Vec<LegendTick>,
}

impl Legend {
    /// Lay out the legend for a colour map over `[min, max]`.
    ///
    /// A degenerate map collapses to one neutral swatch with no ticks.
    pub fn build(colors: &TemperatureColorMap, min: f64, max: f64) -> Self {
        let strip = |lo: f32, hi: f32, color| LegendSwatch {
            rect: Rect::from_min_max(pos2(lo, 0.0), pos2(hi, LEGEND_HEIGHT)),
            color,
        };

        if colors.is_degenerate() {
            return Legend {
                swatches: vec![strip(0.0, LEGEND_WIDTH, neutral_color())],
                ticks: Vec::new(),
            };
        }

        let x = LinearScale::new((min, max), (0.0, LEGEND_WIDTH));
        let thresholds = colors.thresholds();

        let swatches = colors
            .colors()
            .iter()
            .enumerate()
            .map(|(bucket, &color)| {
                let (lo, hi) = thresholds.extent(bucket);
                strip(
                    x.scale(lo.unwrap_or(min)),
                    x.scale(hi.unwrap_or(max)),
                    color,
                )
            })
            .collect();

        let ticks = thresholds
            .cuts()
            .iter()
            .map(|&cut| LegendTick {
                x: x.scale(cut),
                label: format!("{cut:.1}"),
            })
            .collect();

        Legend { swatches, ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE_SIZE;

    #[test]
    fn one_swatch_per_palette_color() {
        let map = TemperatureColorMap::new(2.0, 13.0);
        let legend = Legend::build(&map, 2.0, 13.0);
        assert_eq!(legend.swatches.len(), PALETTE_SIZE);
        assert_eq!(legend.ticks.len(), PALETTE_SIZE - 1);
    }

    #[test]
    fn swatches_tile_the_strip_evenly() {
        let map = TemperatureColorMap::new(0.0, 11.0);
        let legend = Legend::build(&map, 0.0, 11.0);

        let expected_width = LEGEND_WIDTH / PALETTE_SIZE as f32;
        let mut cursor = 0.0f32;
        for swatch in &legend.swatches {
            assert!((swatch.rect.min.x - cursor).abs() < 1e-3);
            assert!((swatch.rect.width() - expected_width).abs() < 1e-3);
            cursor = swatch.rect.max.x;
        }
        assert!((cursor - LEGEND_WIDTH).abs() < 1e-3);
    }

    #[test]
    fn ticks_sit_at_bucket_boundaries_with_one_decimal_labels() {
        let map = TemperatureColorMap::new(0.0, 11.0);
        let legend = Legend::build(&map, 0.0, 11.0);

        assert_eq!(legend.ticks[0].label, "1.0");
        assert_eq!(legend.ticks[9].label, "10.0");
        for (i, tick) in legend.ticks.iter().enumerate() {
            let expected = (i + 1) as f32 * LEGEND_WIDTH / PALETTE_SIZE as f32;
            assert!((tick.x - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_map_collapses_to_one_neutral_swatch() {
        let map = TemperatureColorMap::new(6.5, 6.5);
        let legend = Legend::build(&map, 6.5, 6.5);
        assert_eq!(legend.swatches.len(), 1);
        assert!(legend.ticks.is_empty());
        assert_eq!(legend.swatches[0].color, neutral_color());
        assert_eq!(legend.swatches[0].rect.width(), LEGEND_WIDTH);
    }
}
