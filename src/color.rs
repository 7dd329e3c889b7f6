use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::chart::scale::ThresholdScale;

// ---------------------------------------------------------------------------
// Diverging palette
// ---------------------------------------------------------------------------

/// Number of temperature buckets (and legend swatches).
pub const PALETTE_SIZE: usize = 11;

/// ColorBrewer RdYlBu anchors, warm → cool.
const RD_YL_BU: [(u8, u8, u8); 11] = [
    (0xa5, 0x00, 0x26),
    (0xd7, 0x30, 0x27),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x90),
    (0xff, 0xff, 0xbf),
    (0xe0, 0xf3, 0xf8),
    (0xab, 0xd9, 0xe9),
    (0x74, 0xad, 0xd1),
    (0x45, 0x75, 0xb1),
    (0x31, 0x36, 0x95),
];

fn to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    )
    .into_linear()
}

/// Sample the RdYlBu ramp at `t` in `[0, 1]` (0 = warmest anchor).
fn sample_ramp(t: f32) -> Color32 {
    let pos = t.clamp(0.0, 1.0) * (RD_YL_BU.len() - 1) as f32;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let mixed = to_linear(RD_YL_BU[lo]).mix(to_linear(RD_YL_BU[hi]), pos - lo as f32);
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Generate `n` diverging colours, reversed so warm colours sit at the high
/// end: index 0 is the coolest blue, index `n - 1` the warmest red. With
/// `n == 11` these are the exact RdYlBu anchors; other sizes sample the ramp.
pub fn diverging_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 {
                0.5
            } else {
                i as f32 / (n - 1) as f32
            };
            sample_ramp(1.0 - t)
        })
        .collect()
}

/// Neutral midpoint of the ramp, used when the temperature domain collapses
/// to a single value.
pub fn neutral_color() -> Color32 {
    sample_ramp(0.5)
}

// ---------------------------------------------------------------------------
// Color mapping: absolute temperature → Color32
// ---------------------------------------------------------------------------

/// Maps an absolute temperature to its bucket colour through a uniform
/// threshold scale over `[min, max]`.
#[derive(Debug, Clone)]
pub struct TemperatureColorMap {
    thresholds: ThresholdScale,
    colors: Vec<Color32>,
    degenerate: bool,
}

impl TemperatureColorMap {
    /// Build the map for the dataset's temperature range. A collapsed range
    /// (`max <= min`, e.g. a single reading) yields a degenerate map where
    /// every value takes the neutral colour.
    pub fn new(min: f64, max: f64) -> Self {
        let colors = diverging_palette(PALETTE_SIZE);
        TemperatureColorMap {
            thresholds: ThresholdScale::uniform(min, max, colors.len()),
            colors,
            degenerate: !(max > min),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn thresholds(&self) -> &ThresholdScale {
        &self.thresholds
    }

    /// Bucket colours, cool → warm.
    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    /// Look up the colour for an absolute temperature.
    pub fn color_for(&self, temperature: f64) -> Color32 {
        if self.degenerate {
            return neutral_color();
        }
        let bucket = self.thresholds.bucket(temperature).min(self.colors.len() - 1);
        self.colors[bucket]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert_eq!(diverging_palette(PALETTE_SIZE).len(), PALETTE_SIZE);
        assert_eq!(diverging_palette(5).len(), 5);
        assert!(diverging_palette(0).is_empty());
    }

    #[test]
    fn palette_runs_cool_to_warm() {
        let colors = diverging_palette(PALETTE_SIZE);
        // Exact anchors at the canonical size, in reversed order.
        assert_eq!(colors[0], Color32::from_rgb(0x31, 0x36, 0x95));
        assert_eq!(colors[5], Color32::from_rgb(0xff, 0xff, 0xbf));
        assert_eq!(colors[PALETTE_SIZE - 1], Color32::from_rgb(0xa5, 0x00, 0x26));
    }

    #[test]
    fn color_map_assigns_extremes_to_outer_buckets() {
        let map = TemperatureColorMap::new(2.0, 13.0);
        let colors = map.colors();
        assert_eq!(map.color_for(2.0), colors[0]);
        assert_eq!(map.color_for(12.999), colors[PALETTE_SIZE - 1]);
        // Values outside the domain clamp to the outer buckets.
        assert_eq!(map.color_for(-5.0), colors[0]);
        assert_eq!(map.color_for(50.0), colors[PALETTE_SIZE - 1]);
    }

    #[test]
    fn degenerate_range_falls_back_to_the_neutral_color() {
        let map = TemperatureColorMap::new(6.5, 6.5);
        assert!(map.is_degenerate());
        assert_eq!(map.color_for(6.5), neutral_color());
        assert_eq!(map.color_for(100.0), neutral_color());
    }
}
