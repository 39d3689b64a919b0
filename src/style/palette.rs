//! Fixed color palette and ramps.

use super::color::Color;

/// Categorical color cycle shared by bar, line, and doughnut charts.
const CATEGORICAL: [Color; 6] = [
    Color::rgb(211, 89, 28),   // red
    Color::rgb(236, 186, 102), // yellow
    Color::rgb(135, 175, 63),  // green
    Color::rgb(88, 191, 172),  // teal
    Color::rgb(101, 150, 207), // blue
    Color::rgb(202, 127, 204), // purple
];

const RAMP_GREEN_TO_BLUE: [Color; 5] = [
    Color::rgb(33, 89, 44),
    Color::rgb(135, 175, 63),
    Color::rgb(118, 163, 138),
    Color::rgb(101, 150, 207),
    Color::rgb(32, 105, 138),
];

const RAMP_BLUES: [Color; 5] = [
    Color::rgb(9, 58, 81),
    Color::rgb(32, 105, 138),
    Color::rgb(101, 150, 207),
    Color::rgb(182, 204, 230),
    Color::rgb(217, 233, 252),
];

const RAMP_GREENS: [Color; 5] = [
    Color::rgb(24, 60, 32),
    Color::rgb(33, 89, 44),
    Color::rgb(135, 175, 63),
    Color::rgb(196, 215, 163),
    Color::rgb(229, 243, 205),
];

/// Color standards for all chart types: a cyclic categorical palette, named
/// multi-stop ramps for continuous data, and the fixed histogram fill.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub histogram_color: Color,
}

impl ColorPalette {
    pub fn new() -> Self {
        ColorPalette {
            histogram_color: Color::rgb(101, 150, 207),
        }
    }

    /// Get a categorical color by index (cycles through available colors).
    pub fn categorical_color(&self, index: usize) -> Color {
        CATEGORICAL[index % CATEGORICAL.len()]
    }

    /// Number of distinct categorical colors before the cycle repeats.
    pub fn categorical_len(&self) -> usize {
        CATEGORICAL.len()
    }

    /// Get a color ramp for continuous data, ordered dark to light.
    /// Unrecognized names fall back to "Blues".
    pub fn ramp_colors(&self, ramp_name: &str) -> &'static [Color] {
        match ramp_name {
            "Green-to-Blue" => &RAMP_GREEN_TO_BLUE,
            "Greens" => &RAMP_GREENS,
            _ => &RAMP_BLUES,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}
