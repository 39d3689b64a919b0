//! Color standards for chart rendering.

mod color;
mod palette;

pub use color::Color;
pub use palette::ColorPalette;
