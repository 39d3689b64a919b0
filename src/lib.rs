//! Deterministic SVG chart generation from tabular data.
//!
//! Converts positional columnar input into standardized SVG documents for a
//! closed set of chart types: stacked bar, histogram, multi-series line,
//! doughnut, and hexbin. All layout is pure computation over in-memory rows;
//! every render recreates its scales and palette, so independent renders are
//! safe to run concurrently.

pub mod chart;
pub mod error;
pub mod input;
pub mod layout;
pub mod primitive;
pub mod render;
pub mod scale;
pub mod style;
pub mod table;
pub mod utils;

pub use chart::{Chart, ChartType, ColumnRoles};
pub use error::{ChartError, ChartResult};
pub use layout::CoordinateSpace;
pub use primitive::DrawingPrimitive;
pub use render::SvgRenderer;
pub use style::{Color, ColorPalette};
pub use table::{Table, Value};
