//! Serialization of drawing primitives to SVG documents.

mod svg;

pub use svg::{SvgRenderer, escape_xml};
