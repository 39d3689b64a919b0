//! Drawing primitives produced by chart layout.
//!
//! Each chart algorithm reduces its rows to a flat list of these variants;
//! the SVG renderer serializes each one independently. All geometry is
//! computed at layout time, so serialization never needs cross-primitive
//! context.

use crate::style::Color;

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// The SVG `text-anchor` attribute value.
    pub fn as_svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Style class for structural lines, matching the document's `<style>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Axis,
    Tick,
}

impl LineClass {
    pub fn as_svg(&self) -> &'static str {
        match self {
            LineClass::Axis => "axis-line",
            LineClass::Tick => "tick-line",
        }
    }
}

/// One renderable SVG element, in inner (margin-translated) coordinates.
#[derive(Debug, Clone)]
pub enum DrawingPrimitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: Color,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        color: Color,
    },
    /// An annular wedge. The center is carried so the path can be serialized
    /// without knowing which chart produced it.
    ArcPath {
        cx: f64,
        cy: f64,
        outer_r: f64,
        inner_r: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        anchor: Anchor,
        content: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        class: LineClass,
    },
}
