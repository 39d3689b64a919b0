//! SVG rendering backend.

use crate::layout::{CoordinateSpace, MARGIN_LEFT, MARGIN_TOP};
use crate::primitive::DrawingPrimitive;

/// Serializes a primitive list into one complete SVG document: a fixed
/// style header, every primitive inside a group translated by the margins,
/// and a fixed footer. Each primitive maps to exactly one SVG element.
#[derive(Debug)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
}

impl SvgRenderer {
    pub fn new(space: &CoordinateSpace) -> Self {
        SvgRenderer {
            width: space.width,
            height: space.height,
        }
    }

    /// Render the full document.
    pub fn render(&self, primitives: &[DrawingPrimitive]) -> String {
        let mut parts = Vec::with_capacity(primitives.len() + 2);
        parts.push(self.header());
        for primitive in primitives {
            parts.push(serialize(primitive));
        }
        parts.push(self.footer().to_string());
        parts.join("\n")
    }

    fn header(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">
<style>
    text {{
        font-family: 'IBM Plex Sans', sans-serif;
        font-size: 12px;
        fill: #333;
    }}
    .axis-line {{
        stroke: #333;
        stroke-width: 1;
    }}
    .tick-line {{
        stroke: #666;
        stroke-width: 0.5;
    }}
</style>
<g transform="translate({}, {})">"#,
            self.width, self.height, MARGIN_LEFT, MARGIN_TOP
        )
    }

    fn footer(&self) -> &'static str {
        "</g></svg>"
    }
}

fn serialize(primitive: &DrawingPrimitive) -> String {
    match primitive {
        DrawingPrimitive::Rect {
            x,
            y,
            width,
            height,
            color,
        } => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            x,
            y,
            width,
            height,
            color.to_svg_string()
        ),
        DrawingPrimitive::Polyline { points, color } => format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
            format_points(points),
            color.to_svg_string()
        ),
        DrawingPrimitive::Polygon { points, color } => format!(
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"0.5\"/>",
            format_points(points),
            color.to_svg_string()
        ),
        DrawingPrimitive::ArcPath {
            cx,
            cy,
            outer_r,
            inner_r,
            start_angle,
            end_angle,
            color,
        } => {
            let start_x = cx + outer_r * start_angle.cos();
            let start_y = cy + outer_r * start_angle.sin();
            let end_x = cx + outer_r * end_angle.cos();
            let end_y = cy + outer_r * end_angle.sin();

            let inner_start_x = cx + inner_r * start_angle.cos();
            let inner_start_y = cy + inner_r * start_angle.sin();
            let inner_end_x = cx + inner_r * end_angle.cos();
            let inner_end_y = cy + inner_r * end_angle.sin();

            let large_arc = if end_angle - start_angle > std::f64::consts::PI {
                1
            } else {
                0
            };

            format!(
                "<path d=\"M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z\" fill=\"{}\"/>",
                start_x,
                start_y,
                outer_r,
                outer_r,
                large_arc,
                end_x,
                end_y,
                inner_end_x,
                inner_end_y,
                inner_r,
                inner_r,
                large_arc,
                inner_start_x,
                inner_start_y,
                color.to_svg_string()
            )
        }
        DrawingPrimitive::Text {
            x,
            y,
            anchor,
            content,
        } => format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\">{}</text>",
            x,
            y,
            anchor.as_svg(),
            escape_xml(content)
        ),
        DrawingPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            class,
        } => format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" class=\"{}\"/>",
            x1,
            y1,
            x2,
            y2,
            class.as_svg()
        ),
    }
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
