//! Multi-series line chart layout.

use indexmap::IndexMap;
use log::warn;

use crate::error::{ChartError, ChartResult};
use crate::layout::CoordinateSpace;
use crate::primitive::{Anchor, DrawingPrimitive, LineClass};
use crate::scale::{self, LinearScale, TemporalScale};
use crate::style::ColorPalette;
use crate::table::{Table, Value};
use crate::utils::time::parse_timestamp;

/// Interpret a time cell: numbers are epoch seconds, text is parsed as an
/// ISO 8601 date or datetime.
fn time_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => parse_timestamp(s),
    }
}

pub fn layout(
    table: &Table,
    space: &CoordinateSpace,
    palette: &ColorPalette,
) -> ChartResult<Vec<DrawingPrimitive>> {
    let chart_width = space.inner_width();
    let chart_height = space.inner_height();

    // Group (time, value) points by series id in first-seen order
    let mut groups: IndexMap<String, Vec<(f64, f64)>> = IndexMap::new();
    for (i, row) in table.rows().iter().enumerate() {
        let time = time_value(&row[1]).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "Unparseable time value '{}' in row {}",
                row[1].label(),
                i + 1
            ))
        })?;
        groups
            .entry(row[0].label())
            .or_default()
            .push((time, row[2].number_or_zero()));
    }

    // Shared scales over the global extents of all series combined
    let mut time_extent: Option<(f64, f64)> = None;
    let mut value_extent: Option<(f64, f64)> = None;
    for (t, v) in groups.values().flatten() {
        time_extent = Some(match time_extent {
            Some((lo, hi)) => (lo.min(*t), hi.max(*t)),
            None => (*t, *t),
        });
        value_extent = Some(match value_extent {
            Some((lo, hi)) => (lo.min(*v), hi.max(*v)),
            None => (*v, *v),
        });
    }
    let (min_time, max_time) = time_extent.unwrap_or((0.0, 0.0));
    let (min_value, max_value) = value_extent.unwrap_or((0.0, 0.0));

    let x_scale = TemporalScale::new(min_time, max_time, chart_width);
    let y_scale = LinearScale::new(min_value, max_value, chart_height);

    let mut primitives = Vec::new();

    for (i, (id, points)) in groups.iter().enumerate() {
        // A single point cannot form a polyline; the series is omitted but
        // keeps its slot in the color cycle
        if points.len() < 2 {
            warn!("line chart: series '{}' has fewer than 2 points, skipping", id);
            continue;
        }

        let mut sorted = points.clone();
        sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let pixel_points: Vec<(f64, f64)> = sorted
            .iter()
            .map(|&(t, v)| {
                (
                    x_scale.position(t),
                    chart_height - y_scale.position(v),
                )
            })
            .collect();

        primitives.push(DrawingPrimitive::Polyline {
            points: pixel_points,
            color: palette.categorical_color(i),
        });
    }

    primitives.extend(super::axis_lines(chart_width, chart_height));

    // Y-axis labels between the global extents; only the three interior
    // ticks draw a gridline
    for (i, y_val) in scale::ticks(min_value, max_value, 5)
        .into_iter()
        .enumerate()
    {
        let y_pos = chart_height - y_scale.position(y_val);
        primitives.push(DrawingPrimitive::Text {
            x: -10.0,
            y: y_pos + 4.0,
            anchor: Anchor::End,
            content: format!("{:.1}", y_val),
        });
        if i > 0 && i < 4 {
            primitives.push(DrawingPrimitive::Line {
                x1: 0.0,
                y1: y_pos,
                x2: chart_width,
                y2: y_pos,
                class: LineClass::Tick,
            });
        }
    }

    Ok(primitives)
}
