//! Histogram layout.

use crate::error::ChartResult;
use crate::layout::CoordinateSpace;
use crate::primitive::{Anchor, DrawingPrimitive, LineClass};
use crate::scale::{self, LinearScale};
use crate::style::ColorPalette;
use crate::table::Table;

/// Gap between adjacent bars, in pixels.
const BAR_GUTTER: f64 = 1.0;

pub fn layout(
    table: &Table,
    bins: usize,
    space: &CoordinateSpace,
    palette: &ColorPalette,
) -> ChartResult<Vec<DrawingPrimitive>> {
    let chart_width = space.inner_width();
    let chart_height = space.inner_height();

    // Non-numeric cells in the value column are excluded from binning
    let values: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|row| row[1].as_number())
        .collect();
    let (min, max) = table.column_extent(1).unwrap_or((0.0, 0.0));
    let range = max - min;

    // Equal-width intervals over [min, max]; each bin is right-open except
    // the final bin, which also includes the maximum
    let mut counts = vec![0usize; bins];
    for &v in &values {
        let idx = if range == 0.0 {
            0
        } else {
            (((v - min) / range) * bins as f64).floor() as usize
        };
        counts[idx.min(bins - 1)] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0) as f64;
    let y_scale = LinearScale::new(0.0, max_count, chart_height);
    let bin_width = chart_width / bins as f64;

    let mut primitives = Vec::new();

    for (i, &count) in counts.iter().enumerate() {
        let bar_height = y_scale.position(count as f64);
        primitives.push(DrawingPrimitive::Rect {
            x: i as f64 * bin_width,
            y: chart_height - bar_height,
            width: bin_width - BAR_GUTTER,
            height: bar_height,
            color: palette.histogram_color,
        });
    }

    primitives.extend(super::axis_lines(chart_width, chart_height));

    // X-axis labels at bin-edge positions, subsampled to avoid crowding
    let step = (bins / 5).max(1);
    for i in (0..=bins).step_by(step) {
        let edge = min + range * i as f64 / bins as f64;
        primitives.push(DrawingPrimitive::Text {
            x: i as f64 * bin_width,
            y: chart_height + 20.0,
            anchor: Anchor::Middle,
            content: format!("{:.1}", edge),
        });
    }

    // Y-axis labels at quarter positions with integer formatting
    for (i, y_val) in scale::ticks(0.0, max_count, 5).into_iter().enumerate() {
        let y_pos = chart_height - y_scale.position(y_val);
        primitives.push(DrawingPrimitive::Text {
            x: -10.0,
            y: y_pos + 4.0,
            anchor: Anchor::End,
            content: format!("{}", y_val as i64),
        });
        if i > 0 {
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
