//! Hexagonal binning layout.

use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::layout::CoordinateSpace;
use crate::primitive::{Anchor, DrawingPrimitive};
use crate::scale::{self, LinearScale};
use crate::style::ColorPalette;
use crate::table::Table;

/// Fixed hexagon radius (center to vertex), in pixels.
const HEX_RADIUS: f64 = 20.0;

pub fn layout(
    table: &Table,
    ramp: &str,
    space: &CoordinateSpace,
    palette: &ColorPalette,
) -> ChartResult<Vec<DrawingPrimitive>> {
    let chart_width = space.inner_width();
    let chart_height = space.inner_height();
    let hex_height = HEX_RADIUS * 3.0_f64.sqrt();

    let (x_min, x_max) = table.column_extent(1).unwrap_or((0.0, 0.0));
    let (y_min, y_max) = table.column_extent(2).unwrap_or((0.0, 0.0));

    // Normalize both columns to [0,1]; zero-range domains collapse to 0
    let x_norm = LinearScale::new(x_min, x_max, 1.0);
    let y_norm = LinearScale::new(y_min, y_max, 1.0);

    let hex_cols = (chart_width / (HEX_RADIUS * 1.5)) as i64 + 1;
    let hex_rows = (chart_height / hex_height) as i64 + 1;

    // Count rows per occupied cell, insertion-ordered for stable output
    let mut cell_counts: IndexMap<(i64, i64), usize> = IndexMap::new();
    for row in table.rows() {
        let col = (x_norm.position(row[1].number_or_zero()) * hex_cols as f64).floor() as i64;
        let row_idx = (y_norm.position(row[2].number_or_zero()) * hex_rows as f64).floor() as i64;
        *cell_counts.entry((col, row_idx)).or_insert(0) += 1;
    }

    let mut primitives = Vec::new();

    // No data: emit the bare document frame without axes
    if cell_counts.is_empty() {
        return Ok(primitives);
    }

    let max_count = cell_counts.values().copied().max().unwrap_or(0) as f64;
    let ramp_colors = palette.ramp_colors(ramp);

    for (&(col, row), &count) in &cell_counts {
        let x = col as f64 * HEX_RADIUS * 1.5;
        let mut y = row as f64 * hex_height;
        // Odd columns drop by half a hex height (packed grid)
        if col % 2 == 1 {
            y += hex_height / 2.0;
        }

        let stop = ((count as f64 / max_count) * (ramp_colors.len() - 1) as f64) as usize;
        let color = ramp_colors[stop.min(ramp_colors.len() - 1)];

        let points: Vec<(f64, f64)> = (0..6)
            .map(|i| {
                let angle = i as f64 * PI / 3.0;
                (x + HEX_RADIUS * angle.cos(), y + HEX_RADIUS * angle.sin())
            })
            .collect();
        primitives.push(DrawingPrimitive::Polygon { points, color });
    }

    primitives.extend(super::axis_lines(chart_width, chart_height));

    // Quarter-position labels on both axes
    for (i, x_val) in scale::ticks(x_min, x_max, 5).into_iter().enumerate() {
        primitives.push(DrawingPrimitive::Text {
            x: i as f64 / 4.0 * chart_width,
            y: chart_height + 20.0,
            anchor: Anchor::Middle,
            content: format!("{:.1}", x_val),
        });
    }
    for (i, y_val) in scale::ticks(y_min, y_max, 5).into_iter().enumerate() {
        primitives.push(DrawingPrimitive::Text {
            x: -10.0,
            y: chart_height - i as f64 / 4.0 * chart_height + 4.0,
            anchor: Anchor::End,
            content: format!("{:.1}", y_val),
        });
    }

    Ok(primitives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn point_table(points: &[(f64, f64)]) -> Table {
        let rows = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                vec![
                    Value::Number(i as f64),
                    Value::Number(*x),
                    Value::Number(*y),
                ]
            })
            .collect();
        Table::new(3, rows)
    }

    fn polygons(primitives: &[DrawingPrimitive]) -> usize {
        primitives
            .iter()
            .filter(|p| matches!(p, DrawingPrimitive::Polygon { .. }))
            .count()
    }

    #[test]
    fn test_deterministic_output() {
        let table = point_table(&[
            (0.0, 0.0),
            (1.0, 2.0),
            (3.5, 1.5),
            (1.0, 2.0),
            (9.0, 9.0),
        ]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let palette = ColorPalette::new();

        let first = layout(&table, "Blues", &space, &palette).unwrap();
        let second = layout(&table, "Blues", &space, &palette).unwrap();
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn test_coincident_points_share_a_cell() {
        let table = point_table(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (5.0, 5.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, "Blues", &space, &ColorPalette::new()).unwrap();

        // Two occupied cells, not four
        assert_eq!(polygons(&primitives), 2);
    }

    #[test]
    fn test_densest_cell_gets_last_stop() {
        let palette = ColorPalette::new();
        let last = *palette.ramp_colors("Greens").last().unwrap();

        let table = point_table(&[(0.0, 0.0), (10.0, 10.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, "Greens", &space, &palette).unwrap();

        // Every cell holds the max count here, so all take the final stop
        for p in &primitives {
            if let DrawingPrimitive::Polygon { color, .. } = p {
                assert_eq!(*color, last);
            }
        }
    }

    #[test]
    fn test_hexagon_geometry() {
        let table = point_table(&[(0.0, 0.0), (1.0, 1.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, "Blues", &space, &ColorPalette::new()).unwrap();

        for p in &primitives {
            if let DrawingPrimitive::Polygon { points, .. } = p {
                assert_eq!(points.len(), 6);
                // All vertices sit on the fixed radius around the center
                let cx = points.iter().map(|(x, _)| x).sum::<f64>() / 6.0;
                let cy = points.iter().map(|(_, y)| y).sum::<f64>() / 6.0;
                for (x, y) in points {
                    let r = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
                    assert!((r - HEX_RADIUS).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_empty_input_renders_no_axes() {
        let table = point_table(&[]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, "Blues", &space, &ColorPalette::new()).unwrap();
        assert!(primitives.is_empty());
    }

    #[test]
    fn test_zero_range_collapses_to_origin_cell() {
        let table = point_table(&[(5.0, 5.0), (5.0, 5.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, "Blues", &space, &ColorPalette::new()).unwrap();
        assert_eq!(polygons(&primitives), 1);
    }
}
