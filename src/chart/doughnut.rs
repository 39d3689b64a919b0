//! Doughnut chart layout.

use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::layout::CoordinateSpace;
use crate::primitive::{Anchor, DrawingPrimitive};
use crate::style::ColorPalette;
use crate::table::Table;

pub fn layout(
    table: &Table,
    space: &CoordinateSpace,
    palette: &ColorPalette,
) -> ChartResult<Vec<DrawingPrimitive>> {
    let chart_width = space.inner_width();
    let chart_height = space.inner_height();

    // Sum the value column per category, first-seen order. Wedges are laid
    // out in that order, not sorted by value.
    let mut grouped: IndexMap<String, f64> = IndexMap::new();
    for row in table.rows() {
        *grouped.entry(row[0].label()).or_insert(0.0) += row[1].number_or_zero();
    }
    let total: f64 = grouped.values().sum();

    let radius = chart_width.min(chart_height) / 2.0 * 0.8;
    let inner_radius = radius * 0.5;
    let center_x = chart_width / 2.0;
    let center_y = chart_height / 2.0;

    let mut primitives = Vec::new();

    let mut current_angle: f64 = 0.0;
    for (i, (category, &value)) in grouped.iter().enumerate() {
        // An all-zero total degrades to zero-width wedges instead of
        // dividing by zero
        let angle = if total > 0.0 {
            value / total * 2.0 * PI
        } else {
            0.0
        };

        primitives.push(DrawingPrimitive::ArcPath {
            cx: center_x,
            cy: center_y,
            outer_r: radius,
            inner_r: inner_radius,
            start_angle: current_angle,
            end_angle: current_angle + angle,
            color: palette.categorical_color(i),
        });

        let label_angle = current_angle + angle / 2.0;
        let label_radius = radius + 20.0;
        primitives.push(DrawingPrimitive::Text {
            x: center_x + label_radius * label_angle.cos(),
            y: center_y + label_radius * label_angle.sin(),
            anchor: Anchor::Middle,
            content: category.clone(),
        });

        current_angle += angle;
    }

    Ok(primitives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn category_table(entries: &[(&str, f64)]) -> Table {
        let rows = entries
            .iter()
            .map(|(c, v)| vec![Value::Text(c.to_string()), Value::Number(*v)])
            .collect();
        Table::new(2, rows)
    }

    fn wedge_angles(primitives: &[DrawingPrimitive]) -> Vec<(f64, f64)> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::ArcPath {
                    start_angle,
                    end_angle,
                    ..
                } => Some((*start_angle, *end_angle)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_angles_sum_to_full_circle() {
        let table = category_table(&[("a", 3.0), ("b", 1.0), ("c", 7.5), ("d", 0.5)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, &space, &ColorPalette::new()).unwrap();

        let angles = wedge_angles(&primitives);
        let total: f64 = angles.iter().map(|(s, e)| e - s).sum();
        assert!((total - 2.0 * PI).abs() < 1e-9);

        // Wedges tile the circle contiguously from angle 0
        assert_eq!(angles[0].0, 0.0);
        for pair in angles.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wedge_order_is_first_seen() {
        // "b" appears first and dominates; it still draws first from angle 0
        let table = category_table(&[("b", 1.0), ("a", 99.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, &space, &ColorPalette::new()).unwrap();

        let labels: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["b", "a"]);

        let angles = wedge_angles(&primitives);
        assert!(angles[0].1 - angles[0].0 < angles[1].1 - angles[1].0);
    }

    #[test]
    fn test_zero_total_renders_empty_wedges() {
        let table = category_table(&[("a", 0.0), ("b", 0.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, &space, &ColorPalette::new()).unwrap();

        let angles = wedge_angles(&primitives);
        assert_eq!(angles.len(), 2);
        assert!(angles.iter().all(|(s, e)| s == e));
    }

    #[test]
    fn test_majority_wedge_sets_large_arc() {
        let table = category_table(&[("big", 9.0), ("small", 1.0)]);
        let space = CoordinateSpace::new(800.0, 600.0);
        let primitives = layout(&table, &space, &ColorPalette::new()).unwrap();

        let angles = wedge_angles(&primitives);
        assert!(angles[0].1 - angles[0].0 > PI);
        assert!(angles[1].1 - angles[1].0 < PI);
    }
}
