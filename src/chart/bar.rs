//! Stacked bar chart layout.

use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::layout::CoordinateSpace;
use crate::primitive::{Anchor, DrawingPrimitive, LineClass};
use crate::scale::{self, LinearScale};
use crate::style::ColorPalette;
use crate::table::Table;

use super::ColumnRoles;

/// Fixed width reserved at the right edge of the drawable area for the
/// legend, subtracted before bar slots are computed.
const LEGEND_WIDTH: f64 = 120.0;

pub fn layout(
    table: &Table,
    roles: &ColumnRoles,
    space: &CoordinateSpace,
    palette: &ColorPalette,
) -> ChartResult<Vec<DrawingPrimitive>> {
    let chart_height = space.inner_height();
    let chart_width = space.inner_width() - LEGEND_WIDTH;
    let value_count = roles.names.len() - 1;

    // Group rows by category in first-seen order, summing each value column
    let mut grouped: IndexMap<String, Vec<f64>> = IndexMap::new();
    for row in table.rows() {
        let sums = grouped
            .entry(row[0].label())
            .or_insert_with(|| vec![0.0; value_count]);
        for (j, sum) in sums.iter_mut().enumerate() {
            *sum += row[j + 1].number_or_zero();
        }
    }

    // An all-zero maximum keeps every segment at height 0; axes and labels
    // still draw
    let max_total = grouped
        .values()
        .map(|sums| sums.iter().sum::<f64>())
        .fold(0.0, f64::max);
    let y_scale = LinearScale::new(0.0, max_total, chart_height);

    let mut primitives = Vec::new();

    let bar_width = if grouped.is_empty() {
        0.0
    } else {
        chart_width / grouped.len() as f64
    };

    for (i, (category, sums)) in grouped.iter().enumerate() {
        let x = i as f64 * bar_width;
        let mut current_y = chart_height;

        // Segments stack bottom-up in column order
        for (j, &value) in sums.iter().enumerate() {
            let segment_height = y_scale.position(value);
            current_y -= segment_height;
            primitives.push(DrawingPrimitive::Rect {
                x: x + bar_width * 0.1,
                y: current_y,
                width: bar_width * 0.8,
                height: segment_height,
                color: palette.categorical_color(j),
            });
        }

        primitives.push(DrawingPrimitive::Text {
            x: x + bar_width / 2.0,
            y: chart_height + 20.0,
            anchor: Anchor::Middle,
            content: category.clone(),
        });
    }

    primitives.extend(super::axis_lines(chart_width, chart_height));

    // Y-axis labels at quarter positions, gridlines above the baseline
    for (i, y_val) in scale::ticks(0.0, max_total, 5).into_iter().enumerate() {
        let y_pos = chart_height - y_scale.position(y_val);
        primitives.push(DrawingPrimitive::Text {
            x: -10.0,
            y: y_pos + 4.0,
            anchor: Anchor::End,
            content: format!("{:.0}", y_val),
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

    // Legend: one swatch per value column, in column order
    let legend_x = chart_width + 20.0;
    for (j, name) in roles.names[1..].iter().enumerate() {
        let rect_y = 20.0 + j as f64 * 20.0;
        primitives.push(DrawingPrimitive::Rect {
            x: legend_x,
            y: rect_y,
            width: 12.0,
            height: 12.0,
            color: palette.categorical_color(j),
        });
        primitives.push(DrawingPrimitive::Text {
            x: legend_x + 18.0,
            y: rect_y + 9.0,
            anchor: Anchor::Start,
            content: name.clone(),
        });
    }

    Ok(primitives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartType;
    use crate::table::Value;

    fn two_category_table() -> Table {
        Table::new(
            3,
            vec![
                vec![
                    Value::Text("A".into()),
                    Value::Number(10.0),
                    Value::Number(5.0),
                ],
                vec![
                    Value::Text("B".into()),
                    Value::Number(0.0),
                    Value::Number(0.0),
                ],
            ],
        )
    }

    fn bar_rects(primitives: &[DrawingPrimitive]) -> Vec<(f64, f64)> {
        // (y, height) of non-legend rects; legend swatches are 12x12
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Rect {
                    y, width, height, ..
                } if *width != 12.0 => Some((*y, *height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_full_height_stack() {
        let table = two_category_table();
        let space = CoordinateSpace::new(800.0, 600.0);
        let roles = ChartType::Bar.validate(&table).unwrap();
        let primitives = layout(&table, &roles, &space, &ColorPalette::new()).unwrap();

        let rects = bar_rects(&primitives);
        assert_eq!(rects.len(), 4);

        // Category A holds the max total, so its two segments together span
        // the full inner height
        let a_height: f64 = rects[0].1 + rects[1].1;
        assert!((a_height - space.inner_height()).abs() < 1e-9);

        // Category B renders zero-height rects rather than skipping them
        assert_eq!(rects[2].1, 0.0);
        assert_eq!(rects[3].1, 0.0);
    }

    #[test]
    fn test_zero_total_still_labels() {
        let table = Table::new(
            2,
            vec![
                vec![Value::Text("A".into()), Value::Number(0.0)],
                vec![Value::Text("B".into()), Value::Number(0.0)],
            ],
        );
        let space = CoordinateSpace::new(800.0, 600.0);
        let roles = ChartType::Bar.validate(&table).unwrap();
        let primitives = layout(&table, &roles, &space, &ColorPalette::new()).unwrap();

        let labels: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Text {
                    anchor: Anchor::Middle,
                    content,
                    ..
                } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["A", "B"]);

        let axes = primitives
            .iter()
            .filter(|p| {
                matches!(
                    p,
                    DrawingPrimitive::Line {
                        class: LineClass::Axis,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(axes, 2);
    }

    #[test]
    fn test_category_order_preserved() {
        // First-seen order, not alphabetical
        let table = Table::new(
            2,
            vec![
                vec![Value::Text("z".into()), Value::Number(1.0)],
                vec![Value::Text("a".into()), Value::Number(2.0)],
                vec![Value::Text("z".into()), Value::Number(3.0)],
            ],
        );
        let space = CoordinateSpace::new(800.0, 600.0);
        let roles = ChartType::Bar.validate(&table).unwrap();
        let primitives = layout(&table, &roles, &space, &ColorPalette::new()).unwrap();

        let labels: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Text {
                    anchor: Anchor::Middle,
                    content,
                    ..
                } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["z", "a"]);
    }

    #[test]
    fn test_legend_entries() {
        let table = two_category_table();
        let space = CoordinateSpace::new(800.0, 600.0);
        let roles = ChartType::Bar.validate(&table).unwrap();
        let primitives = layout(&table, &roles, &space, &ColorPalette::new()).unwrap();

        let legend_labels: Vec<&str> = primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Text {
                    anchor: Anchor::Start,
                    content,
                    ..
                } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(legend_labels, vec!["value_0", "value_1"]);
    }
}
