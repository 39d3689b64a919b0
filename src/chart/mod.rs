//! Chart types and the validate/layout dispatch surface.
//!
//! The supported charts form a closed set: one [`ChartType`] variant per
//! chart, each implementing the same `validate` / `layout` pair. A
//! [`Chart`] binds a type to canvas dimensions and drives one full render.

mod bar;
mod doughnut;
mod hexbin;
mod histogram;
mod line;

use log::debug;

use crate::error::{ChartError, ChartResult};
use crate::layout::CoordinateSpace;
use crate::primitive::{DrawingPrimitive, LineClass};
use crate::render::SvgRenderer;
use crate::style::ColorPalette;
use crate::table::Table;

/// Semantic roles assigned to positional input columns. Header names from
/// the source are overwritten; for the bar chart the value-column role names
/// (`value_0`, `value_1`, ...) double as legend labels.
#[derive(Debug, Clone)]
pub struct ColumnRoles {
    pub names: Vec<String>,
}

/// The closed set of supported chart types, carrying their type-specific
/// options.
#[derive(Debug, Clone)]
pub enum ChartType {
    Bar,
    Histogram { bins: usize },
    Line,
    Doughnut,
    Hexbin { ramp: String },
}

impl ChartType {
    /// Short name used in log output and derived output filenames.
    pub fn name(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Histogram { .. } => "histogram",
            ChartType::Line => "line",
            ChartType::Doughnut => "doughnut",
            ChartType::Hexbin { .. } => "hexbin",
        }
    }

    fn min_columns(&self) -> usize {
        match self {
            ChartType::Bar | ChartType::Histogram { .. } | ChartType::Doughnut => 2,
            ChartType::Line | ChartType::Hexbin { .. } => 3,
        }
    }

    /// Check the column-count contract and assign positional roles.
    pub fn validate(&self, table: &Table) -> ChartResult<ColumnRoles> {
        let required = self.min_columns();
        let got = table.column_count();
        if got < required {
            return Err(ChartError::Validation(format!(
                "{} chart requires at least {} columns, got {}",
                self.name(),
                required,
                got
            )));
        }

        let names: Vec<String> = match self {
            // Every column after the category stacks as a value series
            ChartType::Bar => std::iter::once("category".to_string())
                .chain((0..got - 1).map(|i| format!("value_{}", i)))
                .collect(),
            ChartType::Histogram { .. } => vec!["id".into(), "value".into()],
            ChartType::Line => vec!["id".into(), "time".into(), "value".into()],
            ChartType::Doughnut => vec!["category".into(), "value".into()],
            ChartType::Hexbin { .. } => {
                vec!["id".into(), "independent".into(), "dependent".into()]
            }
        };
        Ok(ColumnRoles { names })
    }

    /// Reduce rows to drawing primitives in inner coordinates.
    pub fn layout(
        &self,
        table: &Table,
        roles: &ColumnRoles,
        space: &CoordinateSpace,
        palette: &ColorPalette,
    ) -> ChartResult<Vec<DrawingPrimitive>> {
        match self {
            ChartType::Bar => bar::layout(table, roles, space, palette),
            ChartType::Histogram { bins } => histogram::layout(table, *bins, space, palette),
            ChartType::Line => line::layout(table, space, palette),
            ChartType::Doughnut => doughnut::layout(table, space, palette),
            ChartType::Hexbin { ramp } => hexbin::layout(table, ramp, space, palette),
        }
    }
}

/// A chart type bound to canvas dimensions, ready to render tables.
#[derive(Debug, Clone)]
pub struct Chart {
    chart_type: ChartType,
    space: CoordinateSpace,
}

impl Chart {
    /// Configure a chart. Dimensions must be positive; the histogram
    /// additionally requires at least one bin.
    pub fn new(chart_type: ChartType, width: f64, height: f64) -> ChartResult<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "Chart dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if let ChartType::Histogram { bins } = &chart_type
            && *bins == 0
        {
            return Err(ChartError::InvalidConfig(
                "Histogram requires at least 1 bin".to_string(),
            ));
        }
        Ok(Chart {
            chart_type,
            space: CoordinateSpace::new(width, height),
        })
    }

    /// Render one complete SVG document for the given table.
    pub fn generate(&self, table: &Table) -> ChartResult<String> {
        let roles = self.chart_type.validate(table)?;
        let palette = ColorPalette::new();
        let primitives = self
            .chart_type
            .layout(table, &roles, &self.space, &palette)?;
        debug!(
            "{} chart: {} rows -> {} primitives",
            self.chart_type.name(),
            table.len(),
            primitives.len()
        );
        Ok(SvgRenderer::new(&self.space).render(&primitives))
    }
}

/// Bottom and left axis lines framing the drawable area.
fn axis_lines(chart_width: f64, chart_height: f64) -> [DrawingPrimitive; 2] {
    [
        DrawingPrimitive::Line {
            x1: 0.0,
            y1: chart_height,
            x2: chart_width,
            y2: chart_height,
            class: LineClass::Axis,
        },
        DrawingPrimitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: chart_height,
            class: LineClass::Axis,
        },
    ]
}
