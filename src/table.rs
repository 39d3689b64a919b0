//! Tabular input model.
//!
//! Charts consume positional columns; header names from the source file are
//! discarded and each chart type reassigns semantic roles by position.

/// One cell of tabular input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Parse a raw field, preferring a numeric interpretation.
    pub fn parse(field: &str) -> Value {
        match field.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(field.to_string()),
        }
    }

    /// Numeric view of this value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Numeric view with non-numeric cells treated as zero. Value columns
    /// are coerced rather than rejected so a stray text cell degrades the
    /// drawing instead of aborting the render.
    pub fn number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// Display label for category/id cells. Whole numbers drop the trailing
    /// ".0" so numeric categories read like the source file.
    pub fn label(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Value::Number(n) => format!("{}", n),
        }
    }
}

/// An ordered sequence of rows with a declared column count.
#[derive(Debug, Clone)]
pub struct Table {
    column_count: usize,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from pre-parsed rows. Rows are expected to match the
    /// declared column count; the ingestion layer enforces this.
    pub fn new(column_count: usize, rows: Vec<Vec<Value>>) -> Self {
        Table { column_count, rows }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Min and max over the numeric values of one column, or `None` when the
    /// column holds no numeric values.
    pub fn column_extent(&self, col: usize) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for row in &self.rows {
            if let Some(v) = row[col].as_number() {
                extent = Some(match extent {
                    Some((min, max)) => (min.min(v), max.max(v)),
                    None => (v, v),
                });
            }
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parse() {
        assert_eq!(Value::parse("3.5"), Value::Number(3.5));
        assert_eq!(Value::parse(" 42 "), Value::Number(42.0));
        assert_eq!(Value::parse("apples"), Value::Text("apples".to_string()));
        assert_eq!(Value::parse("2024-01-01"), Value::Text("2024-01-01".to_string()));
    }

    #[test]
    fn test_value_label() {
        assert_eq!(Value::Number(7.0).label(), "7");
        assert_eq!(Value::Number(7.25).label(), "7.25");
        assert_eq!(Value::Text("west".into()).label(), "west");
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(Value::Text("n/a".into()).number_or_zero(), 0.0);
        assert_eq!(Value::Number(1.5).number_or_zero(), 1.5);
    }

    #[test]
    fn test_column_extent() {
        let table = Table::new(
            2,
            vec![
                vec![Value::Text("a".into()), Value::Number(5.0)],
                vec![Value::Text("b".into()), Value::Number(-1.0)],
                vec![Value::Text("c".into()), Value::Text("oops".into())],
            ],
        );
        assert_eq!(table.column_extent(1), Some((-1.0, 5.0)));
        assert_eq!(table.column_extent(0), None);
    }
}
