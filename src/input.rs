//! CSV ingestion producing a [`Table`].
//!
//! The first record is treated as a header and its names are discarded:
//! charts assign semantic column roles by position, not by header lookup.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::error::{ChartError, ChartResult};
use crate::table::{Table, Value};

/// Read a table from a CSV file, or from stdin when no path is given.
pub fn read_table(path: Option<&Path>) -> ChartResult<Table> {
    match path {
        Some(p) => {
            let file = File::open(p).map_err(|e| {
                ChartError::Io(io::Error::other(format!(
                    "Error opening input file {}: {}",
                    p.display(),
                    e
                )))
            })?;
            read_table_from_reader(file)
        }
        None => read_table_from_reader(io::stdin().lock()),
    }
}

/// Read a table from any reader.
pub fn read_table_from_reader<R: Read>(reader: R) -> ChartResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let column_count = csv_reader
        .headers()
        .map_err(|e| ChartError::InvalidData(format!("Malformed CSV header: {}", e)))?
        .len();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| {
            ChartError::InvalidData(format!("Malformed CSV record at line {}: {}", i + 2, e))
        })?;
        rows.push(record.iter().map(Value::parse).collect());
    }

    debug!("read {} rows x {} columns", rows.len(), column_count);
    Ok(Table::new(column_count, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_csv_parsing() {
        let data = "id,category,value\n1,west,10\n2,east,2.5\n";
        let table = read_table_from_reader(Cursor::new(data)).unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][1], Value::Text("west".to_string()));
        assert_eq!(table.rows()[1][2], Value::Number(2.5));
    }

    #[test]
    fn test_header_names_discarded() {
        // Header names are irrelevant; only the count matters
        let data = "whatever,names,here\na,1,2\n";
        let table = read_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_ragged_record_is_error() {
        let data = "a,b,c\n1,2,3\n4,5\n";
        let result = read_table_from_reader(Cursor::new(data));
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only() {
        let data = "a,b\n";
        let table = read_table_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }
}
