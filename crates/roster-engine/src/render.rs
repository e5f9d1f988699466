//! Presentation adapter
//!
//! Listings hand over rows as ordered JSON maps; the map keys become the
//! column headers in the order the row type declares its fields.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::io::{self, Write};

/// One table row: column name to value, in column order
pub type Row = Map<String, Value>;

/// Shown instead of a table when there is nothing to list
pub const EMPTY_TABLE: &str = "No rows to display";

/// Displays a row set
pub trait Renderer {
    /// Render `rows` as one table
    ///
    /// # Errors
    /// Returns the underlying write error.
    fn render(&mut self, rows: &[Row]) -> io::Result<()>;
}

/// Serialize listing records into table rows
///
/// # Errors
/// Returns an error if a record does not serialize to a JSON object.
pub fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<Row>, serde_json::Error> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record)? {
            Value::Object(row) => Ok(row),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "expected a record, got {}",
                other
            ))),
        })
        .collect()
}

/// Draws rows as a console table
pub struct TableRenderer<W> {
    output: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, rows: &[Row]) -> io::Result<()> {
        let Some(first) = rows.first() else {
            writeln!(self.output, "{}", EMPTY_TABLE)?;
            return self.output.flush();
        };

        let headers: Vec<String> = first.keys().cloned().collect();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(headers.clone());
        for row in rows {
            table.add_row(
                headers
                    .iter()
                    .map(|header| format_cell(row.get(header)))
                    .collect::<Vec<_>>(),
            );
        }

        writeln!(self.output, "{}", table)?;
        self.output.flush()
    }
}

fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "NULL".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => format_number(number),
        Some(other) => other.to_string(),
    }
}

/// Whole-number floats print without a fractional part
fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{:.0}", value)
        }
        _ => number.to_string(),
    }
}
