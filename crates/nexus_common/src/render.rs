//! Category table output
//!
//! Data goes to `out` (stdout in the binary), diagnostics to `err` (stderr).

use crate::category::{sort_categories, CategoryRecord};
use serde_json::Value;
use std::io::{self, Write};

pub const TABLE_HEADER: &str = "category_id\tname\tparent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Count line, header, one tab-separated line per category
    #[default]
    Table,
    /// Sorted records as a pretty-printed JSON array
    Json,
}

/// Sort and print `records`. Returns the number of data rows written.
pub fn render<O: Write, E: Write>(
    domain: &str,
    mut records: Vec<CategoryRecord>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<usize> {
    sort_categories(&mut records);

    if records.is_empty() {
        writeln!(err, "No categories found.")?;
        if format == OutputFormat::Json {
            writeln!(out, "[]")?;
        }
        return Ok(0);
    }

    match format {
        OutputFormat::Table => {
            writeln!(out, "Found {} categories for '{}':", records.len(), domain)?;
            writeln!(out, "{}", TABLE_HEADER)?;
            for record in &records {
                writeln!(out, "{}", table_row(record))?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(records.len())
}

/// `identifier<TAB>name<TAB>parent`
pub fn table_row(record: &CategoryRecord) -> String {
    format!(
        "{}\t{}\t{}",
        cell(record.identifier()),
        cell(record.name()),
        cell(record.parent())
    )
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
