//! CSV export of the projected summary.

use std::io::Write;

use crate::common::Result;
use crate::summary::SummaryTable;
use crate::table::CellValue;

/// Header text shown for the blank-status column.
pub const BLANK_COLUMN_LABEL: &str = "(blank)";

/// Write the summary table as CSV.
///
/// Fields containing delimiters, quotes or line breaks are quoted with
/// doubled quote characters. Booleans render as TRUE/FALSE, matching how
/// spreadsheets display them.
pub fn write_summary_csv<W: Write>(table: &SummaryTable, writer: &mut W) -> Result<()> {
    for (i, column) in table.columns.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_field(writer, display_header(column))?;
    }
    writer.write_all(b"\n")?;

    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                writer.write_all(b",")?;
            }
            write_field(writer, &cell_text(cell))?;
        }
        writer.write_all(b"\n")?;
    }

    Ok(())
}

/// Render the summary table to CSV bytes.
pub fn summary_csv_bytes(table: &SummaryTable) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_summary_csv(table, &mut bytes)?;
    Ok(bytes)
}

/// Column header as displayed; the blank status gets a visible label.
pub fn display_header(column: &str) -> &str {
    if column.is_empty() {
        BLANK_COLUMN_LABEL
    } else {
        column
    }
}

fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Bool(true) => "TRUE".to_string(),
        CellValue::Bool(false) => "FALSE".to_string(),
        other => other.to_text(),
    }
}

fn write_field<W: Write>(writer: &mut W, field: &str) -> Result<()> {
    let needs_quote = field
        .bytes()
        .any(|byte| matches!(byte, b',' | b'"' | b'\n' | b'\r'));

    if needs_quote {
        let escaped = field.replace('"', "\"\"");
        writer.write_all(b"\"")?;
        writer.write_all(escaped.as_bytes())?;
        writer.write_all(b"\"")?;
    } else {
        writer.write_all(field.as_bytes())?;
    }

    Ok(())
}
