//! Workbook export of the summary.
//!
//! Produces a styled summary sheet with a colour scale on the completion
//! column and a weighted overall-completion footer, plus a second sheet
//! holding the raw input rows for reference.

use std::path::Path;

use rust_xlsxwriter::{
    ConditionalFormat3ColorScale, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};

use crate::common::Result;
use crate::summary::{
    display_status_columns, overall_percent, Summary, COMPUTED_COLUMNS, IDENTITY_COLUMNS,
};
use crate::table::{CellValue, DataTable};

use super::csv::display_header;

/// Name of the styled summary sheet.
pub const SUMMARY_SHEET_NAME: &str = "Status Summary";

/// Name of the sheet carrying the raw input rows.
pub const RAW_DATA_SHEET_NAME: &str = "Raw Data";

/// Reusable cell formats
struct SheetFormats {
    header: Format,
    text: Format,
    integer: Format,
    percent: Format,
    footer: Format,
    footer_percent: Format,
}

fn create_formats() -> SheetFormats {
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(0x4472C4)
        .set_font_color(0xFFFFFF)
        .set_border(FormatBorder::Thin);

    let text = Format::new().set_border(FormatBorder::Thin);

    let integer = Format::new()
        .set_num_format("#,##0")
        .set_border(FormatBorder::Thin);

    let percent = Format::new()
        .set_num_format("0\"%\"")
        .set_border(FormatBorder::Thin);

    let footer = Format::new()
        .set_bold()
        .set_background_color(0xE2EFDA)
        .set_border(FormatBorder::Thin);

    let footer_percent = Format::new()
        .set_bold()
        .set_num_format("0\"%\"")
        .set_background_color(0xE2EFDA)
        .set_border(FormatBorder::Thin);

    SheetFormats {
        header,
        text,
        integer,
        percent,
        footer,
        footer_percent,
    }
}

/// Write the summary workbook to a file.
pub fn write_summary_workbook<P: AsRef<Path>>(
    path: P,
    summary: &Summary,
    raw: &DataTable,
) -> Result<()> {
    let mut workbook = build_workbook(summary, raw)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

/// Render the summary workbook to bytes.
pub fn summary_workbook_bytes(summary: &Summary, raw: &DataTable) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(summary, raw)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(summary: &Summary, raw: &DataTable) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let formats = create_formats();

    add_summary_sheet(&mut workbook, summary, &formats)?;
    add_raw_data_sheet(&mut workbook, raw, &formats)?;

    Ok(workbook)
}

fn add_summary_sheet(
    workbook: &mut Workbook,
    summary: &Summary,
    formats: &SheetFormats,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET_NAME)?;

    let status_columns = display_status_columns(summary);
    let pct_col = (IDENTITY_COLUMNS.len() + status_columns.len() + 1) as u16;
    let last_col = pct_col + 2;

    let mut col: u16 = 0;
    for name in IDENTITY_COLUMNS {
        sheet.write_with_format(0, col, name, &formats.header)?;
        col += 1;
    }
    for (label, _) in &status_columns {
        sheet.write_with_format(0, col, display_header(label), &formats.header)?;
        col += 1;
    }
    for name in COMPUTED_COLUMNS {
        sheet.write_with_format(0, col, name, &formats.header)?;
        col += 1;
    }

    let mut row_num = 1u32;
    for row in &summary.rows {
        let identity = [
            &row.key.project_ref,
            &row.key.project_description,
            &row.key.project_owner,
            &row.key.event_name,
        ];
        let mut col: u16 = 0;
        for value in identity {
            sheet.write_with_format(row_num, col, value, &formats.text)?;
            col += 1;
        }
        for (_, index) in &status_columns {
            sheet.write_with_format(
                row_num,
                col,
                row.merged_counts[*index] as f64,
                &formats.integer,
            )?;
            col += 1;
        }
        sheet.write_with_format(row_num, col, row.total_lines as f64, &formats.integer)?;
        sheet.write_with_format(
            row_num,
            col + 1,
            row.percent_completed as f64,
            &formats.percent,
        )?;
        sheet.write_with_format(row_num, col + 2, row.check_total as f64, &formats.integer)?;
        sheet.write_with_format(row_num, col + 3, row.check_passes, &formats.text)?;
        row_num += 1;
    }

    if !summary.rows.is_empty() {
        // Colour scale over the completion column, data rows only
        let scale = ConditionalFormat3ColorScale::new();
        sheet.add_conditional_format(1, pct_col, row_num - 1, pct_col, &scale)?;

        let overall = overall_percent(
            summary
                .rows
                .iter()
                .map(|row| (row.percent_completed, row.total_lines)),
        );
        sheet.write_with_format(row_num, 0, "overall_%_completed", &formats.footer)?;
        for col in 1..=last_col {
            if col == pct_col {
                sheet.write_with_format(row_num, col, overall as f64, &formats.footer_percent)?;
            } else {
                sheet.write_with_format(row_num, col, "", &formats.footer)?;
            }
        }
    }

    sheet.autofit();

    Ok(())
}

fn add_raw_data_sheet(
    workbook: &mut Workbook,
    raw: &DataTable,
    formats: &SheetFormats,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(RAW_DATA_SHEET_NAME)?;

    for (col, header) in raw.headers().iter().enumerate() {
        sheet.write_with_format(0, col as u16, header, &formats.header)?;
    }

    for (i, row) in raw.rows().iter().enumerate() {
        let row_num = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            write_cell(sheet, row_num, col as u16, cell)?;
        }
    }

    sheet.autofit();

    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Empty => {},
        CellValue::Bool(value) => {
            sheet.write(row, col, *value)?;
        },
        CellValue::Int(value) => {
            sheet.write(row, col, *value as f64)?;
        },
        CellValue::Float(value) => {
            sheet.write(row, col, *value)?;
        },
        CellValue::String(value) => {
            sheet.write(row, col, value)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::workbook_table_from_bytes;
    use crate::summary::summarize;

    fn raw_table(rows: &[[&str; 6]]) -> DataTable {
        let headers: Vec<String> = [
            "project_ref",
            "project_description",
            "project_owner",
            "event_name",
            "brief_ref",
            "content_brief_status",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let cells = rows
            .iter()
            .map(|row| row.iter().map(|v| CellValue::parse(v)).collect())
            .collect();
        DataTable::new(headers, cells)
    }

    fn as_count(cell: &CellValue) -> u64 {
        match cell {
            CellValue::Int(value) => *value as u64,
            CellValue::Float(value) => *value as u64,
            other => panic!("Expected numeric cell, got {:?}", other),
        }
    }

    #[test]
    fn test_workbook_bytes_are_a_zip_package() {
        let raw = raw_table(&[["P1", "D", "O", "E", "B1", "completed"]]);
        let summary = summarize(&raw).unwrap();

        let bytes = summary_workbook_bytes(&summary, &raw).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_summary_sheet_round_trips_through_reader() {
        let raw = raw_table(&[
            ["P1", "Spring", "Avery", "Launch", "B1", "draft"],
            ["P1", "Spring", "Avery", "Launch", "B2", "draft"],
            ["P1", "Spring", "Avery", "Launch", "B3", "completed"],
        ]);
        let summary = summarize(&raw).unwrap();
        let bytes = summary_workbook_bytes(&summary, &raw).unwrap();

        let sheet = workbook_table_from_bytes(&bytes, SUMMARY_SHEET_NAME, 0).unwrap();
        assert_eq!(
            sheet.headers(),
            &[
                "project_ref",
                "project_description",
                "project_owner",
                "event_name",
                "awaiting_brief",
                "completed",
                "total_lines",
                "%_completed",
                "check_total",
                "check_passes",
            ]
        );

        // One data row plus the overall footer
        assert_eq!(sheet.row_count(), 2);
        let data = &sheet.rows()[0];
        assert_eq!(as_count(&data[4]), 2);
        assert_eq!(as_count(&data[5]), 1);
        assert_eq!(as_count(&data[6]), 3);
        assert_eq!(as_count(&data[7]), 33);
        assert_eq!(data[9], CellValue::Bool(true));

        let footer = &sheet.rows()[1];
        assert_eq!(
            footer[0],
            CellValue::String("overall_%_completed".to_string())
        );
        assert_eq!(as_count(&footer[7]), 33);
    }

    #[test]
    fn test_raw_sheet_mirrors_input() {
        let raw = raw_table(&[
            ["P1", "Spring", "Avery", "Launch", "B1", "draft"],
            ["P2", "Autumn", "Blair", "Refresh", "B2", "completed"],
        ]);
        let summary = summarize(&raw).unwrap();
        let bytes = summary_workbook_bytes(&summary, &raw).unwrap();

        let sheet = workbook_table_from_bytes(&bytes, RAW_DATA_SHEET_NAME, 0).unwrap();
        assert_eq!(sheet.headers(), raw.headers());
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.rows()[1][5], CellValue::String("completed".to_string()));
    }

    #[test]
    fn test_footer_uses_weighted_overall_percent() {
        // 100% of 1 line, 0% of 9 lines: overall must be 10, not 50
        let mut rows = vec![["P1", "D", "O", "E", "B0", "completed"]];
        let nine = [
            "B1", "B2", "B3", "B4", "B5", "B6", "B7", "B8", "B9",
        ];
        let rows_p2: Vec<[&str; 6]> = nine
            .iter()
            .map(|brief| ["P2", "D2", "O2", "E2", *brief, "draft"])
            .collect();
        rows.extend(rows_p2);

        let raw = raw_table(&rows);
        let summary = summarize(&raw).unwrap();
        let bytes = summary_workbook_bytes(&summary, &raw).unwrap();

        let sheet = workbook_table_from_bytes(&bytes, SUMMARY_SHEET_NAME, 0).unwrap();
        let pct_header = sheet
            .headers()
            .iter()
            .position(|h| h == "%_completed")
            .unwrap();
        let footer = sheet.rows().last().unwrap();
        assert_eq!(as_count(&footer[pct_header]), 10);
    }

    #[test]
    fn test_empty_summary_exports_headers_only() {
        let raw = raw_table(&[]);
        let summary = summarize(&raw).unwrap();
        let bytes = summary_workbook_bytes(&summary, &raw).unwrap();

        let sheet = workbook_table_from_bytes(&bytes, SUMMARY_SHEET_NAME, 0).unwrap();
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.headers().len(), 8);
    }
}
