//! Reader for Excel workbook exports (`.xlsx`).
//!
//! Workbooks are ZIP packages of XML parts. Only the parts the summary
//! pipeline needs are touched: the workbook part (sheet names), the workbook
//! relationships (sheet part paths), the shared strings table and the
//! requested worksheet.
//!
//! Performance notes:
//! - Uses memchr for fast tag and attribute scanning
//! - Uses atoi_simd for integer parsing
//! - Uses fast_float2 for float parsing

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use memchr::memmem;
use zip::result::ZipError;

use crate::common::xml::unescape_xml;
use crate::common::{Error, Result};
use crate::table::{CellValue, DataTable};

/// A sheet entry from the workbook part.
#[derive(Debug, Clone, PartialEq)]
struct SheetEntry {
    /// Display name, XML entities resolved
    name: String,
    /// Relationship id pointing at the worksheet part
    rel_id: String,
}

/// Read one named sheet of a workbook file into a table.
pub fn load_workbook_table<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
    skip_rows: usize,
) -> Result<DataTable> {
    let file = File::open(path)?;
    workbook_table_from_reader(file, sheet_name, skip_rows)
}

/// Read one named sheet of an in-memory workbook into a table.
pub fn workbook_table_from_bytes(
    bytes: &[u8],
    sheet_name: &str,
    skip_rows: usize,
) -> Result<DataTable> {
    workbook_table_from_reader(Cursor::new(bytes), sheet_name, skip_rows)
}

fn workbook_table_from_reader<R: Read + Seek>(
    reader: R,
    sheet_name: &str,
    skip_rows: usize,
) -> Result<DataTable> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let workbook_xml = read_member(&mut archive, "xl/workbook.xml")?
        .ok_or_else(|| Error::Container("Missing workbook part xl/workbook.xml".to_string()))?;
    let sheets = parse_sheet_entries(&workbook_xml);

    let entry = sheets
        .iter()
        .find(|sheet| sheet.name == sheet_name)
        .ok_or_else(|| Error::SheetNotFound {
            name: sheet_name.to_string(),
            available: sheets
                .iter()
                .map(|sheet| sheet.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let rels_xml = read_member(&mut archive, "xl/_rels/workbook.xml.rels")?.ok_or_else(|| {
        Error::Container("Missing workbook relationships part".to_string())
    })?;
    let target = relationship_target(&rels_xml, &entry.rel_id).ok_or_else(|| {
        Error::Container(format!("No worksheet part for sheet '{}'", entry.name))
    })?;
    let sheet_path = resolve_part_path(&target);

    let shared = match read_member(&mut archive, "xl/sharedStrings.xml")? {
        Some(xml) => parse_shared_strings(&xml),
        None => Vec::new(),
    };

    let sheet_xml = read_member(&mut archive, &sheet_path)?
        .ok_or_else(|| Error::Container(format!("Missing worksheet part {}", sheet_path)))?;
    let grid = parse_sheet_grid(&sheet_xml, &shared)?;

    DataTable::from_grid(grid, skip_rows)
}

/// Read a package member as UTF-8 text. `None` when the member is absent.
fn read_member<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// Extract the `<sheet>` entries from workbook XML, in workbook order.
fn parse_sheet_entries(xml: &str) -> Vec<SheetEntry> {
    let bytes = xml.as_bytes();
    let mut entries = Vec::new();
    let mut pos = 0;

    while let Some(found) = find_element_start(bytes, pos, b"<sheet") {
        let Some(gt) = memchr::memchr(b'>', &bytes[found..]) else {
            break;
        };
        let open_tag = &xml[found..found + gt];

        if let Some(name) = attribute_value(open_tag, " name=\"")
            && let Some(rel_id) = attribute_value(open_tag, " r:id=\"")
        {
            entries.push(SheetEntry {
                name: unescape_xml(name),
                rel_id: rel_id.to_string(),
            });
        }

        pos = found + gt + 1;
    }

    entries
}

/// Look up a relationship target by id in workbook relationship XML.
fn relationship_target(xml: &str, rel_id: &str) -> Option<String> {
    let bytes = xml.as_bytes();
    let mut pos = 0;

    while let Some(found) = find_element_start(bytes, pos, b"<Relationship") {
        let gt = memchr::memchr(b'>', &bytes[found..])?;
        let open_tag = &xml[found..found + gt];

        if attribute_value(open_tag, " Id=\"") == Some(rel_id)
            && let Some(target) = attribute_value(open_tag, " Target=\"")
        {
            return Some(unescape_xml(target));
        }

        pos = found + gt + 1;
    }

    None
}

/// Resolve a workbook-relative relationship target to a package path.
fn resolve_part_path(target: &str) -> String {
    // Absolute targets are package paths already; relative ones hang off xl/
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

/// Parse the shared strings part into an indexable table.
///
/// Each `<si>` entry concatenates all of its `<t>` runs, so rich-text
/// strings come out whole instead of truncated to the first run.
fn parse_shared_strings(xml: &str) -> Vec<String> {
    let bytes = xml.as_bytes();
    let mut strings = Vec::new();
    let mut pos = 0;

    while let Some(found) = memmem::find(&bytes[pos..], b"<si>") {
        let body_start = pos + found + 4;
        let Some(body_len) = memmem::find(&bytes[body_start..], b"</si>") else {
            break;
        };
        strings.push(collect_text_runs(&xml[body_start..body_start + body_len]));
        pos = body_start + body_len + 5;
    }

    strings
}

/// Parse worksheet XML into a dense grid of cell values.
///
/// Rows and columns keep their absolute positions from the sheet, so a
/// skipped leading row in the file stays skippable by position. Gaps are
/// filled with `CellValue::Empty`.
fn parse_sheet_grid(xml: &str, shared: &[String]) -> Result<Vec<Vec<CellValue>>> {
    let bytes = xml.as_bytes();

    let Some(data_start) = memmem::find(bytes, b"<sheetData") else {
        return Ok(Vec::new());
    };
    let Some(gt) = memchr::memchr(b'>', &bytes[data_start..]) else {
        return Err(Error::Xml("Unterminated sheetData element".to_string()));
    };
    let body_start = data_start + gt + 1;
    if bytes[body_start - 2] == b'/' {
        // <sheetData/> is an empty sheet
        return Ok(Vec::new());
    }
    let Some(body_len) = memmem::find(&bytes[body_start..], b"</sheetData>") else {
        return Err(Error::Xml("Unterminated sheetData element".to_string()));
    };
    let data = &xml[body_start..body_start + body_len];

    let mut rows: BTreeMap<u32, BTreeMap<u32, CellValue>> = BTreeMap::new();
    let mut max_col = 0u32;
    let mut next_row = 1u32;
    let data_bytes = data.as_bytes();
    let mut pos = 0;

    while let Some(row_start) = find_element_start(data_bytes, pos, b"<row") {
        let Some(gt) = memchr::memchr(b'>', &data_bytes[row_start..]) else {
            return Err(Error::Xml("Unterminated row element".to_string()));
        };
        let tag_end = row_start + gt;
        let open_tag = &data[row_start..tag_end];

        let row_num: u32 = match attribute_value(open_tag, " r=\"") {
            Some(raw) => atoi_simd::parse(raw.as_bytes())
                .map_err(|_| Error::Xml(format!("Invalid row number: {}", raw)))?,
            None => next_row,
        };
        next_row = row_num + 1;

        if data_bytes[tag_end - 1] == b'/' {
            // Empty row, keeps its place through absolute numbering
            pos = tag_end + 1;
            continue;
        }

        let row_body_start = tag_end + 1;
        let Some(row_body_len) = memmem::find(&data_bytes[row_body_start..], b"</row>") else {
            return Err(Error::Xml("Unterminated row element".to_string()));
        };
        let row_body = &data[row_body_start..row_body_start + row_body_len];

        let cells = rows.entry(row_num).or_default();
        parse_row_cells(row_body, shared, cells, &mut max_col)?;

        pos = row_body_start + row_body_len + 6;
    }

    let max_row = rows.keys().next_back().copied().unwrap_or(0);
    let mut grid = Vec::with_capacity(max_row as usize);
    for row_num in 1..=max_row {
        let mut row = vec![CellValue::Empty; max_col as usize];
        if let Some(cells) = rows.remove(&row_num) {
            for (col, value) in cells {
                row[(col - 1) as usize] = value;
            }
        }
        grid.push(row);
    }

    Ok(grid)
}

/// Parse the cells of one row body into the row's cell map.
fn parse_row_cells(
    row_body: &str,
    shared: &[String],
    cells: &mut BTreeMap<u32, CellValue>,
    max_col: &mut u32,
) -> Result<()> {
    let bytes = row_body.as_bytes();
    let mut next_col = 1u32;
    let mut pos = 0;

    while let Some(cell_start) = find_element_start(bytes, pos, b"<c") {
        let Some(gt) = memchr::memchr(b'>', &bytes[cell_start..]) else {
            return Err(Error::Xml("Unterminated cell element".to_string()));
        };
        let tag_end = cell_start + gt;
        let open_tag = &row_body[cell_start..tag_end];

        let col = match attribute_value(open_tag, " r=\"") {
            Some(reference) => reference_to_coords(reference)?.0,
            None => next_col,
        };
        next_col = col + 1;
        *max_col = (*max_col).max(col);

        if bytes[tag_end - 1] == b'/' {
            // Self-closing cell carries style only, no value
            cells.insert(col, CellValue::Empty);
            pos = tag_end + 1;
            continue;
        }

        let body_start = tag_end + 1;
        let Some(body_len) = memmem::find(&bytes[body_start..], b"</c>") else {
            return Err(Error::Xml("Unterminated cell element".to_string()));
        };
        let cell_body = &row_body[body_start..body_start + body_len];

        let cell_type = attribute_value(open_tag, " t=\"");
        cells.insert(col, parse_cell_value(cell_type, cell_body, shared)?);

        pos = body_start + body_len + 4;
    }

    Ok(())
}

/// Decode one cell body according to its `t` type attribute.
fn parse_cell_value(
    cell_type: Option<&str>,
    cell_body: &str,
    shared: &[String],
) -> Result<CellValue> {
    match cell_type {
        Some("s") => {
            let Some(raw) = element_text(cell_body, b"<v>", b"</v>") else {
                return Ok(CellValue::Empty);
            };
            let index: usize = atoi_simd::parse(raw.as_bytes())
                .map_err(|_| Error::Xml(format!("Invalid shared string index: {}", raw)))?;
            let text = shared
                .get(index)
                .ok_or_else(|| Error::Xml(format!("Shared string index {} out of range", index)))?;
            Ok(text_cell(text.clone()))
        },
        Some("str") => match element_text(cell_body, b"<v>", b"</v>") {
            Some(raw) => Ok(text_cell(unescape_xml(raw))),
            None => Ok(CellValue::Empty),
        },
        Some("inlineStr") => Ok(text_cell(collect_text_runs(cell_body))),
        Some("b") => match element_text(cell_body, b"<v>", b"</v>") {
            Some("1") => Ok(CellValue::Bool(true)),
            Some("0") => Ok(CellValue::Bool(false)),
            Some(other) => Err(Error::Xml(format!("Invalid boolean cell value: {}", other))),
            None => Ok(CellValue::Empty),
        },
        Some("e") => match element_text(cell_body, b"<v>", b"</v>") {
            Some(raw) => Ok(CellValue::String(raw.to_string())),
            None => Ok(CellValue::Empty),
        },
        // Untyped and "n" cells are numeric; anything else degrades to text
        _ => match element_text(cell_body, b"<v>", b"</v>") {
            Some(raw) => {
                if let Ok(int_val) = atoi_simd::parse(raw.as_bytes()) {
                    Ok(CellValue::Int(int_val))
                } else if let Ok(float_val) = fast_float2::parse(raw) {
                    Ok(CellValue::Float(float_val))
                } else {
                    Ok(text_cell(unescape_xml(raw)))
                }
            },
            None => Ok(CellValue::Empty),
        },
    }
}

fn text_cell(text: String) -> CellValue {
    if text.is_empty() {
        CellValue::Empty
    } else {
        CellValue::String(text)
    }
}

/// Concatenate the contents of every `<t>` run in an XML fragment.
fn collect_text_runs(fragment: &str) -> String {
    let bytes = fragment.as_bytes();
    let mut out = String::new();
    let mut pos = 0;

    while let Some(found) = memmem::find(&bytes[pos..], b"<t") {
        let tag_start = pos + found;
        let after = tag_start + 2;
        match bytes.get(after) {
            Some(b'>') | Some(b' ') | Some(b'/') => {},
            _ => {
                pos = after;
                continue;
            },
        }
        let Some(gt) = memchr::memchr(b'>', &bytes[after..]) else {
            break;
        };
        let content_start = after + gt + 1;
        if bytes[content_start - 2] == b'/' {
            // Self-closing run is empty
            pos = content_start;
            continue;
        }
        let Some(content_len) = memmem::find(&bytes[content_start..], b"</t>") else {
            break;
        };
        out.push_str(&unescape_xml(&fragment[content_start..content_start + content_len]));
        pos = content_start + content_len + 4;
    }

    out
}

/// Convert an Excel reference (e.g. "B7") to 1-based (column, row).
fn reference_to_coords(reference: &str) -> Result<(u32, u32)> {
    let bytes = reference.as_bytes();
    let mut col_end = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii_digit() {
            col_end = i;
            break;
        }
    }

    if col_end == 0 {
        return Err(Error::InvalidReference(reference.to_string()));
    }

    // Column letters are base-26 with A=1
    let mut col_num = 0u32;
    for &byte in &bytes[..col_end] {
        if !byte.is_ascii_alphabetic() {
            return Err(Error::InvalidReference(reference.to_string()));
        }
        col_num = col_num * 26 + (byte.to_ascii_uppercase() - b'A' + 1) as u32;
    }

    let row_num = atoi_simd::parse(&bytes[col_end..])
        .map_err(|_| Error::InvalidReference(reference.to_string()))?;

    Ok((col_num, row_num))
}

/// Find the next `tag` occurrence that starts an element, skipping tags
/// that merely share the prefix (`<c` must not match `<cols>`).
fn find_element_start(bytes: &[u8], from: usize, tag: &[u8]) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = memmem::find(&bytes[pos..], tag) {
        let start = pos + found;
        match bytes.get(start + tag.len()) {
            Some(b' ') | Some(b'>') | Some(b'/') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                return Some(start);
            },
            _ => pos = start + tag.len(),
        }
    }
    None
}

/// Extract the text between an open and close tag pair, if present.
fn element_text<'a>(fragment: &'a str, open: &[u8], close: &[u8]) -> Option<&'a str> {
    let bytes = fragment.as_bytes();
    let start = memmem::find(bytes, open)? + open.len();
    let len = memmem::find(&bytes[start..], close)?;
    Some(&fragment[start..start + len])
}

/// Extract a double-quoted attribute value from an element open tag.
fn attribute_value<'a>(open_tag: &'a str, needle: &str) -> Option<&'a str> {
    let bytes = open_tag.as_bytes();
    let start = memmem::find(bytes, needle.as_bytes())? + needle.len();
    let len = memchr::memchr(b'"', &bytes[start..])?;
    Some(&open_tag[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn workbook_fixture(sheets: &[(&str, &str)], shared_strings: Option<&str>) -> Vec<u8> {
        let mut zip_data = Vec::new();
        {
            let cursor = Cursor::new(&mut zip_data);
            let mut writer = ZipWriter::new(cursor);
            let options = SimpleFileOptions::default();

            let mut workbook = String::from(
                r#"<?xml version="1.0"?><workbook xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
            );
            let mut rels = String::from(
                r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            );
            for (i, (name, _)) in sheets.iter().enumerate() {
                workbook.push_str(&format!(
                    r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                    name,
                    i + 1,
                    i + 1
                ));
                rels.push_str(&format!(
                    r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                    i + 1,
                    i + 1
                ));
            }
            workbook.push_str("</sheets></workbook>");
            rels.push_str("</Relationships>");

            writer.start_file("xl/workbook.xml", options).unwrap();
            writer.write_all(workbook.as_bytes()).unwrap();

            writer.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            writer.write_all(rels.as_bytes()).unwrap();

            if let Some(shared) = shared_strings {
                writer.start_file("xl/sharedStrings.xml", options).unwrap();
                writer.write_all(shared.as_bytes()).unwrap();
            }

            for (i, (_, sheet_data)) in sheets.iter().enumerate() {
                writer
                    .start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                    .unwrap();
                writer
                    .write_all(
                        format!(
                            r#"<?xml version="1.0"?><worksheet><sheetData>{}</sheetData></worksheet>"#,
                            sheet_data
                        )
                        .as_bytes(),
                    )
                    .unwrap();
            }

            writer.finish().unwrap();
        }
        zip_data
    }

    fn inline_cell(reference: &str, text: &str) -> String {
        format!(
            r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
            reference, text
        )
    }

    #[test]
    fn test_load_named_sheet() {
        let other = format!("<row r=\"1\">{}</row>", inline_cell("A1", "ignored"));
        let report = format!(
            "<row r=\"1\">{}{}</row><row r=\"2\">{}{}</row>",
            inline_cell("A1", "project_ref"),
            inline_cell("B1", "content_brief_status"),
            inline_cell("A2", "P1"),
            inline_cell("B2", "Draft"),
        );
        let data = workbook_fixture(&[("Sheet1", &other), ("general_report", &report)], None);

        let table = workbook_table_from_bytes(&data, "general_report", 0).unwrap();
        assert_eq!(table.headers(), &["project_ref", "content_brief_status"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][1], CellValue::String("Draft".to_string()));
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let report = format!("<row r=\"1\">{}</row>", inline_cell("A1", "a"));
        let data = workbook_fixture(&[("Sheet1", &report)], None);

        let err = workbook_table_from_bytes(&data, "general_report", 0).unwrap_err();
        match err {
            Error::SheetNotFound { name, available } => {
                assert_eq!(name, "general_report");
                assert_eq!(available, "Sheet1");
            },
            other => panic!("Expected SheetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_strings_resolved() {
        let shared = r#"<?xml version="1.0"?><sst count="2" uniqueCount="2"><si><t>plain</t></si><si><r><rPr><b/></rPr><t>rich </t></r><r><t>text</t></r></si></sst>"#;
        let sheet = r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row><row r="2"><c r="A2" t="s"><v>1</v></c><c r="B2" t="s"><v>0</v></c></row>"#;
        let data = workbook_fixture(&[("general_report", sheet)], Some(shared));

        let table = workbook_table_from_bytes(&data, "general_report", 0).unwrap();
        assert_eq!(table.headers(), &["plain", "rich text"]);
        assert_eq!(table.rows()[0][0], CellValue::String("rich text".to_string()));
        assert_eq!(table.rows()[0][1], CellValue::String("plain".to_string()));
    }

    #[test]
    fn test_shared_string_index_out_of_range() {
        let shared = r#"<sst><si><t>only</t></si></sst>"#;
        let sheet = r#"<row r="1"><c r="A1" t="s"><v>5</v></c></row>"#;
        let data = workbook_fixture(&[("general_report", sheet)], Some(shared));

        let err = workbook_table_from_bytes(&data, "general_report", 0).unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }

    #[test]
    fn test_numeric_bool_and_style_only_cells() {
        let sheet = format!(
            r#"<row r="1">{}{}{}{}</row><row r="2"><c r="A2"><v>42</v></c><c r="B2"><v>3.5</v></c><c r="C2" t="b"><v>1</v></c><c r="D2" s="3"/></row>"#,
            inline_cell("A1", "a"),
            inline_cell("B1", "b"),
            inline_cell("C1", "c"),
            inline_cell("D1", "d"),
        );
        let data = workbook_fixture(&[("general_report", &sheet)], None);

        let table = workbook_table_from_bytes(&data, "general_report", 0).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row[0], CellValue::Int(42));
        assert_eq!(row[1], CellValue::Float(3.5));
        assert_eq!(row[2], CellValue::Bool(true));
        assert_eq!(row[3], CellValue::Empty);
    }

    #[test]
    fn test_skip_leading_banner_row() {
        let sheet = format!(
            "<row r=\"1\">{}</row><row r=\"2\">{}{}</row><row r=\"3\">{}{}</row>",
            inline_cell("A1", "Production Lines Export"),
            inline_cell("A2", "project_ref"),
            inline_cell("B2", "content_brief_status"),
            inline_cell("A3", "P1"),
            inline_cell("B3", "Completed"),
        );
        let data = workbook_fixture(&[("general_report", &sheet)], None);

        let table = workbook_table_from_bytes(&data, "general_report", 1).unwrap();
        assert_eq!(table.headers(), &["project_ref", "content_brief_status"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_sparse_rows_and_columns_fill_with_empty() {
        let sheet = format!(
            "<row r=\"1\">{}{}{}</row><row r=\"3\"><c r=\"C3\"><v>7</v></c></row>",
            inline_cell("A1", "a"),
            inline_cell("B1", "b"),
            inline_cell("C1", "c"),
        );
        let data = workbook_fixture(&[("general_report", &sheet)], None);

        let table = workbook_table_from_bytes(&data, "general_report", 0).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec![CellValue::Empty; 3]);
        assert_eq!(
            table.rows()[1],
            vec![CellValue::Empty, CellValue::Empty, CellValue::Int(7)]
        );
    }

    #[test]
    fn test_cells_without_references_use_implied_columns() {
        let sheet = r#"<row><c t="inlineStr"><is><t>a</t></is></c><c t="inlineStr"><is><t>b</t></is></c></row><row><c><v>1</v></c><c><v>2</v></c></row>"#;
        let data = workbook_fixture(&[("general_report", sheet)], None);

        let table = workbook_table_from_bytes(&data, "general_report", 0).unwrap();
        assert_eq!(table.headers(), &["a", "b"]);
        assert_eq!(table.rows()[0], vec![CellValue::Int(1), CellValue::Int(2)]);
    }

    #[test]
    fn test_escaped_sheet_name_and_values() {
        let sheet = format!(
            "<row r=\"1\">{}</row><row r=\"2\">{}</row>",
            inline_cell("A1", "owner"),
            inline_cell("A2", "Smith &amp; Jones"),
        );
        let data = workbook_fixture(&[("P&amp;L report", &sheet)], None);

        let table = workbook_table_from_bytes(&data, "P&L report", 0).unwrap();
        assert_eq!(
            table.rows()[0][0],
            CellValue::String("Smith & Jones".to_string())
        );
    }

    #[test]
    fn test_empty_sheet_is_malformed() {
        let data = workbook_fixture(&[("general_report", "")], None);
        let err = workbook_table_from_bytes(&data, "general_report", 0).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_not_a_zip_archive() {
        let err = workbook_table_from_bytes(b"plainly not a workbook", "general_report", 0)
            .unwrap_err();
        assert!(matches!(err, Error::Container(_)));
    }

    #[test]
    fn test_reference_to_coords() {
        assert_eq!(reference_to_coords("A1").unwrap(), (1, 1));
        assert_eq!(reference_to_coords("Z9").unwrap(), (26, 9));
        assert_eq!(reference_to_coords("AA10").unwrap(), (27, 10));
        assert_eq!(reference_to_coords("BC7").unwrap(), (55, 7));
        assert!(reference_to_coords("123").is_err());
        assert!(reference_to_coords("ABC").is_err());
    }

    #[test]
    fn test_collect_text_runs_handles_preserve_and_empty() {
        let fragment = r#"<r><t xml:space="preserve">lead </t></r><r><t/></r><r><t>tail</t></r>"#;
        assert_eq!(collect_text_runs(fragment), "lead tail");
    }
}
