//! Streaming reader for delimited text exports (CSV, TSV, PRN).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::common::Result;
use crate::table::{CellValue, DataTable};

/// Configuration for parsing delimited text files.
#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    /// Field delimiter character
    pub delimiter: u8,
    /// Quote character for quoted fields
    pub quote: u8,
    /// Comment character (lines starting with this are ignored)
    pub comment: Option<u8>,
    /// Whether to trim whitespace from fields
    pub trim_whitespace: bool,
    /// Buffer size for reading
    pub buffer_size: usize,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',      // CSV default
            quote: b'"',          // Standard CSV quoting
            comment: None,        // Exports carry no comment lines
            trim_whitespace: false,
            buffer_size: 8192,    // 8KB buffer
        }
    }
}

impl DelimitedConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set the comment character (None to disable comments)
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    /// Enable/disable whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_delimiter(b'\t')
    }

    /// Create PRN (semicolon-separated) configuration
    pub fn prn() -> Self {
        Self::new().with_delimiter(b';')
    }

    /// Create pipe-separated configuration
    pub fn pipe() -> Self {
        Self::new().with_delimiter(b'|')
    }
}

/// Streaming parser for delimited text formats.
pub struct DelimitedParser<'a, R: Read> {
    reader: &'a mut R,
    config: DelimitedConfig,
    buffer: Vec<u8>,
    buffer_pos: usize,
    buffer_len: usize,
}

impl<'a, R: Read> DelimitedParser<'a, R> {
    /// Create a new parser over a reader.
    pub fn new(reader: &'a mut R, config: DelimitedConfig) -> Self {
        let buffer_size = config.buffer_size;
        DelimitedParser {
            reader,
            config,
            buffer: vec![0; buffer_size],
            buffer_pos: 0,
            buffer_len: 0,
        }
    }

    /// Parse the next row from the input. Returns `None` at end of input.
    pub fn parse_row(&mut self) -> Result<Option<Vec<CellValue>>> {
        let mut fields = Vec::new();
        let mut field_start = true;
        let mut in_quotes = false;
        let mut current_field = Vec::new();

        loop {
            // Fill buffer if needed
            if self.buffer_pos >= self.buffer_len {
                self.buffer_len = self.reader.read(&mut self.buffer)?;
                self.buffer_pos = 0;

                if self.buffer_len == 0 {
                    // End of input; emit the final unterminated row if any
                    if !fields.is_empty() || !current_field.is_empty() {
                        self.finish_field(&mut current_field, &mut fields);
                        return Ok(Some(fields));
                    }
                    return Ok(None);
                }
            }

            let byte = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;

            match byte {
                b'\n' => {
                    if in_quotes {
                        // Newline inside quotes is part of the field
                        current_field.push(byte);
                    } else {
                        self.finish_field(&mut current_field, &mut fields);
                        return Ok(Some(fields));
                    }
                },
                b'\r' => {
                    // Handle CRLF - skip CR, let LF end the line
                    if in_quotes {
                        current_field.push(byte);
                    }
                },
                quote if quote == self.config.quote => {
                    if in_quotes {
                        // Doubled quote is an escaped quote; a lone quote closes
                        if self.peek() == Some(self.config.quote) {
                            current_field.push(self.config.quote);
                            self.buffer_pos += 1;
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        in_quotes = true;
                        field_start = false;
                    }
                },
                delim if delim == self.config.delimiter && !in_quotes => {
                    self.finish_field(&mut current_field, &mut fields);
                    field_start = true;
                },
                _ => {
                    if field_start
                        && self.config.comment == Some(byte)
                        && fields.is_empty()
                        && !in_quotes
                    {
                        // Comment line, skip to end of line
                        self.skip_line()?;
                        return self.parse_row();
                    }

                    current_field.push(byte);
                    field_start = false;
                },
            }
        }
    }

    /// Look at the next byte without consuming it.
    ///
    /// Only valid within a row: a quote at an exact buffer boundary would be
    /// missed, so refill first when the buffer is drained.
    fn peek(&mut self) -> Option<u8> {
        if self.buffer_pos >= self.buffer_len {
            self.buffer_len = self.reader.read(&mut self.buffer).ok()?;
            self.buffer_pos = 0;
            if self.buffer_len == 0 {
                return None;
            }
        }
        Some(self.buffer[self.buffer_pos])
    }

    /// Consume input up to and including the next line feed.
    fn skip_line(&mut self) -> Result<()> {
        loop {
            if self.buffer_pos >= self.buffer_len {
                self.buffer_len = self.reader.read(&mut self.buffer)?;
                self.buffer_pos = 0;
                if self.buffer_len == 0 {
                    return Ok(());
                }
            }
            let byte = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            if byte == b'\n' {
                return Ok(());
            }
        }
    }

    /// Finish the current field and append its typed value to the row.
    fn finish_field(&self, current_field: &mut Vec<u8>, fields: &mut Vec<CellValue>) {
        let mut field_bytes = std::mem::take(current_field);

        if self.config.trim_whitespace {
            let start = field_bytes
                .iter()
                .position(|&b| !b.is_ascii_whitespace())
                .unwrap_or(field_bytes.len());
            let end = field_bytes
                .iter()
                .rposition(|&b| !b.is_ascii_whitespace())
                .map(|i| i + 1)
                .unwrap_or(0);
            if start < end {
                field_bytes = field_bytes[start..end].to_vec();
            } else {
                field_bytes.clear();
            }
        }

        let field_str = match String::from_utf8(field_bytes) {
            Ok(s) => s,
            Err(e) => {
                // Replace invalid UTF-8 sequences rather than failing the row
                let valid_bytes = e.into_bytes();
                String::from_utf8_lossy(&valid_bytes).to_string()
            },
        };

        fields.push(CellValue::parse(&field_str));
    }
}

/// Read a delimited file into a table, skipping leading metadata rows.
pub fn load_delimited<P: AsRef<Path>>(
    path: P,
    config: DelimitedConfig,
    skip_rows: usize,
) -> Result<DataTable> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(config.buffer_size, file);
    delimited_table_from_reader(&mut reader, config, skip_rows)
}

/// Parse delimited bytes into a table, skipping leading metadata rows.
pub fn parse_delimited(bytes: &[u8], config: DelimitedConfig, skip_rows: usize) -> Result<DataTable> {
    let mut cursor = std::io::Cursor::new(bytes);
    delimited_table_from_reader(&mut cursor, config, skip_rows)
}

fn delimited_table_from_reader<R: Read>(
    reader: &mut R,
    config: DelimitedConfig,
    skip_rows: usize,
) -> Result<DataTable> {
    let mut parser = DelimitedParser::new(reader, config);
    let mut grid = Vec::new();
    while let Some(row) = parser.parse_row()? {
        grid.push(row);
    }
    DataTable::from_grid(grid, skip_rows)
}
