//! Typed cell values for tabular data.

use serde::Serialize;
use std::fmt;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
}

impl CellValue {
    /// Infer a typed value from field text: empty, then integer, then float,
    /// then boolean words, then string.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            CellValue::Empty
        } else if let Ok(int_val) = atoi_simd::parse::<i64>(text.as_bytes()) {
            CellValue::Int(int_val)
        } else if let Ok(float_val) = fast_float2::parse(text) {
            CellValue::Float(float_val)
        } else {
            // Check for boolean values (case insensitive)
            match text.to_lowercase().as_str() {
                "true" | "yes" | "on" => CellValue::Bool(true),
                "false" | "no" | "off" => CellValue::Bool(false),
                _ => CellValue::String(text.to_string()),
            }
        }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the cell as field text.
    ///
    /// Integral floats render without a trailing `.0` so numeric identifiers
    /// read back the way the report shows them.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            CellValue::Int(i) => {
                let mut buffer = itoa::Buffer::new();
                buffer.format(*i).to_string()
            },
            CellValue::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() && f.abs() < 9e15 {
                    let mut buffer = itoa::Buffer::new();
                    buffer.format(*f as i64).to_string()
                } else {
                    let mut buffer = ryu::Buffer::new();
                    buffer.format(*f).to_string()
                }
            },
            CellValue::String(s) => s.clone(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
