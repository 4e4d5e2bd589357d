//! Cell values and LaTeX-safe cell formatting

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value placed in a table cell
///
/// Numbers are typeset through siunitx, everything else is treated as text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged, from = "RawCell"))]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialization form of [`CellValue`]; booleans count as numbers
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<RawCell> for CellValue {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Bool(b) => CellValue::from(b),
            RawCell::Int(v) => CellValue::Int(v),
            RawCell::Float(v) => CellValue::Float(v),
            RawCell::Text(s) => CellValue::Text(s),
        }
    }
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Format this value for a table cell with the given number of decimals
    pub fn to_latex(&self, precision: usize) -> String {
        format_cell(self, precision)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(value: $t) -> Self {
                    CellValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => CellValue::Int(v),
            Err(_) => CellValue::Float(value as f64),
        }
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::from(value as u64)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Float(f64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<char> for CellValue {
    fn from(value: char) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// Produce the LaTeX source for a single cell value.
///
/// Numbers become `\num{...}` with exactly `precision` decimals; text is
/// passed through [`escape_text`].
pub fn format_cell(value: &CellValue, precision: usize) -> String {
    match value {
        CellValue::Int(v) => format_number(*v as f64, precision),
        CellValue::Float(v) => format_number(*v, precision),
        CellValue::Text(s) => escape_text(s),
    }
}

/// Wrap a number in the siunitx `\num` macro
pub fn format_number(value: f64, precision: usize) -> String {
    // Runtime precision is capped at u16::MAX; every f64 is exact well
    // before that many decimals, so the rest is zeros.
    let capped = precision.min(u16::MAX as usize);
    let mut digits = format!("{:.*}", capped, value);
    if value.is_finite() {
        digits.extend(std::iter::repeat('0').take(precision - capped));
    }
    format!("\\num{{{}}}", digits)
}

/// Make plain text safe to drop into a tabular cell.
///
/// Sub/superscript markers and dollar signs are escaped. Math delimiters
/// `\(`, `\)`, `\[` and `\]` lose their backslash and stay as brackets.
/// Balanced delimiters and other commands are not checked.
pub fn escape_text(text: &str) -> String {
    text.replace('_', "\\_")
        .replace('^', "\\^")
        .replace('$', "\\$")
        .replace("\\(", "(")
        .replace("\\)", ")")
        .replace("\\[", "[")
        .replace("\\]", "]")
}

/// Length of a cell string as used for column padding
pub fn display_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_precision() {
        assert_eq!(format_cell(&CellValue::Float(3.14159), 3), "\\num{3.142}");
        assert_eq!(format_cell(&CellValue::Float(3.14159), 0), "\\num{3}");
        assert_eq!(format_cell(&CellValue::Float(0.5), 2), "\\num{0.50}");
    }

    #[test]
    fn test_int_gets_decimals() {
        assert_eq!(format_cell(&CellValue::Int(2), 3), "\\num{2.000}");
        assert_eq!(format_cell(&CellValue::from(-7i32), 1), "\\num{-7.0}");
    }

    #[test]
    fn test_escape_scripts() {
        assert_eq!(escape_text("a_b"), "a\\_b");
        assert_eq!(escape_text("x^2"), "x\\^2");
        assert_eq!(escape_text("cost $5"), "cost \\$5");
    }

    #[test]
    fn test_strip_math_delimiters() {
        assert_eq!(escape_text("\\(x\\)"), "(x)");
        assert_eq!(escape_text("\\[y\\]"), "[y]");
        // Unbalanced delimiters are not checked
        assert_eq!(escape_text("\\(open"), "(open");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(format_cell(&CellValue::from("Alice"), 3), "Alice");
        assert_eq!(format_cell(&CellValue::from("\\textbf{x}"), 3), "\\textbf{x}");
    }

    #[test]
    fn test_conversions() {
        assert!(CellValue::from(1u8).is_numeric());
        assert!(CellValue::from(1.5f32).is_numeric());
        assert!(!CellValue::from('x').is_numeric());
        assert_eq!(CellValue::from(u64::MAX), CellValue::Float(u64::MAX as f64));
        assert_eq!(CellValue::from(String::from("s")).to_string(), "s");
        assert_eq!(CellValue::from(true), CellValue::Int(1));
        assert_eq!(CellValue::from(false), CellValue::Int(0));
    }

    #[test]
    fn test_display_len_counts_chars() {
        assert_eq!(display_len("abc"), 3);
        assert_eq!(display_len("μm"), 2);
    }

    #[test]
    fn test_precision_beyond_u16() {
        let out = format_number(1.5, 70_000);
        assert!(out.starts_with("\\num{1.50"));
        assert!(out.ends_with("0}"));
        assert_eq!(out.len(), "\\num{1.}".len() + 70_000);
    }
}
