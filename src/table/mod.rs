//! LaTeX Table Builder
//!
//! Builds booktabs tables row by row and renders them as padded LaTeX source,
//! with numeric cells typeset through siunitx.
//!
//! # Architecture
//!
//! ```text
//! CellValue -> format_cell -> TableElement (Row / Separator / MultiColumn) -> Table::render
//!                                   ^
//!                             ColumnWidths (padding only)
//! ```
//!
//! # Example
//!
//! ```
//! use tabtex::table::{CellValue, Table};
//!
//! let mut table = Table::new(["Name", "Score"]).with_caption("Results");
//! table
//!     .add_row([CellValue::from("Alice"), CellValue::from(2)])
//!     .unwrap();
//! table.add_separator();
//! let latex = table.to_latex();
//! assert!(latex.contains("\\num{2.000}"));
//! assert!(latex.contains("\\label{tbl:results}"));
//! ```

mod builder;
mod cell;
mod element;
mod options;
mod widths;


// Re-export public API
pub use builder::Table;
pub use cell::{display_len, escape_text, format_cell, format_number, CellValue};
pub use element::{TableElement, CELL_SEPARATOR, ROW_END};
pub use options::{PartialTableOptions, TableOptions, DEFAULT_CAPTION, DEFAULT_NUMBER_PRECISION};
pub use widths::ColumnWidths;
