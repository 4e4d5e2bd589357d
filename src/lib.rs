//! # tabtex
//!
//! Build LaTeX tables row by row and render them as readable, column-aligned
//! LaTeX source.
//!
//! ## Features
//!
//! - **Booktabs output**: `\toprule`, `\midrule` and `\bottomrule` inside a
//!   `tabularx` environment wrapped in a `table` float
//! - **siunitx numbers**: numeric cells become `\num{...}` with a fixed precision
//! - **Escaping**: sub/superscript markers and dollar signs are escaped
//! - **Multi-column rows**: `\multicolumn` cells with trailing ordinary cells
//! - **Aligned source**: cells are padded to their column width
//! - **Data loading**: build tables from CSV, JSON, YAML or TOML (feature `data-loading`)
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use tabtex::{CellValue, Table};
//!
//! let mut table = Table::new(["Name", "Score"]);
//! table
//!     .add_row([CellValue::from("Alice"), CellValue::from(2)])
//!     .unwrap();
//!
//! let lines = table.render();
//! assert_eq!(lines[6], "\t\tName  & Score       \\\\");
//! assert_eq!(lines[8], "\t\tAlice & \\num{2.000} \\\\");
//! ```

/// Table building and rendering
pub mod table;

/// Utility modules
pub mod utils;

/// Serializable table documents (feature-gated)
#[cfg(feature = "serde")]
pub mod document;

/// Loading tables from data files (feature-gated)
#[cfg(feature = "data-loading")]
pub mod loader;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the table API
pub use table::{
    escape_text, format_cell, CellValue, ColumnWidths, PartialTableOptions, Table, TableElement,
    TableOptions,
};

// Re-export utilities
pub use utils::error::{TableError, TableResult};

#[cfg(feature = "serde")]
pub use document::{EntrySpec, TableDocument};

#[cfg(feature = "data-loading")]
pub use loader::{load_document, load_options, InputFormat};

/// Render a table in one call from a header and rows of values
///
/// ```rust
/// let latex = tabtex::render_rows(&["x", "y"], vec![vec![1, 2], vec![3, 4]]).unwrap();
/// assert!(latex.contains("\\num{1.000} & \\num{2.000} \\\\"));
/// ```
pub fn render_rows<S, R, V>(headers: &[S], rows: R) -> TableResult<String>
where
    S: AsRef<str>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = V>,
    V: Into<CellValue>,
{
    let mut table = Table::new(headers.iter().map(|h| h.as_ref().to_string()));
    for row in rows {
        table.add_row(row)?;
    }
    Ok(table.to_latex())
}
