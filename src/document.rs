//! Serializable table documents
//!
//! A [`TableDocument`] describes a complete table (header, options and body)
//! in a form that can be read from JSON, YAML or TOML and replayed through the
//! [`Table`] API.
//!
//! ```json
//! {
//!   "headers": ["Name", "Score"],
//!   "caption": "Results",
//!   "layout": "lr",
//!   "body": [
//!     ["Alice", 2],
//!     "separator",
//!     { "multicolumn": "Total", "span": 1, "trailing": [2] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, Table, TableOptions};
use crate::utils::error::{TableError, TableResult};

/// Strings accepted as a separator entry
pub const SEPARATOR_KEYWORDS: &[&str] = &["separator", "midrule", "---"];

/// A whole table as data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    pub headers: Vec<String>,
    #[serde(flatten)]
    pub options: TableOptions,
    #[serde(default)]
    pub body: Vec<EntrySpec>,
}

/// One body entry of a [`TableDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySpec {
    Row(Vec<CellValue>),
    MultiColumn {
        multicolumn: CellValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        span: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        trailing: Vec<CellValue>,
    },
    Keyword(String),
}

impl EntrySpec {
    pub fn separator() -> Self {
        EntrySpec::Keyword(SEPARATOR_KEYWORDS[0].to_string())
    }
}

impl TableDocument {
    pub fn new(headers: Vec<String>) -> Self {
        TableDocument {
            headers,
            ..Default::default()
        }
    }

    /// Build the table described by this document
    pub fn build(&self) -> TableResult<Table> {
        let mut table = Table::with_options(self.headers.iter().cloned(), &self.options)?;

        for (idx, entry) in self.body.iter().enumerate() {
            apply_entry(&mut table, entry).map_err(|e| match e {
                TableError::Validation { message } => {
                    TableError::validation(format!("body entry {}: {}", idx + 1, message))
                }
                other => other,
            })?;
        }

        Ok(table)
    }
}

fn apply_entry(table: &mut Table, entry: &EntrySpec) -> TableResult<()> {
    match entry {
        EntrySpec::Row(values) => table.add_row(values.iter().cloned()),
        EntrySpec::MultiColumn {
            multicolumn,
            span,
            align,
            trailing,
        } => table.add_multi_column(
            multicolumn.clone(),
            *span,
            align.as_deref().unwrap_or("c"),
            trailing.iter().cloned(),
        ),
        EntrySpec::Keyword(word) => {
            if SEPARATOR_KEYWORDS.contains(&word.trim().to_lowercase().as_str()) {
                table.add_separator();
                Ok(())
            } else {
                Err(TableError::validation(format!(
                    "unknown body keyword '{}' (expected one of {:?})",
                    word, SEPARATOR_KEYWORDS
                )))
            }
        }
    }
}
