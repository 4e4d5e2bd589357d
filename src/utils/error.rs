//! Error handling for table building
//!
//! This module provides a unified error type and result type for every
//! fallible table operation.

use std::fmt;

/// Table error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Input does not fit the table shape (cell counts, layout tokens, spans)
    Validation { message: String },
    /// A column index beyond the table width
    IndexOutOfRange { index: usize, len: usize },
    /// IO error (for file operations)
    Io { message: String },
    /// Parse error - a table document could not be read
    Parse {
        message: String,
        line: Option<usize>,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Validation { message } => {
                write!(f, "Invalid table input: {}", message)
            }
            TableError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Column index {} is out of bounds for a table with {} column(s)",
                    index, len
                )
            }
            TableError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            TableError::Parse { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn validation(message: impl Into<String>) -> Self {
        TableError::Validation {
            message: message.into(),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        TableError::IndexOutOfRange { index, len }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        TableError::Parse {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        TableError::Parse {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Whether the error was caused by the caller's data rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TableError::Validation { .. } | TableError::IndexOutOfRange { .. }
        )
    }
}
