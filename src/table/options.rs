//! Table configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caption used when a table has none
pub const DEFAULT_CAPTION: &str = "Here goes my caption.";

/// Decimals used for numeric cells unless configured otherwise
pub const DEFAULT_NUMBER_PRECISION: usize = 3;

/// Options applied when a table is created
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Table caption; the placeholder caption is used when unset or empty
    pub caption: Option<String>,
    /// Width of the table as a multiple of `\linewidth`
    pub scale: f64,
    /// Column layout tokens, e.g. `"lcr"`; all columns left-aligned when unset
    pub layout: Option<String>,
    /// Decimals for numeric cells
    pub number_precision: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            caption: None,
            scale: 1.0,
            layout: None,
            number_precision: DEFAULT_NUMBER_PRECISION,
        }
    }
}

impl TableOptions {
    pub fn with_caption(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Default::default()
        }
    }

    /// Overlay the values that are set in `other` on top of these options.
    ///
    /// Used to let command line flags win over a configuration file.
    pub fn merge(mut self, other: PartialTableOptions) -> Self {
        if let Some(caption) = other.caption {
            self.caption = Some(caption);
        }
        if let Some(scale) = other.scale {
            self.scale = scale;
        }
        if let Some(layout) = other.layout {
            self.layout = Some(layout);
        }
        if let Some(precision) = other.number_precision {
            self.number_precision = precision;
        }
        self
    }
}

/// Options where every field is optional, for layering sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialTableOptions {
    pub caption: Option<String>,
    pub scale: Option<f64>,
    pub layout: Option<String>,
    pub number_precision: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TableOptions::default();
        assert_eq!(opts.caption, None);
        assert_eq!(opts.scale, 1.0);
        assert_eq!(opts.layout, None);
        assert_eq!(opts.number_precision, 3);
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let base = TableOptions {
            caption: Some("From file".into()),
            scale: 0.5,
            layout: Some("lr".into()),
            number_precision: 1,
        };
        let merged = base.merge(PartialTableOptions {
            scale: Some(0.8),
            number_precision: Some(4),
            ..Default::default()
        });
        assert_eq!(merged.caption.as_deref(), Some("From file"));
        assert_eq!(merged.scale, 0.8);
        assert_eq!(merged.layout.as_deref(), Some("lr"));
        assert_eq!(merged.number_precision, 4);
    }
}
