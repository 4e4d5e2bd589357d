//! Per-column width tracking used to pad the generated source

use super::cell::display_len;

/// Running maximum of the cell length in each column
///
/// Only affects whitespace in the output, never the table itself.
/// Widths only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        ColumnWidths {
            widths: headers.iter().map(|h| display_len(h.as_ref())).collect(),
        }
    }

    /// Grow widths to fit a new row. Cells past the last column are ignored.
    pub fn observe<S: AsRef<str>>(&mut self, cells: &[S]) {
        for (width, cell) in self.widths.iter_mut().zip(cells) {
            *width = (*width).max(display_len(cell.as_ref()));
        }
    }

    /// Tracked width of a column, `0` for columns the table does not have
    pub fn width(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }

    /// Width covered by `span` columns starting at `start`, including the
    /// separators between them
    pub fn span_width(&self, start: usize, span: usize, separator_len: usize) -> usize {
        let cells: usize = (start..start + span).map(|i| self.width(i)).sum();
        cells + separator_len * span.saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_widths_from_headers() {
        let w = ColumnWidths::from_headers(&["Name", "Score"]);
        assert_eq!(w.as_slice(), &[4, 5]);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_widths_never_shrink() {
        let mut w = ColumnWidths::from_headers(&["Name", "Score"]);
        w.observe(&["Alice", "1"]);
        assert_eq!(w.as_slice(), &[5, 5]);
        w.observe(&["Al", "\\num{2.000}"]);
        assert_eq!(w.as_slice(), &[5, 11]);
    }

    #[test]
    fn test_overflow_cells_not_tracked() {
        let mut w = ColumnWidths::from_headers(&["a", "b"]);
        w.observe(&["x", "y", "a much longer overflow cell"]);
        assert_eq!(w.as_slice(), &[1, 1]);
        assert_eq!(w.width(2), 0);
    }

    #[test]
    fn test_span_width() {
        let w = ColumnWidths::from_headers(&["abc", "de", "f"]);
        assert_eq!(w.span_width(0, 1, 3), 3);
        assert_eq!(w.span_width(0, 2, 3), 3 + 2 + 3);
        assert_eq!(w.span_width(0, 3, 3), 3 + 2 + 1 + 6);
        assert_eq!(w.span_width(1, 2, 3), 2 + 1 + 3);
    }
}
