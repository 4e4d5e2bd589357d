//! Body entries of a table and their LaTeX rendering

use super::cell::display_len;
use super::widths::ColumnWidths;

/// Separator placed between two cells of a row
pub const CELL_SEPARATOR: &str = " & ";

/// Terminator of every row
pub const ROW_END: &str = " \\\\";

/// A single entry in the table body
#[derive(Debug, Clone, PartialEq)]
pub enum TableElement {
    /// Ordinary row of already formatted cells
    Row(Vec<String>),
    /// Booktabs `\midrule`
    Separator,
    /// Row starting with a `\multicolumn` cell
    MultiColumn {
        /// Number of columns merged into the first cell
        span: usize,
        /// Column specification of the merged cell, e.g. `c` or `|r|`
        align: String,
        /// Formatted content of the merged cell
        content: String,
        /// Formatted cells filling the columns after the span
        trailing: Vec<String>,
    },
}

impl TableElement {
    /// Generate the LaTeX line for this entry (without indentation)
    pub fn to_latex(&self, widths: &ColumnWidths) -> String {
        match self {
            TableElement::Row(cells) => render_cells(cells, widths),
            TableElement::Separator => "\\midrule".to_string(),
            TableElement::MultiColumn {
                span,
                align,
                content,
                trailing,
            } => {
                let needed = widths.span_width(0, *span, CELL_SEPARATOR.len());
                let head = format!("\\multicolumn{{{}}}{{{}}}{{{}}}", span, align, content);
                let mut line = String::new();
                pad_into(&mut line, &head, needed);

                for (idx, cell) in trailing.iter().enumerate() {
                    line.push_str(CELL_SEPARATOR);
                    pad_into(&mut line, cell, widths.width(span + idx));
                }

                line.push_str(ROW_END);
                line
            }
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, TableElement::Separator)
    }
}

/// Render a list of cells as one padded row
pub(crate) fn render_cells<S: AsRef<str>>(cells: &[S], widths: &ColumnWidths) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push_str(CELL_SEPARATOR);
        }
        pad_into(&mut line, cell.as_ref(), widths.width(idx));
    }
    line.push_str(ROW_END);
    line
}

/// Append `cell` left-aligned in a field of `width` characters.
///
/// `format!` widths are capped at `u16::MAX`, column widths are not.
fn pad_into(line: &mut String, cell: &str, width: usize) {
    line.push_str(cell);
    line.extend(std::iter::repeat(' ').take(width.saturating_sub(display_len(cell))));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> ColumnWidths {
        ColumnWidths::from_headers(&["Name", "Score", "Rank"])
    }

    #[test]
    fn test_separator() {
        assert_eq!(TableElement::Separator.to_latex(&widths()), "\\midrule");
        assert!(TableElement::Separator.is_separator());
    }

    #[test]
    fn test_row_padding() {
        let row = TableElement::Row(vec!["Al".into(), "1".into(), "2".into()]);
        assert_eq!(row.to_latex(&widths()), "Al   & 1     & 2    \\\\");
    }

    #[test]
    fn test_overflow_row_cells_unpadded() {
        let row = TableElement::Row(vec![
            "a".into(),
            "b".into(),
            "c".into(),
            "extra".into(),
        ]);
        assert_eq!(
            row.to_latex(&widths()),
            "a    & b     & c    & extra \\\\"
        );
    }

    #[test]
    fn test_multicolumn_full_span() {
        let mc = TableElement::MultiColumn {
            span: 3,
            align: "c".into(),
            content: "All".into(),
            trailing: vec![],
        };
        // 11 + 6 + 4 plus two separators
        let wide = ColumnWidths::from_headers(&["Participant", "Points", "Rank"]);
        let line = mc.to_latex(&wide);
        assert_eq!(line, "\\multicolumn{3}{c}{All}     \\\\");
    }

    #[test]
    fn test_multicolumn_with_trailing() {
        let mc = TableElement::MultiColumn {
            span: 2,
            align: "l".into(),
            content: "x".into(),
            trailing: vec!["y".into()],
        };
        let line = mc.to_latex(&widths());
        // span width is 4 + 5 + 3 = 12, shorter than the macro itself
        assert_eq!(line, "\\multicolumn{2}{l}{x} & y    \\\\");
    }

    #[test]
    fn test_padding_beyond_u16_width() {
        let wide = ColumnWidths::from_headers(&["x".repeat(70_000), "y".into()]);
        let row = TableElement::Row(vec!["a".into(), "b".into()]);
        let line = row.to_latex(&wide);
        assert_eq!(line.len(), 70_000 + CELL_SEPARATOR.len() + 1 + ROW_END.len());
        assert!(line.starts_with("a "));
        assert!(line.ends_with(" & b \\\\"));
    }

    #[test]
    fn test_multicolumn_span_beyond_u16_width() {
        let long = "x".repeat(40_000);
        let wide = ColumnWidths::from_headers(&[long.as_str(), long.as_str()]);
        let mc = TableElement::MultiColumn {
            span: 2,
            align: "c".into(),
            content: "s".into(),
            trailing: vec![],
        };
        let line = mc.to_latex(&wide);
        let needed = 80_000 + CELL_SEPARATOR.len();
        assert_eq!(line.len(), needed + ROW_END.len());
        assert!(line.starts_with("\\multicolumn{2}{c}{s} "));
    }
}
