//! LaTeX table builder

use std::fmt;
use std::fs;
use std::path::Path;

use super::cell::{format_cell, CellValue};
use super::element::{render_cells, TableElement};
use super::options::{TableOptions, DEFAULT_CAPTION, DEFAULT_NUMBER_PRECISION};
use super::widths::ColumnWidths;
use crate::utils::error::{TableError, TableResult};

/// Default column layout token
const LEFT: char = 'l';

/// A booktabs table inside a `table` float
///
/// The header fixes the number of columns for the lifetime of the table.
/// Rows, separators and multi-column rows are appended in order and rendered
/// on demand; nothing is removed once added.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    caption: Option<String>,
    scale: f64,
    layout: Vec<char>,
    number_precision: usize,
    widths: ColumnWidths,
    body: Vec<TableElement>,
}

impl Table {
    /// Create a table with the given header. All columns are left-aligned.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = ColumnWidths::from_headers(&headers);
        let layout = vec![LEFT; headers.len()];

        Table {
            headers,
            caption: None,
            scale: 1.0,
            layout,
            number_precision: DEFAULT_NUMBER_PRECISION,
            widths,
            body: Vec::new(),
        }
    }

    /// Create a table and apply `options`.
    ///
    /// Fails when the configured layout does not cover every column.
    pub fn with_options<I, S>(headers: I, options: &TableOptions) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new(headers);
        table.caption = options.caption.clone();
        table.scale = options.scale;
        table.number_precision = options.number_precision;
        if let Some(ref layout) = options.layout {
            table.set_layout(layout)?;
        }
        Ok(table)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_layout(mut self, layout: &str) -> TableResult<Self> {
        self.set_layout(layout)?;
        Ok(self)
    }

    /// Total number of columns. This cannot change.
    pub fn cols(&self) -> usize {
        self.headers.len()
    }

    /// Number of body entries, separators included
    pub fn rows(&self) -> usize {
        self.body.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The caption, or the placeholder when none (or an empty one) was given
    pub fn caption(&self) -> &str {
        match self.caption.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CAPTION,
        }
    }

    pub fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }

    /// Label derived from the first word of the caption, e.g. `tbl:results`
    pub fn label(&self) -> String {
        let slug = self
            .caption()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        format!("tbl:{}", slug)
    }

    /// The layout string, one token per column
    pub fn layout(&self) -> String {
        self.layout.iter().collect()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn number_precision(&self) -> usize {
        self.number_precision
    }

    /// Change the decimals for numeric cells added from now on
    pub fn set_number_precision(&mut self, precision: usize) {
        self.number_precision = precision;
    }

    pub fn column_widths(&self) -> &[usize] {
        self.widths.as_slice()
    }

    pub fn entries(&self) -> &[TableElement] {
        &self.body
    }

    /// Set the layout of the whole table.
    ///
    /// Whitespace is ignored. At least one token per column is required;
    /// extra tokens are dropped. Tokens are not checked for validity.
    pub fn set_layout(&mut self, layout: &str) -> TableResult<()> {
        let tokens = clean_layout(layout);
        if tokens.len() < self.cols() {
            return Err(TableError::validation(format!(
                "not enough layout identifiers provided: expected {}, got {}",
                self.cols(),
                tokens.len()
            )));
        }

        self.layout = tokens.into_iter().take(self.cols()).collect();
        tracing::debug!(layout = %self.layout(), "table layout set");
        Ok(())
    }

    /// Set the layout token of a single column.
    ///
    /// Only the first non-whitespace character of `token` is used.
    pub fn set_column_layout(&mut self, index: usize, token: &str) -> TableResult<()> {
        if index >= self.cols() {
            return Err(TableError::out_of_range(index, self.cols()));
        }

        let token = clean_layout(token)
            .into_iter()
            .next()
            .ok_or_else(|| TableError::validation("empty layout identifier"))?;

        self.layout[index] = token;
        tracing::debug!(index, %token, "column layout set");
        Ok(())
    }

    /// Add a `\midrule` to the table body
    pub fn add_separator(&mut self) {
        self.body.push(TableElement::Separator);
    }

    /// Add a row.
    ///
    /// At least one value per column is required. Values beyond the last
    /// column are kept and rendered, but do not affect column widths.
    pub fn add_row<I, V>(&mut self, values: I) -> TableResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        if values.len() < self.cols() {
            return Err(TableError::validation(format!(
                "cannot match {} value(s) to {} column(s)",
                values.len(),
                self.cols()
            )));
        }

        let cells = self.format_cells(&values);
        self.widths.observe(&cells);
        tracing::debug!(cells = cells.len(), row = self.body.len(), "row added");
        self.body.push(TableElement::Row(cells));
        Ok(())
    }

    /// Add a row whose first cell spans several columns.
    ///
    /// `span` defaults to the full table width. The span plus the number of
    /// trailing values must equal the number of columns.
    pub fn add_multi_column<V, I, T>(
        &mut self,
        value: V,
        span: Option<usize>,
        align: &str,
        trailing: I,
    ) -> TableResult<()>
    where
        V: Into<CellValue>,
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let span = span.unwrap_or(self.cols());
        let trailing: Vec<CellValue> = trailing.into_iter().map(Into::into).collect();

        if span == 0 {
            return Err(TableError::validation(
                "a multi-column cell must span at least one column",
            ));
        }
        if span + trailing.len() != self.cols() {
            return Err(TableError::validation(format!(
                "provided data count ({} spanned + {} trailing) does not match {} column(s)",
                span,
                trailing.len(),
                self.cols()
            )));
        }

        let content = format_cell(&value.into(), self.number_precision);
        let trailing = self.format_cells(&trailing);
        tracing::debug!(span, align, row = self.body.len(), "multi-column row added");
        self.body.push(TableElement::MultiColumn {
            span,
            align: align.to_string(),
            content,
            trailing,
        });
        Ok(())
    }

    /// Add a centred cell spanning the full table width
    pub fn add_spanning_row(&mut self, value: impl Into<CellValue>) -> TableResult<()> {
        self.add_multi_column(value, None, "c", Vec::<CellValue>::new())
    }

    /// Generate the table as a list of lines
    pub fn render(&self) -> Vec<String> {
        tracing::trace!(rows = self.body.len(), "rendering table");

        let mut lines = Vec::with_capacity(self.body.len() + 11);
        lines.push("\\begin{table}[h]".to_string());
        lines.push("\t\\centering".to_string());
        lines.push(format!("\t\\caption{{{}}}", self.caption()));
        lines.push(format!("\t\\label{{{}}}", self.label()));
        lines.push(format!(
            "\t\\begin{{tabularx}}{{{}\\linewidth}}{{{}}}",
            self.scale,
            self.layout()
        ));
        lines.push("\t\t\\toprule".to_string());
        lines.push(format!("\t\t{}", render_cells(&self.headers, &self.widths)));
        lines.push("\t\t\\midrule".to_string());
        lines.extend(
            self.body
                .iter()
                .map(|entry| format!("\t\t{}", entry.to_latex(&self.widths))),
        );
        lines.push("\t\t\\bottomrule".to_string());
        lines.push("\t\\end{tabularx}".to_string());
        lines.push("\\end{table}".to_string());
        lines
    }

    /// Generate the table as a single string
    pub fn to_latex(&self) -> String {
        self.render().join("\n")
    }

    /// Write the table to `path`, replacing any existing content
    pub fn save(&self, path: impl AsRef<Path>) -> TableResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_latex()).map_err(|e| TableError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;
        tracing::debug!(path = %path.display(), "table saved");
        Ok(())
    }

    fn format_cells(&self, values: &[CellValue]) -> Vec<String> {
        values
            .iter()
            .map(|v| format_cell(v, self.number_precision))
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_latex())
    }
}

fn clean_layout(layout: &str) -> Vec<char> {
    layout.chars().filter(|c| !c.is_whitespace()).collect()
}
