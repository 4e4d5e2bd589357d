//! Reading table documents from data files
//!
//! Supports CSV (header record + one record per row), and JSON, YAML or TOML
//! files in the [`TableDocument`] shape. Table options can be loaded
//! separately from a TOML configuration file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::{EntrySpec, TableDocument};
use crate::table::{CellValue, TableOptions};
use crate::utils::error::{TableError, TableResult};

lazy_static! {
    /// Decimal integers, e.g. `42`, `-7`
    static ref INTEGER: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    /// Decimal floats, e.g. `3.14`, `.5`, `1e-3`
    static ref FLOAT: Regex =
        Regex::new(r"^[+-]?(\d+\.\d*|\.\d+|\d+)([eE][+-]?\d+)?$").unwrap();
}

/// First field of a CSV record that stands for a separator
const CSV_SEPARATOR: &str = "---";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
    Yaml,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "toml" => Some(InputFormat::Toml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
            InputFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "toml" => Ok(InputFormat::Toml),
            other => Err(TableError::parse(format!("unknown input format '{}'", other))),
        }
    }
}

/// Parse `input` into a table document
pub fn load_document(input: &str, format: InputFormat) -> TableResult<TableDocument> {
    tracing::debug!(%format, bytes = input.len(), "loading table document");
    match format {
        InputFormat::Csv => document_from_csv(input),
        InputFormat::Json => serde_json::from_str(input)
            .map_err(|e| TableError::parse_at(e.to_string(), e.line())),
        InputFormat::Yaml => serde_yaml::from_str(input).map_err(|e| match e.location() {
            Some(loc) => TableError::parse_at(e.to_string(), loc.line()),
            None => TableError::parse(e.to_string()),
        }),
        InputFormat::Toml => toml::from_str(input).map_err(|e| TableError::parse(e.to_string())),
    }
}

/// Parse table options from a TOML configuration file
pub fn load_options(input: &str) -> TableResult<TableOptions> {
    toml::from_str(input).map_err(|e| TableError::parse(e.to_string()))
}

/// Read a CSV table. The first record is the header.
///
/// A record whose first field is `---` and whose other fields are empty
/// becomes a separator. Numeric-looking fields become numbers.
pub fn document_from_csv(input: &str) -> TableResult<TableDocument> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut document = TableDocument::new(headers);
    for record in reader.records() {
        let record = record.map_err(csv_error)?;

        let is_separator = record
            .get(0)
            .is_some_and(|first| first.trim() == CSV_SEPARATOR)
            && record.iter().skip(1).all(|f| f.trim().is_empty());

        if is_separator {
            document.body.push(EntrySpec::separator());
        } else {
            document
                .body
                .push(EntrySpec::Row(record.iter().map(infer_cell).collect()));
        }
    }

    Ok(document)
}

/// Turn a text field into a number when it looks like one
pub fn infer_cell(field: &str) -> CellValue {
    let trimmed = field.trim();
    if INTEGER.is_match(trimmed) {
        if let Ok(v) = trimmed.parse::<i64>() {
            return CellValue::Int(v);
        }
    }
    if FLOAT.is_match(trimmed) {
        if let Ok(v) = trimmed.parse::<f64>() {
            return CellValue::Float(v);
        }
    }
    CellValue::Text(trimmed.to_string())
}

fn csv_error(err: csv::Error) -> TableError {
    match err.position() {
        Some(pos) => TableError::parse_at(err.to_string(), pos.line() as usize),
        None => TableError::parse(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path("a/b.csv"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path("b.YML"), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path("b.toml"), Some(InputFormat::Toml));
        assert_eq!(InputFormat::from_path("b.tex"), None);
        assert_eq!(InputFormat::from_path("noext"), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<InputFormat>().unwrap(), InputFormat::Json);
        assert!("xml".parse::<InputFormat>().is_err());
    }

    #[test]
    fn test_infer_cell() {
        assert_eq!(infer_cell("42"), CellValue::Int(42));
        assert_eq!(infer_cell(" -7 "), CellValue::Int(-7));
        assert_eq!(infer_cell("3.5"), CellValue::Float(3.5));
        assert_eq!(infer_cell(".5"), CellValue::Float(0.5));
        assert_eq!(infer_cell("1e-3"), CellValue::Float(0.001));
        assert_eq!(infer_cell("NaN"), CellValue::Text("NaN".into()));
        assert_eq!(infer_cell("inf"), CellValue::Text("inf".into()));
        assert_eq!(infer_cell("v1.2"), CellValue::Text("v1.2".into()));
        assert_eq!(infer_cell(""), CellValue::Text("".into()));
        assert_eq!(infer_cell(" Bob "), CellValue::Text("Bob".into()));
    }

    #[test]
    fn test_csv_text_fields_trimmed() {
        let doc = load_document("Name, Team\nAlice, Red\n", InputFormat::Csv).unwrap();
        let table = doc.build().unwrap();
        assert_eq!(table.headers(), &["Name", "Team"]);
        assert_eq!(table.render()[8], "\t\tAlice & Red  \\\\");
    }

    #[test]
    fn test_csv_document() {
        let input = "Name,Score\nAlice,2\n---,\nBob,3.5\n";
        let doc = document_from_csv(input).unwrap();
        assert_eq!(doc.headers, vec!["Name", "Score"]);
        assert_eq!(doc.body.len(), 3);
        assert_eq!(
            doc.body[0],
            EntrySpec::Row(vec!["Alice".into(), CellValue::Int(2)])
        );
        assert_eq!(doc.body[1], EntrySpec::separator());
        assert_eq!(
            doc.body[2],
            EntrySpec::Row(vec!["Bob".into(), CellValue::Float(3.5)])
        );
    }

    #[test]
    fn test_json_document() {
        let input = r#"{
            "headers": ["a", "b", "c"],
            "caption": "Json table",
            "scale": 0.5,
            "number_precision": 1,
            "body": [
                ["x", 1, 2.25],
                "separator",
                {"multicolumn": "sum", "span": 2, "trailing": [3]}
            ]
        }"#;
        let doc = load_document(input, InputFormat::Json).unwrap();
        assert_eq!(doc.options.caption.as_deref(), Some("Json table"));
        assert_eq!(doc.options.scale, 0.5);
        assert_eq!(doc.options.number_precision, 1);
        assert_eq!(doc.body.len(), 3);
        assert!(matches!(doc.body[2], EntrySpec::MultiColumn { span: Some(2), .. }));

        let table = doc.build().unwrap();
        assert_eq!(table.rows(), 3);
    }

    #[test]
    fn test_boolean_cells_are_numbers() {
        let json = r#"{"headers": ["a", "b"], "body": [["x", true], {"multicolumn": false, "span": 1, "trailing": [1]}]}"#;
        let table = load_document(json, InputFormat::Json).unwrap().build().unwrap();
        let lines = table.render();
        assert_eq!(lines[8], "\t\tx & \\num{1.000} \\\\");
        assert!(lines[9].starts_with("\t\t\\multicolumn{1}{c}{\\num{0.000}} & "));

        let yaml = "headers: [a, b]\nbody:\n  - [false, yes]\n";
        let doc = load_document(yaml, InputFormat::Yaml).unwrap();
        assert_eq!(
            doc.body[0],
            EntrySpec::Row(vec![CellValue::Int(0), CellValue::Text("yes".into())])
        );
    }

    #[test]
    fn test_json_syntax_error_has_line() {
        let err = load_document("{\n  \"headers\": [\n", InputFormat::Json).unwrap_err();
        assert!(matches!(err, TableError::Parse { line: Some(_), .. }));
    }

    #[test]
    fn test_yaml_document() {
        let input = "headers: [Name, Score]\nlayout: lr\nbody:\n  - [Alice, 2]\n  - \"---\"\n";
        let doc = load_document(input, InputFormat::Yaml).unwrap();
        assert_eq!(doc.options.layout.as_deref(), Some("lr"));
        assert_eq!(doc.body.len(), 2);
        assert_eq!(doc.body[1], EntrySpec::Keyword("---".into()));
    }

    #[test]
    fn test_toml_document() {
        let input = r#"
headers = ["Name", "Score"]
caption = "From TOML"
body = [["Alice", 2], "midrule"]
"#;
        let doc = load_document(input, InputFormat::Toml).unwrap();
        let table = doc.build().unwrap();
        assert_eq!(table.caption(), "From TOML");
        assert_eq!(table.rows(), 2);
    }

    #[test]
    fn test_load_options() {
        let opts = load_options("scale = 0.8\nlayout = \"lcr\"\n").unwrap();
        assert_eq!(opts.scale, 0.8);
        assert_eq!(opts.layout.as_deref(), Some("lcr"));
        assert_eq!(opts.number_precision, 3);
        assert_eq!(opts.caption, None);

        assert!(load_options("scale = \"big\"").is_err());
    }
}
