//! WASM bindings for tabtex
//!
//! This module provides JavaScript-accessible functions for rendering tables.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::document::TableDocument;

/// Render result with additional metadata
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The generated LaTeX
    pub output: String,
    /// Whether rendering was successful
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
}

impl RenderResult {
    fn ok(output: String) -> Self {
        RenderResult {
            output,
            success: true,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        RenderResult {
            output: String::new(),
            success: false,
            error: Some(error),
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a table document
///
/// # Arguments
/// * `document` - Object with `headers`, optional options and a `body` array
///
/// # Returns
/// `{ output, success, error }`
#[wasm_bindgen(js_name = "renderTable")]
pub fn render_table_wasm(document: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<TableDocument>(document) {
        Ok(doc) => match doc.build() {
            Ok(table) => RenderResult::ok(table.to_latex()),
            Err(e) => RenderResult::failed(e.to_string()),
        },
        Err(e) => RenderResult::failed(format!("Invalid table document: {}", e)),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Escape text for use in a table cell
#[wasm_bindgen(js_name = "escapeLatexText")]
pub fn escape_latex_text_wasm(input: &str) -> String {
    crate::table::escape_text(input)
}

/// Format a number as a siunitx `\num{}` cell
#[wasm_bindgen(js_name = "formatNumber")]
pub fn format_number_wasm(value: f64, precision: usize) -> String {
    crate::table::format_number(value, precision)
}

/// Get version information
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
