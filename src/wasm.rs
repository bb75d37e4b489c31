//! WASM bindings for tabscan
//!
//! This module provides JavaScript-accessible functions for layout
//! detection and table extraction in the browser.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::data::{CommentChar, Delimiter};

/// Extraction options (exposed to WASM)
///
/// Unset fields fall back to detection; the comment character defaults
/// to `#`.
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct ExtractOptions {
    /// Delimiter name ("comma", "tab", "whitespace", "semicolon", "pipe")
    #[serde(default)]
    pub delimiter: Option<String>,
    /// Leading lines to drop
    #[serde(default)]
    pub header_rows: Option<usize>,
    /// Trailing lines to drop
    #[serde(default)]
    pub footer_rows: Option<usize>,
    /// Comment marker name or literal ("python", "#", "matlab", "%", ...)
    #[serde(default)]
    pub comment: Option<String>,
}

/// Layout detection result
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct LayoutResult {
    /// Whether a delimiter was found
    pub success: bool,
    /// Detected delimiter name, if any
    pub delimiter: Option<String>,
    /// Detected header row count
    pub header_rows: Option<usize>,
    /// Detected footer row count
    pub footer_rows: Option<usize>,
}

/// Extraction result with the resolved settings
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ExtractResult {
    /// Whether the extraction was successful
    pub success: bool,
    /// Error message if extraction failed
    pub error: Option<String>,
    /// Resolved delimiter name
    pub delimiter: Option<String>,
    /// Resolved header row count
    pub header_rows: usize,
    /// Resolved footer row count
    pub footer_rows: usize,
    /// The extracted grid of trimmed cells
    pub rows: Vec<Vec<String>>,
}

/// Two-column numeric extraction result
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ColumnsResult {
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// The x column values
    pub x: Vec<f64>,
    /// The y column values
    pub y: Vec<f64>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Detect delimiter, header rows, and footer rows for a document
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectLayout")]
pub fn detect_layout_wasm(input: &str) -> JsValue {
    let layout = crate::detect_layout(input);
    let result = LayoutResult {
        success: layout.delimiter.is_some(),
        delimiter: layout.delimiter.map(|d| d.name().to_string()),
        header_rows: layout.header_rows,
        footer_rows: layout.footer_rows,
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
fn resolve_settings(
    input: &str,
    opts: &ExtractOptions,
) -> Result<(Delimiter, usize, usize, Option<CommentChar>), String> {
    let lines: Vec<&str> = input.split('\n').collect();
    let delimiter = match &opts.delimiter {
        Some(name) => {
            Delimiter::from_name(name).ok_or_else(|| format!("unknown delimiter '{}'", name))?
        }
        None => crate::detect_delimiter(&lines)
            .ok_or_else(|| crate::TableError::DelimiterNotFound.to_string())?,
    };
    let comment = match &opts.comment {
        Some(name) => Some(
            CommentChar::from_name(name)
                .ok_or_else(|| format!("unknown comment character '{}'", name))?,
        ),
        None => Some(CommentChar::Python),
    };
    // Row guesses follow the active delimiter, overridden or detected.
    let header = opts
        .header_rows
        .unwrap_or_else(|| crate::detect_header_rows(&lines, delimiter));
    let footer = opts
        .footer_rows
        .unwrap_or_else(|| crate::detect_footer_rows(&lines, delimiter));
    Ok((delimiter, header, footer, comment))
}

/// Extract the table for a document, detecting any unspecified settings
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractTable")]
pub fn extract_table_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: ExtractOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match resolve_settings(input, &opts) {
        Ok((delimiter, header, footer, comment)) => {
            match crate::extract_table(input, delimiter, header, footer, comment) {
                Ok(table) => ExtractResult {
                    success: true,
                    error: None,
                    delimiter: Some(delimiter.name().to_string()),
                    header_rows: header,
                    footer_rows: footer,
                    rows: table.rows().to_vec(),
                },
                Err(err) => ExtractResult {
                    success: false,
                    error: Some(err.to_string()),
                    delimiter: Some(delimiter.name().to_string()),
                    header_rows: header,
                    footer_rows: footer,
                    rows: Vec::new(),
                },
            }
        }
        Err(message) => ExtractResult {
            success: false,
            error: Some(message),
            delimiter: None,
            header_rows: 0,
            footer_rows: 0,
            rows: Vec::new(),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Extract two numeric columns for a document
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractColumns")]
pub fn extract_columns_wasm(input: &str, x: usize, y: usize, options: JsValue) -> JsValue {
    let opts: ExtractOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match resolve_settings(input, &opts).and_then(|(delimiter, header, footer, comment)| {
        crate::extract_table(input, delimiter, header, footer, comment)
            .and_then(|table| table.numeric_xy(x, y))
            .map_err(|err| err.to_string())
    }) {
        Ok((xs, ys)) => ColumnsResult {
            success: true,
            error: None,
            x: xs,
            y: ys,
        },
        Err(message) => ColumnsResult {
            success: false,
            error: Some(message),
            x: Vec::new(),
            y: Vec::new(),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}
