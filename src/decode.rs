//! Turning fetched bytes into something the extraction rules can walk.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::LicenceError;

/// Deepest array/object nesting accepted in a JSON source.
pub const MAX_JSON_DEPTH: usize = 32;

/// Id of the element wrapping the published spreadsheet grid.
pub const SHEET_ANCHOR_ID: &str = "sheets-viewport";

/// How a source's bytes should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    SheetHtml,
}

/// A decoded source document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(Value),
    /// Raw text content of every table cell inside the sheet anchor, in document order.
    Cells(Vec<String>),
}

pub fn decode(
    format: DocumentFormat,
    bytes: &[u8],
    location: &str,
) -> Result<Document, LicenceError> {
    match format {
        DocumentFormat::Json => decode_json(bytes, location).map(Document::Json),
        DocumentFormat::SheetHtml => decode_sheet_cells(bytes, location).map(Document::Cells),
    }
}

/// Parse JSON, substituting U+FFFD for invalid UTF-8 and rejecting documents
/// nested deeper than [`MAX_JSON_DEPTH`].
pub fn decode_json(bytes: &[u8], location: &str) -> Result<Value, LicenceError> {
    let text = String::from_utf8_lossy(bytes);
    let value: Value =
        serde_json::from_str(&text).map_err(|e| LicenceError::decode(location, e))?;

    let depth = nesting_depth(&value);
    if depth > MAX_JSON_DEPTH {
        return Err(LicenceError::decode(
            location,
            format!("maximum nesting depth of {MAX_JSON_DEPTH} exceeded ({depth})"),
        ));
    }
    Ok(value)
}

/// Number of nested arrays/objects; scalars add nothing.
fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}

/// Parse an HTML page and collect the text of every `<td>` under `#sheets-viewport`.
pub fn decode_sheet_cells(bytes: &[u8], location: &str) -> Result<Vec<String>, LicenceError> {
    let text = String::from_utf8_lossy(bytes);
    let document = Html::parse_document(&text);

    let anchor = selector(&format!("#{SHEET_ANCHOR_ID}"), location)?;
    let cell = selector("td", location)?;

    let viewport = document.select(&anchor).next().ok_or_else(|| {
        LicenceError::decode(location, format!("failed to find #{SHEET_ANCHOR_ID} in HTML"))
    })?;

    Ok(viewport
        .select(&cell)
        .map(|td| td.text().collect::<String>())
        .collect())
}

fn selector(css: &str, location: &str) -> Result<Selector, LicenceError> {
    Selector::parse(css).map_err(|e| LicenceError::decode(location, format!("{css}: {e}")))
}
