use tracing::debug;

use crate::decode::{Document, DocumentFormat};
use crate::error::LicenceError;
use crate::models::{Extraction, SourceKind};

use super::ListSource;

pub const SUSE_FILE: &str = "suse.txt";

/// Labels in the sheet that look like identifiers but mark non-free software.
const NON_LICENCE_LABELS: [&str; 4] = ["Freeware", "NonFree", "SUSE-Freeware", "SUSE-NonFree"];

/// Padding stripped from cell text. Only ASCII: a non-breaking space is kept.
const CELL_PADDING: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// The SUSE sheet mixes licence names with alternative names, URLs and free-form
/// comments. Only cells that look like a single identifier are kept.
pub struct SuseSource;

impl ListSource for SuseSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Suse
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::SheetHtml
    }

    fn extract(
        &self,
        document: &Document,
        location: &str,
    ) -> Result<Vec<Extraction>, LicenceError> {
        let Document::Cells(cells) = document else {
            return Err(LicenceError::decode(location, "expected spreadsheet cells"));
        };
        let candidates = cells
            .iter()
            .filter_map(|cell| licence_token(cell))
            .map(str::to_string)
            .collect();
        Ok(vec![Extraction::new(SUSE_FILE, candidates)])
    }
}

/// Return the trimmed cell text if it passes the identifier filters.
pub fn licence_token(cell: &str) -> Option<&str> {
    let text = cell.trim_matches(CELL_PADDING);

    let rejected = if text.is_empty() {
        Some("empty")
    } else if NON_LICENCE_LABELS.contains(&text) {
        Some("non-free label")
    } else if text.starts_with("https://") || text.starts_with("http://") {
        Some("url")
    } else if text.contains('(') {
        Some("parenthesis")
    } else if text.contains(' ') && !text.contains(" WITH ") {
        Some("space")
    } else {
        None
    };

    match rejected {
        Some(reason) => {
            debug!(cell = text, reason, "skipping sheet cell");
            None
        }
        None => Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_cells() {
        let doc = Document::Cells(
            [
                "MIT",
                "Freeware",
                "https://example.com",
                "Foo (bar)",
                "Foo Bar",
                "Apache-2.0 WITH LLVM-exception",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );

        let out = SuseSource.extract(&doc, "suse").unwrap();
        assert_eq!(
            out[0].candidates,
            vec!["MIT", "Apache-2.0 WITH LLVM-exception"]
        );
        assert_eq!(out[0].file_name, SUSE_FILE);
    }

    #[test]
    fn test_blocklist_is_exact_and_case_sensitive() {
        assert_eq!(licence_token("SUSE-NonFree"), None);
        assert_eq!(licence_token("NonFree"), None);
        assert_eq!(licence_token("nonfree"), Some("nonfree"));
        assert_eq!(licence_token("SUSE-Freeware-2"), Some("SUSE-Freeware-2"));
    }

    #[test]
    fn test_trims_before_filtering() {
        assert_eq!(licence_token("  SUSE-Permissive\n"), Some("SUSE-Permissive"));
        assert_eq!(licence_token("  Freeware "), None);
        assert_eq!(licence_token("   "), None);
    }

    #[test]
    fn test_only_ascii_padding_is_trimmed() {
        assert_eq!(licence_token("\t\x0BMIT\r\n\0"), Some("MIT"));
        // A cell padded with NBSP keeps it and no longer matches the blocklist.
        assert_eq!(licence_token("\u{a0}Freeware"), Some("\u{a0}Freeware"));
    }

    #[test]
    fn test_with_must_be_surrounded_by_spaces() {
        assert_eq!(licence_token("GPL-2.0 with Classpath"), None);
        assert_eq!(licence_token("see http://x"), None);
        assert_eq!(licence_token("http://spdx.org"), None);
    }

    #[test]
    fn test_parenthesis_beats_with() {
        assert_eq!(licence_token("(GPL-2.0 WITH Classpath-exception-2.0)"), None);
    }

    #[test]
    fn test_json_document_is_rejected() {
        let err = SuseSource
            .extract(&Document::Json(serde_json::json!([])), "suse")
            .unwrap_err();
        assert!(matches!(err, LicenceError::Decode { .. }));
    }
}
