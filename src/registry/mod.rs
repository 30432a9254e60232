//! Licence registries the lists are generated from.
//!
//! Each module implements [`ListSource`] for one upstream: how its document is
//! decoded and which identifiers it contributes to which output file.

pub mod fedora;
pub mod spdx;
pub mod suse;

use crate::decode::{Document, DocumentFormat};
use crate::error::LicenceError;
use crate::models::{Extraction, SourceKind};

pub trait ListSource {
    fn kind(&self) -> SourceKind;

    fn format(&self) -> DocumentFormat;

    /// Map a decoded document to the candidate identifiers for each output file.
    fn extract(&self, document: &Document, location: &str)
        -> Result<Vec<Extraction>, LicenceError>;
}

/// All sources, in the order they are refreshed.
pub fn all_sources() -> Vec<Box<dyn ListSource>> {
    vec![
        Box::new(fedora::FedoraSource),
        Box::new(spdx::SpdxSource),
        Box::new(suse::SuseSource),
    ]
}

fn expect_json<'a>(
    document: &'a Document,
    location: &str,
) -> Result<&'a serde_json::Value, LicenceError> {
    match document {
        Document::Json(value) => Ok(value),
        Document::Cells(_) => Err(LicenceError::decode(location, "expected a JSON document")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_order() {
        let kinds: Vec<SourceKind> = all_sources().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, [SourceKind::Fedora, SourceKind::Spdx, SourceKind::Suse]);
    }
}
