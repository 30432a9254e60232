use serde::{Deserialize, Serialize};

use crate::list::normalize::normalize;

/// The upstream registries a list can be generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Fedora,
    Spdx,
    Suse,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Fedora => write!(f, "fedora"),
            SourceKind::Spdx => write!(f, "spdx"),
            SourceKind::Suse => write!(f, "suse"),
        }
    }
}

/// A deduplicated, case-insensitively sorted list of licence identifiers.
///
/// The only way to build one is through [`IdentifierList::from_candidates`],
/// so the ordering invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentifierList(Vec<String>);

impl IdentifierList {
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        IdentifierList(normalize(candidates))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Candidate identifiers destined for one output file, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub file_name: &'static str,
    pub candidates: Vec<String>,
}

impl Extraction {
    pub fn new(file_name: &'static str, candidates: Vec<String>) -> Self {
        Self {
            file_name,
            candidates,
        }
    }
}

/// One line of the end-of-run summary.
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    pub file: String,
    pub origin: String,
    pub entries: usize,
}
