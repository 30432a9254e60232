use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::decode::{Document, DocumentFormat};
use crate::error::LicenceError;
use crate::models::{Extraction, SourceKind};

use super::{expect_json, ListSource};

pub const FEDORA_FILE: &str = "fedora.txt";

/// One entry of `fedora-licenses.json`. Both the current nested layout and
/// the deprecated flat fields are accepted.
#[derive(Debug, Default, Deserialize)]
struct FedoraRecord {
    license: Option<LicenceSection>,
    fedora: Option<FedoraSection>,
    /// Deprecated: `"yes"` / `"no"`.
    approved: Option<Value>,
    /// Deprecated.
    spdx_abbrev: Option<String>,
    /// Deprecated.
    fedora_abbrev: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LicenceSection {
    status: Option<Vec<String>>,
    expression: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FedoraSection {
    #[serde(rename = "legacy-abbreviation")]
    legacy_abbreviation: Option<Vec<String>>,
}

/// Known values of `license.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FedoraStatus {
    Allowed,
    AllowedContent,
    AllowedDocumentation,
    AllowedFonts,
    NotAllowed,
}

impl FedoraStatus {
    /// Unknown statuses are an error rather than being skipped: a new status
    /// upstream must be classified here before lists can be generated again.
    fn parse(value: &str, record: &str) -> Result<Self, LicenceError> {
        match value {
            "allowed" => Ok(FedoraStatus::Allowed),
            "allowed-content" => Ok(FedoraStatus::AllowedContent),
            "allowed-documentation" => Ok(FedoraStatus::AllowedDocumentation),
            "allowed-fonts" => Ok(FedoraStatus::AllowedFonts),
            "not-allowed" => Ok(FedoraStatus::NotAllowed),
            other => Err(LicenceError::classification(
                record,
                format!("unknown Fedora licence status \"{other}\""),
            )),
        }
    }
}

pub struct FedoraSource;

impl ListSource for FedoraSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Fedora
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn extract(
        &self,
        document: &Document,
        location: &str,
    ) -> Result<Vec<Extraction>, LicenceError> {
        let value = expect_json(document, location)?;
        let candidates = extract_allowed(value, location)?;
        Ok(vec![Extraction::new(FEDORA_FILE, candidates)])
    }
}

/// Identifiers of every licence Fedora allows.
///
/// The upstream document is an object keyed by licence name; a plain array of
/// records is accepted as well.
pub fn extract_allowed(value: &Value, location: &str) -> Result<Vec<String>, LicenceError> {
    let records: Vec<(String, &Value)> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, record)| (format!("licence \"{key}\""), record))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, record)| (format!("licence record #{i}"), record))
            .collect(),
        _ => {
            return Err(LicenceError::decode(
                location,
                "expected an object or array of licence records",
            ))
        }
    };

    let mut list = Vec::new();
    for (name, raw) in records {
        let record: FedoraRecord = serde_json::from_value(raw.clone())
            .map_err(|e| LicenceError::decode(location, format!("{name}: {e}")))?;

        if !is_allowed(&record, &name)? {
            debug!(record = %name, "not allowed in Fedora");
            continue;
        }
        list.extend(identifiers(record));
    }
    Ok(list)
}

fn is_allowed(record: &FedoraRecord, name: &str) -> Result<bool, LicenceError> {
    let status_list = record.license.as_ref().and_then(|l| l.status.as_ref());

    if let Some(status_list) = status_list {
        let statuses = status_list
            .iter()
            .map(|s| FedoraStatus::parse(s, name))
            .collect::<Result<Vec<_>, _>>()?;

        if statuses.contains(&FedoraStatus::NotAllowed) {
            return Ok(false);
        }
        // Everything else that parsed is one of the allowed-* variants.
        if !statuses.is_empty() {
            return Ok(true);
        }
    } else {
        match &record.approved {
            Some(Value::String(s)) if s == "yes" => return Ok(true),
            Some(Value::String(s)) if s == "no" => return Ok(false),
            Some(Value::Bool(approved)) => return Ok(*approved),
            _ => {}
        }
    }

    Err(LicenceError::classification(
        name,
        "failed to determine Fedora licence status",
    ))
}

fn identifiers(record: FedoraRecord) -> Vec<String> {
    let mut ids = Vec::new();

    if let Some(licence) = record.license {
        ids.extend(licence.expression);
    }
    if let Some(abbrevs) = record.fedora.and_then(|f| f.legacy_abbreviation) {
        ids.extend(abbrevs);
    }
    ids.extend(record.spdx_abbrev);
    ids.extend(record.fedora_abbrev);

    ids.retain(|id| !id.is_empty());
    ids
}
