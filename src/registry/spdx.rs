use serde::Deserialize;
use serde_json::Value;

use crate::decode::{Document, DocumentFormat};
use crate::error::LicenceError;
use crate::models::{Extraction, SourceKind};

use super::{expect_json, ListSource};

pub const FSF_FILE: &str = "spdx-only-fsf.txt";
pub const OSI_FILE: &str = "spdx-only-osi.txt";
pub const EITHER_FILE: &str = "spdx-fsf-or-osi.txt";
pub const BOTH_FILE: &str = "spdx-fsf-and-osi.txt";

#[derive(Debug, Deserialize)]
struct SpdxLicenceList {
    licenses: Vec<SpdxLicence>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxLicence {
    license_id: String,
    #[serde(default)]
    is_fsf_libre: Option<bool>,
    #[serde(default)]
    is_osi_approved: Option<bool>,
}

/// SPDX identifiers split by who approves them.
#[derive(Debug, Default, PartialEq)]
pub struct ApprovalGroups {
    pub fsf: Vec<String>,
    pub osi: Vec<String>,
    pub either: Vec<String>,
    pub both: Vec<String>,
}

pub struct SpdxSource;

impl ListSource for SpdxSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Spdx
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn extract(
        &self,
        document: &Document,
        location: &str,
    ) -> Result<Vec<Extraction>, LicenceError> {
        let groups = group_by_approval(expect_json(document, location)?, location)?;
        Ok(vec![
            Extraction::new(FSF_FILE, groups.fsf),
            Extraction::new(OSI_FILE, groups.osi),
            Extraction::new(EITHER_FILE, groups.either),
            Extraction::new(BOTH_FILE, groups.both),
        ])
    }
}

/// Sort every licence in `licenses.json` into the FSF / OSI groups.
/// A missing flag counts as not approved.
pub fn group_by_approval(value: &Value, location: &str) -> Result<ApprovalGroups, LicenceError> {
    let data = SpdxLicenceList::deserialize(value)
        .map_err(|e| LicenceError::decode(location, e))?;

    let mut groups = ApprovalGroups::default();
    for licence in data.licenses {
        let fsf = licence.is_fsf_libre.unwrap_or(false);
        let osi = licence.is_osi_approved.unwrap_or(false);
        let id = licence.license_id;

        if fsf {
            groups.fsf.push(id.clone());
        }
        if osi {
            groups.osi.push(id.clone());
        }
        if fsf || osi {
            groups.either.push(id.clone());
        }
        if fsf && osi {
            groups.both.push(id);
        }
    }
    Ok(groups)
}
