use std::path::PathBuf;

use thiserror::Error;

/// Every way a list refresh can fail. None of these are recovered from;
/// the run stops at the first one and exits with status `1`.
#[derive(Debug, Error)]
pub enum LicenceError {
    /// A remote or local resource could not be read.
    #[error("failed to read \"{location}\": {reason}")]
    Fetch { location: String, reason: String },

    /// Fetched content is not valid JSON/HTML, or lacks the expected shape.
    #[error("failed to decode \"{location}\": {reason}")]
    Decode { location: String, reason: String },

    /// A licence record whose approval status cannot be determined.
    #[error("cannot classify {record}: {reason}")]
    Classification { record: String, reason: String },

    /// An output list could not be written.
    #[error("failed to write to file \"{}\"", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LicenceError {
    pub fn fetch(location: &str, reason: impl ToString) -> Self {
        LicenceError::Fetch {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(location: &str, reason: impl ToString) -> Self {
        LicenceError::Decode {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn classification(record: impl ToString, reason: impl ToString) -> Self {
        LicenceError::Classification {
            record: record.to_string(),
            reason: reason.to_string(),
        }
    }
}
