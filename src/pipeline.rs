use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::decode::decode;
use crate::error::LicenceError;
use crate::fetch::Fetcher;
use crate::list::writer::write_list;
use crate::models::{IdentifierList, ListSummary};
use crate::registry::ListSource;

/// Runs fetch → decode → extract → normalize → write for one source at a time.
pub struct Pipeline<'a> {
    fetcher: &'a Fetcher,
    output_dir: PathBuf,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a Fetcher, output_dir: &Path) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Refresh every list owned by `source`, reading it from `location`.
    pub async fn run(
        &self,
        source: &dyn ListSource,
        location: &str,
    ) -> Result<Vec<ListSummary>, LicenceError> {
        let bytes = self.fetcher.fetch(location).await?;
        let document = decode(source.format(), &bytes, location)?;
        let extractions = source.extract(&document, location)?;

        let mut summaries = Vec::with_capacity(extractions.len());
        for extraction in extractions {
            let list = IdentifierList::from_candidates(extraction.candidates);
            if list.is_empty() {
                warn!(source = %source.kind(), file = extraction.file_name, "no identifiers extracted");
            }
            write_list(&self.output_dir.join(extraction.file_name), &list)?;

            summaries.push(ListSummary {
                file: extraction.file_name.to_string(),
                origin: source.kind().to_string(),
                entries: list.len(),
            });
        }

        info!(source = %source.kind(), lists = summaries.len(), "source refreshed");
        Ok(summaries)
    }
}
