//! End-of-run summary renderers.
//!
//! - [`terminal`] — coloured header plus a table of written lists; respects `--quiet`.
//! - JSON output is the serialized [`ListSummary`](crate::models::ListSummary) slice.

pub mod terminal;

use anyhow::Result;

use crate::models::ListSummary;

pub fn render_json(summaries: &[ListSummary]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}
