//! Identifier list handling shared by every source.
//!
//! - [`normalize`] — exact dedup plus case-insensitive ordering.
//! - [`writer`] — persisting a list as newline-delimited text and reading it back.
//! - [`merge`] — folding every written list into the combined list.

pub mod merge;
pub mod normalize;
pub mod writer;
