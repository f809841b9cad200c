//! Whole-document rewriting
//!
//! Drives the pipeline over a full document: every scanned span is split,
//! parsed, resolved, and re-rendered, and the rendered cluster replaces the
//! original span. Text outside matched spans is copied byte-for-byte.
//!
//! The pass is all-or-nothing: a malformed token or citation aborts the
//! whole document rather than emitting a partially substituted result.

use crate::core::bibliography::{resolve_group, BibliographyIndex, CollectedKeys};
use crate::core::formatter::format_cluster;
use crate::core::parser::parse_group;
use crate::core::scanner::scan_tokens;
use crate::core::splitter::split_token;
use crate::utils::error::CiteResult;

/// Result of one document pass.
#[derive(Debug, Clone)]
pub struct RewriteOutput {
    /// The transformed document text
    pub content: String,
    /// Every unique key encountered, in first-citation order
    pub collected: CollectedKeys,
}

/// Rewrite every scannable-cite token in `input` into Pandoc notation.
///
/// Spans are processed in scan order and replacements applied against a
/// cursor into the original text, so offsets of not-yet-processed spans
/// stay valid.
pub fn rewrite_document(input: &str, index: &BibliographyIndex) -> CiteResult<RewriteOutput> {
    let mut content = String::with_capacity(input.len());
    let mut collected = CollectedKeys::new();
    let mut cursor = 0;

    for token in scan_tokens(input) {
        let pieces = split_token(&token.text)?;
        let mut group = parse_group(&pieces)?;
        resolve_group(&mut group, index, &mut collected);

        content.push_str(&input[cursor..token.start]);
        content.push_str(&format_cluster(&group));
        cursor = token.end;
    }
    content.push_str(&input[cursor..]);

    Ok(RewriteOutput { content, collected })
}
