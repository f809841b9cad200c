//! Pandoc citation rendering
//!
//! Renders resolved citations into Pandoc Markdown citation notation:
//! `[see -@smith2020, p. 5; @jones2019]`.

use crate::core::parser::{CitationGroup, ParsedCitation};

/// Render one citation without its enclosing brackets.
///
/// Layout: prefix (followed by a space when non-empty), the `-` suppression
/// marker when requested, `@` and the effective key, then `, locator` when
/// the locator is non-empty.
pub fn format_citation(citation: &ParsedCitation) -> String {
    let mut out = String::new();
    if !citation.prefix.is_empty() {
        out.push_str(&citation.prefix);
        out.push(' ');
    }
    if citation.suppress_author {
        out.push('-');
    }
    out.push('@');
    out.push_str(citation.effective_key());
    if !citation.locator.is_empty() {
        out.push_str(", ");
        out.push_str(&citation.locator);
    }
    out
}

/// Render a group by formatting each member independently and joining the
/// results with `; ` in original order.
pub fn format_group(group: &CitationGroup) -> String {
    group
        .citations()
        .iter()
        .map(format_citation)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render a whole bracketed citation cluster.
pub fn format_cluster(group: &CitationGroup) -> String {
    format!("[{}]", format_group(group))
}
