//! Citesub - Zotero scannable cite to Pandoc Markdown citation converter
//!
//! Zotero's "scannable cite" export drops compact brace-delimited citation
//! tokens into plain text:
//!
//! ```text
//! {see|-Smith, (2020)|p. 5||zu:2433:ABC123}
//! ```
//!
//! This crate scans a document for those tokens, parses them, resolves each
//! one against a Better-BibTeX bibliography export, and substitutes Pandoc
//! Markdown citations in place:
//!
//! ```text
//! [see -@smith2020, p. 5]
//! ```
//!
//! The pass also collects every unique key it saw, so callers can report
//! citations missing from the export and export entries never cited.
//!
//! # Example
//!
//! ```
//! use citesub::{scannable_to_pandoc, BibliographyIndex};
//!
//! let bib = r#"[{"zoteroKey": "ABC123", "id": "smith2020"}]"#;
//! let index = BibliographyIndex::from_json(bib).unwrap();
//!
//! let out = scannable_to_pandoc("As shown {see|-|p. 5||zu:1:ABC123} above.", &index).unwrap();
//! assert_eq!(out.content, "As shown [see -@smith2020, p. 5] above.");
//! ```

pub mod core;
pub mod library;
pub mod utils;

pub use crate::core::{
    format_citation, format_cluster, format_group, parse_citation, parse_group, resolve_citation,
    resolve_group, rewrite_document, scan_tokens, split_token, BibEntry, BibliographyIndex,
    CitationGroup, CitationReport, CollectedKeys, ParsedCitation, RawToken, RewriteOutput,
    TokenScanner,
};
pub use library::{LibraryClient, MemoryLibrary};
pub use utils::error::{CiteError, CiteResult};

/// Rewrite every scannable-cite token in `input` into Pandoc notation.
pub fn scannable_to_pandoc(input: &str, index: &BibliographyIndex) -> CiteResult<RewriteOutput> {
    core::rewrite_document(input, index)
}

/// Rewrite a document and also diff the collected keys against the
/// bibliography export.
pub fn scannable_to_pandoc_with_report(
    input: &str,
    index: &BibliographyIndex,
) -> CiteResult<(RewriteOutput, CitationReport)> {
    let output = core::rewrite_document(input, index)?;
    let report = CitationReport::new(&output.collected, index);
    Ok((output, report))
}
