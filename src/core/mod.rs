//! Scannable-cite to Pandoc conversion pipeline
//!
//! The pipeline runs in fixed stages over a document: scan for token spans,
//! split each span into single citations, parse each citation, resolve it
//! against the bibliography index, render the group, substitute.

pub mod bibliography;
pub mod formatter;
pub mod parser;
pub mod report;
pub mod rewriter;
pub mod scanner;
pub mod splitter;

pub use bibliography::{resolve_citation, resolve_group, BibEntry, BibliographyIndex, CollectedKeys};
pub use formatter::{format_citation, format_cluster, format_group};
pub use parser::{parse_citation, parse_group, CitationGroup, ParsedCitation};
pub use report::CitationReport;
pub use rewriter::{rewrite_document, RewriteOutput};
pub use scanner::{scan_tokens, RawToken, TokenScanner};
pub use splitter::split_token;
