//! Token scanning
//!
//! Locates Zotero scannable-cite tokens embedded in free-form document text.
//! A token is one brace-delimited group, or a run of adjacent groups with no
//! separating character, ending in the `|zu:<n>:<KEY>` marker.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Scan pattern for one run of adjacent scannable-cite groups.
    ///
    /// The lazy body cannot stop at an inner `}` because the character after
    /// the group must not be an opening brace, so `}{`-adjacent groups are
    /// swept into a single match. End of input also counts as a boundary,
    /// which keeps a token that closes the document recognizable.
    static ref SCAN_RX: Regex =
        Regex::new(r"(\{.*?\|zu:\d+:[A-Z0-9]+\})(?:[^{]|$)").expect("valid scan pattern");
}

/// One scanned token span: the braced text and its offsets in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Token text, including the delimiting braces
    pub text: String,
    /// Byte offset of the opening brace in the document
    pub start: usize,
    /// Byte offset just past the closing brace
    pub end: usize,
}

/// Lazy iterator over the token spans of a document, in scan order.
///
/// Matches do not overlap; scanning resumes after the end of the previous
/// match. The span excludes the boundary character that terminated it.
pub struct TokenScanner<'a> {
    inner: regex::CaptureMatches<'static, 'a>,
}

impl<'a> TokenScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenScanner {
            inner: SCAN_RX.captures_iter(input),
        }
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let caps = self.inner.next()?;
        let group = caps.get(1)?;
        Some(RawToken {
            text: group.as_str().to_string(),
            start: group.start(),
            end: group.end(),
        })
    }
}

/// Scan a document for scannable-cite token spans.
pub fn scan_tokens(input: &str) -> TokenScanner<'_> {
    TokenScanner::new(input)
}
