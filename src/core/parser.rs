//! Scannable-cite parsing
//!
//! Parses one single-citation string into a [`ParsedCitation`] via the fixed
//! five-field grammar of the scannable-cite notation:
//!
//! ```text
//! {prefix|-author-date|locator|suffix|zu:<digits>:<KEY>}
//! ```
//!
//! Fields are pipe-separated and positional. The author-date and suffix
//! fields are carried by the notation but unused downstream; a leading `-`
//! on the author-date field requests author suppression. Braces are
//! optional so that pieces produced by the splitter parse without
//! re-delimiting. The grammar is not end-anchored: anything after the key
//! run (including the closing brace) is ignored, as in the source notation.

use crate::utils::error::{CiteError, CiteResult};

/// Literal marker introducing the unique-key field.
const KEY_MARKER: &str = "|zu:";

/// One structured citation.
///
/// `resolved_key` is set if and only if bibliography resolution succeeded;
/// formatting falls back to `unique_key` when it is absent, so prose
/// correctness does not depend on bibliography completeness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    /// Free-text locator prefix (signal word), possibly empty
    pub prefix: String,
    /// True when the token requests author omission
    pub suppress_author: bool,
    /// Free-text location detail (page/section), possibly empty
    pub locator: String,
    /// Uppercase-alphanumeric identifier assigned by the reference manager
    pub unique_key: String,
    /// Human-readable citation key, absent until resolution succeeds
    pub resolved_key: Option<String>,
}

impl ParsedCitation {
    /// The key used in rendered output: the resolved key when present,
    /// otherwise the raw unique key.
    pub fn effective_key(&self) -> &str {
        self.resolved_key.as_deref().unwrap_or(&self.unique_key)
    }
}

/// An ordered, non-empty group of citations that appeared concatenated in
/// the source document. Order is preserved as written and is the
/// presentation order in output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationGroup {
    citations: Vec<ParsedCitation>,
}

impl CitationGroup {
    /// Wrap a non-empty citation list; empty input is a malformed token.
    pub fn new(citations: Vec<ParsedCitation>) -> CiteResult<Self> {
        if citations.is_empty() {
            return Err(CiteError::malformed_token(""));
        }
        Ok(CitationGroup { citations })
    }

    pub fn citations(&self) -> &[ParsedCitation] {
        &self.citations
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ParsedCitation> {
        self.citations.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }
}

/// Parse one single-citation string.
///
/// Fails with [`CiteError::MalformedCitation`] when the string does not
/// match the grammar (too few fields, missing or malformed key marker).
pub fn parse_citation(raw: &str) -> CiteResult<ParsedCitation> {
    let malformed = || CiteError::malformed_citation(raw);
    let body = raw.strip_prefix('{').unwrap_or(raw);

    let (prefix_field, rest) = next_field(body).ok_or_else(malformed)?;
    let (author_field, rest) = next_field(rest).ok_or_else(malformed)?;
    let (locator_field, rest) = next_field(rest).ok_or_else(malformed)?;
    let unique_key = find_key(rest).ok_or_else(malformed)?;

    Ok(ParsedCitation {
        prefix: prefix_field.trim().to_string(),
        suppress_author: author_field.trim_start().starts_with('-'),
        locator: locator_field.trim().to_string(),
        unique_key,
        resolved_key: None,
    })
}

/// Parse every piece of a split token into an ordered group.
pub fn parse_group<S: AsRef<str>>(pieces: &[S]) -> CiteResult<CitationGroup> {
    let citations = pieces
        .iter()
        .map(|piece| parse_citation(piece.as_ref()))
        .collect::<CiteResult<Vec<_>>>()?;
    CitationGroup::new(citations)
}

/// Split off the text up to the next field separator.
fn next_field(input: &str) -> Option<(&str, &str)> {
    let idx = input.find('|')?;
    Some((&input[..idx], &input[idx + 1..]))
}

/// Locate the key marker in the remainder (the suffix field plus the marker
/// field) and read out the unique key.
///
/// The suffix field may itself contain pipes, so the marker is the first
/// `|zu:` occurrence whose tail is a digit run, a colon, and a nonempty
/// uppercase-alphanumeric run.
fn find_key(rest: &str) -> Option<String> {
    let mut from = 0;
    while let Some(pos) = rest[from..].find(KEY_MARKER) {
        let at = from + pos;
        if let Some(key) = read_marker_tail(&rest[at + KEY_MARKER.len()..]) {
            return Some(key);
        }
        from = at + 1;
    }
    None
}

/// Read `<digits>:<KEY>` and return the key, or None if the tail does not
/// conform. Anything after the key run is ignored.
fn read_marker_tail(tail: &str) -> Option<String> {
    let bytes = tail.as_bytes();

    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 || i >= bytes.len() || bytes[i] != b':' {
        return None;
    }

    let key_start = i + 1;
    let mut j = key_start;
    while j < bytes.len() && (bytes[j].is_ascii_uppercase() || bytes[j].is_ascii_digit()) {
        j += 1;
    }
    if j == key_start {
        return None;
    }

    Some(tail[key_start..j].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_citation() {
        let parsed = parse_citation("{see|-|p. 5|suffix|zu:2433:ABC123}").unwrap();
        assert_eq!(parsed.prefix, "see");
        assert!(parsed.suppress_author);
        assert_eq!(parsed.locator, "p. 5");
        assert_eq!(parsed.unique_key, "ABC123");
        assert_eq!(parsed.resolved_key, None);
    }

    #[test]
    fn test_parse_empty_fields() {
        let parsed = parse_citation("{||||zu:1:KEY0}").unwrap();
        assert_eq!(parsed.prefix, "");
        assert!(!parsed.suppress_author);
        assert_eq!(parsed.locator, "");
        assert_eq!(parsed.unique_key, "KEY0");
    }

    #[test]
    fn test_parse_author_date_content_is_ignored() {
        let parsed = parse_citation("{cf.|-Smith, (2020)|pp. 1-9||zu:1:XY9}").unwrap();
        assert_eq!(parsed.prefix, "cf.");
        assert!(parsed.suppress_author);
        assert_eq!(parsed.locator, "pp. 1-9");
        assert_eq!(parsed.unique_key, "XY9");
    }

    #[test]
    fn test_parse_trims_field_whitespace() {
        let parsed = parse_citation("{ see | Smith (2020) | p. 5 | |zu:1:AB1}").unwrap();
        assert_eq!(parsed.prefix, "see");
        assert!(!parsed.suppress_author);
        assert_eq!(parsed.locator, "p. 5");
    }

    #[test]
    fn test_parse_without_braces() {
        // middle pieces of a split token carry no braces
        let parsed = parse_citation("ch. 2|-|||zu:1:BB22").unwrap();
        assert_eq!(parsed.prefix, "ch. 2");
        assert_eq!(parsed.unique_key, "BB22");
    }

    #[test]
    fn test_parse_suffix_field_may_contain_pipes() {
        let parsed = parse_citation("{|||a|b|zu:1:CC3}").unwrap();
        assert_eq!(parsed.unique_key, "CC3");
    }

    #[test]
    fn test_parse_key_run_stops_at_lowercase() {
        let parsed = parse_citation("{||||zu:1:ABCx}").unwrap();
        assert_eq!(parsed.unique_key, "ABC");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = parse_citation("{foo|bar}").unwrap_err();
        assert!(matches!(
            err,
            CiteError::MalformedCitation { ref snippet } if snippet == "{foo|bar}"
        ));
    }

    #[test]
    fn test_parse_rejects_missing_marker() {
        assert!(parse_citation("{a|b|c|d|e}").is_err());
        assert!(parse_citation("{a|b|c|d|zu::KEY}").is_err());
        assert!(parse_citation("{a|b|c|d|zu:12:}").is_err());
        assert!(parse_citation("{a|b|c|d|zu:12:lower}").is_err());
    }

    #[test]
    fn test_effective_key_fallback() {
        let mut parsed = parse_citation("{||||zu:1:RAW1}").unwrap();
        assert_eq!(parsed.effective_key(), "RAW1");
        parsed.resolved_key = Some("smith2020".to_string());
        assert_eq!(parsed.effective_key(), "smith2020");
    }

    #[test]
    fn test_group_requires_members() {
        assert!(CitationGroup::new(Vec::new()).is_err());
        assert!(parse_group::<&str>(&[]).is_err());
    }
}
