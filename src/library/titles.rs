//! Sentence-casing of item titles
//!
//! Reference managers accumulate title-cased titles; citation styles want
//! sentence case. The conversion lowercases words unless they look like
//! something that must keep its capitals (CamelCase, acronyms, standalone
//! "I"), and re-capitalizes the first word of each title segment.
//!
//! Known gaps, as in any heuristic: chemistry notation ("bisphenol A") and
//! proper nouns are lowercased.

use lazy_static::lazy_static;
use regex::Regex;

use crate::library::client::Item;

lazy_static! {
    /// Words matching any of these keep their capitalization.
    static ref CONSERVE: Vec<Regex> = vec![
        // an upper-case letter or digit after the first character:
        // CamelCase, eBay, BRCA1
        Regex::new(r"\w[A-Z0-9]").expect("valid conserve pattern"),
        // dotted acronyms: E.U., U.S.
        Regex::new(r"[A-Z.]{2,}").expect("valid conserve pattern"),
        // the pronoun
        Regex::new(r"\bI\b").expect("valid conserve pattern"),
    ];

    /// Segment separators: each segment is sentence-cased independently and
    /// the separator text passes through verbatim.
    static ref SEPARATORS: Regex =
        Regex::new(r"[:?!.]\s|\s+\|\s|\s+[-–—]\s|—").expect("valid separator pattern");
}

fn conserve(word: &str) -> bool {
    CONSERVE.iter().any(|pattern| pattern.is_match(word))
}

/// Upper-case the first letter, skipping a leading quote character.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(quote) if "'\"\u{201c}\u{2018}".contains(quote) => match chars.next() {
            Some(c) => format!("{}{}{}", quote, c.to_uppercase(), chars.as_str()),
            None => word.to_string(),
        },
        Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
    }
}

/// Convert one fragmentary phrase to sentence case.
///
/// Inner whitespace is normalized to single spaces, matching the original
/// behavior of rebuilding the phrase word by word.
pub fn sentence_case(text: &str) -> String {
    let mut words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            if conserve(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect();

    match words.first_mut() {
        Some(first) => *first = capitalize_first(first),
        None => return text.to_string(),
    }
    words.join(" ")
}

/// Convert a whole title to sentence case, segment by segment.
pub fn to_sentence_case(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(title.len());
    let mut cursor = 0;
    for separator in SEPARATORS.find_iter(title) {
        out.push_str(&sentence_case(&title[cursor..separator.start()]));
        out.push_str(separator.as_str());
        cursor = separator.end();
    }
    out.push_str(&sentence_case(&title[cursor..]));
    out
}

/// Sentence-case an item's titles (`title`, `shortTitle`, `bookTitle`).
///
/// Attachments and notes are skipped. Returns the updated item only when
/// something changed, so callers can skip needless writes.
pub fn retitle_item(item: &Item) -> Option<Item> {
    if item.data.item_type == "attachment" || item.data.item_type == "note" {
        return None;
    }

    let mut updated = item.clone();
    let mut changed = false;
    for field in [
        &mut updated.data.title,
        &mut updated.data.short_title,
        &mut updated.data.book_title,
    ] {
        if let Some(text) = field {
            let cased = to_sentence_case(text);
            if cased != *text {
                *text = cased;
                changed = true;
            }
        }
    }

    changed.then_some(updated)
}
