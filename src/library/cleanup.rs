//! Metadata cleanup for journal articles

use crate::library::client::Item;

/// Clear a journal article's URL when it also carries a DOI.
///
/// The DOI is the canonical link; a stored URL is usually a paywalled or
/// session-bound duplicate. Returns the updated item only when something
/// changed. Non-journal items are left alone.
pub fn journal_cleanup(item: &Item) -> Option<Item> {
    if item.data.item_type != "journalArticle" {
        return None;
    }

    let has_doi = item.data.doi.as_deref().is_some_and(|doi| !doi.is_empty());
    let has_url = item.data.url.as_deref().is_some_and(|url| !url.is_empty());
    if !(has_doi && has_url) {
        return None;
    }

    let mut updated = item.clone();
    updated.data.url = Some(String::new());
    Some(updated)
}
