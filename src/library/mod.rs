//! Library maintenance
//!
//! Batch routines for keeping a reference-manager library tidy: sentence-
//! casing titles, clearing redundant journal URLs, and tagging items with
//! the name of their subcollection. All of them run against the
//! [`LibraryClient`] trait; network transport is the caller's concern.

pub mod cleanup;
pub mod client;
pub mod titles;

use indexmap::IndexMap;

use crate::utils::error::CiteResult;

pub use cleanup::journal_cleanup;
pub use client::{Collection, CollectionData, Item, ItemData, LibraryClient, MemoryLibrary};
pub use titles::{retitle_item, sentence_case, to_sentence_case};

/// Map collection names to keys for a collection list.
///
/// When several collections share a name, the last one wins (the shape of
/// the mapping cannot represent duplicates).
pub fn collection_names_to_keys(collections: &[Collection]) -> IndexMap<String, String> {
    collections
        .iter()
        .map(|coll| (coll.data.name.clone(), coll.data.key.clone()))
        .collect()
}

/// Sentence-case the titles of every item in a collection.
///
/// Changed items are written back unless `dry_run` is set. Returns the
/// number of items that needed a change.
pub fn retitle_collection(
    client: &mut impl LibraryClient,
    collection_key: &str,
    dry_run: bool,
) -> CiteResult<usize> {
    let items = client.collection_items(collection_key)?;
    let mut changed = 0;
    for item in &items {
        if let Some(updated) = titles::retitle_item(item) {
            changed += 1;
            if !dry_run {
                client.update_item(&updated)?;
            }
        }
    }
    Ok(changed)
}

/// Clean up journal-article metadata for every item in a collection.
///
/// Changed items are written back unless `dry_run` is set. Returns the
/// number of items that needed a change.
pub fn cleanup_collection(
    client: &mut impl LibraryClient,
    collection_key: &str,
    dry_run: bool,
) -> CiteResult<usize> {
    let items = client.collection_items(collection_key)?;
    let mut changed = 0;
    for item in &items {
        if let Some(updated) = cleanup::journal_cleanup(item) {
            changed += 1;
            if !dry_run {
                client.update_item(&updated)?;
            }
        }
    }
    Ok(changed)
}

/// Tag every item in each subcollection of `collection_key` with the name
/// of its subcollection. Returns the number of tags applied.
pub fn tag_with_subcollections(
    client: &mut impl LibraryClient,
    collection_key: &str,
) -> CiteResult<usize> {
    let subcollections = client.subcollections(collection_key)?;
    let mut tagged = 0;
    for coll in subcollections {
        let items = client.collection_items(&coll.data.key)?;
        for item in items {
            client.add_tag(&item.key, &coll.data.name)?;
            tagged += 1;
        }
    }
    Ok(tagged)
}
