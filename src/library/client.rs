//! Bibliographic-library client interface
//!
//! The core never talks to the library service itself; batch maintenance is
//! written against the [`LibraryClient`] trait, and [`MemoryLibrary`]
//! provides an in-memory implementation for tests and offline runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::{CiteError, CiteResult};

/// The editable payload of a library item. Fields the maintenance routines
/// touch are typed; everything else rides along untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(rename = "itemType", default)]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "shortTitle", default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    #[serde(rename = "bookTitle", default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One library item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub data: ItemData,
}

impl Item {
    pub fn new(key: impl Into<String>, item_type: impl Into<String>) -> Self {
        Item {
            key: key.into(),
            data: ItemData {
                item_type: item_type.into(),
                ..ItemData::default()
            },
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = Some(title.into());
        self
    }

    pub fn with_short_title(mut self, title: impl Into<String>) -> Self {
        self.data.short_title = Some(title.into());
        self
    }

    pub fn with_book_title(mut self, title: impl Into<String>) -> Self {
        self.data.book_title = Some(title.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.data.doi = Some(doi.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.data.url = Some(url.into());
        self
    }
}

/// A collection record as the library service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub data: CollectionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionData {
    pub name: String,
    pub key: String,
}

/// Operations the batch-maintenance routines need from a library service.
pub trait LibraryClient {
    /// All items in a collection (implementations handle pagination).
    fn collection_items(&self, collection_key: &str) -> CiteResult<Vec<Item>>;

    /// Direct subcollections of a collection.
    fn subcollections(&self, collection_key: &str) -> CiteResult<Vec<Collection>>;

    /// Attach a tag to an item.
    fn add_tag(&mut self, item_key: &str, tag: &str) -> CiteResult<()>;

    /// Write a modified item back.
    fn update_item(&mut self, item: &Item) -> CiteResult<()>;
}

/// In-memory [`LibraryClient`] for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    items: IndexMap<String, Item>,
    collections: IndexMap<String, Vec<String>>,
    subcollections: IndexMap<String, Vec<Collection>>,
    tags: IndexMap<String, Vec<String>>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        MemoryLibrary::default()
    }

    /// Register an item and place it in a collection.
    pub fn insert_item(&mut self, collection_key: &str, item: Item) {
        self.collections
            .entry(collection_key.to_string())
            .or_default()
            .push(item.key.clone());
        self.items.insert(item.key.clone(), item);
    }

    /// Register a subcollection under a parent collection.
    pub fn insert_subcollection(&mut self, parent_key: &str, name: &str, key: &str) {
        self.subcollections
            .entry(parent_key.to_string())
            .or_default()
            .push(Collection {
                data: CollectionData {
                    name: name.to_string(),
                    key: key.to_string(),
                },
            });
        self.collections.entry(key.to_string()).or_default();
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn tags_of(&self, item_key: &str) -> &[String] {
        self.tags.get(item_key).map_or(&[], Vec::as_slice)
    }
}

impl LibraryClient for MemoryLibrary {
    fn collection_items(&self, collection_key: &str) -> CiteResult<Vec<Item>> {
        let keys = self.collections.get(collection_key).ok_or_else(|| {
            CiteError::library(format!("unknown collection '{}'", collection_key))
        })?;
        Ok(keys
            .iter()
            .filter_map(|key| self.items.get(key).cloned())
            .collect())
    }

    fn subcollections(&self, collection_key: &str) -> CiteResult<Vec<Collection>> {
        Ok(self
            .subcollections
            .get(collection_key)
            .cloned()
            .unwrap_or_default())
    }

    fn add_tag(&mut self, item_key: &str, tag: &str) -> CiteResult<()> {
        if !self.items.contains_key(item_key) {
            return Err(CiteError::library(format!("unknown item '{}'", item_key)));
        }
        let tags = self.tags.entry(item_key.to_string()).or_default();
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
        Ok(())
    }

    fn update_item(&mut self, item: &Item) -> CiteResult<()> {
        match self.items.get_mut(&item.key) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => Err(CiteError::library(format!("unknown item '{}'", item.key))),
        }
    }
}
