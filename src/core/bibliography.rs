//! Bibliography index and key resolution
//!
//! The index maps the reference manager's unique keys to the human-readable
//! citation keys assigned by the key-generation tool. It is built once from
//! the JSON bibliography export and is read-only for the duration of a
//! transformation pass.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::core::parser::{CitationGroup, ParsedCitation};
use crate::utils::error::CiteResult;

/// One record of the bibliography export. Extra export fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BibEntry {
    /// Reference-manager-internal unique key
    #[serde(rename = "zoteroKey")]
    pub zotero_key: String,
    /// Human-readable citation key
    pub id: String,
}

/// Unique keys seen during one document pass, in first-citation order.
///
/// Exclusively owned by a single pass; set semantics deduplicate repeated
/// citations of the same entry.
pub type CollectedKeys = IndexSet<String>;

/// Read-only mapping from unique key to citation key.
#[derive(Debug, Clone, Default)]
pub struct BibliographyIndex {
    entries: IndexMap<String, String>,
}

impl BibliographyIndex {
    /// An empty index. Every resolution misses and rendering falls back to
    /// the raw unique keys.
    pub fn new() -> Self {
        BibliographyIndex::default()
    }

    /// Build the index from export records. The first record for a unique
    /// key is authoritative if duplicates exist.
    pub fn from_entries(entries: impl IntoIterator<Item = BibEntry>) -> Self {
        let mut map = IndexMap::new();
        for entry in entries {
            map.entry(entry.zotero_key).or_insert(entry.id);
        }
        BibliographyIndex { entries: map }
    }

    /// Build the index from the JSON export text (an array of records).
    pub fn from_json(json: &str) -> CiteResult<Self> {
        let entries: Vec<BibEntry> = serde_json::from_str(json)?;
        Ok(BibliographyIndex::from_entries(entries))
    }

    /// Look up the citation key for a unique key.
    pub fn lookup(&self, unique_key: &str) -> Option<&str> {
        self.entries.get(unique_key).map(String::as_str)
    }

    /// Unique keys of the export, in export order.
    pub fn unique_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve one citation against the index.
///
/// On a hit the citation key is attached; a miss leaves the citation
/// unchanged and is not an error (the entry may simply not have been
/// assigned a citation key yet). Either way the unique key is recorded in
/// the pass's collected set.
pub fn resolve_citation(
    citation: &mut ParsedCitation,
    index: &BibliographyIndex,
    collected: &mut CollectedKeys,
) {
    collected.insert(citation.unique_key.clone());
    if let Some(key) = index.lookup(&citation.unique_key) {
        citation.resolved_key = Some(key.to_string());
    }
}

/// Resolve every member of a group, in order.
pub fn resolve_group(
    group: &mut CitationGroup,
    index: &BibliographyIndex,
    collected: &mut CollectedKeys,
) {
    for citation in group.iter_mut() {
        resolve_citation(citation, index, collected);
    }
}
