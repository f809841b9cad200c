//! Cited-versus-exported reporting
//!
//! After a document pass, the collected unique keys are diffed against the
//! bibliography export: keys cited but absent from the export need a
//! citation key assigned, and exported entries never cited may be stale.

use serde::Serialize;

use crate::core::bibliography::{BibliographyIndex, CollectedKeys};

/// Report of the mismatches between one document pass and the bibliography.
#[derive(Debug, Clone, Serialize)]
pub struct CitationReport {
    /// Unique keys cited but missing from the export, in first-citation order
    pub unresolved: Vec<String>,
    /// Export entries never cited by the document, in export order
    pub uncited: Vec<String>,
}

impl CitationReport {
    pub fn new(collected: &CollectedKeys, index: &BibliographyIndex) -> Self {
        let unresolved = collected
            .iter()
            .filter(|key| index.lookup(key).is_none())
            .cloned()
            .collect();
        let uncited = index
            .unique_keys()
            .filter(|key| !collected.contains(*key))
            .map(str::to_string)
            .collect();
        CitationReport {
            unresolved,
            uncited,
        }
    }

    /// True when every citation resolved and every export entry was cited.
    pub fn is_empty(&self) -> bool {
        self.unresolved.is_empty() && self.uncited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bibliography::BibEntry;

    #[test]
    fn test_report_partitions_keys() {
        let index = BibliographyIndex::from_entries([
            BibEntry {
                zotero_key: "CITED1".to_string(),
                id: "smith2020".to_string(),
            },
            BibEntry {
                zotero_key: "STALE2".to_string(),
                id: "jones2019".to_string(),
            },
        ]);
        let mut collected = CollectedKeys::new();
        collected.insert("CITED1".to_string());
        collected.insert("GHOST3".to_string());

        let report = CitationReport::new(&collected, &index);
        assert_eq!(report.unresolved, vec!["GHOST3"]);
        assert_eq!(report.uncited, vec!["STALE2"]);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_report_empty_when_fully_matched() {
        let index = BibliographyIndex::from_entries([BibEntry {
            zotero_key: "ONLY1".to_string(),
            id: "only2022".to_string(),
        }]);
        let mut collected = CollectedKeys::new();
        collected.insert("ONLY1".to_string());
        assert!(CitationReport::new(&collected, &index).is_empty());
    }
}
