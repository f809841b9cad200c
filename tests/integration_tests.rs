//! Integration tests for Citesub whole-document conversion

use citesub::{
    scannable_to_pandoc, scannable_to_pandoc_with_report, BibEntry, BibliographyIndex, CiteError,
};

fn index_of(pairs: &[(&str, &str)]) -> BibliographyIndex {
    BibliographyIndex::from_entries(pairs.iter().map(|(zotero_key, id)| BibEntry {
        zotero_key: zotero_key.to_string(),
        id: id.to_string(),
    }))
}

// ============================================================================
// Document rewriting
// ============================================================================

mod rewriting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolved_single_citation() {
        // all five formatting ingredients: prefix, suppression, resolved
        // key, locator, brackets
        let index = index_of(&[("ABC123", "smith2020")]);
        let out = scannable_to_pandoc("{see|-|p. 5||zu:1:ABC123}", &index).unwrap();
        assert_eq!(out.content, "[see -@smith2020, p. 5]");
    }

    #[test]
    fn test_unresolved_group_falls_back_to_raw_keys() {
        let index = BibliographyIndex::new();
        let out = scannable_to_pandoc("{|-|||zu:1:AAA}{|-|||zu:1:BBB}", &index).unwrap();
        assert_eq!(out.content, "[-@AAA; -@BBB]");
        assert_eq!(
            out.collected.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["AAA", "BBB"]
        );
    }

    #[test]
    fn test_empty_locator_omits_comma_segment() {
        let index = index_of(&[("ABC123", "smith2020")]);
        let out = scannable_to_pandoc("{cf.||||zu:1:ABC123}", &index).unwrap();
        assert_eq!(out.content, "[cf. @smith2020]");
    }

    #[test]
    fn test_surrounding_prose_untouched() {
        let index = index_of(&[("ABC123", "smith2020"), ("DEF456", "jones2019")]);
        let doc = "Intro {||||zu:1:ABC123} middle, with {braces} kept.\n\
                   A second point {also|-|ch. 2||zu:1:DEF456} and a close.";
        let out = scannable_to_pandoc(doc, &index).unwrap();
        assert_eq!(
            out.content,
            "Intro [@smith2020] middle, with {braces} kept.\n\
             A second point [also -@jones2019, ch. 2] and a close."
        );
    }

    #[test]
    fn test_token_at_end_of_document() {
        let index = index_of(&[("ABC123", "smith2020")]);
        let out = scannable_to_pandoc("Trailing {||||zu:1:ABC123}", &index).unwrap();
        assert_eq!(out.content, "Trailing [@smith2020]");
    }

    #[test]
    fn test_mixed_resolution_within_group() {
        let index = index_of(&[("AAA", "a2020")]);
        let out = scannable_to_pandoc("{||||zu:1:AAA}{||||zu:1:BBB}", &index).unwrap();
        assert_eq!(out.content, "[@a2020; @BBB]");
    }
}

// ============================================================================
// Failure handling
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_malformed_piece_fails_whole_document() {
        let doc = "fine text {foo|bar}{||||zu:1:AAA} more text";
        let err = scannable_to_pandoc(doc, &BibliographyIndex::new()).unwrap_err();
        assert!(matches!(
            err,
            CiteError::MalformedCitation { ref snippet } if snippet == "{foo|bar"
        ));
    }

    #[test]
    fn test_no_partial_output_on_failure() {
        // the result is Err, so no substituted document escapes; the caller
        // keeps the original text
        let doc = "{||||zu:1:AAA} then {x|y}{||||zu:1:BBB}";
        assert!(scannable_to_pandoc(doc, &BibliographyIndex::new()).is_err());
    }

    #[test]
    fn test_tokenless_document_never_fails() {
        let doc = "nothing {to|see} here | at {all}";
        let out = scannable_to_pandoc(doc, &BibliographyIndex::new()).unwrap();
        assert_eq!(out.content, doc);
    }
}

// ============================================================================
// Parse/format round trip
// ============================================================================

mod round_trip {
    use citesub::{format_citation, parse_citation};

    #[test]
    fn test_parse_format_parse_is_idempotent() {
        // formatting loses the ignored fields, so compare the structured
        // fields after re-embedding the formatted output in token shape
        let raws = [
            "{see|-|p. 5||zu:1:ABC123}",
            "{||||zu:1:KEY0}",
            "{cf.|Smith (2020)|pp. 1-4|around there|zu:99:ZZ9}",
        ];
        for raw in raws {
            let first = parse_citation(raw).unwrap();
            let rendered = format_citation(&first);
            let reparsed = parse_citation(&format!(
                "{{{}|{}|{}||zu:1:{}}}",
                first.prefix,
                if first.suppress_author { "-" } else { "" },
                first.locator,
                first.unique_key
            ))
            .unwrap();
            assert_eq!(first, reparsed, "fields drifted for {} ({})", raw, rendered);
        }
    }
}

// ============================================================================
// Reporting
// ============================================================================

mod reporting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_lists_unresolved_and_uncited() {
        let index = index_of(&[("CITED1", "smith2020"), ("STALE2", "jones2019")]);
        let doc = "{||||zu:1:CITED1} and {||||zu:1:GHOST3}";
        let (out, report) = scannable_to_pandoc_with_report(doc, &index).unwrap();

        assert_eq!(out.content, "[@smith2020] and [@GHOST3]");
        assert_eq!(report.unresolved, vec!["GHOST3"]);
        assert_eq!(report.uncited, vec!["STALE2"]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let index = index_of(&[("STALE2", "jones2019")]);
        let (_, report) =
            scannable_to_pandoc_with_report("{||||zu:1:GHOST3}", &index).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["unresolved"][0], "GHOST3");
        assert_eq!(json["uncited"][0], "STALE2");
    }

    #[test]
    fn test_repeated_keys_collected_once() {
        let doc = "{||||zu:1:AAA} {||||zu:1:AAA} {||||zu:2:AAA}";
        let (out, report) =
            scannable_to_pandoc_with_report(doc, &BibliographyIndex::new()).unwrap();
        assert_eq!(out.collected.len(), 1);
        assert_eq!(report.unresolved, vec!["AAA"]);
    }
}
