// tests/integration_tests/extraction_test.rs
use super::common::{HOMER, THUCYDIDES};
use teifreq::{analyze_document, exclude_section, extract_spans};

#[test]
fn test_header_and_front_matter_are_excluded() {
    let table = analyze_document(HOMER, "persName", &["teiHeader", "front"]);

    assert!(table.get("homer").is_none());
    assert!(table.get("atmurray").is_none());
    assert_eq!(table.get("achilles").map(|e| e.count), Some(2));
    assert_eq!(table.get("peleus").map(|e| e.count), Some(1));
    // A plain line break inside a name becomes a space
    assert_eq!(table.get("agamemnon").map(|e| e.representative()), Some("aga memnon"));
}

#[test]
fn test_exclusions_apply_in_sequence() {
    let header_only = analyze_document(HOMER, "persName", &["teiHeader"]);
    assert_eq!(header_only.get("atmurray").map(|e| e.count), Some(1));
}

#[test]
fn test_decoded_entities_are_not_folded() {
    let table = analyze_document(THUCYDIDES, "persName", &["teiHeader"]);

    let pericles = table.get("pericles").expect("pericles entry");
    assert_eq!(pericles.count, 1, "references are decoded after folding");
    assert_eq!(table.get("pricls").map(|e| e.count), Some(1));
    assert_eq!(table.get("athenians").map(|e| e.count), Some(2));
}

#[test]
fn test_missing_tag_yields_empty_table() {
    assert!(analyze_document(HOMER, "orgName", &["teiHeader"]).is_empty());
}

#[test]
fn test_exclusion_of_absent_section_is_noop() {
    assert_eq!(exclude_section(HOMER, "back"), HOMER);
}

#[test]
fn test_spans_include_their_delimiters() {
    let spans: Vec<&str> = extract_spans(HOMER, "placeName").collect();
    assert_eq!(spans, vec!["<placeName>Troy</placeName>"]);
}
