// tests/integration_tests/metadata_test.rs
use super::common::{HOMER, THUCYDIDES};
use std::path::Path;
use teifreq::{MetadataError, extract_metadata, parse_date, parse_filename};

#[test]
fn test_metadata_from_filename_and_title() {
    let metadata = extract_metadata(Path::new("/corpus/homer.iliad.xml"), HOMER)
        .expect("metadata for homer.iliad.xml");
    assert_eq!(metadata.author, "homer");
    assert_eq!(metadata.work, "iliad");
    assert_eq!(metadata.date, "1924");
}

#[test]
fn test_date_is_last_four_characters() {
    assert_eq!(parse_date(THUCYDIDES).as_deref(), Ok("1910"));
    assert_eq!(
        parse_date("<title type=\"main\">The Great War 1914</title>").as_deref(),
        Ok("1914")
    );
}

#[test]
fn test_malformed_filename() {
    assert!(matches!(
        parse_filename(Path::new("iliad.xml")),
        Err(MetadataError::MalformedFilename(_))
    ));
}

#[test]
fn test_missing_title() {
    assert_eq!(
        extract_metadata(Path::new("homer.iliad.xml"), "<text/>"),
        Err(MetadataError::MissingTitle)
    );
}
