// src/core/metadata.rs
use crate::core::markup::elements;
use crate::core::normalize::normalize;
use crate::error::MetadataError;
use crate::models::Metadata;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

static MAIN_TITLE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\btype\s*=\s*(?:"main"|'main')"#).expect("valid title type regex")
});

const YEAR_LEN: usize = 4;

/// Derives author, work and date for one document.
///
/// # Arguments
///
/// * `path` - The document path; its file name must look like `<author>.<work>.<extension>`
/// * `document` - The raw document text, before any section is excluded
///
/// # Errors
///
/// Returns a [`MetadataError`] when the file name has fewer than three
/// dot-separated segments, when no main title exists, or when the normalized
/// title is shorter than four characters.
pub fn extract_metadata(path: &Path, document: &str) -> Result<Metadata, MetadataError> {
    let (author, work) = parse_filename(path)?;
    let date = parse_date(document)?;
    Ok(Metadata { author, work, date })
}

/// Splits `<author>.<work>.<extension>` into author and work.
///
/// # Errors
///
/// Returns [`MetadataError::MalformedFilename`] for fewer than three segments
/// or an empty author or work.
pub fn parse_filename(path: &Path) -> Result<(String, String), MetadataError> {
    let malformed = || MetadataError::MalformedFilename(path.to_path_buf());
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(malformed)?;

    let segments: Vec<&str> = name.split('.').collect();
    match segments.as_slice() {
        [author, work, _, ..] if !author.is_empty() && !work.is_empty() => {
            Ok(((*author).to_owned(), (*work).to_owned()))
        }
        _ => Err(malformed()),
    }
}

/// Normalized text of the first `<title type="main">` element.
///
/// # Errors
///
/// Returns [`MetadataError::MissingTitle`] when the document has none.
pub fn main_title(document: &str) -> Result<String, MetadataError> {
    let mut titles = elements(document, "title").filter(|element| {
        !element.self_closing
            && document
                .get(element.open_tag.clone())
                .is_some_and(|open| MAIN_TITLE_TYPE.is_match(open))
    });

    let first = titles.next().ok_or(MetadataError::MissingTitle)?;
    if titles.next().is_some() {
        warn!("document has several main titles, using the first");
    }
    Ok(normalize(document.get(first.span).unwrap_or_default()))
}

/// The last four characters of the normalized main title.
///
/// # Errors
///
/// Returns [`MetadataError::MissingTitle`] or [`MetadataError::TitleTooShort`].
pub fn parse_date(document: &str) -> Result<String, MetadataError> {
    let title = main_title(document)?;
    let len = title.chars().count();
    if len < YEAR_LEN {
        return Err(MetadataError::TitleTooShort(title));
    }
    Ok(title.chars().skip(len.saturating_sub(YEAR_LEN)).collect())
}
