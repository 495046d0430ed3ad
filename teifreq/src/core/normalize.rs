// src/core/normalize.rs
use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Content isolated between two blank lines, usually a footnote or editorial block.
static BLANK_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\n\s*\n.*?\n\s*\n").expect("valid blank paragraph regex"));

/// Soft hyphen, as an entity or a raw character, plus the line break it wraps across.
static SOFT_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:&#[xX][aA][dD];|&#173;|\x{AD})(?:\r?\n)*(?:<lb\b[^>]*/>)*")
        .expect("valid soft hyphen regex")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<lb\b[^>]*/>|\r?\n").expect("valid line break regex"));

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("valid markup regex"));

static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[A-Za-z][A-Za-z0-9]{0,31});")
        .expect("valid character reference regex")
});

/// Accented and ligature characters folded to ASCII, one entry per source character.
const FOLDING: [(char, &str); 15] = [
    ('\u{17F}', "s"),  // long s
    ('\u{153}', "oe"), // oe ligature
    ('\u{14E}', "o"),
    ('\u{C6}', "Ae"),
    ('\u{E6}', "ae"),
    ('\u{E9}', "e"),
    ('\u{F1}', "n"),
    ('\u{F3}', "o"),
    ('\u{F4}', "o"),
    ('\u{113}', "e"),
    ('\u{E3}', "a"),
    ('\u{E7}', "c"),
    ('\u{F5}', "o"),
    ('\u{FA}', "u"),
    ('\u{E1}', "a"),
];

/// Reduces a raw markup span to a lowercase, single-spaced phrase with no markup.
///
/// The steps run in a fixed order; reordering them changes results:
///
/// 1. drop content isolated between blank lines
/// 2. delete soft hyphens together with the line break they span
/// 3. turn `<lb/>` markers and newlines into spaces
/// 4. strip every remaining `<...>` tag
/// 5. fold accented characters and ligatures with a fixed table
/// 6. collapse whitespace runs and trim
/// 7. decode HTML character references
/// 8. lowercase
///
/// Never fails: malformed markup degrades to partial text, and a span holding
/// only markup yields an empty string.
#[must_use]
pub fn normalize(raw_span: &str) -> String {
    let text = BLANK_PARAGRAPH.replace_all(raw_span, "");
    let text = SOFT_HYPHEN.replace_all(&text, "");
    let text = LINE_BREAK.replace_all(&text, " ");
    let text = MARKUP.replace_all(&text, "");
    let text = fold_diacritics(&text);
    let text = collapse_whitespace(&text);
    let text = decode_entities(&text);
    text.to_lowercase()
}

/// Alphanumeric-only form of a phrase, used to group spelling variants.
#[inline]
#[must_use]
pub fn canonical_key(phrase: &str) -> String {
    phrase.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }
    folded
}

fn fold_char(c: char) -> Option<&'static str> {
    let lookup = |needle: char| {
        FOLDING
            .iter()
            .find(|(source, _)| *source == needle)
            .map(|(_, replacement)| *replacement)
    };

    lookup(c).or_else(|| {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l != c => lookup(l),
            _ => None,
        }
    })
}

#[inline]
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes named HTML5 and numeric character references.
///
/// Unknown names and invalid code points are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    CHARACTER_REFERENCE.replace_all(text, |caps: &Captures<'_>| {
        let body = caps.get(1).map_or("", |m| m.as_str());
        resolve_reference(body)
            .unwrap_or_else(|| caps.get(0).map_or_else(String::new, |m| m.as_str().to_owned()))
    })
}

fn resolve_reference(body: &str) -> Option<String> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code)
            .filter(|c| *c != '\0')
            .map(String::from);
    }
    resolve_html5_entity(body).map(str::to_owned)
}
