// src/core/markup.rs
use std::ops::Range;
use std::vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Open,
    Close,
    SelfClosing,
}

#[derive(Debug, Clone)]
struct Tag {
    kind: TagKind,
    range: Range<usize>,
}

/// A top-level element found in a document, as byte ranges into that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The whole element, from `<` of the opening tag through `>` of the closing tag.
    pub span: Range<usize>,
    /// The opening tag alone, attributes included.
    pub open_tag: Range<usize>,
    pub self_closing: bool,
}

/// Iterator over the top-level elements with a given tag name.
///
/// Nothing is scanned until the first element is requested. The document is
/// then paired in a single pass.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    document: &'a str,
    tag: &'a str,
    found: Option<vec::IntoIter<Element>>,
}

impl Iterator for Elements<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let (document, tag) = (self.document, self.tag);
        self.found
            .get_or_insert_with(|| top_level_elements(document, tag).into_iter())
            .next()
    }
}

/// Iterator over the raw text of every top-level `<tag ...> ... </tag>` span.
///
/// Spans are yielded in document order with their own delimiters. Self-closing
/// elements carry no content and are skipped.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    elements: Elements<'a>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.elements.document;
        self.elements
            .by_ref()
            .find(|element| !element.self_closing)
            .and_then(|element| document.get(element.span))
    }
}

#[inline]
#[must_use]
pub const fn elements<'a>(document: &'a str, tag: &'a str) -> Elements<'a> {
    Elements {
        document,
        tag,
        found: None,
    }
}

/// Lazily extracts every top-level span of `tag` from `document`.
///
/// Matching tracks nesting depth, so a nested element with the same name does
/// not close the outer span early, and adjacent spans are never merged. An
/// opening tag that is never closed is skipped, and the elements after it are
/// still found. The cost stays linear however many tags are left open.
#[inline]
#[must_use]
pub const fn extract_spans<'a>(document: &'a str, tag: &'a str) -> Spans<'a> {
    Spans {
        elements: elements(document, tag),
    }
}

/// Removes every top-level `tag` element, content included, from `document`.
///
/// Returns the document unchanged when the tag never occurs.
#[must_use]
pub fn exclude_section(document: &str, tag: &str) -> String {
    let mut kept = String::with_capacity(document.len());
    let mut last = 0;

    for element in elements(document, tag) {
        kept.push_str(document.get(last..element.span.start).unwrap_or_default());
        last = element.span.end;
    }
    kept.push_str(document.get(last..).unwrap_or_default());
    kept
}

/// Applies [`exclude_section`] once per tag, each pass scanning the output of the previous one.
#[must_use]
pub fn exclude_sections<S: AsRef<str>>(document: &str, tags: &[S]) -> String {
    tags.iter()
        .fold(document.to_owned(), |text, tag| exclude_section(&text, tag.as_ref()))
}

/// Pairs every tag in one pass with a stack of open tags, then keeps the outermost elements.
///
/// Opening tags left on the stack were never closed and drop out. Stray
/// closing tags find an empty stack and are ignored.
fn top_level_elements(text: &str, name: &str) -> Vec<Element> {
    let mut open: Vec<Range<usize>> = Vec::new();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(tag) = next_tag(text, name, pos) {
        pos = tag.range.end;
        match tag.kind {
            TagKind::Open => open.push(tag.range),
            TagKind::SelfClosing => found.push(Element {
                span: tag.range.clone(),
                open_tag: tag.range,
                self_closing: true,
            }),
            TagKind::Close => {
                if let Some(open_tag) = open.pop() {
                    found.push(Element {
                        span: open_tag.start..tag.range.end,
                        open_tag,
                        self_closing: false,
                    });
                }
            }
        }
    }

    // Pairs are recorded at their close, so inner elements come first.
    found.sort_unstable_by_key(|element| element.span.start);
    let mut covered = 0;
    found.retain(|element| {
        let outermost = element.span.start >= covered;
        if outermost {
            covered = element.span.end;
        }
        outermost
    });
    found
}

fn next_tag(text: &str, name: &str, from: usize) -> Option<Tag> {
    if name.is_empty() {
        return None;
    }
    let bytes = text.as_bytes();
    let mut pos = from;

    while let Some(offset) = text.get(pos..)?.find('<') {
        let start = pos.saturating_add(offset);
        pos = start.saturating_add(1);

        let is_close = bytes.get(pos) == Some(&b'/');
        let name_start = if is_close { pos.saturating_add(1) } else { pos };
        if !text.get(name_start..).is_some_and(|rest| rest.starts_with(name)) {
            continue;
        }

        let after_name = name_start.saturating_add(name.len());
        let boundary = bytes
            .get(after_name)
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/');
        if !boundary {
            continue;
        }

        let Some(gt) = find_tag_end(bytes, after_name) else {
            continue;
        };
        let kind = if is_close {
            TagKind::Close
        } else if bytes.get(gt.saturating_sub(1)) == Some(&b'/') {
            TagKind::SelfClosing
        } else {
            TagKind::Open
        };
        return Some(Tag {
            kind,
            range: start..gt.saturating_add(1),
        });
    }

    None
}

/// Index of the `>` closing a tag whose name ends at `from`, skipping quoted attribute values.
///
/// An unquoted `<` means the tag was never finished.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (index, &byte) in bytes.iter().enumerate().skip(from) {
        match (quote, byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'<') => return None,
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'>') => return Some(index),
            (None, _) => {}
        }
    }
    None
}
