//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` for the read-only queries the extractors
//! make: attribute lookup across a selection, element text, scoped selects.

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::text;

// === Attribute Operations ===

/// Get any attribute value of the first node in `sel`.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get `name` from the first matched element that carries it at all.
///
/// Unlike [`get_attribute`], elements without the attribute are skipped, so
/// `<meta property="og:title">` followed by a second tag with `content` still
/// yields a value.
#[must_use]
pub fn first_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.iter().find_map(|node| get_attribute(&node, name))
}

/// Whether attribute `name` of the first node in `sel` equals `value`,
/// ignoring ASCII case and surrounding whitespace.
#[must_use]
pub fn attribute_matches(sel: &Selection, name: &str, value: &str) -> bool {
    sel.attr(name)
        .is_some_and(|actual| actual.trim().eq_ignore_ascii_case(value))
}

/// Trimmed `content` of the first `<meta>` under `root` whose `attr` is
/// `value` (compared as in [`attribute_matches`]) and whose content is not blank.
#[must_use]
pub fn meta_content(root: &Selection, attr: &str, value: &str) -> Option<String> {
    root.select("meta")
        .iter()
        .filter(|node| attribute_matches(node, attr, value))
        .find_map(|node| {
            let content = get_attribute(&node, "content");
            if text::is_blank(content.as_deref()) {
                return None;
            }
            content.map(|c| c.trim().to_string())
        })
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text of the first `selector` match under `root` whose text is not blank.
#[must_use]
pub fn first_text(root: &Selection, selector: &str) -> Option<String> {
    root.select(selector).iter().find_map(|node| {
        let text = text_content(&node);
        (!text::is_blank(Some(&*text))).then(|| text.trim().to_string())
    })
}

// === Querying ===

/// Selection covering the whole document.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// The document's `<head>` element (html5ever always synthesizes one).
#[inline]
#[must_use]
pub fn head(doc: &Document) -> Selection<'_> {
    doc.select("head")
}

/// Query all elements by CSS selector
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}
