//! Selector fallback chains for page metadata.
//!
//! Pages fill Open Graph, generic `<meta>` and plain HTML tags inconsistently,
//! so every field is read from an ordered list of sources and the first
//! non-blank value wins.

use std::fmt;

use dom_query::Selection;

use crate::dom;

/// Where one link of a fallback chain reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The `content` of a `<meta>` whose `attr` equals `value`.
    ///
    /// The attribute value is compared ignoring ASCII case and surrounding
    /// whitespace, so `<meta name="Description">` matches `description`.
    Meta {
        attr: &'static str,
        value: &'static str,
    },
    /// The text of elements matching a tag selector.
    Text(&'static str),
}

impl Source {
    const fn property(value: &'static str) -> Self {
        Self::Meta {
            attr: "property",
            value,
        }
    }

    const fn name(value: &'static str) -> Self {
        Self::Meta { attr: "name", value }
    }

    /// Read this source under `root`, returning a trimmed non-blank value.
    #[must_use]
    pub fn read(self, root: &Selection) -> Option<String> {
        match self {
            Self::Meta { attr, value } => dom::meta_content(root, attr, value),
            Self::Text(selector) => dom::first_text(root, selector),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meta { attr, value } => write!(f, "meta[{attr}=\"{value}\"]"),
            Self::Text(selector) => f.write_str(selector),
        }
    }
}

/// Title sources, most authoritative first.
pub const TITLE_SOURCES: &[Source] = &[
    Source::property("og:title"),
    Source::name("title"),
    Source::Text("title"),
    Source::property("og:site_name"),
];

/// Description sources.
pub const DESCRIPTION_SOURCES: &[Source] = &[
    Source::property("og:description"),
    Source::name("description"),
];

/// Video sources, read from `<head>` only.
///
/// `og:video:` with the trailing colon is matched literally.
pub const VIDEO_URL_SOURCES: &[Source] = &[
    Source::property("og:video:"),
    Source::property("og:video:url"),
    Source::property("og:video:secure_url"),
    Source::name("twitter:player"),
];

/// Open Graph preview image. Read as a single source, not a chain.
pub const OG_IMAGE: Source = Source::property("og:image");

/// Try `sources` in order under `root` and return the first non-blank value.
#[must_use]
pub fn scrape_for_content(root: &Selection, sources: &[Source]) -> Option<String> {
    sources.iter().find_map(|source| {
        let value = source.read(root);
        if value.is_some() {
            tracing::trace!(source = %source, "fallback chain matched");
        }
        value
    })
}
