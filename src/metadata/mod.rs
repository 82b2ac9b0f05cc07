//! Metadata extraction module.
//!
//! Derives the textual fields of a preview (title, description, video URL)
//! from a parsed page using the fallback chains in [`meta_tags`].

pub mod meta_tags;

use dom_query::Document;

use crate::error::{Error, Result};
use crate::text;
use crate::{dom, Options};

pub use meta_tags::{scrape_for_content, Source};

/// Textual metadata read from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub video_url: String,
}

/// Extract title, description and video URL from a document.
///
/// Fails with [`Error::NoTitle`] when no title source yields text; that is the
/// only way this step fails.
pub fn extract_page_metadata(doc: &Document, opts: &Options) -> Result<PageMetadata> {
    let title = extract_title(doc, opts).ok_or(Error::NoTitle)?;

    Ok(PageMetadata {
        title,
        description: extract_description(doc, opts),
        video_url: extract_video_url(doc),
    })
}

/// Title from `og:title`, `meta[name=title]`, `<title>`, then `og:site_name`,
/// shortened to `opts.max_title_len`.
///
/// A title shortened away to nothing counts as missing.
#[must_use]
pub fn extract_title(doc: &Document, opts: &Options) -> Option<String> {
    scrape_for_content(&dom::root(doc), meta_tags::TITLE_SOURCES)
        .map(|title| text::shorten(&title, opts.max_title_len))
        .filter(|title| !text::is_blank(Some(title.as_str())))
}

/// Description from `og:description`, then `meta[name=description]`.
/// Empty when neither is present.
#[must_use]
pub fn extract_description(doc: &Document, opts: &Options) -> String {
    scrape_for_content(&dom::root(doc), meta_tags::DESCRIPTION_SOURCES)
        .map(|description| text::shorten(&description, opts.max_description_len))
        .unwrap_or_default()
}

/// Video URL from the `<head>` section. Empty when none is declared.
#[must_use]
pub fn extract_video_url(doc: &Document) -> String {
    scrape_for_content(&dom::head(doc), meta_tags::VIDEO_URL_SOURCES).unwrap_or_default()
}
