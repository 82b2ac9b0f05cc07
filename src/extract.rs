//! Scrape pipeline: normalize, fetch, decode, extract, assemble.

use crate::dom::{self, Document};
use crate::encoding;
use crate::error::{Error, Result};
use crate::fetch::{self, Fetcher};
use crate::images::{self, DecodingValidator, ImageValidator, Thresholds};
use crate::metadata;
use crate::options::Options;
use crate::result::UrlMetadata;
use crate::url_utils;

/// Normalize `raw_url`, fetch it with `fetcher`, and extract its metadata.
///
/// Candidate images are validated through the same fetcher.
pub(crate) fn scrape_url<F: Fetcher>(raw_url: &str, options: &Options, fetcher: &F) -> Result<UrlMetadata> {
    let url = url_utils::normalize_url(raw_url, &options.default_scheme);

    let page = fetcher.fetch_page(&url).inspect_err(|err| {
        tracing::warn!(url = %url, error = %err, "page fetch failed");
    })?;

    let content_type = page.content_type.as_deref();
    if !fetch::is_markup_content_type(content_type) {
        let content_type = content_type.unwrap_or_default().to_string();
        tracing::warn!(url = %url, content_type = %content_type, "page is not markup");
        return Err(Error::UnsupportedContentType(content_type));
    }

    let html = encoding::decode_page(&page.body, content_type);
    let validator = DecodingValidator::new(fetcher, Thresholds::from_options(options));

    // Relative references resolve against where the page was actually served from.
    let page_url = if page.url.is_empty() { url.as_str() } else { page.url.as_str() };

    extract_document(&html, &url, page_url, options, &validator)
}

/// Extract metadata from `html` fetched for `requested_url` and served from `page_url`.
pub(crate) fn extract_document(
    html: &str,
    requested_url: &str,
    page_url: &str,
    options: &Options,
    validator: &dyn ImageValidator,
) -> Result<UrlMetadata> {
    let document = Document::from(html);

    let page = metadata::extract_page_metadata(&document, options).inspect_err(|_| {
        tracing::debug!(url = %requested_url, "no title in document");
    })?;

    let base_href = dom::first_attribute(&document.select("base[href]"), "href");
    let base = url_utils::document_base(page_url, base_href.as_deref());
    let image_urls = images::collect_image_urls(&document, base.as_ref(), options, validator);

    tracing::debug!(
        url = %requested_url,
        images = image_urls.len(),
        has_video = !page.video_url.is_empty(),
        "metadata extracted"
    );

    Ok(UrlMetadata {
        title: page.title,
        description: page.description,
        image_urls,
        video_url: page.video_url,
        short_url: url_utils::short_url(requested_url),
        url: requested_url.to_string(),
    })
}
