//! # url-metadata-scraper
//!
//! Fetch a web page and extract the small metadata record a link preview
//! needs: title, short description, candidate images, an optional video URL
//! and a short domain label.
//!
//! ## Quick Start
//!
//! ```no_run
//! let record = url_metadata_scraper::scrape("example.com");
//! if let Some(metadata) = &record.metadata {
//!     println!("{} ({})", metadata.title, metadata.short_url);
//! }
//! println!("{}", record.to_json());
//! ```
//!
//! ## Behavior
//!
//! - **Title**: `og:title`, `meta[name=title]`, `<title>`, `og:site_name`, in that order
//! - **Description**: `og:description`, then `meta[name=description]`
//! - **Video**: `og:video:`, `og:video:url`, `og:video:secure_url`, `twitter:player` from `<head>`
//! - **Images**: `og:image` plus `<img>` elements, at most 10, each fetched and
//!   required to decode to at least 80×80 pixels and 1000 px²
//!
//! A page that cannot be fetched or has no title yields `{"success":false}`.
//! Per-image problems never fail the scrape; the image is just left out.

mod error;
mod extract;
mod options;
mod result;

/// DOM query helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page and image fetching.
pub mod fetch;

/// Preview image candidates and validation gates.
pub mod images;

/// Title, description and video extraction.
pub mod metadata;

/// String helpers (blank checks, shortening, lenient integer parsing).
pub mod text;

/// URL normalization, resolution and host extraction.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use images::{DecodingValidator, ImageDimensions, ImageValidator, Thresholds};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{MetadataRecord, UrlMetadata};

/// Scrape `url` with default options over HTTP.
///
/// Never fails: an unreachable page or one without a title gives a record
/// with `success == false`.
#[must_use]
pub fn scrape(url: &str) -> MetadataRecord {
    scrape_with_options(url, &Options::default())
}

/// Scrape `url` over HTTP with custom options.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use url_metadata_scraper::{scrape_with_options, Options};
///
/// let options = Options {
///     page_timeout: Duration::from_secs(3),
///     image_validation_concurrency: 8,
///     ..Options::default()
/// };
/// let record = scrape_with_options("https://example.com", &options);
/// ```
#[must_use]
pub fn scrape_with_options(url: &str, options: &Options) -> MetadataRecord {
    try_scrape_with_options(url, options).ok().into()
}

/// Scrape `url` through a caller-supplied [`Fetcher`].
///
/// The fetcher serves both the page and every candidate image.
#[must_use]
pub fn scrape_with_fetcher<F: Fetcher>(url: &str, options: &Options, fetcher: &F) -> MetadataRecord {
    try_scrape_with_fetcher(url, options, fetcher).ok().into()
}

/// Scrape `url` over HTTP, reporting why a scrape failed.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, the page cannot be
/// fetched or is not markup, or no title is found.
pub fn try_scrape_with_options(url: &str, options: &Options) -> Result<UrlMetadata> {
    let fetcher = HttpFetcher::new(options)?;
    extract::scrape_url(url, options, &fetcher)
}

/// Scrape `url` through `fetcher`, reporting why a scrape failed.
///
/// # Errors
///
/// Returns an error when the page cannot be fetched or is not markup, or no
/// title is found.
pub fn try_scrape_with_fetcher<F: Fetcher>(url: &str, options: &Options, fetcher: &F) -> Result<UrlMetadata> {
    extract::scrape_url(url, options, fetcher)
}

/// Scrape `url` with default options and return the JSON record.
///
/// Keys are `success`, `title`, `description`, `imageURLs`, `videoURL`,
/// `shortURL` and `url`; on failure only `success` is present.
#[must_use]
pub fn get_url_metadata_json(url: &str) -> String {
    scrape(url).to_json()
}

/// Extract metadata from HTML that has already been fetched.
///
/// `page_url` is used as the returned `url`, for `shortURL`, and as the base
/// for relative image references. Images are checked with `validator`.
///
/// # Errors
///
/// Returns [`Error::NoTitle`] when the document has no usable title.
///
/// # Example
///
/// ```
/// use url_metadata_scraper::{extract_from_html, ImageValidator, Options};
///
/// struct NoImages;
/// impl ImageValidator for NoImages {
///     fn is_valid_image_url(&self, _url: &str) -> bool { false }
/// }
///
/// let html = r#"<html><head><title>Hello</title></head></html>"#;
/// let metadata = extract_from_html(html, "https://Example.com/a?b=c", &Options::default(), &NoImages)?;
/// assert_eq!(metadata.title, "Hello");
/// assert_eq!(metadata.short_url, "example.com");
/// # Ok::<(), url_metadata_scraper::Error>(())
/// ```
pub fn extract_from_html(
    html: &str,
    page_url: &str,
    options: &Options,
    validator: &dyn ImageValidator,
) -> Result<UrlMetadata> {
    extract::extract_document(html, page_url, page_url, options, validator)
}
