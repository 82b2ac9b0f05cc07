//! Error types for url-metadata-scraper.
//!
//! These never reach callers of [`crate::scrape`]; a hard failure there is
//! reported as `success: false`. They surface through the `try_*` entry
//! points and the [`crate::fetch::Fetcher`] contract.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL could not be parsed or uses a scheme we cannot fetch.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (DNS, connect, TLS, timeout, redirect loop).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The page is not HTML or XML.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The response body exceeded the configured limit (in bytes).
    #[error("Response body larger than {0} bytes")]
    BodyTooLarge(usize),

    /// Reading the response body failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes could not be decoded as an image.
    #[error("Image decoding failed: {0}")]
    ImageDecode(String),

    /// No title could be found in the document.
    #[error("No title found")]
    NoTitle,
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode(err.to_string())
    }
}
