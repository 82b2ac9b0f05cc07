//! Configuration options for metadata scraping.
//!
//! The `Options` struct carries every tunable constant of the scraper:
//! the outbound user agent, network limits, and the image thresholds.

use std::time::Duration;

/// User agent sent on every outbound request, page and images alike.
///
/// Identifies as a generic legacy browser; some servers refuse unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)";

/// Configuration options for metadata scraping.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use url_metadata_scraper::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     page_timeout: Duration::from_secs(3),
///     max_image_urls: 4,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// User agent for the page fetch and every image fetch.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Scheme applied when the input URL has none.
    ///
    /// Default: `"http"`
    pub default_scheme: String,

    /// Total timeout for the page request.
    ///
    /// Default: 10 seconds
    pub page_timeout: Duration,

    /// Total timeout for each image request.
    ///
    /// A timeout counts as a decode failure for that image.
    ///
    /// Default: 5 seconds
    pub image_timeout: Duration,

    /// Connection establishment timeout, shared by all requests.
    ///
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Maximum number of redirects followed per request.
    ///
    /// Default: `10`
    pub max_redirects: usize,

    /// Largest page body read, in bytes. Bigger pages fail the fetch.
    ///
    /// Default: 5 MiB
    pub max_page_bytes: usize,

    /// Largest image body read, in bytes. Bigger images are rejected.
    ///
    /// Default: 10 MiB
    pub max_image_bytes: usize,

    /// Maximum title length in characters, ellipsis included.
    ///
    /// Default: `200`
    pub max_title_len: usize,

    /// Maximum description length in characters, ellipsis included.
    ///
    /// Default: `200`
    pub max_description_len: usize,

    /// Cap on the number of image URLs returned.
    ///
    /// Default: `10`
    pub max_image_urls: usize,

    /// Minimum width and height, in pixels, for an image to be kept.
    ///
    /// Default: `80`
    pub min_image_dimension: u32,

    /// Minimum area (width × height), in pixels, for an image to be kept.
    ///
    /// Default: `1000`
    pub min_image_area: u64,

    /// Number of image validations allowed in flight at once.
    ///
    /// `1` validates candidates sequentially on the calling thread.
    ///
    /// Default: `4`
    pub image_validation_concurrency: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_scheme: "http".to_string(),
            page_timeout: Duration::from_secs(10),
            image_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(5),
            max_redirects: 10,
            max_page_bytes: 5 * 1024 * 1024,
            max_image_bytes: 10 * 1024 * 1024,
            max_title_len: 200,
            max_description_len: 200,
            max_image_urls: 10,
            min_image_dimension: 80,
            min_image_area: 1000,
            image_validation_concurrency: 4,
        }
    }
}
