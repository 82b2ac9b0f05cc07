//! Network access for pages and candidate images.
//!
//! The scraper only talks to the network through [`Fetcher`], so tests can
//! substitute an in-memory implementation. [`HttpFetcher`] is the blocking
//! `reqwest` implementation used by default.

use std::io::Read;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;

use crate::error::{Error, Result};
use crate::url_utils;
use crate::Options;

/// A page body as returned by the server.
#[derive(Debug, Clone, Default)]
pub struct FetchedPage {
    /// URL the body was served from, after redirects.
    pub url: String,

    /// Raw `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,

    /// Undecoded body bytes.
    pub body: Vec<u8>,
}

/// Source of pages and image bytes.
///
/// Implementations must be shareable across the image validation workers.
pub trait Fetcher: Send + Sync {
    /// Fetch a page. Non-success statuses are errors.
    fn fetch_page(&self, url: &str) -> Result<FetchedPage>;

    /// Fetch the raw bytes of an image. Non-success statuses are errors.
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        (**self).fetch_page(url)
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch_image(url)
    }
}

/// Whether a page `Content-Type` is something we can parse as markup.
///
/// A missing header is accepted; servers that omit it usually send HTML.
#[must_use]
pub fn is_markup_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.is_empty()
        || mime.starts_with("text/")
        || mime == "application/xhtml+xml"
        || mime == "application/xml"
        || mime.ends_with("+xml")
}

/// Blocking HTTP fetcher sending the configured user agent on every request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    page_timeout: std::time::Duration,
    image_timeout: std::time::Duration,
    max_page_bytes: usize,
    max_image_bytes: usize,
}

impl HttpFetcher {
    /// Build a fetcher from `opts`.
    pub fn new(opts: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .connect_timeout(opts.connect_timeout)
            .redirect(Policy::limited(opts.max_redirects))
            .build()?;

        Ok(Self {
            client,
            page_timeout: opts.page_timeout,
            image_timeout: opts.image_timeout,
            max_page_bytes: opts.max_page_bytes,
            max_image_bytes: opts.max_image_bytes,
        })
    }

    fn get(&self, url: &str, timeout: std::time::Duration) -> Result<Response> {
        let (is_abs, parsed) = url_utils::is_absolute_url(url);
        let parsed = parsed
            .filter(|_| is_abs)
            .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

        let response = self.client.get(parsed).timeout(timeout).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        let response = self.get(url, self.page_timeout)?;

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let length = response.content_length();
        let body = read_limited(response, length, self.max_page_bytes)?;

        Ok(FetchedPage {
            url: final_url,
            content_type,
            body,
        })
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url, self.image_timeout)?;
        let length = response.content_length();
        read_limited(response, length, self.max_image_bytes)
    }
}

/// Read at most `limit` bytes; a longer body is an error rather than truncated.
///
/// A declared `content_length` over the limit fails before anything is read.
fn read_limited(reader: impl Read, content_length: Option<u64>, limit: usize) -> Result<Vec<u8>> {
    if let Some(length) = content_length {
        if usize::try_from(length).map_or(true, |length| length > limit) {
            return Err(Error::BodyTooLarge(limit));
        }
    }

    let mut body = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut body)?;

    if body.len() > limit {
        return Err(Error::BodyTooLarge(limit));
    }

    Ok(body)
}
