//! Shared fixtures: an in-memory fetcher and generated images.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use url_metadata_scraper::{Error, FetchedPage, Fetcher, Result};

/// Encode a `width` × `height` PNG.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .expect("PNG encoding succeeds");
    buffer.into_inner()
}

/// Serves pages and images from memory and records every request.
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, FetchedPage>,
    images: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` as `text/html` at `url`.
    pub fn page(self, url: &str, html: &str) -> Self {
        self.page_with(url, url, Some("text/html; charset=utf-8"), html.as_bytes())
    }

    /// Serve `body` at `url`, reporting `final_url` as where it came from.
    pub fn page_with(mut self, url: &str, final_url: &str, content_type: Option<&str>, body: &[u8]) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                url: final_url.to_string(),
                content_type: content_type.map(str::to_string),
                body: body.to_vec(),
            },
        );
        self
    }

    /// Serve a generated PNG of the given size at `url`.
    pub fn image(self, url: &str, width: u32, height: u32) -> Self {
        self.raw_image(url, png(width, height))
    }

    pub fn raw_image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    /// Every URL requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, url: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
    }
}

impl Fetcher for MockFetcher {
    fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        self.record(url);
        self.pages.get(url).cloned().ok_or(Error::HttpStatus(404))
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.record(url);
        self.images.get(url).cloned().ok_or(Error::HttpStatus(404))
    }
}
