//! Preview image collection.
//!
//! Candidates are gathered in preview order (Open Graph image first, then
//! `<img>` elements in document order), de-duplicated, and validated in small
//! parallel windows until the cap is reached. Acceptance always follows
//! candidate order, whatever order the validations finish in.

pub mod validator;

use std::collections::HashSet;
use std::thread;

use dom_query::Document;
use url::Url;

use crate::metadata::meta_tags;
use crate::{dom, text, url_utils, Options};

pub use validator::{
    declared_size_acceptable, decode_dimensions, DecodingValidator, ImageDimensions,
    ImageValidator, Thresholds,
};

/// Gather candidate image URLs in preview order.
///
/// The Open Graph image skips the structural gate; `<img>` elements must pass
/// it. Every returned URL is absolute http(s) and appears once.
#[must_use]
pub fn image_candidates(doc: &Document, base: Option<&Url>, opts: &Options) -> Vec<String> {
    let thresholds = Thresholds::from_options(opts);
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    let og_image = meta_tags::OG_IMAGE
        .read(&dom::root(doc))
        .and_then(|content| url_utils::create_absolute_url(&content, base));
    if let Some(url) = og_image {
        seen.insert(url.clone());
        candidates.push(url);
    }

    for img in dom::query_selector_all(&dom::root(doc), "img").iter() {
        let Some(url) = dom::get_attribute(&img, "src")
            .and_then(|src| url_utils::create_absolute_url(&src, base))
        else {
            continue;
        };

        let height = text::parse_int_or(img.attr("height").as_deref(), 0);
        let width = text::parse_int_or(img.attr("width").as_deref(), 0);
        if !declared_size_acceptable(height, width, thresholds) {
            tracing::debug!(url = %url, height, width, "image rejected by declared size");
            continue;
        }

        if seen.insert(url.clone()) {
            candidates.push(url);
        }
    }

    candidates
}

/// Validate `candidates` and keep up to `opts.max_image_urls` in order.
///
/// At most `opts.image_validation_concurrency` validations run at once.
/// Windows shrink as the list fills so no more images are fetched than could
/// still be accepted.
#[must_use]
pub fn select_valid_images(
    candidates: &[String],
    opts: &Options,
    validator: &dyn ImageValidator,
) -> Vec<String> {
    let max = opts.max_image_urls;
    let concurrency = opts.image_validation_concurrency.max(1);
    let mut accepted: Vec<String> = Vec::new();
    let mut next = 0;

    while accepted.len() < max && next < candidates.len() {
        let window_len = concurrency.min(max - accepted.len());
        let window = &candidates[next..candidates.len().min(next + window_len)];
        next += window.len();

        for (url, valid) in window.iter().zip(validate_window(window, validator)) {
            if valid {
                accepted.push(url.clone());
                if accepted.len() >= max {
                    break;
                }
            }
        }
    }

    accepted
}

/// Validate one window, returning verdicts in window order.
fn validate_window(window: &[String], validator: &dyn ImageValidator) -> Vec<bool> {
    if window.len() == 1 {
        return vec![validator.is_valid_image_url(&window[0])];
    }

    thread::scope(|s| {
        let handles: Vec<_> = window
            .iter()
            .map(|url| s.spawn(move || validator.is_valid_image_url(url)))
            .collect();

        // A panicking validator only loses its own candidate.
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(false))
            .collect()
    })
}

/// Build the `imageURLs` list for a document.
#[must_use]
pub fn collect_image_urls(
    doc: &Document,
    base: Option<&Url>,
    opts: &Options,
    validator: &dyn ImageValidator,
) -> Vec<String> {
    if opts.max_image_urls == 0 {
        return Vec::new();
    }

    let candidates = image_candidates(doc, base, opts);
    select_valid_images(&candidates, opts, validator)
}
