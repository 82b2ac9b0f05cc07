mod common;

use std::collections::HashSet;

use common::MockFetcher;
use url_metadata_scraper::{scrape_with_fetcher, Options};

const URL: &str = "https://example.com/post";

fn image_urls(fetcher: &MockFetcher, options: &Options) -> Vec<String> {
    scrape_with_fetcher(URL, options, fetcher)
        .metadata
        .map(|m| m.image_urls)
        .unwrap_or_default()
}

#[test]
fn og_image_comes_first_then_body_images_in_document_order() {
    let html = r#"
        <html><head>
          <title>T</title>
          <meta property="og:image" content="https://example.com/og.png" />
        </head><body>
          <img src="/one.png">
          <img src="two.png">
          <img src="https://cdn.example.com/three.png">
        </body></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://example.com/og.png", 1200, 630)
        .image("https://example.com/one.png", 300, 200)
        .image("https://example.com/two.png", 300, 200)
        .image("https://cdn.example.com/three.png", 300, 200);

    assert_eq!(
        image_urls(&fetcher, &Options::default()),
        vec![
            "https://example.com/og.png",
            "https://example.com/one.png",
            "https://example.com/two.png",
            "https://cdn.example.com/three.png",
        ]
    );
}

#[test]
fn og_image_decoding_to_one_pixel_is_rejected() {
    let html = r#"
        <html><head>
          <title>T</title>
          <meta property="og:image" content="https://example.com/pixel.gif" />
        </head></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://example.com/pixel.gif", 1, 1);

    assert!(image_urls(&fetcher, &Options::default()).is_empty());
}

#[test]
fn declared_tiny_img_is_excluded_without_fetching() {
    let html = r#"
        <html><head><title>T</title></head><body>
          <img src="/tracker.png" height="10" width="10">
        </body></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://example.com/tracker.png", 500, 500);

    assert!(image_urls(&fetcher, &Options::default()).is_empty());
    assert!(!fetcher.requests().iter().any(|r| r.contains("tracker")));
}

#[test]
fn undeclared_dimensions_are_decided_by_decoding() {
    let html = r#"
        <html><head><title>T</title></head><body>
          <img src="/icon.png">
          <img src="/banner.png" width="600">
          <img src="/thin.png">
        </body></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://example.com/icon.png", 16, 16)
        .image("https://example.com/banner.png", 600, 100)
        .image("https://example.com/thin.png", 800, 40);

    assert_eq!(
        image_urls(&fetcher, &Options::default()),
        vec!["https://example.com/banner.png"]
    );
}

#[test]
fn unreachable_and_corrupt_images_are_dropped_silently() {
    let html = r#"
        <html><head><title>T</title></head><body>
          <img src="/missing.png">
          <img src="/corrupt.png">
          <img src="/page.png">
          <img src="/good.png">
        </body></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .raw_image("https://example.com/corrupt.png", vec![0x89, 0x50, 0x4E, 0x47, 0, 0, 0])
        .raw_image("https://example.com/page.png", b"<!DOCTYPE html><html></html>".to_vec())
        .image("https://example.com/good.png", 100, 100);

    let record = scrape_with_fetcher(URL, &Options::default(), &fetcher);
    assert!(record.success);
    assert_eq!(
        record.metadata.map(|m| m.image_urls).unwrap_or_default(),
        vec!["https://example.com/good.png"]
    );
}

#[test]
fn image_list_is_capped_at_ten_and_unique() {
    let mut body = String::new();
    let mut fetcher = MockFetcher::new();
    for i in 0..15 {
        body.push_str(&format!(r#"<img src="/img{i}.png"><img src="/img{i}.png">"#));
        fetcher = fetcher.image(&format!("https://example.com/img{i}.png"), 200, 200);
    }
    let html = format!(
        r#"<html><head><title>T</title><meta property="og:image" content="/img3.png"></head><body>{body}</body></html>"#
    );
    let fetcher = fetcher.page(URL, &html);

    let urls = image_urls(&fetcher, &Options::default());
    assert_eq!(urls.len(), 10);
    assert_eq!(urls[0], "https://example.com/img3.png");
    assert_eq!(urls[1], "https://example.com/img0.png");

    let unique: HashSet<&String> = urls.iter().collect();
    assert_eq!(unique.len(), urls.len());
}

#[test]
fn validation_stops_once_the_cap_is_reached() {
    let mut body = String::new();
    let mut fetcher = MockFetcher::new();
    for i in 0..40 {
        body.push_str(&format!(r#"<img src="/img{i}.png">"#));
        fetcher = fetcher.image(&format!("https://example.com/img{i}.png"), 200, 200);
    }
    let html = format!(r#"<html><head><title>T</title></head><body>{body}</body></html>"#);
    let fetcher = fetcher.page(URL, &html);

    let options = Options {
        image_validation_concurrency: 3,
        ..Options::default()
    };
    assert_eq!(image_urls(&fetcher, &options).len(), 10);

    let image_requests = fetcher.requests().iter().filter(|r| r.contains("/img")).count();
    assert_eq!(image_requests, 10);
}

#[test]
fn parallel_validation_keeps_document_order() {
    let mut body = String::new();
    let mut fetcher = MockFetcher::new();
    for i in 0..12 {
        body.push_str(&format!(r#"<img src="/img{i}.png">"#));
        // Every third image is too small once decoded.
        let size = if i % 3 == 0 { 20 } else { 200 };
        fetcher = fetcher.image(&format!("https://example.com/img{i}.png"), size, size);
    }
    let html = format!(r#"<html><head><title>T</title></head><body>{body}</body></html>"#);
    let fetcher = fetcher.page(URL, &html);

    let sequential = Options {
        image_validation_concurrency: 1,
        ..Options::default()
    };
    let parallel = Options {
        image_validation_concurrency: 8,
        ..Options::default()
    };

    let expected: Vec<String> = [1, 2, 4, 5, 7, 8, 10, 11]
        .iter()
        .map(|i| format!("https://example.com/img{i}.png"))
        .collect();
    assert_eq!(image_urls(&fetcher, &sequential), expected);
    assert_eq!(image_urls(&fetcher, &parallel), expected);
}

#[test]
fn relative_images_resolve_against_base_href() {
    let html = r#"
        <html><head>
          <title>T</title>
          <base href="https://static.example.com/assets/">
        </head><body>
          <img src="hero.png">
        </body></html>
    "#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://static.example.com/assets/hero.png", 400, 300);

    assert_eq!(
        image_urls(&fetcher, &Options::default()),
        vec!["https://static.example.com/assets/hero.png"]
    );
}

#[test]
fn relative_images_resolve_against_final_url_after_redirect() {
    let html = r#"<html><head><title>T</title></head><body><img src="pic.png"></body></html>"#;
    let fetcher = MockFetcher::new()
        .page_with(URL, "https://www.example.com/blog/post", Some("text/html"), html.as_bytes())
        .image("https://www.example.com/blog/pic.png", 400, 300);

    let record = scrape_with_fetcher(URL, &Options::default(), &fetcher);
    let metadata = record.metadata.unwrap_or_default();
    assert_eq!(metadata.image_urls, vec!["https://www.example.com/blog/pic.png"]);
    // The reported URL is still the one that was asked for.
    assert_eq!(metadata.url, URL);
    assert_eq!(metadata.short_url, "example.com");
}

#[test]
fn image_thresholds_can_be_overridden() {
    let html = r#"<html><head><title>T</title></head><body><img src="/small.png"></body></html>"#;
    let fetcher = MockFetcher::new()
        .page(URL, html)
        .image("https://example.com/small.png", 40, 40);

    assert!(image_urls(&fetcher, &Options::default()).is_empty());

    let relaxed = Options {
        min_image_dimension: 32,
        min_image_area: 1000,
        ..Options::default()
    };
    assert_eq!(image_urls(&fetcher, &relaxed), vec!["https://example.com/small.png"]);
}
