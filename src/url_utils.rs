//! URL Utility Functions
//!
//! Input normalization (scheme defaulting), resolution of relative image
//! references, and the host extraction behind `shortURL`.

use url::Url;

/// Delimiter between a scheme and the rest of a URL.
pub const PROTOCOL_DELIMITER: &str = "://";

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            (true, Some(url))
        }
        _ => (false, None),
    }
}

/// Resolve an image or link reference against the document base.
///
/// Returns `None` for empty references and for anything that does not end up
/// as an absolute http(s) URL (`data:`, `javascript:`, unresolvable relatives).
#[must_use]
pub fn create_absolute_url(reference: &str, base: Option<&Url>) -> Option<String> {
    let reference = reference.trim();

    if reference.is_empty() {
        return None;
    }

    let (is_abs, parsed) = is_absolute_url(reference);
    if is_abs {
        return parsed.map(String::from);
    }

    let resolved = base?.join(reference).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Return the scheme of `url` if it starts with one (`scheme://...`).
///
/// Only RFC 3986 scheme characters are accepted, so a `://` that appears in
/// a path or query (`example.com/?next=http://a`) is not taken for a scheme.
#[must_use]
pub fn get_protocol(url: &str) -> Option<&str> {
    let pos = url.find(PROTOCOL_DELIMITER)?;
    let scheme = &url[..pos];

    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid.then_some(scheme)
}

/// Strip a leading `scheme://` or protocol-relative `//` from `url`.
#[must_use]
pub fn remove_protocol(url: &str) -> &str {
    if let Some(scheme) = get_protocol(url) {
        return &url[scheme.len() + PROTOCOL_DELIMITER.len()..];
    }
    url.strip_prefix("//").unwrap_or(url)
}

/// Normalize user input into the URL that gets fetched.
///
/// The scheme is kept when present (lowercased) and `default_scheme` is applied
/// otherwise; the result is always `scheme + "://" + rest`.
///
/// ```
/// use url_metadata_scraper::url_utils::normalize_url;
///
/// assert_eq!(normalize_url("example.com", "http"), "http://example.com");
/// assert_eq!(normalize_url("HTTPS://example.com/a", "http"), "https://example.com/a");
/// assert_eq!(normalize_url("//cdn.example.com/x", "https"), "https://cdn.example.com/x");
/// ```
#[must_use]
pub fn normalize_url(raw: &str, default_scheme: &str) -> String {
    let raw = raw.trim();
    let scheme = get_protocol(raw).unwrap_or(default_scheme).to_ascii_lowercase();

    format!("{scheme}{PROTOCOL_DELIMITER}{}", remove_protocol(raw))
}

/// Extract the hostname (domain) from a URL.
///
/// Parsed URLs yield their host. Strings `url` cannot parse fall back to the
/// text between the scheme and the first `/`, `?`, `#` or port separator,
/// minus any `user@` prefix.
///
/// # Returns
/// * The hostname, or empty string if there is none
#[must_use]
pub fn get_domain_url(url_str: &str) -> String {
    if let Ok(url) = Url::parse(url_str.trim()) {
        if let Some(host) = url.host_str() {
            return host.to_string();
        }
    }

    let rest = remove_protocol(url_str.trim());
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();

    host_port.split(':').next().unwrap_or_default().to_string()
}

/// Derive the `shortURL` label: the lowercase host of the URL, with any query
/// string removed before parsing.
///
/// ```
/// use url_metadata_scraper::url_utils::short_url;
///
/// assert_eq!(short_url("https://Example.com/page?x=1"), "example.com");
/// assert_eq!(short_url("https://Example.com/page"), "example.com");
/// ```
#[must_use]
pub fn short_url(normalized_url: &str) -> String {
    let without_query = normalized_url
        .split_once('?')
        .map_or(normalized_url, |(head, _)| head);

    get_domain_url(without_query).to_lowercase()
}

/// Determine the base for resolving relative references in a page.
///
/// A `<base href>` wins when it resolves against the page URL; the page URL
/// (after redirects) is used otherwise.
#[must_use]
pub fn document_base(page_url: &str, base_href: Option<&str>) -> Option<Url> {
    let page = Url::parse(page_url.trim()).ok();

    if let Some(href) = base_href.map(str::trim).filter(|h| !h.is_empty()) {
        let resolved = match &page {
            Some(page) => page.join(href).ok(),
            None => Url::parse(href).ok(),
        };
        if resolved.is_some() {
            return resolved;
        }
    }

    page
}
