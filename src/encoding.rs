//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset comes from the `Content-Type`
//! response header when it names one, then from `<meta>` declarations in the
//! document head, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the body `<meta>` charset declarations are looked for.
const SNIFF_LEN: usize = 1024;

/// `charset=` inside any `<meta>` tag, bare or within a `content` value
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([\w:.+-]+)"#).expect("valid regex")
});

/// `charset=` inside a `<meta http-equiv="Content-Type">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bhttp-equiv\s*=\s*["']?\s*content-type\b[^>]*?\bcharset\s*=\s*["']?\s*([\w:.+-]+)"#)
        .expect("valid regex")
});

/// Match the `charset=` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// First capture of `re` in `haystack` that names a known encoding.
fn capture_encoding(re: &Regex, haystack: &str) -> Option<&'static Encoding> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Resolve the encoding named by a `Content-Type` header, if any.
///
/// Returns `None` when the header carries no charset or names one
/// `encoding_rs` does not know.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    capture_encoding(&HEADER_CHARSET_RE, content_type)
}

/// Detect character encoding from in-document declarations.
///
/// `<meta charset>` is tried before `<meta http-equiv="Content-Type">`;
/// unknown labels are skipped and UTF-8 is the fallback. Only the first
/// [`SNIFF_LEN`] bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    capture_encoding(&CHARSET_META_RE, &head)
        .or_else(|| capture_encoding(&CONTENT_TYPE_CHARSET_RE, &head))
        .unwrap_or(UTF_8)
}

/// Transcode a fetched page body to a UTF-8 string.
///
/// The header charset takes precedence over in-document declarations.
/// Conversion is lossy: invalid sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use url_metadata_scraper::encoding::decode_page;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_page(html, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(encoding_from_content_type)
        .unwrap_or_else(|| detect_encoding(body));

    if encoding == UTF_8 {
        // Fast path; also strips a UTF-8 BOM
        let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
        return String::from_utf8_lossy(body).into_owned();
    }

    // decode() sniffs a BOM first and replaces malformed sequences
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
