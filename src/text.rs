//! Small string helpers shared by the extractors.

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Whether `s` is absent, empty, or whitespace only.
#[inline]
#[must_use]
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

/// Shorten `s` to at most `max_chars` characters, ellipsis included.
///
/// Strings that already fit are returned unchanged. Otherwise the text is cut
/// at the last whitespace that leaves room for [`ELLIPSIS`], or hard-cut when
/// there is none, and the marker is appended. Lengths count `char`s.
#[must_use]
pub fn shorten(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        return s.to_string();
    }

    let marker_len = ELLIPSIS.chars().count();
    if max_chars <= marker_len {
        return s.chars().take(max_chars).collect();
    }

    let budget = max_chars - marker_len;
    let chars: Vec<char> = s.chars().collect();

    // chars[budget] is the first char that does not fit; a space there is a clean break.
    let cut = (1..=budget)
        .rev()
        .find(|&i| chars[i].is_whitespace())
        .unwrap_or(budget);

    let mut out: String = chars[..cut].iter().collect::<String>().trim_end().to_string();
    if out.is_empty() {
        out = chars[..budget].iter().collect();
    }
    out.push_str(ELLIPSIS);
    out
}

/// Parse a declared integer attribute, falling back to `default`.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer (`"100px"`, `"50%"`, `""`) yields `default`.
#[inline]
#[must_use]
pub fn parse_int_or(s: Option<&str>, default: i64) -> i64 {
    s.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(default)
}
