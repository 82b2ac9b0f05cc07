//! Result types for scraping output.
//!
//! [`MetadataRecord`] is the single value handed back to callers. Its JSON
//! form is a compatibility contract: a failed scrape serializes to
//! `{"success":false}` with every other key absent.

use serde::{Deserialize, Serialize};

/// Metadata extracted from a successfully fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMetadata {
    /// Page title, never empty.
    pub title: String,

    /// Short description, possibly empty.
    pub description: String,

    /// Absolute, unique image URLs in preview order.
    #[serde(rename = "imageURLs")]
    pub image_urls: Vec<String>,

    /// Embeddable video URL, possibly empty.
    #[serde(rename = "videoURL")]
    pub video_url: String,

    /// Lowercase host of the fetched URL.
    #[serde(rename = "shortURL")]
    pub short_url: String,

    /// The normalized URL that was fetched.
    pub url: String,
}

/// Outcome of one scrape.
///
/// `metadata` is `Some` exactly when `success` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub success: bool,

    #[serde(flatten)]
    pub metadata: Option<UrlMetadata>,
}

impl MetadataRecord {
    /// A record for a page that could not be fetched or had no title.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            success: false,
            metadata: None,
        }
    }

    #[must_use]
    pub fn success(metadata: UrlMetadata) -> Self {
        Self {
            success: true,
            metadata: Some(metadata),
        }
    }

    /// Serialize to the compact JSON object callers parse.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Only strings, bools and string lists: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| String::from(r#"{"success":false}"#))
    }

    /// Serialize to indented JSON.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

impl From<Option<UrlMetadata>> for MetadataRecord {
    fn from(metadata: Option<UrlMetadata>) -> Self {
        metadata.map_or_else(Self::failure, Self::success)
    }
}
