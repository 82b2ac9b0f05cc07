//! Image acceptance gates.
//!
//! Two checks keep tracking pixels, icons and spacers out of previews:
//!
//! - the **structural gate** looks only at the `height`/`width` attributes an
//!   `<img>` declares and costs nothing;
//! - the **decode gate** fetches the image and reads its real pixel size.
//!
//! Every candidate must pass the decode gate. The structural gate is a
//! pre-filter for `<img>` elements only.

use std::io::Cursor;

use image::ImageReader;

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::text;
use crate::Options;

/// Minimum size an image must reach to be shown in a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Minimum width and minimum height, in pixels.
    pub min_dimension: u32,
    /// Minimum width × height, in pixels.
    pub min_area: u64,
}

impl Thresholds {
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self {
            min_dimension: opts.min_image_dimension,
            min_area: opts.min_image_area,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

/// Decoded pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    #[must_use]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Decode gate: both sides and the area must reach the thresholds.
    #[must_use]
    pub fn meets(self, thresholds: Thresholds) -> bool {
        self.area() >= thresholds.min_area
            && self.height >= thresholds.min_dimension
            && self.width >= thresholds.min_dimension
    }
}

/// Structural gate over declared attribute values.
///
/// Undeclared or unparseable sizes arrive as `0` and are not held against the
/// image; only a declared size below the thresholds rejects it.
#[must_use]
pub fn declared_size_acceptable(height: i64, width: i64, thresholds: Thresholds) -> bool {
    let min_dimension = i64::from(thresholds.min_dimension);

    if height > 0 && height < min_dimension {
        return false;
    }

    if width > 0 && width < min_dimension {
        return false;
    }

    if height > 0 && width > 0 {
        let area = u64::try_from(height.saturating_mul(width)).unwrap_or(u64::MAX);
        if area < thresholds.min_area {
            return false;
        }
    }

    true
}

/// Read the pixel size from encoded image bytes.
///
/// Only the header is parsed; the format is sniffed from the content, never
/// from the URL or a `Content-Type`.
pub fn decode_dimensions(bytes: &[u8]) -> Result<ImageDimensions> {
    if bytes.is_empty() {
        return Err(Error::ImageDecode("empty body".to_string()));
    }

    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;

    Ok(ImageDimensions { width, height })
}

/// Decides whether an absolute image URL is worth showing.
///
/// Implementations never fail: any problem reaching or decoding the image is
/// a rejection.
pub trait ImageValidator: Sync {
    fn is_valid_image_url(&self, url: &str) -> bool;
}

/// Decode gate backed by a [`Fetcher`].
#[derive(Debug)]
pub struct DecodingValidator<F> {
    fetcher: F,
    thresholds: Thresholds,
}

impl<F: Fetcher> DecodingValidator<F> {
    pub fn new(fetcher: F, thresholds: Thresholds) -> Self {
        Self {
            fetcher,
            thresholds,
        }
    }

    /// Fetch and decode `url`, reporting why it failed.
    pub fn probe(&self, url: &str) -> Result<ImageDimensions> {
        if text::is_blank(Some(url)) {
            return Err(Error::InvalidUrl(String::new()));
        }

        let bytes = self.fetcher.fetch_image(url)?;
        decode_dimensions(&bytes)
    }
}

impl<F: Fetcher> ImageValidator for DecodingValidator<F> {
    fn is_valid_image_url(&self, url: &str) -> bool {
        match self.probe(url) {
            Ok(dimensions) if dimensions.meets(self.thresholds) => true,
            Ok(dimensions) => {
                tracing::debug!(
                    url,
                    width = dimensions.width,
                    height = dimensions.height,
                    "image below size thresholds"
                );
                false
            }
            Err(err) => {
                tracing::debug!(url, error = %err, "image rejected");
                false
            }
        }
    }
}
