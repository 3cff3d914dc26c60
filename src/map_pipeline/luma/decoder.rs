//! Source bytes to luma buffer decoding.
//!
//! Uses the `image` crate to sniff and decode the container format, then
//! reduces to single-channel luma with the crate's Rec.601 perceptual
//! weighting. Oversized images are downscaled so the larger dimension
//! never exceeds the configured cap; images already within bounds pass
//! through at their native size. Upscaling never happens.

use image::imageops::FilterType;
use tracing::debug;

use crate::map_pipeline::common::error::{MapError, Result};
use crate::map_pipeline::config::DEFAULT_MAX_DIMENSION;
use crate::map_pipeline::luma::types::LumaBuffer;

/// Decodes raw image bytes into a capped luma buffer.
#[derive(Debug, Clone)]
pub struct LumaDecoder {
    max_dimension: u32,
}

impl LumaDecoder {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    /// Decode `bytes` into a `LumaBuffer`.
    ///
    /// Fails with `MapError::Decode` for corrupt bytes, unsupported
    /// formats, or a degenerate zero-dimension result. On success the
    /// postconditions hold: `data.len() == width * height` and both
    /// dimensions are at least 1 and at most `max_dimension`.
    pub fn decode(&self, bytes: &[u8]) -> Result<LumaBuffer> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| MapError::Decode(e.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(MapError::Decode(format!(
                "degenerate image dimensions: {width}x{height}"
            )));
        }

        debug!(width, height, "decoded source image");

        let decoded = if width.max(height) > self.max_dimension {
            let resized = decoded.resize(
                self.max_dimension,
                self.max_dimension,
                FilterType::Triangle,
            );
            debug!(
                width = resized.width(),
                height = resized.height(),
                "resampled to dimension cap"
            );
            resized
        } else {
            decoded
        };

        let gray = decoded.to_luma8();
        Ok(LumaBuffer {
            width: gray.width() as usize,
            height: gray.height() as usize,
            data: gray.into_raw(),
        })
    }
}

impl Default for LumaDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_in_bounds_image_passes_through() {
        let decoder = LumaDecoder::new(1024);
        let luma = decoder.decode(&png_bytes(640, 480)).unwrap();

        assert_eq!(luma.width, 640);
        assert_eq!(luma.height, 480);
        assert_eq!(luma.data.len(), 640 * 480);
    }

    #[test]
    fn test_oversized_image_is_capped() {
        let decoder = LumaDecoder::new(1024);
        let luma = decoder.decode(&png_bytes(2048, 512)).unwrap();

        assert_eq!(luma.width.max(luma.height), 1024);
        // 4:1 aspect ratio preserved
        assert_eq!(luma.width, 1024);
        assert_eq!(luma.height, 256);
        assert_eq!(luma.data.len(), luma.width * luma.height);
    }

    #[test]
    fn test_portrait_cap_applies_to_height() {
        let decoder = LumaDecoder::new(100);
        let luma = decoder.decode(&png_bytes(50, 200)).unwrap();

        assert_eq!(luma.height, 100);
        assert_eq!(luma.width, 25);
    }

    #[test]
    fn test_never_upscales() {
        let decoder = LumaDecoder::new(1024);
        let luma = decoder.decode(&png_bytes(3, 3)).unwrap();

        assert_eq!((luma.width, luma.height), (3, 3));
    }

    #[test]
    fn test_corrupt_bytes_fail_with_decode_error() {
        let decoder = LumaDecoder::default();
        let result = decoder.decode(b"definitely not an image");

        assert!(matches!(result.unwrap_err(), MapError::Decode(_)));
    }
}
