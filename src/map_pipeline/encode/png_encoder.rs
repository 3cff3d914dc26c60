//! Deterministic PNG encoder.
//!
//! Fixed compression level and no adaptive filtering, so the same pixel
//! buffer always produces the same bytes.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::map_pipeline::common::error::{MapError, Result};
use crate::map_pipeline::encode::encoder::MapEncoder;
use crate::map_pipeline::encode::types::EncodedImage;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngMapEncoder;

impl PngMapEncoder {
    pub fn new() -> Self {
        Self
    }

    fn encode(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        color: ColorType,
        channels: usize,
    ) -> Result<EncodedImage> {
        if width == 0 || height == 0 {
            return Err(MapError::Encode(format!(
                "degenerate map dimensions: {width}x{height}"
            )));
        }
        if data.len() != width * height * channels {
            return Err(MapError::Encode(format!(
                "buffer length {} does not match {width}x{height}x{channels}",
                data.len()
            )));
        }

        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, width as u32, height as u32);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_compression(Compression::Default);
            encoder.set_filter(FilterType::NoFilter);

            let mut writer = encoder
                .write_header()
                .map_err(|e| MapError::Encode(e.to_string()))?;
            writer
                .write_image_data(data)
                .map_err(|e| MapError::Encode(e.to_string()))?;
        }

        Ok(EncodedImage::new(bytes))
    }
}

impl MapEncoder for PngMapEncoder {
    fn encode_rgba(&self, data: &[u8], width: usize, height: usize) -> Result<EncodedImage> {
        self.encode(data, width, height, ColorType::Rgba, 4)
    }

    fn encode_gray(&self, data: &[u8], width: usize, height: usize) -> Result<EncodedImage> {
        self.encode(data, width, height, ColorType::Grayscale, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_roundtrip() {
        let data: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 5) as u8).collect();
        let encoded = PngMapEncoder::new().encode_rgba(&data, 4, 3).unwrap();

        let decoded = image::load_from_memory(encoded.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert_eq!(decoded.to_rgba8().into_raw(), data);
    }

    #[test]
    fn test_gray_roundtrip() {
        let data: Vec<u8> = (0..5 * 5).map(|i| (i * 9) as u8).collect();
        let encoded = PngMapEncoder::new().encode_gray(&data, 5, 5).unwrap();

        let decoded = image::load_from_memory(encoded.bytes()).unwrap();
        assert_eq!(decoded.to_luma8().into_raw(), data);
    }

    #[test]
    fn test_encoding_is_byte_identical() {
        let data: Vec<u8> = (0..16 * 16).map(|i| (i % 256) as u8).collect();
        let encoder = PngMapEncoder::new();

        let a = encoder.encode_gray(&data, 16, 16).unwrap();
        let b = encoder.encode_gray(&data, 16, 16).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatched_buffer_fails() {
        let result = PngMapEncoder::new().encode_rgba(&[0u8; 10], 4, 4);
        assert!(matches!(result.unwrap_err(), MapError::Encode(_)));
    }
}
