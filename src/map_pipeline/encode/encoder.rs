use crate::map_pipeline::common::error::Result;
use crate::map_pipeline::encode::types::EncodedImage;

pub trait MapEncoder {
    /// Encode an RGBA buffer (`width * height * 4` bytes).
    fn encode_rgba(&self, data: &[u8], width: usize, height: usize) -> Result<EncodedImage>;

    /// Encode a single-channel buffer (`width * height` bytes).
    fn encode_gray(&self, data: &[u8], width: usize, height: usize) -> Result<EncodedImage>;
}
