//! Luma buffer data types

/// Single-channel grayscale intensity buffer, row-major.
///
/// Invariant: `data.len() == width * height`, `width >= 1`, `height >= 1`.
/// Owned exclusively by the request that created it and discarded once a
/// map has been produced.
#[derive(Debug, Clone)]
pub struct LumaBuffer {
    /// Width of the buffer in pixels
    pub width: usize,
    /// Height of the buffer in pixels
    pub height: usize,
    /// Row-major intensity values
    pub data: Vec<u8>,
}

impl LumaBuffer {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}
