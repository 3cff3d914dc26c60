//! Roughness map data types

/// Single-channel roughness intensities in [0, 255], row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoughnessMapBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RoughnessMapBuffer {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}
