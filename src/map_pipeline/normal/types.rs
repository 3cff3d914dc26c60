//! Normal map data types

/// RGBA normal map, 4 bytes per pixel, row-major.
///
/// Each interior pixel's (R, G, B) decodes to a unit-length tangent-space
/// vector via `c = (byte / 255 - 0.5) * 2`; alpha is always 255. Border
/// pixels hold whatever the configured `BorderFill` policy wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMapBuffer {
    pub width: usize,
    pub height: usize,
    /// RGBA bytes, `width * height * 4` long
    pub data: Vec<u8>,
}

impl NormalMapBuffer {
    /// RGBA bytes of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}
