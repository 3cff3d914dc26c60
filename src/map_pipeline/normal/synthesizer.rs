//! Sobel-based normal synthesis.
//!
//! For every interior pixel the horizontal and vertical Sobel kernels
//! estimate the luma gradient; the candidate normal `(-gx, -gy, z_scale)`
//! is normalized and packed into RGB with the usual `[-1, 1] -> [0, 255]`
//! mapping. This is a heuristic gradient approximation for stylized
//! previews, not physical normal recovery.

use crate::map_pipeline::config::{BorderFill, SynthesisConfig};
use crate::map_pipeline::luma::types::LumaBuffer;
use crate::map_pipeline::normal::types::NormalMapBuffer;

/// Flat-surface pixel: normal pointing straight out of the surface.
pub const FLAT_NORMAL_PIXEL: [u8; 4] = [128, 128, 255, 255];

pub struct NormalSynthesizer {
    z_scale: f32,
    border_fill: BorderFill,
}

impl NormalSynthesizer {
    pub fn new(z_scale: f32, border_fill: BorderFill) -> Self {
        Self {
            z_scale,
            border_fill,
        }
    }

    pub fn from_config(config: &SynthesisConfig) -> Self {
        Self::new(config.z_scale, config.border_fill)
    }

    /// Synthesize a normal map of identical dimensions from `luma`.
    ///
    /// Each pixel is written exactly once: interior pixels by the Sobel
    /// loop, border pixels by the fill policy afterwards.
    pub fn synthesize(&self, luma: &LumaBuffer) -> NormalMapBuffer {
        let width = luma.width;
        let height = luma.height;
        let mut data = vec![0u8; width * height * 4];

        if width >= 3 && height >= 3 {
            for y in 1..height - 1 {
                for x in 1..width - 1 {
                    let sample = |dx: isize, dy: isize| -> f32 {
                        let sx = (x as isize + dx) as usize;
                        let sy = (y as isize + dy) as usize;
                        luma.data[sy * width + sx] as f32
                    };

                    // Horizontal / vertical Sobel taps over the 3x3 window
                    let gx = -sample(-1, -1) - 2.0 * sample(-1, 0) - sample(-1, 1)
                        + sample(1, -1)
                        + 2.0 * sample(1, 0)
                        + sample(1, 1);
                    let gy = -sample(-1, -1) - 2.0 * sample(0, -1) - sample(1, -1)
                        + sample(-1, 1)
                        + 2.0 * sample(0, 1)
                        + sample(1, 1);

                    let nx = -gx;
                    let ny = -gy;
                    let nz = self.z_scale;
                    let len = (nx * nx + ny * ny + nz * nz).sqrt();

                    let i = (y * width + x) * 4;
                    data[i] = encode_component(nx / len);
                    data[i + 1] = encode_component(ny / len);
                    data[i + 2] = encode_component(nz / len);
                    data[i + 3] = 255;
                }
            }
        }

        self.fill_border(&mut data, width, height);

        NormalMapBuffer {
            width,
            height,
            data,
        }
    }

    fn fill_border(&self, data: &mut [u8], width: usize, height: usize) {
        let has_interior = width >= 3 && height >= 3;

        for y in 0..height {
            for x in 0..width {
                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if !on_border {
                    continue;
                }

                let pixel = match self.border_fill {
                    BorderFill::Replicate if has_interior => {
                        let sx = x.clamp(1, width - 2);
                        let sy = y.clamp(1, height - 2);
                        let s = (sy * width + sx) * 4;
                        [data[s], data[s + 1], data[s + 2], data[s + 3]]
                    }
                    _ => FLAT_NORMAL_PIXEL,
                };

                let i = (y * width + x) * 4;
                data[i..i + 4].copy_from_slice(&pixel);
            }
        }
    }
}

/// Map a signed unit-range component into a byte.
#[inline]
fn encode_component(c: f32) -> u8 {
    ((c * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8
}
