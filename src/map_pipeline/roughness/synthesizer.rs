//! Contrast / blur-difference roughness synthesis.
//!
//! The high-contrast pass (histogram stretch, then a 3x3 sharpen) keeps
//! fine detail; the blurred pass (separable box blur) keeps only the
//! coarse structure. Their absolute difference isolates local
//! micro-contrast, which is stretched back to full range and
//! gamma-corrected to bias mid-tones.

use crate::map_pipeline::config::SynthesisConfig;
use crate::map_pipeline::luma::types::LumaBuffer;
use crate::map_pipeline::roughness::types::RoughnessMapBuffer;

pub struct RoughnessSynthesizer {
    blur_radius: usize,
    gamma: f32,
    sharpen_strength: f32,
}

impl RoughnessSynthesizer {
    pub fn new(blur_radius: usize, gamma: f32, sharpen_strength: f32) -> Self {
        Self {
            blur_radius,
            gamma,
            sharpen_strength,
        }
    }

    pub fn from_config(config: &SynthesisConfig) -> Self {
        Self::new(config.blur_radius, config.gamma, config.sharpen_strength)
    }

    /// Synthesize a roughness map of identical dimensions from `luma`.
    ///
    /// A perfectly constant input produces a uniformly zero map; that is
    /// a valid result, not an error.
    pub fn synthesize(&self, luma: &LumaBuffer) -> RoughnessMapBuffer {
        let width = luma.width;
        let height = luma.height;

        let mut high: Vec<f32> = luma.data.iter().map(|&v| v as f32).collect();
        stretch(&mut high);
        let high = sharpen(&high, width, height, self.sharpen_strength);

        let base: Vec<f32> = luma.data.iter().map(|&v| v as f32).collect();
        let blurred = box_blur(&base, width, height, self.blur_radius);

        let mut blended: Vec<f32> = high
            .iter()
            .zip(&blurred)
            .map(|(&h, &b)| (h - b).abs())
            .collect();
        stretch(&mut blended);

        let inv_gamma = 1.0 / self.gamma;
        let data = blended
            .iter()
            .map(|&v| (255.0 * (v / 255.0).powf(inv_gamma)).round().clamp(0.0, 255.0) as u8)
            .collect();

        RoughnessMapBuffer {
            width,
            height,
            data,
        }
    }
}

/// Stretch the value histogram to fill [0, 255] in place.
///
/// A constant buffer has no contrast to stretch and collapses to zero,
/// which keeps the flat-input contract of the synthesizer.
fn stretch(buf: &mut [f32]) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in buf.iter() {
        min = min.min(v);
        max = max.max(v);
    }

    if max - min < f32::EPSILON {
        buf.fill(0.0);
        return;
    }

    let scale = 255.0 / (max - min);
    for v in buf.iter_mut() {
        *v = (*v - min) * scale;
    }
}

/// 3x3 sharpen with clamped-edge sampling; output clamped to [0, 255].
///
/// The kernel is `center 1 + 4s`, cross neighbors `-s`, so it sums to 1
/// and leaves flat regions untouched.
fn sharpen(src: &[f32], width: usize, height: usize, strength: f32) -> Vec<f32> {
    let mut out = vec![0.0f32; src.len()];
    for y in 0..height {
        for x in 0..width {
            let at = |dx: isize, dy: isize| -> f32 {
                let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;
                let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                src[sy * width + sx]
            };

            let v = (1.0 + 4.0 * strength) * at(0, 0)
                - strength * (at(-1, 0) + at(1, 0) + at(0, -1) + at(0, 1));
            out[y * width + x] = v.clamp(0.0, 255.0);
        }
    }
    out
}

/// Separable box blur with clamped-edge sampling.
fn box_blur(src: &[f32], width: usize, height: usize, radius: usize) -> Vec<f32> {
    if radius == 0 {
        return src.to_vec();
    }

    let window = (2 * radius + 1) as f32;
    let r = radius as isize;

    let mut horizontal = vec![0.0f32; src.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for k in -r..=r {
                let sx = (x as isize + k).clamp(0, width as isize - 1) as usize;
                sum += src[y * width + sx];
            }
            horizontal[y * width + x] = sum / window;
        }
    }

    let mut out = vec![0.0f32; src.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for k in -r..=r {
                let sy = (y as isize + k).clamp(0, height as isize - 1) as usize;
                sum += horizontal[sy * width + x];
            }
            out[y * width + x] = sum / window;
        }
    }
    out
}
