//! Synthesis configuration types
//!
//! All of the tunable constants of the synthesis algorithms live here as
//! named, overridable defaults rather than literals buried in loops.

/// Largest dimension a decoded image may keep; larger inputs are
/// downscaled (never upscaled) preserving aspect ratio.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Fixed Z component of the candidate normal before normalization.
/// A larger value reads as a flatter surface.
pub const DEFAULT_Z_SCALE: f32 = 255.0;

/// Box blur radius used for the roughness blurred pass.
pub const DEFAULT_BLUR_RADIUS: usize = 5;

/// Gamma applied to the blended roughness result (`v^(1/gamma)`).
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Strength of the 3x3 sharpening kernel in the high-contrast pass.
/// At 1.0 this is the classic `[0,-1,0; -1,5,-1; 0,-1,0]` kernel.
pub const DEFAULT_SHARPEN_STRENGTH: f32 = 1.0;

/// Fill policy for normal-map border pixels.
///
/// The Sobel loop only visits interior pixels, so the one-pixel border
/// needs a deterministic fill. Leaving it zeroed would render as a dark
/// seam around the preview, so that option is deliberately not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderFill {
    /// Flat-surface encoding (128, 128, 255, 255).
    #[default]
    FlatNormal,
    /// Copy the nearest interior pixel. Falls back to `FlatNormal` when
    /// the image has no interior (either dimension below 3).
    Replicate,
}

/// Configuration for material map synthesis
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Resampling cap for the larger decoded dimension
    pub max_dimension: u32,
    /// Height-scale constant for normal synthesis
    pub z_scale: f32,
    /// Blur radius for the roughness blurred pass
    pub blur_radius: usize,
    /// Gamma for roughness mid-tone bias
    pub gamma: f32,
    /// Sharpening strength for the roughness high-contrast pass
    pub sharpen_strength: f32,
    /// Border fill policy for normal maps
    pub border_fill: BorderFill,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            z_scale: DEFAULT_Z_SCALE,
            blur_radius: DEFAULT_BLUR_RADIUS,
            gamma: DEFAULT_GAMMA,
            sharpen_strength: DEFAULT_SHARPEN_STRENGTH,
            border_fill: BorderFill::FlatNormal,
        }
    }
}

impl SynthesisConfig {
    pub fn builder() -> SynthesisConfigBuilder {
        SynthesisConfigBuilder::default()
    }
}

/// Builder for SynthesisConfig
#[derive(Default)]
pub struct SynthesisConfigBuilder {
    max_dimension: Option<u32>,
    z_scale: Option<f32>,
    blur_radius: Option<usize>,
    gamma: Option<f32>,
    sharpen_strength: Option<f32>,
    border_fill: Option<BorderFill>,
}

impl SynthesisConfigBuilder {
    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn z_scale(mut self, z_scale: f32) -> Self {
        self.z_scale = Some(z_scale);
        self
    }

    pub fn blur_radius(mut self, blur_radius: usize) -> Self {
        self.blur_radius = Some(blur_radius);
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn sharpen_strength(mut self, sharpen_strength: f32) -> Self {
        self.sharpen_strength = Some(sharpen_strength);
        self
    }

    pub fn border_fill(mut self, border_fill: BorderFill) -> Self {
        self.border_fill = Some(border_fill);
        self
    }

    pub fn build(self) -> SynthesisConfig {
        let default = SynthesisConfig::default();
        SynthesisConfig {
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            z_scale: self.z_scale.unwrap_or(default.z_scale),
            blur_radius: self.blur_radius.unwrap_or(default.blur_radius),
            gamma: self.gamma.unwrap_or(default.gamma),
            sharpen_strength: self.sharpen_strength.unwrap_or(default.sharpen_strength),
            border_fill: self.border_fill.unwrap_or(default.border_fill),
        }
    }
}
