//! Material map synthesis pipeline module
//!
//! This module provides the full request pipeline for deriving material
//! maps from a base-color photograph, with separate modules for source
//! fetching, luma preprocessing, normal/roughness synthesis, PNG encoding,
//! publication, and orchestration.

pub mod common;
pub mod config;
pub mod encode;
pub mod luma;
pub mod normal;
pub mod pipeline;
pub mod publish;
pub mod roughness;
pub mod source;

pub use common::{MapError, Result};

pub use config::{
    BorderFill,
    SynthesisConfig,
    SynthesisConfigBuilder,
};

pub use source::{
    HttpFetcher,
    SourceFetcher,
    SourceImage,
};

pub use luma::{
    LumaBuffer,
    LumaDecoder,
};

pub use normal::{
    NormalMapBuffer,
    NormalSynthesizer,
};

pub use roughness::{
    RoughnessMapBuffer,
    RoughnessSynthesizer,
};

pub use encode::{
    EncodedImage,
    MapEncoder,
    PngMapEncoder,
};

pub use publish::{
    AssetPublisher,
    DirectoryPublisher,
    StoreConfig,
};

pub use pipeline::{
    GeneratedMap,
    MapKind,
    MapPipeline,
};
