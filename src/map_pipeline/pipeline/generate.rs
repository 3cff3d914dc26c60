use tracing::{info, instrument};

use crate::map_pipeline::{
    common::error::Result,
    config::SynthesisConfig,
    encode::{MapEncoder, PngMapEncoder},
    luma::{LumaBuffer, LumaDecoder},
    normal::NormalSynthesizer,
    publish::AssetPublisher,
    roughness::RoughnessSynthesizer,
    source::SourceFetcher,
};

/// Which of the two map kinds a request produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Normal,
    Roughness,
}

impl MapKind {
    /// Opaque folder/category string handed to the publisher.
    pub fn destination_hint(self) -> &'static str {
        match self {
            MapKind::Normal => "normal-maps",
            MapKind::Roughness => "roughness-maps",
        }
    }
}

/// Outcome of a successful generation request.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    /// Retrievable URL returned by the publisher
    pub url: String,
    pub kind: MapKind,
    pub width: usize,
    pub height: usize,
}

/// Per-request material map pipeline.
///
/// The fetch and publish boundaries are the only suspension points; the
/// synthesis stages in between are synchronous, pure pixel processing
/// over request-owned buffers.
pub struct MapPipeline<F: SourceFetcher, P: AssetPublisher, E: MapEncoder = PngMapEncoder> {
    fetcher: F,
    publisher: P,
    encoder: E,
    config: SynthesisConfig,
}

impl<F: SourceFetcher, P: AssetPublisher> MapPipeline<F, P, PngMapEncoder> {
    pub fn new(fetcher: F, publisher: P, config: SynthesisConfig) -> Self {
        Self {
            fetcher,
            publisher,
            encoder: PngMapEncoder::new(),
            config,
        }
    }
}

impl<F: SourceFetcher, P: AssetPublisher, E: MapEncoder> MapPipeline<F, P, E> {
    pub fn with_encoder(fetcher: F, publisher: P, encoder: E, config: SynthesisConfig) -> Self {
        Self {
            fetcher,
            publisher,
            encoder,
            config,
        }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Generate and publish a normal map for the image at `source_url`.
    #[instrument(skip(self))]
    pub async fn generate_normal_map(&self, source_url: &str) -> Result<GeneratedMap> {
        info!("Starting normal map generation");

        let luma = self.fetch_and_decode(source_url).await?;

        let map = {
            let _span = tracing::info_span!(
                "normal_synthesis",
                width = luma.width,
                height = luma.height
            )
            .entered();
            NormalSynthesizer::from_config(&self.config).synthesize(&luma)
        };

        let encoded = {
            let _span = tracing::info_span!("encode_png").entered();
            self.encoder.encode_rgba(&map.data, map.width, map.height)?
        };

        let url = self
            .publisher
            .publish(encoded.bytes(), MapKind::Normal.destination_hint())
            .await?;

        info!(%url, width = map.width, height = map.height, "Normal map published");

        Ok(GeneratedMap {
            url,
            kind: MapKind::Normal,
            width: map.width,
            height: map.height,
        })
    }

    /// Generate and publish a roughness map for the image at `source_url`.
    #[instrument(skip(self))]
    pub async fn generate_roughness_map(&self, source_url: &str) -> Result<GeneratedMap> {
        info!("Starting roughness map generation");

        let luma = self.fetch_and_decode(source_url).await?;

        let map = {
            let _span = tracing::info_span!(
                "roughness_synthesis",
                width = luma.width,
                height = luma.height
            )
            .entered();
            RoughnessSynthesizer::from_config(&self.config).synthesize(&luma)
        };

        let encoded = {
            let _span = tracing::info_span!("encode_png").entered();
            self.encoder.encode_gray(&map.data, map.width, map.height)?
        };

        let url = self
            .publisher
            .publish(encoded.bytes(), MapKind::Roughness.destination_hint())
            .await?;

        info!(%url, width = map.width, height = map.height, "Roughness map published");

        Ok(GeneratedMap {
            url,
            kind: MapKind::Roughness,
            width: map.width,
            height: map.height,
        })
    }

    async fn fetch_and_decode(&self, source_url: &str) -> Result<LumaBuffer> {
        let source = self.fetcher.fetch(source_url).await?;

        let _span = tracing::info_span!("decode_luma", len = source.len()).entered();
        LumaDecoder::new(self.config.max_dimension).decode(source.bytes())
    }
}
