use std::io::Cursor;
use std::sync::{Arc, Mutex};

use crate::map_pipeline::common::error::{MapError, Result};
use crate::map_pipeline::config::SynthesisConfig;
use crate::map_pipeline::pipeline::{MapKind, MapPipeline};
use crate::map_pipeline::publish::AssetPublisher;
use crate::map_pipeline::source::{SourceFetcher, SourceImage};

struct MockFetcher {
    should_fail: bool,
    bytes: Vec<u8>,
}

impl SourceFetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<SourceImage> {
        if self.should_fail {
            return Err(MapError::Fetch("mock fetch error".to_string()));
        }
        Ok(SourceImage::new(self.bytes.clone(), Some("image/png".to_string())))
    }
}

struct MockPublisher {
    should_fail: bool,
    published: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl AssetPublisher for MockPublisher {
    async fn publish(&self, bytes: &[u8], destination_hint: &str) -> Result<String> {
        if self.should_fail {
            return Err(MapError::Publish("mock publish error".to_string()));
        }
        self.published
            .lock()
            .unwrap()
            .push((destination_hint.to_string(), bytes.to_vec()));
        Ok(format!("https://assets.example/{destination_hint}/mock.png"))
    }
}

fn sample_png() -> Vec<u8> {
    let img = image::RgbImage::from_fn(8, 8, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 30) as u8, 128])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn pipeline(
    fetch_fails: bool,
    publish_fails: bool,
    source: Vec<u8>,
) -> (
    MapPipeline<MockFetcher, MockPublisher>,
    Arc<Mutex<Vec<(String, Vec<u8>)>>>,
) {
    let published = Arc::new(Mutex::new(Vec::new()));
    let fetcher = MockFetcher {
        should_fail: fetch_fails,
        bytes: source,
    };
    let publisher = MockPublisher {
        should_fail: publish_fails,
        published: published.clone(),
    };
    (
        MapPipeline::new(fetcher, publisher, SynthesisConfig::default()),
        published,
    )
}

#[tokio::test]
async fn test_normal_map_generation_succeeds() {
    let (pipeline, published) = pipeline(false, false, sample_png());

    let map = pipeline
        .generate_normal_map("https://example.com/base.png")
        .await
        .unwrap();

    assert_eq!(map.kind, MapKind::Normal);
    assert_eq!((map.width, map.height), (8, 8));
    assert!(map.url.contains("normal-maps"));

    let published = published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].0, "normal-maps");
    // published bytes are a decodable PNG of the right shape
    let stored = image::load_from_memory(&published[0].1).unwrap();
    assert_eq!((stored.width(), stored.height()), (8, 8));
}

#[tokio::test]
async fn test_roughness_map_generation_succeeds() {
    let (pipeline, published) = pipeline(false, false, sample_png());

    let map = pipeline
        .generate_roughness_map("https://example.com/base.png")
        .await
        .unwrap();

    assert_eq!(map.kind, MapKind::Roughness);
    assert!(map.url.contains("roughness-maps"));
    assert_eq!(published.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_never_publishes() {
    let (pipeline, published) = pipeline(true, false, Vec::new());

    let result = pipeline
        .generate_normal_map("https://example.com/missing.png")
        .await;

    assert!(matches!(result.unwrap_err(), MapError::Fetch(_)));
    assert!(published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_undecodable_source_fails_before_publish() {
    let (pipeline, published) = pipeline(false, false, b"not an image".to_vec());

    let result = pipeline
        .generate_roughness_map("https://example.com/corrupt.png")
        .await;

    assert!(matches!(result.unwrap_err(), MapError::Decode(_)));
    assert!(published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_publish_failure_yields_publish_error() {
    let (pipeline, _published) = pipeline(false, true, sample_png());

    let result = pipeline
        .generate_normal_map("https://example.com/base.png")
        .await;

    // the map was computed; only the store step failed
    assert!(matches!(result.unwrap_err(), MapError::Publish(_)));
}

#[tokio::test]
async fn test_oversized_source_is_resampled_before_synthesis() {
    let img = image::RgbImage::from_fn(2048, 1024, |x, _| image::Rgb([(x % 256) as u8; 3]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let (pipeline, _) = pipeline(false, false, bytes);
    let map = pipeline
        .generate_normal_map("https://example.com/large.png")
        .await
        .unwrap();

    assert_eq!((map.width, map.height), (1024, 512));
}
