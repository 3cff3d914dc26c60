use anyhow::Context;
use surfmap_rs::logger;
use surfmap_rs::map_pipeline::{
    DirectoryPublisher, HttpFetcher, MapPipeline, StoreConfig, SynthesisConfig,
};

use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let source_url = args
        .next()
        .context("usage: surfmap_rs <source-image-url> [output-dir]")?;
    let output_dir = args.next().unwrap_or_else(|| "maps".to_string());

    info!("Starting surfmap...");

    let config = SynthesisConfig::builder().build();
    let store = StoreConfig::new(&output_dir, format!("file://{output_dir}"));
    let pipeline = MapPipeline::new(HttpFetcher::new(), DirectoryPublisher::new(store), config);

    info!("Material map pipeline initialized");
    info!("Resampling cap: {}", pipeline.config().max_dimension);
    info!("Border fill: {:?}", pipeline.config().border_fill);

    match pipeline.generate_normal_map(&source_url).await {
        Ok(map) => info!("Normal map: {}", map.url),
        Err(e) => error!("Normal map generation failed: {}", e),
    }

    match pipeline.generate_roughness_map(&source_url).await {
        Ok(map) => info!("Roughness map: {}", map.url),
        Err(e) => error!("Roughness map generation failed: {}", e),
    }

    Ok(())
}
