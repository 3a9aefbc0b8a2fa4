//! `lux` - render the disc light scene to a PNG.

mod args;
mod encode;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use lux_renderer::{render_parallel, seed_for_worker, synthesize, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::args::Options;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse(std::env::args().skip(1))?;
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };

    let start = Instant::now();
    let image = if options.parallel {
        render_parallel(options.width, options.height, &config)
    } else {
        let mut rng = StdRng::seed_from_u64(seed_for_worker(config.seed, 0));
        synthesize(options.width, options.height, &config, &mut rng)
    }
    .context("Render failed, no image written")?;

    encode::save_png(&image, &options.output)?;
    log::info!(
        "Saved {} in {:?}",
        options.output.display(),
        start.elapsed()
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: RenderConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}
