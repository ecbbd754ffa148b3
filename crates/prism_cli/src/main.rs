use anyhow::{Context, Result};
use clap::Parser;
use prism_core::Config;
use prism_renderer::{render, ImageWriter};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Prism {}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            log::info!("No config given, rendering the built-in showcase scene");
            Config::default()
        }
    };

    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    config.validate().context("Invalid render settings")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure render thread pool")?;
    }

    let writer = ImageWriter::create(&args.output)
        .with_context(|| format!("Cannot write output file {}", args.output.display()))?;
    log::debug!("Output format: {:?}", writer.format());

    let image = render(&config.scene, &config.render);

    writer
        .write(&image)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    Ok(())
}
