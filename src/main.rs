use clap::Parser;
use directory_crawl::{DirectoryConfig, Pipeline};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DirectoryConfig::from_file(path).inspect_err(|e| {
            ::log::error!("Failed to load configuration: {}", e);
        })?,
        None => DirectoryConfig::default(),
    };
    args.apply(&mut config);

    ::log::info!("Starting {:?} stage for {}", args.stage, config.origin);

    let pipeline = Pipeline::new(config)?;

    let start_time = std::time::Instant::now();
    if let Err(e) = pipeline.run(args.stage.into()).await {
        ::log::error!("Crawl failed: {}", e);
        return Err(e.into());
    }

    ::log::info!(
        "Crawl complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
