//! Entrypoint.
mod progress;

use std::collections::BTreeSet;

use clap::Parser;
use config::{Opts, OutputFormat};
use dotenvy::dotenv;
use driver::{Driver, known_actors::load_known_actors};
use extractor::Extractor;
use eyre::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::progress::ProgressObserver;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    info!("🔭 ChronoGraph starting...");

    let endpoint = opts.rpc.endpoint()?;
    let source = Extractor::connect(endpoint)
        .await
        .wrap_err("Could not connect to the Ethereum archive")?;

    let known_actors = match &opts.known_actors {
        Some(path) => load_known_actors(path)?,
        None => BTreeSet::new(),
    };
    let driver = Driver::new(source).with_known_actors(known_actors);

    let observer = ProgressObserver::new(!opts.no_progress);
    let timeline = driver.run(&opts.artifact, opts.period, observer).await?;

    let rendered = match opts.format {
        OutputFormat::Text => report::render_text(&timeline),
        OutputFormat::Json => report::render_json(&timeline)?,
    };
    println!("{rendered}");

    Ok(())
}
