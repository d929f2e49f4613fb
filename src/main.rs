pub mod config;
pub mod embedder;
pub mod report;

use crate::config::ClientConfig;
use crate::embedder::remote::RemoteEmbedder;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Text embedded by the demo run.
const DEMO_TEXT: &str = "DuckDB 是一个内存分析型数据库";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // 1. Config (fixed defaults, no file or flags)
    let config = ClientConfig::default();
    config.validate()?;

    // 2. One embedding call
    info!("Requesting embedding from {}", config.endpoint);
    let embedder = RemoteEmbedder::new(&config)?;
    let vector = embedder.embed(DEMO_TEXT)?;

    // 3. Report
    println!("{}", report::summarize(&vector, config.preview_dims));

    Ok(())
}
