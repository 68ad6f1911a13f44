//! Stress Screening Pipeline - Command Line Entry Point
//!
//! Loads the trained artifact bundle, reads one questionnaire record as
//! JSON (file argument or stdin) and prints the screening outcome as JSON.

use anyhow::{Context, Result};
use artifact_store::ArtifactBundle;
use screening::{RawRecord, StressScreener};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    init_logging();

    info!("=== Stress Screening Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let artifact_dir = args
        .first()
        .cloned()
        .or_else(|| std::env::var("SCREENER_ARTIFACT_DIR").ok())
        .unwrap_or_else(|| "artifacts".to_string());

    let bundle = ArtifactBundle::load(&artifact_dir)
        .with_context(|| format!("loading artifacts from {artifact_dir}"))?;
    let screener = StressScreener::new(bundle).context("building screener")?;

    let record: RawRecord = match args.get(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading record from {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing record from {path}"))?
        }
        None => {
            info!("Reading questionnaire record from stdin...");
            serde_json::from_reader(std::io::stdin().lock()).context("parsing record from stdin")?
        }
    };

    let outcome = screener.screen(&record);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
