use anyhow::{Context, Result};
use clap::Parser;
use instsync_core::SyncConfig;
use instsync_service::{InstitutionSync, collect_batch, default_sources};
use instsync_storage::PgStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "instsync", version)]
#[command(about = "Sync institution registries (CHED, TESDA) into PostgreSQL", long_about = None)]
struct Cli {}

async fn run() -> Result<()> {
    let config = SyncConfig::from_env()?;

    println!("Starting institutions sync...");
    let sources = default_sources();
    let batch = collect_batch(&sources).await?;
    println!("Processing {} institutions...", batch.records.len());

    let storage = PgStorage::connect(&config).await.context("failed to open database")?;
    let sync = InstitutionSync::new(storage.clone(), sources);
    let result = sync.apply(batch).await;
    storage.close().await;
    let report = result?;

    println!("Sync completed: {} created, {} updated", report.created, report.updated);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "sync failed");
        return Err(err.context("sync failed"));
    }
    Ok(())
}
