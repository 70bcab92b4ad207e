use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use image_vault::{
    infrastructure::{persistence::PostgresImageRepository, storage::ObjectStoreBlobStore},
    use_cases::{ReconcileImagesUseCase, ReconcileOptions},
    Config,
};

/// Report image rows whose blob is missing from the bucket
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Delete rows whose blob is missing
    #[arg(long)]
    fix: bool,

    /// Ignore rows younger than this many seconds; their upload may still
    /// be in flight
    #[arg(long, default_value_t = 3600)]
    min_age_secs: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let repo = Arc::new(PostgresImageRepository::new(pool));
    let blobs = Arc::new(ObjectStoreBlobStore::from_config(&config).await?);
    let use_case = ReconcileImagesUseCase::new(repo, blobs);

    let options = ReconcileOptions {
        fix: cli.fix,
        min_age: chrono::Duration::seconds(cli.min_age_secs.max(0)),
    };
    let report = use_case.execute(options, chrono::Utc::now()).await?;

    println!("Image rows: {}", report.scanned);
    for image in report.orphans.iter() {
        println!("id: {}, name: {}, date: {}", image.id(), image.name(), image.date());
    }
    println!("Rows without blob: {}", report.orphans.len());
    println!("Skipped (younger than {}s): {}", cli.min_age_secs, report.skipped_recent);
    if cli.fix {
        println!("Removed: {}", report.removed);
    }

    Ok(())
}
