//! Object lifecycle migration CLI
//!
//! Lists objects in the source bucket older than the retention threshold,
//! copies them to the destination bucket under a new prefix, then deletes
//! from the source only those objects that were confirmed copied.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use s3_migrate::config::MigrationConfig;
use s3_migrate::migrate;
use s3_migrate::s3::{credentials, S3Client};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = MigrationConfig::parse();

    if config.new_prefix.is_empty() {
        tracing::info!("no prefix specified, keys are migrated unchanged");
    }

    let profile = match credentials::resolve_profile(
        config.skip_profile_check,
        &config.cred_file,
        &config.profile,
    ) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::error!("credential resolution failed: {err}");
            return Ok(());
        }
    };

    let client = S3Client::new(profile.as_deref()).await?;
    tracing::info!("using region {}", client.region());

    match migrate::run(&client, &config, config.cutoff()).await {
        Ok(deleted) => {
            for key in &deleted {
                println!("Deleted: {key}");
            }
            tracing::info!(
                "migration complete, {} objects deleted from {}",
                deleted.len(),
                config.source_bucket
            );
        }
        Err(err) => {
            tracing::error!("listing {} failed: {err}", config.source_bucket);
        }
    }

    Ok(())
}
