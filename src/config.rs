//! Run configuration assembled from the command line
//!
//! All flags live in one explicit struct; there is no ambient flag state.
//! The orchestrator receives this struct as an argument.

use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use std::path::PathBuf;

/// Move objects older than a retention threshold from a source S3 bucket to a
/// destination bucket, then delete from the source only what was confirmed
/// copied.
#[derive(Parser, Debug, Clone)]
#[command(name = "s3-migrate", version)]
pub struct MigrationConfig {
    /// Credentials profile to use
    #[arg(short = 'p', long, env = "S3_MIGRATE_PROFILE", default_value = "default")]
    pub profile: String,

    /// Source bucket
    #[arg(short = 's', long, env = "S3_MIGRATE_SOURCE_BUCKET")]
    pub source_bucket: String,

    /// Destination bucket
    #[arg(short = 'd', long, env = "S3_MIGRATE_DESTINATION_BUCKET")]
    pub destination_bucket: String,

    /// Prefix prepended to every destination key
    #[arg(short = 'n', long, default_value = "")]
    pub new_prefix: String,

    /// Migrate objects last modified more than this many days ago
    #[arg(short = 'o', long, default_value_t = 30)]
    pub older_than: i64,

    /// Skip the profile check and use the SDK default provider chain
    /// (environment, instance role, ...)
    #[arg(short = 'k', long)]
    pub skip_profile_check: bool,

    /// Full path to the credentials file
    #[arg(short = 'c', long, env = "S3_MIGRATE_CRED_FILE", default_value_os_t = default_cred_file())]
    pub cred_file: PathBuf,

    /// Stop listing after this many pages of 100 objects. By default the
    /// listing pages until exhausted; set this as a safety cap on huge buckets.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,
}

impl MigrationConfig {
    /// The age cutoff for this run. Computed once; objects last modified
    /// strictly before this instant are eligible.
    pub fn cutoff(&self) -> DateTime<Utc> {
        Utc::now() - Duration::days(self.older_than)
    }
}

/// `~/.aws/credentials`, relative to the working directory when the home
/// directory cannot be determined.
fn default_cred_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aws")
        .join("credentials")
}
