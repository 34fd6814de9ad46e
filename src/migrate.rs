//! The migration pipeline
//!
//! Stages run in strict sequence: list, copy, delete. Each stage returns a
//! subset of its input. A listing failure aborts the run; a failed copy or
//! delete of a single object is logged and that object drops out of the
//! downstream set. An object is deleted from the source only if it was first
//! confirmed copied to the destination.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::MigrationConfig;
use crate::error::{ErrorClass, StoreError};
use crate::s3::store::ObjectStore;

/// Listing page size.
pub const PAGE_SIZE: i32 = 100;

/// List keys in `bucket` whose last-modified timestamp is strictly earlier
/// than `cutoff`, in store-listing order.
///
/// Pages until the listing is exhausted, or until `max_pages` pages have been
/// fetched when a cap is set. A service error aborts with no partial result.
pub async fn list_older_than<S: ObjectStore>(
    store: &S,
    bucket: &str,
    cutoff: DateTime<Utc>,
    max_pages: Option<u32>,
) -> Result<Vec<String>, StoreError> {
    let mut keys = Vec::new();
    let mut token: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let page = store.list_page(bucket, PAGE_SIZE, token.as_deref()).await?;
        keys.extend(
            page.records
                .iter()
                .filter(|record| record.is_older_than(cutoff))
                .map(|record| record.key.clone()),
        );

        pages += 1;
        if max_pages.is_some_and(|limit| pages >= limit) {
            break;
        }
        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    Ok(keys)
}

/// Copy every key from `source_bucket` into `dest_bucket` under `prefix`,
/// returning the subset confirmed copied. A failed copy is logged and
/// skipped; later keys are still attempted. No rollback, no retry.
pub async fn copy_all<S: ObjectStore>(
    store: &S,
    source_bucket: &str,
    dest_bucket: &str,
    prefix: &str,
    keys: Vec<String>,
) -> Vec<String> {
    let mut copied = Vec::new();

    for key in keys {
        let dest_key = format!("{}{}", prefix, key);
        match store.copy(source_bucket, &key, dest_bucket, &dest_key).await {
            Ok(()) => copied.push(key),
            Err(err) => log_item_failure("copy", &key, &err),
        }
    }

    copied
}

/// Delete every key from `bucket`, returning the subset confirmed deleted.
/// Same per-item failure policy as [`copy_all`]. Callers must pass only keys
/// whose copies were confirmed.
pub async fn delete_all<S: ObjectStore>(
    store: &S,
    bucket: &str,
    keys: Vec<String>,
) -> Vec<String> {
    let mut deleted = Vec::new();

    for key in keys {
        match store.delete(bucket, &key).await {
            Ok(()) => deleted.push(key),
            Err(err) => log_item_failure("delete", &key, &err),
        }
    }

    deleted
}

fn log_item_failure(operation: &str, key: &str, err: &StoreError) {
    match err.classify() {
        ErrorClass::Known(code) => warn!(%key, %code, "{operation} failed: {err}"),
        ErrorClass::Unknown => warn!(%key, "{operation} failed: {err}"),
    }
}

/// Run the full pipeline and return the keys deleted from the source bucket.
pub async fn run<S: ObjectStore>(
    store: &S,
    config: &MigrationConfig,
    cutoff: DateTime<Utc>,
) -> Result<Vec<String>, StoreError> {
    info!(
        "checking {} for objects older than {}",
        config.source_bucket,
        cutoff.to_rfc3339()
    );
    let listed = list_older_than(store, &config.source_bucket, cutoff, config.max_pages).await?;
    info!("{} objects eligible for migration", listed.len());

    let copied = copy_all(
        store,
        &config.source_bucket,
        &config.destination_bucket,
        &config.new_prefix,
        listed,
    )
    .await;
    let deleted = delete_all(store, &config.source_bucket, copied).await;

    Ok(deleted)
}
