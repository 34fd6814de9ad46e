//! The object-store capability interface
//!
//! The pipeline runs against this trait rather than the SDK client directly,
//! so tests can substitute an in-memory store.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::s3::types::ObjectPage;

#[async_trait]
pub trait ObjectStore {
    /// Fetch one page of the bucket listing, at most `page_size` entries.
    /// Pass the previous page's `next_token` to continue a listing.
    async fn list_page(
        &self,
        bucket: &str,
        page_size: i32,
        continuation_token: Option<&str>,
    ) -> Result<ObjectPage, StoreError>;

    /// Copy `source_bucket/source_key` to `dest_bucket/dest_key`.
    async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), StoreError>;

    /// Delete `bucket/key`.
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StoreError>;
}
