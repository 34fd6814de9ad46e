//! Object lifecycle migration for S3 buckets
//!
//! Lists objects in a source bucket older than a retention threshold, copies
//! them to a destination bucket under a new key prefix, and deletes from the
//! source only those objects that were confirmed copied.

pub mod config;
pub mod error;
pub mod migrate;
pub mod s3;
