//! S3 access layer
//!
//! - [`client::S3Client`] - aws-sdk-s3 wrapper implementing [`store::ObjectStore`]
//! - [`credentials`] - credentials-file profile validation
//! - [`store::ObjectStore`] - the capability interface the pipeline runs against
//! - [`types`] - listing data types

pub mod client;
pub mod credentials;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use client::{S3Client, S3ClientConfig};
pub use store::ObjectStore;
pub use types::{ObjectPage, ObjectRecord};
