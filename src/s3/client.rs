//! AWS S3 client wrapper

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::Client;

use crate::error::StoreError;
use crate::s3::store::ObjectStore;
use crate::s3::types::{ObjectPage, ObjectRecord};

/// Region applied when neither the profile nor the provider chain supplies one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Explicit client configuration, used to point the client at a non-AWS
/// endpoint (MinIO in the integration tests).
#[derive(Debug, Clone, Default)]
pub struct S3ClientConfig {
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// S3 client wrapper with the operations the migration needs
pub struct S3Client {
    client: Client,
    current_region: String,
}

impl S3Client {
    /// Create a client bound to the given profile, or to the SDK default
    /// provider chain when no profile is given.
    pub async fn new(profile_name: Option<&str>) -> Result<Self> {
        let config = if let Some(profile) = profile_name {
            aws_config::defaults(BehaviorVersion::latest())
                .profile_name(profile)
                .load()
                .await
        } else {
            aws_config::defaults(BehaviorVersion::latest())
                .load()
                .await
        };

        let current_region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut builder = aws_sdk_s3::config::Builder::from(&config);
        if config.region().is_none() {
            builder = builder.region(Region::new(DEFAULT_REGION));
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            current_region,
        })
    }

    /// Create a client from explicit configuration.
    pub async fn with_config(config: S3ClientConfig) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(ref region) = config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let (Some(key), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(aws_sdk_s3::config::Credentials::new(
                key.clone(),
                secret.clone(),
                None,
                None,
                "s3-migrate-static",
            ));
        }

        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style);
        if let Some(ref endpoint) = config.endpoint_url {
            builder = builder.endpoint_url(endpoint.clone());
        }

        let current_region = config
            .region
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            client: Client::from_conf(builder.build()),
            current_region,
        })
    }

    /// Create a bucket (used by integration tests against MinIO)
    pub async fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.client.create_bucket().bucket(bucket).send().await?;
        Ok(())
    }

    /// Upload bytes as an object
    pub async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(data.into())
            .send()
            .await?;

        Ok(())
    }

    /// Download an object to bytes
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let data = response.body.collect().await?;
        Ok(data.into_bytes().to_vec())
    }

    /// Get the current region
    pub fn region(&self) -> &str {
        &self.current_region
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_page(
        &self,
        bucket: &str,
        page_size: i32,
        continuation_token: Option<&str>,
    ) -> Result<ObjectPage, StoreError> {
        let mut request = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(page_size);

        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        let response = request.send().await.map_err(to_store_error)?;

        let records = response
            .contents()
            .iter()
            .map(|obj| ObjectRecord {
                key: obj.key().unwrap_or_default().to_string(),
                last_modified: obj
                    .last_modified()
                    .and_then(|d| chrono::DateTime::from_timestamp(d.secs(), d.subsec_nanos())),
            })
            .collect();

        let next_token = response.next_continuation_token().map(|s| s.to_string());

        Ok(ObjectPage {
            records,
            next_token,
        })
    }

    async fn copy(
        &self,
        source_bucket: &str,
        source_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Result<(), StoreError> {
        let copy_source = format!("{}/{}", source_bucket, source_key);

        self.client
            .copy_object()
            .bucket(dest_bucket)
            .key(dest_key)
            .copy_source(copy_source)
            .send()
            .await
            .map_err(to_store_error)?;

        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(to_store_error)?;

        Ok(())
    }
}

/// Map an SDK error to the store taxonomy, keeping the service error code
/// when the response carried one.
fn to_store_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    match err.code() {
        Some(code) => StoreError::Service {
            code: code.to_string(),
            message: err.message().unwrap_or("no message").to_string(),
        },
        None => StoreError::Other(anyhow::anyhow!("{}", DisplayErrorContext(&err))),
    }
}
