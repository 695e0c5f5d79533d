//! Amazon S3 (or S3-compatible) blob backend.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::error::StorageError;
use super::traits::{join_url, BlobStore};

/// Blob store writing objects into one bucket.
///
/// `public_base_url` is whatever serves the bucket publicly (the bucket's
/// virtual-host URL or a CDN in front of it).
pub struct S3BlobStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Build a client from the standard AWS environment (credentials,
    /// region). `endpoint` points the client at an S3-compatible server
    /// such as MinIO and switches to path-style addressing.
    pub async fn from_env(
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
        endpoint: Option<&str>,
    ) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        Self::new(Client::from_conf(builder.build()), bucket, public_base_url)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| {
                StorageError::Backend(format!("put_object {key}: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(StorageError::Backend(format!(
                "head_object {key}: {}",
                DisplayErrorContext(&e)
            ))),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        // DeleteObject succeeds for missing keys, so probe first to report absence.
        if !self.exists(key).await? {
            return Ok(false);
        }
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                StorageError::Backend(format!("delete_object {key}: {}", DisplayErrorContext(&e)))
            })?;
        Ok(true)
    }

    fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}
