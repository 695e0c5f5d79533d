//! Project-scoped media uploads on top of a [`BlobStore`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ceral_core::media::{media_key, MediaKind};
use ceral_core::types::DbId;

use super::error::StorageError;
use super::traits::BlobStore;

/// Default bound on a single upload.
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// A file selected by the operator, held in memory until it is uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Where an upload landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub key: String,
    pub url: String,
}

/// Media store adapter: derives keys from the project id, uploads with a
/// bounded timeout, and hands back public URLs.
#[derive(Clone)]
pub struct MediaStore {
    blobs: Arc<dyn BlobStore>,
    upload_timeout: Duration,
}

impl MediaStore {
    pub fn new(blobs: Arc<dyn BlobStore>, upload_timeout: Duration) -> Self {
        Self {
            blobs,
            upload_timeout,
        }
    }

    pub fn blobs(&self) -> &Arc<dyn BlobStore> {
        &self.blobs
    }

    /// Upload one file for project `scope_id`.
    ///
    /// `index` is the file's position in the selection (images only). The key
    /// gets a millisecond timestamp suffix so repeated uploads to the same
    /// slot never overwrite each other.
    pub async fn upload(
        &self,
        scope_id: DbId,
        kind: MediaKind,
        index: usize,
        file: &MediaFile,
    ) -> Result<UploadedMedia, StorageError> {
        let key = media_key(scope_id, kind, index, chrono::Utc::now().timestamp_millis());

        tokio::time::timeout(
            self.upload_timeout,
            self.blobs.put(&key, &file.bytes, &file.content_type),
        )
        .await
        .map_err(|_| StorageError::Timeout {
            key: key.clone(),
            after: self.upload_timeout,
        })??;

        let url = self.blobs.public_url(&key);
        tracing::debug!(
            project_id = scope_id,
            %kind,
            index,
            key = %key,
            bytes = file.len(),
            "Uploaded project media"
        );
        Ok(UploadedMedia { key, url })
    }

    /// Best-effort removal of one blob, bounded like an upload. Returns
    /// `false` if it was already gone.
    pub async fn delete_by_key(&self, key: &str) -> Result<bool, StorageError> {
        let deleted = tokio::time::timeout(self.upload_timeout, self.blobs.delete(key))
            .await
            .map_err(|_| StorageError::Timeout {
                key: key.to_string(),
                after: self.upload_timeout,
            })??;
        tracing::debug!(key, deleted, "Deleted project media");
        Ok(deleted)
    }

    /// Recover the key from a URL this store produced. `None` for foreign URLs.
    pub fn key_for_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let base = self.blobs.public_base_url().trim_end_matches('/');
        url.strip_prefix(base)?
            .strip_prefix('/')
            .filter(|key| !key.is_empty())
    }
}
