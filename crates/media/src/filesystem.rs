use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::traits::{join_url, BlobStore};

/// Filesystem-backed blob store.
///
/// Keys map directly onto relative paths under `base_path`
/// (`projects/7/image_0_1700000000000` → `{base_path}/projects/7/image_0_1700000000000`),
/// and the API server exposes `base_path` at `public_base_url`.
pub struct FilesystemBlobStore {
    base_path: PathBuf,
    public_base_url: String,
}

impl FilesystemBlobStore {
    /// Create a new filesystem blob store.
    pub async fn new(
        base_path: PathBuf,
        public_base_url: impl Into<String>,
    ) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            public_base_url: public_base_url.into(),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Compute the filesystem path for a key, refusing anything that could
    /// escape `base_path`.
    fn blob_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(relative))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn put(&self, key: &str, data: &[u8], _content_type: &str) -> Result<(), StorageError> {
        let blob_path = self.blob_path(key)?;

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Some(parent) = blob_path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                let _ = fs::remove_file(&temp_path).await;
                return Err(e.into());
            }
        }

        if let Err(e) = fs::rename(&temp_path, &blob_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let blob_path = self.blob_path(key)?;
        Ok(fs::try_exists(&blob_path).await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let blob_path = self.blob_path(key)?;
        match fs::remove_file(&blob_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}
