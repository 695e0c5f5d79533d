use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed blob storage with publicly fetchable URLs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under `key`, replacing any previous blob with that key.
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Durable public URL for `key`. Does not check that the blob exists.
    fn public_url(&self, key: &str) -> String;

    /// Check whether a blob exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Delete a blob by key.
    ///
    /// Returns `true` if the blob was deleted, `false` if it did not exist.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Prefix every URL from [`BlobStore::public_url`] starts with.
    fn public_base_url(&self) -> &str;
}

/// Join a base URL and a key with exactly one slash between them.
pub(crate) fn join_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalises_slashes() {
        assert_eq!(join_url("http://h/media/", "/projects/1/a"), "http://h/media/projects/1/a");
        assert_eq!(join_url("http://h/media", "projects/1/a"), "http://h/media/projects/1/a");
    }
}
