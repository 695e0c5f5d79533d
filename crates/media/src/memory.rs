//! In-memory [`BlobStore`] for tests, with failure injection.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::error::StorageError;
use super::traits::{join_url, BlobStore};

#[derive(Default)]
struct State {
    blobs: BTreeMap<String, (Vec<u8>, String)>,
    put_log: Vec<String>,
    puts_before_failure: Option<usize>,
}

pub struct MemoryBlobStore {
    state: Mutex<State>,
    public_base_url: String,
    put_delay: Option<Duration>,
    delete_delay: Option<Duration>,
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new("memory://media")
    }
}

impl MemoryBlobStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            public_base_url: public_base_url.into(),
            put_delay: None,
            delete_delay: None,
        }
    }

    /// Sleep this long inside every `put`, to exercise upload timeouts.
    pub fn with_put_delay(mut self, delay: Duration) -> Self {
        self.put_delay = Some(delay);
        self
    }

    /// Sleep this long inside every `delete`.
    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = Some(delay);
        self
    }

    /// Let `puts` more uploads succeed, then fail every upload after that.
    pub fn fail_after_puts(&self, puts: usize) {
        self.state().puts_before_failure = Some(puts);
    }

    /// Keys in the order they were successfully written.
    pub fn put_log(&self) -> Vec<String> {
        self.state().put_log.clone()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.state().blobs.get(key).map(|(data, _)| data.clone())
    }

    pub fn content_type(&self, key: &str) -> Option<String> {
        self.state().blobs.get(key).map(|(_, ct)| ct.clone())
    }

    pub fn len(&self) -> usize {
        self.state().blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        if let Some(delay) = self.put_delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state();
        match state.puts_before_failure {
            Some(0) => {
                return Err(StorageError::Backend(format!(
                    "memory store refused {key}"
                )))
            }
            Some(n) => state.puts_before_failure = Some(n - 1),
            None => {}
        }
        state
            .blobs
            .insert(key.to_string(), (data.to_vec(), content_type.to_string()));
        state.put_log.push(key.to_string());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.state().blobs.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        if let Some(delay) = self.delete_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.state().blobs.remove(key).is_some())
    }

    fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}
