//! Project repository with bounded call time and not-found semantics.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ceral_core::types::DbId;
use ceral_db::models::project::{CreateProject, Project, UpdateProject};
use ceral_db::store::{ProjectStore, StoreError};

use crate::error::PipelineError;

/// Default bound on a single document-store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// CRUD over project records. Every call is bounded by `timeout`; absent ids
/// surface as [`PipelineError::NotFound`].
#[derive(Clone)]
pub struct ProjectRepository {
    store: Arc<dyn ProjectStore>,
    timeout: Duration,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn ProjectStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        &self.store
    }

    /// Persist a new record; the store assigns `id` and `created_at`.
    pub async fn create(&self, input: &CreateProject) -> Result<Project, PipelineError> {
        self.bounded("create", self.store.create(input)).await
    }

    /// Every record, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<Project>, PipelineError> {
        self.bounded("list", self.store.list()).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Project, PipelineError> {
        self.bounded("find_by_id", self.store.find_by_id(id))
            .await?
            .ok_or(PipelineError::NotFound { id })
    }

    /// Merge the present fields of `input`; absent fields stay as stored.
    pub async fn update(&self, id: DbId, input: &UpdateProject) -> Result<Project, PipelineError> {
        self.bounded("update", self.store.update(id, input))
            .await?
            .ok_or(PipelineError::NotFound { id })
    }

    pub async fn delete_by_id(&self, id: DbId) -> Result<(), PipelineError> {
        if self.bounded("delete", self.store.delete(id)).await? {
            Ok(())
        } else {
            Err(PipelineError::NotFound { id })
        }
    }

    pub async fn health_check(&self) -> Result<(), PipelineError> {
        self.bounded("health_check", self.store.health_check()).await
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, PipelineError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(PipelineError::Persistence(format!("{operation}: {err}"))),
            Err(_) => Err(PipelineError::Persistence(format!(
                "{operation} timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use ceral_core::category::ProjectCategory;
    use ceral_db::memory::MemoryProjectStore;

    use super::*;

    fn input() -> CreateProject {
        CreateProject {
            title: "Sahil Bandı".into(),
            description: "d".into(),
            year: 2022,
            location: "Antalya".into(),
            category: ProjectCategory::Public,
            is_featured: true,
        }
    }

    fn repo(store: Arc<MemoryProjectStore>) -> ProjectRepository {
        ProjectRepository::new(store, DEFAULT_STORE_TIMEOUT)
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = repo(Arc::new(MemoryProjectStore::new()));
        assert_matches!(repo.get_by_id(7).await, Err(PipelineError::NotFound { id: 7 }));
        assert_matches!(
            repo.update(7, &UpdateProject::default()).await,
            Err(PipelineError::NotFound { id: 7 })
        );
        assert_matches!(repo.delete_by_id(7).await, Err(PipelineError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn store_failures_become_persistence_errors() {
        let store = Arc::new(MemoryProjectStore::new());
        store.set_failing(true);
        let repo = repo(store);
        assert_matches!(repo.create(&input()).await, Err(PipelineError::Persistence(_)));
        assert_matches!(repo.list_all().await, Err(PipelineError::Persistence(_)));
    }

    #[tokio::test]
    async fn create_then_read_back() {
        let repo = repo(Arc::new(MemoryProjectStore::new()));
        let created = repo.create(&input()).await.unwrap();
        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
        repo.delete_by_id(created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
