//! Document-store seam for projects.
//!
//! The workflow and catalog only see [`ProjectStore`]. [`PgProjectStore`] is
//! the production backend; the `test-support` feature adds an in-memory one.

use async_trait::async_trait;
use ceral_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Failure talking to the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// CRUD over project records.
///
/// Lookups by id report absence as `Ok(None)` / `Ok(false)`; turning that
/// into a not-found error is the caller's concern.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persist a new record; the store assigns `id` and `created_at`.
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError>;

    /// Every record, most recently created first.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    /// Merge the present fields of `input` into the record.
    async fn update(&self, id: DbId, input: &UpdateProject)
        -> Result<Option<Project>, StoreError>;

    /// Remove the record. Returns `false` if it did not exist.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ProjectStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
