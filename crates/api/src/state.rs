use std::sync::Arc;
use std::time::Duration;

use ceral_db::store::ProjectStore;
use ceral_media::{BlobStore, MediaStore};
use ceral_pipeline::{Catalog, MediaCleanup, ProjectRepository, Publisher};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every member is an `Arc` or wraps one.
#[derive(Clone)]
pub struct AppState {
    /// Create / edit / delete workflow.
    pub publisher: Publisher,
    /// Visitor-facing read side.
    pub catalog: Catalog,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        blobs: Arc<dyn BlobStore>,
        config: ServerConfig,
        upload_timeout: Duration,
    ) -> Self {
        let projects = ProjectRepository::new(store, config.store_timeout());
        let media = MediaStore::new(blobs, upload_timeout);
        Self {
            publisher: Publisher::new(projects.clone(), media),
            catalog: Catalog::new(projects),
            config: Arc::new(config),
        }
    }

    pub fn projects(&self) -> &ProjectRepository {
        self.publisher.projects()
    }

    /// Cleanup policy applied by `DELETE /projects/{id}`.
    pub fn media_cleanup(&self) -> MediaCleanup {
        if self.config.purge_media_on_delete {
            MediaCleanup::Purge
        } else {
            MediaCleanup::Keep
        }
    }
}
