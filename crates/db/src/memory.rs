//! In-memory [`ProjectStore`] for tests.
//!
//! Behaves like the PostgreSQL store (ids from 1, newest-first listing,
//! COALESCE-style updates) and can be switched into a failing mode to
//! exercise persistence errors.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use ceral_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{ProjectStore, StoreError};

#[derive(Default)]
pub struct MemoryProjectStore {
    rows: Mutex<Vec<Project>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    fail_after_creates: Mutex<Option<usize>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let `creates` more creates succeed, then fail every call after that.
    pub fn fail_after_creates(&self, creates: usize) {
        *self
            .fail_after_creates
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(creates);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Project>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("memory store set to fail".into())
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        self.check_available()?;
        {
            let mut budget = self
                .fail_after_creates
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match *budget {
                Some(0) => {
                    *budget = None;
                    self.set_failing(true);
                    return Err(unavailable());
                }
                Some(1) => {
                    // This create succeeds; everything after it fails.
                    *budget = None;
                    self.set_failing(true);
                }
                Some(remaining) => *budget = Some(remaining - 1),
                None => {}
            }
        }

        let now = chrono::Utc::now();
        let project = Project {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: input.title.clone(),
            description: input.description.clone(),
            year: input.year,
            location: input.location.clone(),
            category: input.category,
            is_featured: input.is_featured,
            images: Vec::new(),
            video: None,
            created_at: now,
            updated_at: now,
        };
        self.rows().push(project.clone());
        Ok(project)
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.check_available()?;
        let mut rows = self.rows().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        self.check_available()?;
        Ok(self.rows().iter().find(|p| p.id == id).cloned())
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        self.check_available()?;
        let mut rows = self.rows();
        let Some(project) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &input.title {
            project.title = title.clone();
        }
        if let Some(description) = &input.description {
            project.description = description.clone();
        }
        if let Some(year) = input.year {
            project.year = year;
        }
        if let Some(location) = &input.location {
            project.location = location.clone();
        }
        if let Some(category) = input.category {
            project.category = category;
        }
        if let Some(is_featured) = input.is_featured {
            project.is_featured = is_featured;
        }
        if let Some(images) = &input.images {
            project.images = images.clone();
        }
        if let Some(video) = &input.video {
            project.video = Some(video.clone());
        }
        project.updated_at = chrono::Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
