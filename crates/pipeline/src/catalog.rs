//! Visitor-facing catalog, reloaded from the repository on every view.

use ceral_core::catalog::CatalogView;
use ceral_core::category::CategoryFilter;
use ceral_core::types::DbId;
use ceral_db::models::project::Project;

use crate::error::PipelineError;
use crate::repository::ProjectRepository;

#[derive(Clone)]
pub struct Catalog {
    projects: ProjectRepository,
}

impl Catalog {
    pub fn new(projects: ProjectRepository) -> Self {
        Self { projects }
    }

    /// All projects, most recently created first.
    pub async fn load(&self) -> Result<Vec<Project>, PipelineError> {
        self.projects.list_all().await
    }

    /// Load, filter by category and split into featured and regular.
    pub async fn view(&self, filter: CategoryFilter) -> Result<CatalogView<Project>, PipelineError> {
        let projects = self.load().await?;
        let view = CatalogView::build(projects, filter);
        tracing::debug!(
            ?filter,
            featured = view.featured.len(),
            regular = view.regular.len(),
            "Catalog view built"
        );
        Ok(view)
    }

    /// One project for its detail page.
    pub async fn project(&self, id: DbId) -> Result<Project, PipelineError> {
        self.projects.get_by_id(id).await
    }
}
