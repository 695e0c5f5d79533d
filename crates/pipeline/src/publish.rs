//! Create / edit / delete workflow for project records.
//!
//! New projects are written in two phases: the record is created without
//! media so an id exists, the pending files are uploaded under that id, and
//! a follow-up update attaches the resulting URLs. A failure at any step
//! aborts the rest; nothing already written is rolled back.

use ceral_core::form::ProjectForm;
use ceral_core::media::MediaKind;
use ceral_core::types::DbId;
use ceral_db::models::project::{CreateProject, Project, UpdateProject};
use ceral_media::MediaStore;

use crate::error::PipelineError;
use crate::repository::ProjectRepository;
use crate::session::{EditorSession, UploadBatch};

/// What happens to a project's blobs when the record is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaCleanup {
    /// Leave blobs in storage.
    #[default]
    Keep,
    /// Best-effort removal of every blob the record referenced.
    Purge,
}

/// URLs produced by uploading one batch.
#[derive(Debug, Default)]
struct UploadedBatch {
    images: Vec<String>,
    video: Option<String>,
}

#[derive(Clone)]
pub struct Publisher {
    projects: ProjectRepository,
    media: MediaStore,
}

impl Publisher {
    pub fn new(projects: ProjectRepository, media: MediaStore) -> Self {
        Self { projects, media }
    }

    pub fn projects(&self) -> &ProjectRepository {
        &self.projects
    }

    pub fn media(&self) -> &MediaStore {
        &self.media
    }

    /// Submit the editor: create when the session is not editing, edit
    /// otherwise. The session is reset on success and untouched on failure,
    /// so a retry reuses the same form and files.
    pub async fn submit(&self, session: &mut EditorSession) -> Result<Project, PipelineError> {
        let project = match session.editing_id() {
            Some(id) => self.update(id, &session.form, &session.batch).await?,
            None => self.create(&session.form, &session.batch).await?,
        };
        session.reset();
        Ok(project)
    }

    /// Create path: validate, create the record, upload media, attach URLs.
    pub async fn create(
        &self,
        form: &ProjectForm,
        batch: &UploadBatch,
    ) -> Result<Project, PipelineError> {
        let fields = form.validated()?;
        batch.validate()?;

        let placeholder = self.projects.create(&CreateProject::from(fields)).await?;
        tracing::info!(project_id = placeholder.id, "Project record created");

        let uploaded = self.upload_batch(placeholder.id, batch).await?;
        let images = uploaded.images.len();
        let has_video = uploaded.video.is_some();

        let project = self
            .projects
            .update(
                placeholder.id,
                &UpdateProject::media(Some(uploaded.images), uploaded.video),
            )
            .await?;

        tracing::info!(project_id = project.id, images, has_video, "Project published");
        Ok(project)
    }

    /// Edit path: validate, upload any new media, then merge. Image and
    /// video fields are only sent when new files were uploaded, so an edit
    /// without files keeps the stored media.
    pub async fn update(
        &self,
        id: DbId,
        form: &ProjectForm,
        batch: &UploadBatch,
    ) -> Result<Project, PipelineError> {
        let fields = form.validated()?;
        batch.validate()?;

        // Fail before uploading anything under an id that does not exist.
        self.projects.get_by_id(id).await?;

        let uploaded = self.upload_batch(id, batch).await?;
        let images = uploaded.images.len();
        let has_video = uploaded.video.is_some();

        let mut changes = UpdateProject::from_fields(fields);
        if !uploaded.images.is_empty() {
            changes.images = Some(uploaded.images);
        }
        changes.video = uploaded.video;

        let project = self.projects.update(id, &changes).await?;
        tracing::info!(project_id = id, images, has_video, "Project updated");
        Ok(project)
    }

    /// Remove the record. With [`MediaCleanup::Purge`] the blobs it
    /// referenced are removed afterwards; cleanup failures are only logged.
    pub async fn delete(&self, id: DbId, cleanup: MediaCleanup) -> Result<(), PipelineError> {
        let project = match cleanup {
            MediaCleanup::Keep => None,
            MediaCleanup::Purge => Some(self.projects.get_by_id(id).await?),
        };

        self.projects.delete_by_id(id).await?;
        tracing::info!(project_id = id, "Project deleted");

        if let Some(project) = project {
            self.purge_media(&project).await;
        }
        Ok(())
    }

    /// Upload images in selection order, then the video.
    async fn upload_batch(
        &self,
        id: DbId,
        batch: &UploadBatch,
    ) -> Result<UploadedBatch, PipelineError> {
        let mut uploaded = UploadedBatch::default();

        for (index, file) in batch.images().iter().enumerate() {
            let media = self.media.upload(id, MediaKind::Image, index, file).await?;
            uploaded.images.push(media.url);
        }

        if let Some(file) = batch.video() {
            let media = self.media.upload(id, MediaKind::Video, 0, file).await?;
            uploaded.video = Some(media.url);
        }

        Ok(uploaded)
    }

    async fn purge_media(&self, project: &Project) {
        for url in project.media_urls() {
            let Some(key) = self.media.key_for_url(url) else {
                tracing::warn!(project_id = project.id, url, "Media URL not owned by this store, skipping");
                continue;
            };
            if let Err(e) = self.media.delete_by_key(key).await {
                tracing::warn!(project_id = project.id, key, error = %e, "Failed to delete project media");
            }
        }
    }
}
