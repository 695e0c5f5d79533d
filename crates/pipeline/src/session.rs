//! Operator-side editor state: the form plus the files picked for upload.

use ceral_core::form::ProjectForm;
use ceral_core::media::MediaKind;
use ceral_core::types::DbId;
use ceral_db::models::project::Project;
use ceral_media::MediaFile;

use crate::error::PipelineError;

/// Files selected in the editor but not yet uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadBatch {
    images: Vec<MediaFile>,
    video: Option<MediaFile>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the image selection, keeping selection order.
    pub fn add_images(&mut self, files: impl IntoIterator<Item = MediaFile>) {
        self.images.extend(files);
    }

    /// Drop the pending image at `index`. Out of range is a no-op.
    pub fn remove_image(&mut self, index: usize) -> Option<MediaFile> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Select the video, replacing any earlier pick.
    pub fn set_video(&mut self, file: MediaFile) {
        self.video = Some(file);
    }

    pub fn clear_video(&mut self) -> Option<MediaFile> {
        self.video.take()
    }

    pub fn images(&self) -> &[MediaFile] {
        &self.images
    }

    pub fn video(&self) -> Option<&MediaFile> {
        self.video.as_ref()
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.video = None;
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.video.is_none()
    }

    /// Images must be `image/*` and the video `video/*`.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for file in &self.images {
            MediaKind::Image.check_content_type(&file.file_name, &file.content_type)?;
        }
        if let Some(file) = &self.video {
            MediaKind::Video.check_content_type(&file.file_name, &file.content_type)?;
        }
        Ok(())
    }
}

/// One editor: create mode when `editing_id` is `None`, edit mode otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    pub form: ProjectForm,
    pub batch: UploadBatch,
    editing_id: Option<DbId>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already editing record `id`.
    pub fn editing(id: DbId, form: ProjectForm, batch: UploadBatch) -> Self {
        Self {
            form,
            batch,
            editing_id: Some(id),
        }
    }

    /// Load `project` into the form. Pending files are dropped; the stored
    /// media stays on the record until new files replace it.
    pub fn begin_edit(&mut self, project: &Project) {
        self.form = ProjectForm::from_fields(project.fields());
        self.batch.clear();
        self.editing_id = Some(project.id);
    }

    pub fn editing_id(&self) -> Option<DbId> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Abandon the edit and return to an empty create form.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Back to defaults: empty form, no pending files, create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
