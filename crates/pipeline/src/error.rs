use ceral_core::error::CoreError;
use ceral_core::types::DbId;
use ceral_media::StorageError;

/// Message shown to the operator for any transport or storage failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

/// Failure of one workflow step. The first failing step aborts the rest of
/// the submission; nothing already written is rolled back.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Required field missing or malformed; raised before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A file transfer to blob storage failed or timed out.
    #[error("Upload failed: {0}")]
    Upload(#[from] StorageError),

    /// The document store failed, was unreachable, or timed out.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Edit or delete targeted an id that does not exist.
    #[error("Project with id {id} not found")]
    NotFound { id: DbId },
}

impl PipelineError {
    /// Text safe to show the operator. Validation detail is shown inline;
    /// transport failures collapse into one generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::NotFound { id } => format!("Project with id {id} not found"),
            Self::Upload(_) | Self::Persistence(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<CoreError> for PipelineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::NotFound { id, .. } => Self::NotFound { id },
            CoreError::Internal(msg) => Self::Persistence(msg),
        }
    }
}
