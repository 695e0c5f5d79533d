//! Media kinds and the blob key naming convention for project uploads.
//!
//! Keys are scoped by project id so every blob of a project shares the
//! `projects/{id}/` prefix:
//!
//! - image: `projects/{id}/image_{index}_{unix_millis}`
//! - video: `projects/{id}/video_{unix_millis}`
//!
//! The millisecond suffix keeps repeated uploads to the same slot from
//! colliding.

use std::fmt;

use crate::error::CoreError;
use crate::types::DbId;

/// Top-level prefix for all project media.
pub const PROJECTS_PREFIX: &str = "projects";

/// Kind of a project media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// MIME top-level type a file of this kind must carry.
    pub fn mime_prefix(self) -> &'static str {
        match self {
            Self::Image => "image/",
            Self::Video => "video/",
        }
    }

    /// Reject a file whose content type does not belong to this kind.
    pub fn check_content_type(self, file_name: &str, content_type: &str) -> Result<(), CoreError> {
        if content_type.starts_with(self.mime_prefix()) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "File '{file_name}' has content type '{content_type}', expected {}*",
                self.mime_prefix()
            )))
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the blob key for one upload.
///
/// `index` is the position of the file in the selection and is only part of
/// image keys; videos are single per project.
///
/// # Examples
///
/// ```
/// use ceral_core::media::{media_key, MediaKind};
///
/// assert_eq!(media_key(7, MediaKind::Image, 2, 1_700_000_000_000), "projects/7/image_2_1700000000000");
/// assert_eq!(media_key(7, MediaKind::Video, 0, 1_700_000_000_000), "projects/7/video_1700000000000");
/// ```
pub fn media_key(scope_id: DbId, kind: MediaKind, index: usize, unix_millis: i64) -> String {
    match kind {
        MediaKind::Image => format!("{PROJECTS_PREFIX}/{scope_id}/image_{index}_{unix_millis}"),
        MediaKind::Video => format!("{PROJECTS_PREFIX}/{scope_id}/video_{unix_millis}"),
    }
}

/// Prefix shared by every key of one project.
pub fn scope_prefix(scope_id: DbId) -> String {
    format!("{PROJECTS_PREFIX}/{scope_id}/")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn image_key_includes_index_and_suffix() {
        assert_eq!(
            media_key(42, MediaKind::Image, 0, 1234),
            "projects/42/image_0_1234"
        );
    }

    #[test]
    fn video_key_ignores_index() {
        assert_eq!(
            media_key(42, MediaKind::Video, 5, 1234),
            "projects/42/video_1234"
        );
    }

    #[test]
    fn keys_share_scope_prefix() {
        let key = media_key(9, MediaKind::Image, 3, 1);
        assert!(key.starts_with(&scope_prefix(9)));
        assert!(!key.starts_with(&scope_prefix(91)));
    }

    #[test]
    fn content_type_must_match_kind() {
        assert!(MediaKind::Image
            .check_content_type("a.jpg", "image/jpeg")
            .is_ok());
        assert!(MediaKind::Video
            .check_content_type("a.mp4", "video/mp4")
            .is_ok());
        assert_matches!(
            MediaKind::Image.check_content_type("a.mp4", "video/mp4"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            MediaKind::Video.check_content_type("notes.txt", "text/plain"),
            Err(CoreError::Validation(_))
        );
    }
}
