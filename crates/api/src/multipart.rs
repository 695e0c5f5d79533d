//! Decoding of the project editor's multipart submission.
//!
//! Text fields: `title`, `description`, `location`, `year`, `type`,
//! `isFeatured`. File fields: `images` (repeated, kept in part order) and
//! `video`. Presence of the text fields is checked later by the workflow so
//! the operator gets the full list of missing fields at once.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use ceral_core::category::ProjectCategory;
use ceral_core::form::ProjectForm;
use ceral_media::MediaFile;
use ceral_pipeline::UploadBatch;

use crate::config::parse_flag;
use crate::error::{AppError, AppResult};

/// Read the whole submission into an editor form and a pending upload batch.
pub async fn read_editor_submission(
    mut multipart: Multipart,
) -> AppResult<(ProjectForm, UploadBatch)> {
    let mut form = ProjectForm {
        title: String::new(),
        description: String::new(),
        year: None,
        location: String::new(),
        category: None,
        is_featured: false,
    };
    let mut batch = UploadBatch::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = field.text().await?,
            "description" => form.description = field.text().await?,
            "location" => form.location = field.text().await?,
            "year" => form.year = parse_year(&field.text().await?)?,
            "type" => form.category = parse_category(&field.text().await?)?,
            "isFeatured" => form.is_featured = parse_flag(&field.text().await?),
            "images" => {
                if let Some(file) = read_file(field).await? {
                    batch.add_images([file]);
                }
            }
            "video" => {
                if let Some(file) = read_file(field).await? {
                    batch.set_video(file);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    tracing::debug!(
        images = batch.images().len(),
        has_video = batch.video().is_some(),
        "Decoded editor submission"
    );
    Ok((form, batch))
}

/// Empty means "not filled in"; anything else must be an integer.
fn parse_year(raw: &str) -> AppResult<Option<i32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid year '{raw}'")))
}

fn parse_category(raw: &str) -> AppResult<Option<ProjectCategory>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(ProjectCategory::from_name(raw)?))
}

/// Browsers send an empty part for an untouched file input; those are skipped.
async fn read_file(field: Field<'_>) -> AppResult<Option<MediaFile>> {
    let file_name = field.file_name().unwrap_or("").to_string();
    let content_type = field
        .content_type()
        .map(str::to_string)
        .filter(|ct| ct != "application/octet-stream")
        .unwrap_or_else(|| {
            mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        });
    let bytes = field.bytes().await?;

    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(MediaFile::new(file_name, content_type, bytes.to_vec())))
}
