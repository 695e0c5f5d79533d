//! Handlers for the `/projects` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use ceral_core::types::DbId;
use ceral_db::models::project::Project;

use crate::error::AppResult;
use crate::multipart::read_editor_submission;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Create path of the publication workflow: the record is written first,
/// then the submitted files are uploaded under its id and attached.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Project>)> {
    let (form, batch) = read_editor_submission(multipart).await?;
    let project = state.publisher.create(&form, &batch).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects().list_all().await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = state.projects().get_by_id(id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Submitting no files keeps the stored media; submitted images replace
/// the whole image list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Project>> {
    let (form, batch) = read_editor_submission(multipart).await?;
    let project = state.publisher.update(id, &form, &batch).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.publisher.delete(id, state.media_cleanup()).await?;
    Ok(StatusCode::NO_CONTENT)
}
