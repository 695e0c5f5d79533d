//! Detail page image carousel.
//!
//! The client keeps the current index and sends it back with each step, so
//! the server holds no per-visitor state.

use axum::extract::{Path, Query, State};
use axum::Json;
use ceral_core::gallery::GalleryNavigator;
use ceral_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryStep {
    /// Stay at `index`.
    #[default]
    Current,
    Next,
    Previous,
    /// Go to `to`.
    Jump,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub step: GalleryStep,
    pub to: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub index: usize,
    pub len: usize,
    /// URL of the image at `index`; absent for a project without images.
    pub image: Option<String>,
}

/// GET /api/v1/projects/{id}/gallery?index=&step=next|previous|jump&to=
pub async fn step(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<GalleryQuery>,
) -> AppResult<Json<GalleryResponse>> {
    let project = state.catalog.project(id).await?;
    let images = project.images;

    let mut nav = if images.is_empty() {
        GalleryNavigator::new(0)
    } else {
        GalleryNavigator::at(images.len(), query.index)?
    };

    match query.step {
        GalleryStep::Current => {}
        GalleryStep::Next => {
            nav.next();
        }
        GalleryStep::Previous => {
            nav.previous();
        }
        GalleryStep::Jump => {
            let to = query
                .to
                .ok_or_else(|| AppError::BadRequest("step=jump requires 'to'".into()))?;
            nav.jump_to(to)?;
        }
    }

    Ok(Json(GalleryResponse {
        index: nav.index(),
        len: nav.len(),
        image: nav.current(&images).cloned(),
    }))
}
