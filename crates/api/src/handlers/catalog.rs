use axum::extract::{Query, State};
use axum::Json;
use ceral_core::catalog::CatalogView;
use ceral_core::category::{CategoryFilter, FILTER_ALL};
use ceral_db::models::project::Project;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// `all` or a category name (default: `all`).
    pub category: Option<String>,
}

/// GET /api/v1/catalog?category=
pub async fn view(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<CatalogView<Project>>> {
    let filter = CategoryFilter::parse(query.category.as_deref().unwrap_or(FILTER_ALL))?;
    let view = state.catalog.view(filter).await?;
    Ok(Json(view))
}
