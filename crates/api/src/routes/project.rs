//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::{gallery, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/gallery    -> gallery step
/// ```
///
/// Only the GET handlers sit behind `read_timeout`; a method router's
/// `layer` wraps the handlers registered before it.
pub fn router(read_timeout: TimeoutLayer) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::list)
                .layer(read_timeout.clone())
                .post(project::create),
        )
        .route(
            "/{id}",
            get(project::get_by_id)
                .layer(read_timeout.clone())
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/gallery", get(gallery::step).layer(read_timeout))
}
