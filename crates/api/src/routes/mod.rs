pub mod catalog;
pub mod health;
pub mod project;

use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                          list, create (multipart)
/// /projects/{id}                     get, update (multipart), delete
/// /projects/{id}/gallery             carousel step
///
/// /catalog                           filtered, featured/regular split
/// ```
///
/// `read_timeout` wraps the GET handlers only. Create, update and delete
/// run the publish workflow, whose store and blob calls carry their own
/// bounds and report expiry through the JSON error body.
pub fn api_routes(read_timeout: TimeoutLayer) -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router(read_timeout.clone()))
        .nest("/catalog", catalog::router(read_timeout))
}
