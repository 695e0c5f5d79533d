use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
pub fn router(read_timeout: TimeoutLayer) -> Router<AppState> {
    Router::new().route("/", get(catalog::view).layer(read_timeout))
}
