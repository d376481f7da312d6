use axum::{routing::get, Router};

use super::types::NotFound;

/// Mounts the API routes next to `/health`. Unknown paths answer with a
/// JSON 404 rather than an empty body.
pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(router)
        .fallback(|| async { NotFound { message: "No such endpoint".into() } })
}
