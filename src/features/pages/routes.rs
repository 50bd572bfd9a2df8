use axum::{routing::get, Router};

use crate::features::pages::handlers;

/// Create routes for the page shells
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/reports", get(handlers::reports_page))
}
