pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route(
            "/api/v1/sessions",
            post(handlers::handle_create_session).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        // Sections
        .route(
            "/api/v1/sessions/:id/sections/:name",
            put(handlers::handle_edit_section),
        )
        .route(
            "/api/v1/sessions/:id/sections/:name/regenerate",
            post(handlers::handle_regenerate_section),
        )
        .route(
            "/api/v1/sessions/:id/sections/:name/reset",
            post(handlers::handle_reset_section),
        )
        // Export
        .route(
            "/api/v1/sessions/:id/export/:document/:format",
            get(handlers::handle_export),
        )
        .with_state(state)
}
