pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/failures",
            get(handlers::handle_list_failures),
        )
        .route(
            "/api/v1/sessions/:id/fields",
            patch(handlers::handle_update_field),
        )
        .route(
            "/api/v1/sessions/:id/items",
            post(handlers::handle_append_item),
        )
        .route(
            "/api/v1/sessions/:id/items/remove",
            post(handlers::handle_remove_item),
        )
        .route(
            "/api/v1/sessions/:id/items/move",
            post(handlers::handle_move_item),
        )
        .route(
            "/api/v1/sessions/:id/sections/:section/toggle",
            post(handlers::handle_toggle_section),
        )
        .route("/api/v1/sessions/:id/commit", post(handlers::handle_commit))
        .route("/api/v1/sessions/:id/preview", get(handlers::handle_preview))
        // Stateless projection
        .route(
            "/api/v1/documents",
            post(handlers::handle_project_document),
        )
        .with_state(state)
}
