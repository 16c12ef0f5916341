pub mod form;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_page))
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/posts", post(handlers::handle_generate_post))
        .route("/api/v1/carousels", post(handlers::handle_generate_carousel))
        .with_state(state)
}
