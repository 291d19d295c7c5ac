pub mod health;
pub mod origin;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::experience::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = origin::cors_layer(&state.config);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/generate/export", post(handlers::handle_export))
        // Guard is outermost so unlisted preflights are refused too.
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            origin::require_allowed_origin,
        ))
        .with_state(state)
}
