//! Router Assembly

use axum::{handler::Handler, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{current_weather, health_check, spa_fallback};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static files (WASM frontend), falling back to the shell for client routes
    let assets = ServeDir::new(&state.config.static_dir)
        .fallback(spa_fallback.with_state(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/weather", get(current_weather))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
