// src/app.rs
use axum::{routing::get, Router};
use http::{header, Method};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::routes;
use crate::state::AppState;

pub fn build(db_pool: PgPool) -> Router {
    let state = AppState::new(db_pool);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .merge(routes::create_router())
        .route("/", get(|| async { "Products API" }))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
