use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::get_news))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/rewrite", post(handlers::rewrite_content))
        .route("/api/cache/refresh", post(handlers::refresh_cache))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use sn_core::{Article, Error, Result};
}
