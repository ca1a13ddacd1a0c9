use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use sn_core::mix::mix;
use sn_core::Category;

use crate::AppState;

#[derive(Deserialize)]
pub struct NewsQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct RewriteRequest {
    content: Option<String>,
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> impl IntoResponse {
    let category = match query.category.as_deref().map(str::parse::<Category>) {
        None => None,
        Some(Ok(category)) => Some(category),
        Some(Err(e)) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    match state.pipeline.articles(category).await {
        Ok(articles) => {
            // The mixed view only makes sense across categories.
            let articles = if category.is_none() {
                mix(articles)
            } else {
                articles
            };
            Json(json!({ "articles": articles })).into_response()
        }
        Err(e) => {
            error!("failed to load articles: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Fehler beim Laden der News" })),
            )
                .into_response()
        }
    }
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.pipeline.article(&id).await {
        Ok(Some(detail)) => Json(json!({
            "article": detail.article,
            "content": detail.content,
        }))
        .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Artikel nicht gefunden" })),
        )
            .into_response(),
        Err(e) => {
            error!("failed to load article {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Fehler beim Laden des Artikels" })),
            )
                .into_response()
        }
    }
}

pub async fn rewrite_content(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RewriteRequest>,
) -> impl IntoResponse {
    let Some(content) = request.content.filter(|c| !c.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Kein Content angegeben" })),
        )
            .into_response();
    };

    match state.pipeline.rewrite_content(&content).await {
        Ok(rewritten) => Json(json!({ "content": rewritten })).into_response(),
        Err(e) => {
            error!("rewrite failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Fehler beim Umschreiben" })),
            )
                .into_response()
        }
    }
}

pub async fn refresh_cache(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cleared = state.pipeline.clear_feed_cache().await;
    Json(json!({
        "success": true,
        "message": format!("{} Feed-Caches gelöscht", cleared.len()),
        "cleared": cleared,
    }))
    .into_response()
}
