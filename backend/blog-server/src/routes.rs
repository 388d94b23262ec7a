use crate::api::ai::assist::{assist, list_article_history, list_history};
use crate::api::articles::articles::{
    create_article, delete_article, get_article, list_articles, list_articles_by_category,
    search_articles, update_article,
};
use crate::{ApiError, AppState, health};

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Articles
        .route("/api/articles", post(create_article).get(list_articles))
        .route("/api/articles/search", get(search_articles))
        .route(
            "/api/articles/category/{category}",
            get(list_articles_by_category),
        )
        .route(
            "/api/articles/{id}",
            get(get_article)
                .put(update_article)
                .patch(update_article)
                .delete(delete_article),
        )
        // AI assist
        .route("/api/ai/assist", post(assist))
        .route("/api/ai/assist/history", get(list_history))
        .route(
            "/api/ai/assist/history/{article_id}",
            get(list_article_history),
        )
        // Earlier client builds call these paths
        .route("/api/ai-assist", post(assist))
        .route(
            "/api/ai-assist/history/{article_id}",
            get(list_article_history),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .fallback(not_found)
        .with_state(state)
        // The browser frontend is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}
