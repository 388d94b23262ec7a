//! Article REST API handlers
//!
//! Reads are public. Writes require an authenticated user when auth is enabled.

use crate::{
    ApiResult, AppState, ArticleDto, AuthUser, CreateArticleRequest, SearchArticlesQuery,
    UpdateArticleRequest,
};

use blog_core::CoreError;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ArticleDto>)> {
    let Json(req) = payload?;

    let article = state.blog.add_article(req.into()).await?;
    log::info!("Article {} created by {}", article.id, user.subject());

    Ok((StatusCode::CREATED, Json(article.into())))
}

/// GET /api/articles
///
/// Newest first
pub async fn list_articles(State(state): State<AppState>) -> ApiResult<Json<Vec<ArticleDto>>> {
    let articles = state.blog.get_all_articles().await?;

    Ok(Json(articles.into_iter().map(ArticleDto::from).collect()))
}

/// GET /api/articles/search?keyword=&category=&dateFrom=&dateTo=
pub async fn search_articles(
    State(state): State<AppState>,
    query: Result<Query<SearchArticlesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ArticleDto>>> {
    let Query(query) = query?;

    let articles = state.blog.search_articles(query.into()).await?;

    Ok(Json(articles.into_iter().map(ArticleDto::from).collect()))
}

/// GET /api/articles/category/{category}
pub async fn list_articles_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<ArticleDto>>> {
    let Path(category) = category?;

    let articles = state.blog.get_by_category(&category).await?;

    Ok(Json(articles.into_iter().map(ArticleDto::from).collect()))
}

/// GET /api/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ArticleDto>> {
    let Path(id) = id?;

    let article = state
        .blog
        .get_by_id(&id)
        .await?
        .ok_or_else(CoreError::article_not_found)?;

    Ok(Json(article.into()))
}

/// PUT|PATCH /api/articles/{id}
pub async fn update_article(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> ApiResult<Json<ArticleDto>> {
    let Path(id) = id?;
    let Json(req) = payload?;

    let article = state.blog.update_article(&id, req.into()).await?;
    log::info!("Article {} updated by {}", article.id, user.subject());

    Ok(Json(article.into()))
}

/// DELETE /api/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    user: AuthUser,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;

    state.blog.delete_article(&id).await?;
    log::info!("Article {} deleted by {}", id, user.subject());

    Ok(StatusCode::NO_CONTENT)
}
