//! AI-assist REST API handlers

use crate::{ApiResult, AppState, AssistRequestBody, AssistResponse, AuthUser, PromptLogDto};

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

/// POST /api/ai/assist
pub async fn assist(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<AssistRequestBody>, JsonRejection>,
) -> ApiResult<Json<AssistResponse>> {
    let Json(body) = payload?;

    let outcome = state.assistant.assist(body.into()).await?;
    log::info!(
        "AI assist {} completed for {}",
        outcome.log.id,
        user.subject()
    );

    Ok(Json(outcome.into()))
}

/// GET /api/ai/assist/history
pub async fn list_history(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<PromptLogDto>>> {
    let logs = state.assistant.history(None).await?;

    Ok(Json(logs.into_iter().map(PromptLogDto::from).collect()))
}

/// GET /api/ai/assist/history/{articleId}
pub async fn list_article_history(
    State(state): State<AppState>,
    _user: AuthUser,
    article_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<PromptLogDto>>> {
    let Path(article_id) = article_id?;

    let logs = state.assistant.history(Some(&article_id)).await?;

    Ok(Json(logs.into_iter().map(PromptLogDto::from).collect()))
}
