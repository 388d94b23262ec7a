pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    ai::{
        assist::{assist, list_article_history, list_history},
        assist_request::AssistRequestBody,
        assist_response::AssistResponse,
        prompt_log_dto::PromptLogDto,
    },
    articles::{
        article_dto::ArticleDto,
        articles::{
            create_article, delete_article, get_article, list_articles, list_articles_by_category,
            search_articles, update_article,
        },
        create_article_request::CreateArticleRequest,
        search_articles_query::SearchArticlesQuery,
        update_article_request::UpdateArticleRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
};
pub use app_state::AppState;
pub use bootstrap::build_app_state;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
