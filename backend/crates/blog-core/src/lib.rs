pub mod error;
pub mod models;
pub mod ports;
pub mod slug;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result, StorageCode, ValidationCode};
pub use error_location::ErrorLocation;
pub use models::article::Article;
pub use models::article_draft::ArticleDraft;
pub use models::article_patch::ArticlePatch;
pub use models::new_article::NewArticle;
pub use models::prompt_log::{NewPromptLog, PromptLog};
pub use models::search_filters::SearchFilters;
pub use ports::article_repository::ArticleRepository;
pub use ports::completion_provider::CompletionProvider;
pub use ports::prompt_log_repository::PromptLogRepository;
pub use slug::slugify;
pub use validation::article_rules::{
    ArticleRules, DEFAULT_MAX_CATEGORY_LENGTH, DEFAULT_MAX_TITLE_LENGTH,
};
