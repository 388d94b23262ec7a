pub mod article;
pub mod article_draft;
pub mod article_patch;
pub mod new_article;
pub mod prompt_log;
pub mod search_filters;
