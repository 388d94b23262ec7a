pub mod article_repository;
pub mod completion_provider;
pub mod prompt_log_repository;
