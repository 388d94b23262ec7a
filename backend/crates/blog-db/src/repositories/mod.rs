pub mod in_memory_article_repository;
pub mod in_memory_prompt_log_repository;
pub mod sqlite_article_repository;
pub mod sqlite_prompt_log_repository;
pub mod supabase_article_repository;
