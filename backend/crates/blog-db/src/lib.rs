pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema_capabilities;

mod timestamp;

#[cfg(test)]
mod tests;

pub use connection::sqlite_pool::{open_sqlite_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::in_memory_article_repository::InMemoryArticleRepository;
pub use repositories::in_memory_prompt_log_repository::InMemoryPromptLogRepository;
pub use repositories::sqlite_article_repository::SqliteArticleRepository;
pub use repositories::sqlite_prompt_log_repository::SqlitePromptLogRepository;
pub use repositories::supabase_article_repository::SupabaseArticleRepository;
pub use schema_capabilities::SchemaCapabilities;
