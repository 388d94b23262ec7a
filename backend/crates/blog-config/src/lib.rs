mod ai_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;
mod supabase_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use ai_config::AiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::{StorageBackend, StorageConfig};
pub use supabase_config::SupabaseConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "BLOG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".blog";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "blog.db";

// Auth
const DEFAULT_AUTH_ENABLED: bool = true;
const DEFAULT_JWT_AUDIENCE: &str = "authenticated";
const MIN_JWT_SECRET_LENGTH: usize = 32;

// AI
const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_AI_TEMPERATURE: f64 = 0.7;
const MIN_AI_TEMPERATURE: f64 = 0.0;
const MAX_AI_TEMPERATURE: f64 = 2.0;
const DEFAULT_AI_MAX_TOKENS: u32 = 2000;
const MIN_AI_MAX_TOKENS: u32 = 1;
const MAX_AI_MAX_TOKENS: u32 = 32_000;
const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
const MIN_AI_TIMEOUT_SECS: u64 = 1;
const MAX_AI_TIMEOUT_SECS: u64 = 300;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Validation
const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
const MIN_MAX_TITLE_LENGTH: usize = 1;
const MAX_MAX_TITLE_LENGTH: usize = 500;
const DEFAULT_MAX_CATEGORY_LENGTH: usize = 50;
const MIN_MAX_CATEGORY_LENGTH: usize = 1;
const MAX_MAX_CATEGORY_LENGTH: usize = 200;
