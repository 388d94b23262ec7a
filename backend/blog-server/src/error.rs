use blog_core::CoreError;
use blog_db::DbError;

use thiserror::Error;

/// Failures while starting the server. Request failures use [`crate::ApiError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] blog_config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),

    #[error("Completion provider error: {0}")]
    Completion(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Startup error: {message}")]
    Startup { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
