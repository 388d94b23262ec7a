mod storage_code;
mod validation_code;

pub use storage_code::StorageCode;
pub use validation_code::ValidationCode;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error [{code}]: {message} {location}")]
    Validation {
        code: ValidationCode,
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    #[error("Storage error [{code}]: {message} {location}")]
    Storage {
        code: StorageCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Completion provider error: {message} {location}")]
    Completion {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error tied to a request field.
    #[track_caller]
    pub fn field<S: Into<String>>(code: ValidationCode, field: &'static str, message: S) -> Self {
        CoreError::Validation {
            code,
            message: message.into(),
            field: Some(field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error that is not tied to a single field.
    #[track_caller]
    pub fn validation<S: Into<String>>(code: ValidationCode, message: S) -> Self {
        CoreError::Validation {
            code,
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn article_not_found() -> Self {
        Self::validation(
            ValidationCode::ArticleNotFound,
            "The requested article does not exist",
        )
    }

    #[track_caller]
    pub fn slug_taken<S: AsRef<str>>(slug: S) -> Self {
        Self::field(
            ValidationCode::SlugTaken,
            "title",
            format!("An article with slug '{}' already exists", slug.as_ref()),
        )
    }

    /// Create a storage error carrying the backing store's message.
    #[track_caller]
    pub fn storage<S: Into<String>>(code: StorageCode, message: S) -> Self {
        CoreError::Storage {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn completion<S: Into<String>>(message: S) -> Self {
        CoreError::Completion {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => code.as_str(),
            Self::Storage { code, .. } => code.as_str(),
            Self::Completion { .. } => "COMPLETION_FAILED",
        }
    }

    /// Human-readable message without the source location.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Storage { message, .. }
            | Self::Completion { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Validation {
                code: ValidationCode::ArticleNotFound,
                ..
            }
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
