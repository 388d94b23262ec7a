use std::fmt;

/// Infrastructure failures, tagged with the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCode {
    InsertFailed,
    SelectFailed,
    UpdateFailed,
    DeleteFailed,
    SearchFailed,
    PromptLogFailed,
}

impl StorageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsertFailed => "DB_INSERT_FAILED",
            Self::SelectFailed => "DB_SELECT_FAILED",
            Self::UpdateFailed => "DB_UPDATE_FAILED",
            Self::DeleteFailed => "DB_DELETE_FAILED",
            Self::SearchFailed => "DB_SEARCH_FAILED",
            Self::PromptLogFailed => "PROMPT_LOG_FAILED",
        }
    }
}

impl fmt::Display for StorageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
