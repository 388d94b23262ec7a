use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One AI-assist request/response pair. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptLog {
    pub id: Uuid,
    pub article_id: Option<String>,

    pub prompt: String,
    pub response: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromptLog {
    pub article_id: Option<String>,
    pub prompt: String,
    pub response: String,
}

impl PromptLog {
    pub fn new(log: NewPromptLog) -> Self {
        Self {
            id: Uuid::new_v4(),
            article_id: log.article_id,
            prompt: log.prompt,
            response: log.response,
            created_at: Utc::now(),
        }
    }
}
