use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,

    pub title: String,
    pub category: String,
    pub content: String,
    pub slug: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
