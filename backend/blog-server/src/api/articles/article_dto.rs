use blog_core::Article;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Article DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub slug: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id.to_string(),
            title: a.title,
            category: a.category,
            content: a.content,
            slug: a.slug,
            created_at: to_json_timestamp(a.created_at),
            updated_at: a.updated_at.map(to_json_timestamp),
        }
    }
}

/// `2024-05-01T08:30:00.000Z`
pub(crate) fn to_json_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
