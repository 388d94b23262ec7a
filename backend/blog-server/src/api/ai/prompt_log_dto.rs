use crate::api::articles::article_dto::to_json_timestamp;

use blog_core::PromptLog;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptLogDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    pub prompt: String,
    pub response: String,
    pub created_at: String,
}

impl From<PromptLog> for PromptLogDto {
    fn from(log: PromptLog) -> Self {
        Self {
            id: log.id.to_string(),
            article_id: log.article_id,
            prompt: log.prompt,
            response: log.response,
            created_at: to_json_timestamp(log.created_at),
        }
    }
}
