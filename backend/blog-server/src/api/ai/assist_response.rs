use crate::PromptLogDto;

use blog_service::AssistOutcome;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponse {
    pub improved_content: String,
    pub prompt_log: PromptLogDto,
}

impl From<AssistOutcome> for AssistResponse {
    fn from(outcome: AssistOutcome) -> Self {
        Self {
            improved_content: outcome.improved_content,
            prompt_log: outcome.log.into(),
        }
    }
}
