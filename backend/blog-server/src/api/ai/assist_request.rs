use blog_service::AssistRequest;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequestBody {
    /// Instruction for the model; blank is rejected with PROMPT_REQUIRED
    #[serde(default)]
    pub prompt: Option<String>,

    /// Current article text to improve
    #[serde(default)]
    pub article_content: Option<String>,

    #[serde(default)]
    pub article_id: Option<String>,
}

impl From<AssistRequestBody> for AssistRequest {
    fn from(body: AssistRequestBody) -> Self {
        AssistRequest {
            prompt: body.prompt.unwrap_or_default(),
            article_content: body.article_content,
            article_id: body.article_id,
        }
    }
}
