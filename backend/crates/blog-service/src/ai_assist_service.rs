use blog_core::{
    CompletionProvider, CoreError, NewPromptLog, PromptLog, PromptLogRepository, Result,
    ValidationCode,
};

use std::sync::Arc;

use log::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct AssistRequest {
    pub prompt: String,
    pub article_content: Option<String>,
    pub article_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssistOutcome {
    pub improved_content: String,
    pub original_prompt: String,
    pub raw_response: String,
    pub log: PromptLog,
}

/// Forwards prompts to a completion provider and records each exchange.
pub struct AiAssistService {
    logs: Arc<dyn PromptLogRepository>,
    provider: Arc<dyn CompletionProvider>,
}

impl AiAssistService {
    pub fn new(logs: Arc<dyn PromptLogRepository>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { logs, provider }
    }

    pub async fn assist(&self, request: AssistRequest) -> Result<AssistOutcome> {
        if request.prompt.trim().is_empty() {
            return Err(CoreError::field(
                ValidationCode::PromptRequired,
                "prompt",
                "Prompt is required",
            ));
        }

        let full_prompt = compose_prompt(&request.prompt, request.article_content.as_deref());
        debug!("Sending {} prompt characters to completion provider", full_prompt.len());

        let raw_response = self.provider.complete(&full_prompt).await?;
        let improved_content = raw_response.trim().to_string();

        let log = self
            .logs
            .save(NewPromptLog {
                article_id: request.article_id,
                prompt: request.prompt.clone(),
                response: improved_content.clone(),
            })
            .await?;

        info!("AI assist completed, prompt log {}", log.id);

        Ok(AssistOutcome {
            improved_content,
            original_prompt: request.prompt,
            raw_response,
            log,
        })
    }

    /// Prompt logs for one article, or every log when `article_id` is `None`.
    pub async fn history(&self, article_id: Option<&str>) -> Result<Vec<PromptLog>> {
        match article_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.logs.list_by_article(id).await,
            None => self.logs.list_all().await,
        }
    }
}

fn compose_prompt(prompt: &str, article_content: Option<&str>) -> String {
    match article_content.filter(|c| !c.trim().is_empty()) {
        Some(content) => format!(
            "Given the existing article content below, improve it according to the instruction.\n\
             Instruction: {prompt}\n\
             ---\n\
             CONTENT:\n\
             {content}"
        ),
        None => prompt.to_string(),
    }
}
