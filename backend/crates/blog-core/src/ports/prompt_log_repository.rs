use crate::{NewPromptLog, PromptLog, Result};

use async_trait::async_trait;

/// Append-only store of AI-assist exchanges. Lists are newest first.
#[async_trait]
pub trait PromptLogRepository: Send + Sync {
    async fn save(&self, log: NewPromptLog) -> Result<PromptLog>;

    async fn list_by_article(&self, article_id: &str) -> Result<Vec<PromptLog>>;

    async fn list_all(&self) -> Result<Vec<PromptLog>>;
}
