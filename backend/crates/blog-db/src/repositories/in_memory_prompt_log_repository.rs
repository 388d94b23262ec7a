use blog_core::{NewPromptLog, PromptLog, PromptLogRepository, Result};

use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPromptLogRepository {
    logs: RwLock<Vec<PromptLog>>,
}

impl InMemoryPromptLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptLogRepository for InMemoryPromptLogRepository {
    async fn save(&self, log: NewPromptLog) -> Result<PromptLog> {
        let log = PromptLog::new(log);
        self.logs.write().await.push(log.clone());
        Ok(log)
    }

    async fn list_by_article(&self, article_id: &str) -> Result<Vec<PromptLog>> {
        let logs = self.logs.read().await;
        Ok(logs
            .iter()
            .rev()
            .filter(|l| l.article_id.as_deref() == Some(article_id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<PromptLog>> {
        let logs = self.logs.read().await;
        Ok(logs.iter().rev().cloned().collect())
    }
}
