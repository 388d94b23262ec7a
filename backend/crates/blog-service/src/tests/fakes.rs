use blog_core::{
    Article, ArticlePatch, ArticleRepository, CompletionProvider, CoreError, NewArticle,
    NewPromptLog, PromptLog, PromptLogRepository, Result, SearchFilters, StorageCode,
};

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

/// Returns a canned completion and remembers the prompts it saw.
pub struct ScriptedProvider {
    pub reply: Result<String>,
    pub seen: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(CoreError::completion(message)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.seen.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(err) => Err(CoreError::completion(err.message())),
        }
    }
}

/// Prompt-log store whose writes always fail.
pub struct BrokenPromptLogs;

#[async_trait]
impl PromptLogRepository for BrokenPromptLogs {
    async fn save(&self, _log: NewPromptLog) -> Result<PromptLog> {
        Err(CoreError::storage(StorageCode::PromptLogFailed, "disk full"))
    }

    async fn list_by_article(&self, _article_id: &str) -> Result<Vec<PromptLog>> {
        Ok(Vec::new())
    }

    async fn list_all(&self) -> Result<Vec<PromptLog>> {
        Ok(Vec::new())
    }
}

/// Article store whose every call fails.
pub struct BrokenArticles;

#[async_trait]
impl ArticleRepository for BrokenArticles {
    async fn save(&self, _article: NewArticle) -> Result<Article> {
        Err(CoreError::storage(StorageCode::InsertFailed, "connection reset"))
    }

    async fn get_all(&self) -> Result<Vec<Article>> {
        Err(CoreError::storage(StorageCode::SelectFailed, "connection reset"))
    }

    async fn get_by_category(&self, _category: &str) -> Result<Vec<Article>> {
        panic!("blank categories must not reach the repository")
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Article>> {
        Err(CoreError::storage(StorageCode::SelectFailed, "connection reset"))
    }

    async fn update(&self, _id: Uuid, _patch: ArticlePatch) -> Result<Article> {
        Err(CoreError::storage(StorageCode::UpdateFailed, "connection reset"))
    }

    async fn search(&self, _filters: &SearchFilters) -> Result<Vec<Article>> {
        Err(CoreError::storage(StorageCode::SearchFailed, "connection reset"))
    }

    async fn delete(&self, _id: Uuid) -> Result<bool> {
        Err(CoreError::storage(StorageCode::DeleteFailed, "connection reset"))
    }
}
