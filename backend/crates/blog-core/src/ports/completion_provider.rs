use crate::Result;

use async_trait::async_trait;

/// A text-completion backend. Failures surface as `COMPLETION_FAILED`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
