use blog_core::{CompletionProvider, CoreError, Result};

use async_trait::async_trait;

/// Stand-in used when no API key is configured.
#[derive(Debug, Default)]
pub struct DisabledCompletionProvider;

#[async_trait]
impl CompletionProvider for DisabledCompletionProvider {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(CoreError::completion("AI assistance is not configured"))
    }
}
