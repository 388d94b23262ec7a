use blog_core::ArticleDraft;

use serde::Deserialize;

/// Missing fields deserialize as empty and are rejected by the service.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<CreateArticleRequest> for ArticleDraft {
    fn from(req: CreateArticleRequest) -> Self {
        ArticleDraft::new(
            req.title.unwrap_or_default(),
            req.category.unwrap_or_default(),
            req.content.unwrap_or_default(),
        )
    }
}
