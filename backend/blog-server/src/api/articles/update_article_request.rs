use blog_core::ArticlePatch;

use serde::Deserialize;

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdateArticleRequest> for ArticlePatch {
    fn from(req: UpdateArticleRequest) -> Self {
        ArticlePatch {
            title: req.title,
            category: req.category,
            content: req.content,
        }
    }
}
