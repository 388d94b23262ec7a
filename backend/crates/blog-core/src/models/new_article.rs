use crate::slugify;

/// Validated, trimmed article fields ready to be persisted.
///
/// Only [`crate::ArticleRules`] constructs these, so every repository can
/// assume the fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl NewArticle {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}
