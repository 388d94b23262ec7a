/// Raw, unvalidated article input as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            content: content.into(),
        }
    }
}
