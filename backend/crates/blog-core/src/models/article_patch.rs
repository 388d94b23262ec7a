use crate::{Article, slugify};

use chrono::{DateTime, Utc};

/// Partial update of an article. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
}

impl ArticlePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.content.is_none()
    }

    /// Slug for the new title, if the title changes.
    pub fn slug(&self) -> Option<String> {
        self.title.as_deref().map(slugify)
    }

    /// Merge the patch onto a stored article and stamp `updated_at`.
    pub fn apply_to(&self, article: &mut Article, updated_at: Option<DateTime<Utc>>) {
        if let Some(ref title) = self.title {
            article.title = title.clone();
            article.slug = slugify(title);
        }
        if let Some(ref category) = self.category {
            article.category = category.clone();
        }
        if let Some(ref content) = self.content {
            article.content = content.clone();
        }
        if updated_at.is_some() {
            article.updated_at = updated_at;
        }
    }
}
