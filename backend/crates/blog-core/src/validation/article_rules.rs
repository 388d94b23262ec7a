use crate::{ArticleDraft, ArticlePatch, CoreError, NewArticle, Result, ValidationCode};

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_CATEGORY_LENGTH: usize = 50;

/// Length limits and required-field checks applied to article input.
///
/// Lengths are counted in characters, after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleRules {
    pub max_title_length: usize,
    pub max_category_length: usize,
}

impl Default for ArticleRules {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_category_length: DEFAULT_MAX_CATEGORY_LENGTH,
        }
    }
}

impl ArticleRules {
    pub fn new(max_title_length: usize, max_category_length: usize) -> Self {
        Self {
            max_title_length,
            max_category_length,
        }
    }

    /// Trim and check a full draft. Fields are checked in title, category,
    /// content order and the first failure wins.
    pub fn validate_draft(&self, draft: &ArticleDraft) -> Result<NewArticle> {
        let title = self.title(&draft.title)?;
        let category = self.category(&draft.category)?;
        let content = required(&draft.content, ValidationCode::ContentRequired, "content")?;

        Ok(NewArticle {
            title,
            category,
            content,
        })
    }

    /// Trim and check only the fields present in the patch.
    pub fn validate_patch(&self, patch: &ArticlePatch) -> Result<ArticlePatch> {
        let title = patch.title.as_deref().map(|t| self.title(t)).transpose()?;
        let category = patch
            .category
            .as_deref()
            .map(|c| self.category(c))
            .transpose()?;
        let content = patch
            .content
            .as_deref()
            .map(|c| required(c, ValidationCode::ContentRequired, "content"))
            .transpose()?;

        Ok(ArticlePatch {
            title,
            category,
            content,
        })
    }

    fn title(&self, raw: &str) -> Result<String> {
        let title = required(raw, ValidationCode::TitleRequired, "title")?;
        if title.chars().count() > self.max_title_length {
            return Err(CoreError::field(
                ValidationCode::TitleTooLong,
                "title",
                format!("Title must be at most {} characters", self.max_title_length),
            ));
        }
        Ok(title)
    }

    fn category(&self, raw: &str) -> Result<String> {
        let category = required(raw, ValidationCode::CategoryRequired, "category")?;
        if category.chars().count() > self.max_category_length {
            return Err(CoreError::field(
                ValidationCode::CategoryTooLong,
                "category",
                format!(
                    "Category must be at most {} characters",
                    self.max_category_length
                ),
            ));
        }
        Ok(category)
    }
}

#[track_caller]
fn required(raw: &str, code: ValidationCode, field: &'static str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::field(code, field, format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
