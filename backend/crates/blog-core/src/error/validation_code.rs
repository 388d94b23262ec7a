use std::fmt;

/// Client-input problems, reported as 4xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    TitleRequired,
    CategoryRequired,
    ContentRequired,
    TitleTooLong,
    CategoryTooLong,
    IdRequired,
    ArticleNotFound,
    SlugTaken,
    PromptRequired,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::CategoryRequired => "CATEGORY_REQUIRED",
            Self::ContentRequired => "CONTENT_REQUIRED",
            Self::TitleTooLong => "TITLE_TOO_LONG",
            Self::CategoryTooLong => "CATEGORY_TOO_LONG",
            Self::IdRequired => "ID_REQUIRED",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::SlugTaken => "SLUG_TAKEN",
            Self::PromptRequired => "PROMPT_REQUIRED",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
