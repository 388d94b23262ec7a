use blog_core::{CoreError, NewArticle, ValidationCode};

/// Creates a validated article with the given title
pub fn create_test_article(title: &str, category: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        category: category.to_string(),
        content: format!("Content of {title}"),
    }
}

pub fn validation_code(err: CoreError) -> ValidationCode {
    match err {
        CoreError::Validation { code, .. } => code,
        other => panic!("expected validation error, got {other:?}"),
    }
}
