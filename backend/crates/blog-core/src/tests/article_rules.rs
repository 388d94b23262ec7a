use crate::{ArticleDraft, ArticlePatch, ArticleRules, CoreError, ValidationCode};

use googletest::prelude::*;

fn code_of(err: CoreError) -> ValidationCode {
    match err {
        CoreError::Validation { code, .. } => code,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_draft_when_validated_then_fields_trimmed() {
    // Given
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("  New Article ", " news ", "\tbody\n");

    // When
    let article = rules.validate_draft(&draft).unwrap();

    // Then
    assert_that!(article.title, eq("New Article"));
    assert_that!(article.category, eq("news"));
    assert_that!(article.content, eq("body"));
    assert_that!(article.slug(), eq("new-article"));
}

#[test]
fn given_blank_title_when_validated_then_title_required() {
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("   ", "", "");

    let err = rules.validate_draft(&draft).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::TitleRequired));
}

#[test]
fn given_blank_category_when_validated_then_category_required() {
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("Title", " ", "");

    let err = rules.validate_draft(&draft).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::CategoryRequired));
}

#[test]
fn given_blank_content_when_validated_then_content_required() {
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("Title", "news", "  \n ");

    let err = rules.validate_draft(&draft).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::ContentRequired));
}

#[test]
fn given_title_over_limit_when_validated_then_title_too_long() {
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("x".repeat(201), "news", "body");

    let err = rules.validate_draft(&draft).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::TitleTooLong));
}

#[test]
fn given_title_at_limit_when_validated_then_accepted() {
    let rules = ArticleRules::default();
    let draft = ArticleDraft::new("x".repeat(200), "news", "body");

    assert_that!(rules.validate_draft(&draft).is_ok(), eq(true));
}

#[test]
fn given_multibyte_title_when_validated_then_counts_characters() {
    let rules = ArticleRules::new(3, 50);
    let draft = ArticleDraft::new("測試文", "news", "body");

    assert_that!(rules.validate_draft(&draft).is_ok(), eq(true));
}

#[test]
fn given_category_over_custom_limit_when_validated_then_category_too_long() {
    let rules = ArticleRules::new(200, 5);
    let draft = ArticleDraft::new("Title", "science", "body");

    let err = rules.validate_draft(&draft).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::CategoryTooLong));
}

#[test]
fn given_empty_patch_when_validated_then_stays_empty() {
    let rules = ArticleRules::default();

    let patch = rules.validate_patch(&ArticlePatch::default()).unwrap();

    assert_that!(patch.is_empty(), eq(true));
}

#[test]
fn given_patch_with_blank_content_when_validated_then_content_required() {
    let rules = ArticleRules::default();
    let patch = ArticlePatch::default().title("Fine").content("   ");

    let err = rules.validate_patch(&patch).unwrap_err();

    assert_that!(code_of(err), eq(ValidationCode::ContentRequired));
}

#[test]
fn given_patch_with_padded_fields_when_validated_then_trimmed() {
    let rules = ArticleRules::default();
    let patch = ArticlePatch::default().title("  Updated ").category(" tech ");

    let patch = rules.validate_patch(&patch).unwrap();

    assert_that!(patch.title, some(eq("Updated")));
    assert_that!(patch.category, some(eq("tech")));
    assert_that!(patch.content, none());
}
