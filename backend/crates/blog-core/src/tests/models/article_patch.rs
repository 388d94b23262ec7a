use crate::{Article, ArticlePatch};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn sample_article() -> Article {
    Article {
        id: Uuid::new_v4(),
        title: "Original Title".to_string(),
        category: "news".to_string(),
        content: "original".to_string(),
        slug: "original-title".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: None,
    }
}

#[test]
fn given_title_patch_when_applied_then_slug_recomputed() {
    // Given
    let mut article = sample_article();
    let stamp = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let patch = ArticlePatch::default().title("Brand New Title");

    // When
    patch.apply_to(&mut article, Some(stamp));

    // Then
    assert_eq!(article.title, "Brand New Title");
    assert_eq!(article.slug, "brand-new-title");
    assert_eq!(article.category, "news");
    assert_eq!(article.updated_at, Some(stamp));
}

#[test]
fn given_content_only_patch_when_applied_then_slug_unchanged() {
    let mut article = sample_article();
    let patch = ArticlePatch::default().content("rewritten");

    patch.apply_to(&mut article, None);

    assert_eq!(article.content, "rewritten");
    assert_eq!(article.slug, "original-title");
    assert_eq!(article.updated_at, None);
}

#[test]
fn given_patch_when_slug_requested_then_only_present_with_title() {
    assert_eq!(ArticlePatch::default().category("x").slug(), None);
    assert_eq!(
        ArticlePatch::default().title("Hello World").slug(),
        Some("hello-world".to_string())
    );
}
