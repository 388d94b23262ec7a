use crate::InMemoryArticleRepository;

use blog_core::{
    Article, ArticlePatch, ArticleRepository, CoreError, NewArticle, SearchFilters,
    ValidationCode,
};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn new_article(title: &str, category: &str, content: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        category: category.to_string(),
        content: content.to_string(),
    }
}

fn validation_code(err: CoreError) -> ValidationCode {
    match err {
        CoreError::Validation { code, .. } => code,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_new_article_when_saved_then_id_slug_and_created_at_assigned() {
    // Given
    let repo = InMemoryArticleRepository::new();

    // When
    let saved = repo
        .save(new_article("New Article", "news", "content"))
        .await
        .unwrap();

    // Then
    assert_that!(saved.slug, eq("new-article"));
    assert_that!(saved.updated_at, none());
    let found = repo.get_by_id(saved.id).await.unwrap();
    assert_that!(found, some(eq(&saved)));
}

#[tokio::test]
async fn given_several_articles_when_listed_then_newest_first() {
    let repo = InMemoryArticleRepository::new();
    let first = repo.save(new_article("First", "a", "x")).await.unwrap();
    let second = repo.save(new_article("Second", "a", "x")).await.unwrap();
    let third = repo.save(new_article("Third", "b", "x")).await.unwrap();

    let all = repo.get_all().await.unwrap();

    let ids: Vec<Uuid> = all.iter().map(|a| a.id).collect();
    assert_that!(ids, eq(&vec![third.id, second.id, first.id]));
}

#[tokio::test]
async fn given_seeded_articles_with_equal_timestamps_when_listed_then_later_insert_first() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let make = |title: &str| Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category: "c".to_string(),
        content: "x".to_string(),
        slug: blog_core::slugify(title),
        created_at: at,
        updated_at: None,
    };
    let older = make("Older");
    let newer = make("Newer");
    let repo = InMemoryArticleRepository::with_articles(vec![older.clone(), newer.clone()]);

    let all = repo.get_all().await.unwrap();

    assert_that!(all[0].id, eq(newer.id));
    assert_that!(all[1].id, eq(older.id));
}

#[tokio::test]
async fn given_taken_slug_when_saved_then_slug_taken() {
    let repo = InMemoryArticleRepository::new();
    repo.save(new_article("Same Title", "a", "x")).await.unwrap();

    let err = repo
        .save(new_article("same   title", "b", "y"))
        .await
        .unwrap_err();

    assert_that!(validation_code(err), eq(ValidationCode::SlugTaken));
}

#[tokio::test]
async fn given_existing_article_when_title_updated_then_slug_and_updated_at_change() {
    let repo = InMemoryArticleRepository::new();
    let saved = repo.save(new_article("Before", "a", "x")).await.unwrap();

    let updated = repo
        .update(saved.id, ArticlePatch::default().title("After Edit"))
        .await
        .unwrap();

    assert_that!(updated.id, eq(saved.id));
    assert_that!(updated.slug, eq("after-edit"));
    assert_that!(updated.created_at, eq(saved.created_at));
    assert_that!(updated.updated_at, some(anything()));
    assert_that!(updated.content, eq("x"));
}

#[tokio::test]
async fn given_missing_id_when_updated_then_article_not_found() {
    let repo = InMemoryArticleRepository::new();

    let err = repo
        .update(Uuid::new_v4(), ArticlePatch::default().content("x"))
        .await
        .unwrap_err();

    assert_that!(err.is_not_found(), eq(true));
}

#[tokio::test]
async fn given_title_of_other_article_when_updated_then_slug_taken() {
    let repo = InMemoryArticleRepository::new();
    repo.save(new_article("Taken", "a", "x")).await.unwrap();
    let other = repo.save(new_article("Free", "a", "x")).await.unwrap();

    let err = repo
        .update(other.id, ArticlePatch::default().title("Taken"))
        .await
        .unwrap_err();

    assert_that!(validation_code(err), eq(ValidationCode::SlugTaken));
}

#[tokio::test]
async fn given_same_title_when_updated_then_own_slug_not_a_conflict() {
    let repo = InMemoryArticleRepository::new();
    let saved = repo.save(new_article("Keep", "a", "x")).await.unwrap();

    let result = repo
        .update(saved.id, ArticlePatch::default().title("Keep"))
        .await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_existing_article_when_deleted_then_true_then_false() {
    let repo = InMemoryArticleRepository::new();
    let saved = repo.save(new_article("Gone", "a", "x")).await.unwrap();

    assert_that!(repo.delete(saved.id).await.unwrap(), eq(true));
    assert_that!(repo.delete(saved.id).await.unwrap(), eq(false));
    assert_that!(repo.get_by_id(saved.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_keyword_and_category_when_searched_then_conjunctive() {
    let repo = InMemoryArticleRepository::new();
    repo.save(new_article("Rust Tips", "dev", "x")).await.unwrap();
    repo.save(new_article("Cooking", "life", "some rust on the pan"))
        .await
        .unwrap();
    repo.save(new_article("Go Tips", "dev", "x")).await.unwrap();

    let by_keyword = repo
        .search(&SearchFilters::default().keyword("RUST"))
        .await
        .unwrap();
    let by_both = repo
        .search(&SearchFilters::default().keyword("rust").category("dev"))
        .await
        .unwrap();
    let blank = repo
        .search(&SearchFilters::default().keyword("  ").category(""))
        .await
        .unwrap();

    assert_that!(by_keyword, len(eq(2)));
    assert_that!(by_both, len(eq(1)));
    assert_that!(by_both[0].title, eq("Rust Tips"));
    assert_that!(blank, len(eq(3)));
}

#[tokio::test]
async fn given_articles_when_filtered_by_category_then_exact_match_only() {
    let repo = InMemoryArticleRepository::new();
    repo.save(new_article("One", "dev", "x")).await.unwrap();
    repo.save(new_article("Two", "Dev", "x")).await.unwrap();

    let found = repo.get_by_category("dev").await.unwrap();

    assert_that!(found, len(eq(1)));
    assert_that!(found[0].title, eq("One"));
}
