use crate::{Article, ArticlePatch, NewArticle, Result, SearchFilters};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence for articles.
///
/// Listing operations return newest `created_at` first; ties go to the most
/// recently inserted article.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert a validated article, assigning `id`, `slug` and `created_at`.
    async fn save(&self, article: NewArticle) -> Result<Article>;

    async fn get_all(&self) -> Result<Vec<Article>>;

    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Article>>;

    /// Merge `patch` onto the stored row and stamp `updated_at`.
    ///
    /// Fails with `ARTICLE_NOT_FOUND` when no row has this id.
    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Article>;

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Article>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
