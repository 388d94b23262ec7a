use blog_core::{
    Article, ArticleDraft, ArticlePatch, ArticleRepository, ArticleRules, CoreError, Result,
    SearchFilters, ValidationCode,
};

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

/// Article use-cases: validation in front of a swappable repository.
pub struct BlogService {
    repository: Arc<dyn ArticleRepository>,
    rules: ArticleRules,
}

impl BlogService {
    pub fn new(repository: Arc<dyn ArticleRepository>, rules: ArticleRules) -> Self {
        Self { repository, rules }
    }

    pub fn rules(&self) -> ArticleRules {
        self.rules
    }

    pub async fn add_article(&self, draft: ArticleDraft) -> Result<Article> {
        let article = self.rules.validate_draft(&draft)?;
        let saved = self.repository.save(article).await?;

        info!("Created article {} ({})", saved.id, saved.slug);
        Ok(saved)
    }

    pub async fn get_all_articles(&self) -> Result<Vec<Article>> {
        self.repository.get_all().await
    }

    /// Blank categories match nothing.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Article>> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.get_by_category(category).await
    }

    /// Unknown and malformed ids both yield `None`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Article>> {
        let Some(id) = parse_id(id)? else {
            debug!("Lookup with malformed article id");
            return Ok(None);
        };
        self.repository.get_by_id(id).await
    }

    pub async fn update_article(&self, id: &str, patch: ArticlePatch) -> Result<Article> {
        let id = parse_id(id)?.ok_or_else(CoreError::article_not_found)?;
        let patch = self.rules.validate_patch(&patch)?;

        let updated = self.repository.update(id, patch).await?;

        info!("Updated article {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_article(&self, id: &str) -> Result<()> {
        let id = parse_id(id)?.ok_or_else(CoreError::article_not_found)?;

        if !self.repository.delete(id).await? {
            return Err(CoreError::article_not_found());
        }

        info!("Deleted article {id}");
        Ok(())
    }

    pub async fn search_articles(&self, filters: SearchFilters) -> Result<Vec<Article>> {
        let filters = filters.normalized();
        debug!("Searching articles with {filters:?}");
        self.repository.search(&filters).await
    }
}

/// Blank ids are rejected; ids that are not UUIDs can never match a row.
fn parse_id(raw: &str) -> Result<Option<Uuid>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::field(
            ValidationCode::IdRequired,
            "id",
            "Article id is required",
        ));
    }
    Ok(Uuid::parse_str(raw).ok())
}
