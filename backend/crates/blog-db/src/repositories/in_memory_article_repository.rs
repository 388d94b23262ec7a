use crate::timestamp;

use blog_core::{
    Article, ArticlePatch, ArticleRepository, CoreError, NewArticle, Result, SearchFilters,
};

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local article store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    // Insertion order; listings reverse it.
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing articles, oldest first.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    async fn collect<F>(&self, keep: F) -> Vec<Article>
    where
        F: Fn(&Article) -> bool,
    {
        let articles = self.articles.read().await;
        let mut found: Vec<Article> = articles.iter().rev().filter(|a| keep(a)).cloned().collect();
        // Stable sort keeps later inserts ahead on equal timestamps.
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: NewArticle) -> Result<Article> {
        let slug = article.slug();
        let mut articles = self.articles.write().await;

        if articles.iter().any(|a| a.slug == slug) {
            return Err(CoreError::slug_taken(slug));
        }

        let saved = Article {
            id: Uuid::new_v4(),
            slug,
            title: article.title,
            category: article.category,
            content: article.content,
            created_at: timestamp::now(),
            updated_at: None,
        };
        articles.push(saved.clone());

        debug!("Stored article {} in memory", saved.id);
        Ok(saved)
    }

    async fn get_all(&self) -> Result<Vec<Article>> {
        Ok(self.collect(|_| true).await)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>> {
        Ok(self.collect(|a| a.category == category).await)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Article> {
        let mut articles = self.articles.write().await;

        if let Some(slug) = patch.slug() {
            if articles.iter().any(|a| a.id != id && a.slug == slug) {
                return Err(CoreError::slug_taken(slug));
            }
        }

        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(CoreError::article_not_found)?;

        patch.apply_to(article, Some(timestamp::now()));
        Ok(article.clone())
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Article>> {
        Ok(self.collect(|a| filters.matches(a)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|a| a.id != id);
        Ok(articles.len() < before)
    }
}
