use crate::{Result as DbErrorResult, SchemaCapabilities, timestamp};

use blog_core::{
    Article, ArticlePatch, ArticleRepository, CoreError, NewArticle, Result, SearchFilters,
    StorageCode,
};

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const ORDER_NEWEST_FIRST: &str = " ORDER BY created_at DESC, rowid DESC";

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    category: String,
    content: String,
    slug: String,
    created_at: i64,
    updated_at: Option<i64>,
}

impl ArticleRow {
    fn into_article(self, code: StorageCode) -> Result<Article> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| CoreError::storage(code, format!("invalid article id '{}': {e}", self.id)))?;
        let created_at = timestamp::from_micros(self.created_at).ok_or_else(|| {
            CoreError::storage(code, format!("invalid created_at for article {id}"))
        })?;

        Ok(Article {
            id,
            title: self.title,
            category: self.category,
            content: self.content,
            slug: self.slug,
            created_at,
            updated_at: self.updated_at.and_then(timestamp::from_micros),
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>, code: StorageCode) -> Result<Vec<Article>> {
    rows.into_iter().map(|r| r.into_article(code)).collect()
}

/// Map a driver error, reporting unique-index violations on `slug` as
/// `SLUG_TAKEN`.
fn write_error(err: sqlx::Error, code: StorageCode, slug: &str) -> CoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return CoreError::slug_taken(slug);
        }
    }
    CoreError::storage(code, err.to_string())
}

/// Articles stored in the local `articles` table.
pub struct SqliteArticleRepository {
    pool: SqlitePool,
    capabilities: SchemaCapabilities,
}

impl SqliteArticleRepository {
    /// Probe the table layout and build the repository.
    pub async fn new(pool: SqlitePool) -> DbErrorResult<Self> {
        let capabilities = SchemaCapabilities::probe_sqlite(&pool).await?;
        if !capabilities.updated_at {
            warn!("articles table has no updated_at column; updates will not be timestamped");
        }
        Ok(Self::with_capabilities(pool, capabilities))
    }

    pub fn with_capabilities(pool: SqlitePool, capabilities: SchemaCapabilities) -> Self {
        Self { pool, capabilities }
    }

    pub fn capabilities(&self) -> SchemaCapabilities {
        self.capabilities
    }

    fn select(&self) -> String {
        format!(
            "SELECT {} FROM articles",
            self.capabilities.sqlite_article_columns()
        )
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn save(&self, article: NewArticle) -> Result<Article> {
        let id = Uuid::new_v4();
        let slug = article.slug();
        let created_at = timestamp::now();

        sqlx::query(
            r#"
              INSERT INTO articles (id, title, category, content, slug, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id.to_string())
        .bind(&article.title)
        .bind(&article.category)
        .bind(&article.content)
        .bind(&slug)
        .bind(created_at.timestamp_micros())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, StorageCode::InsertFailed, &slug))?;

        debug!("Inserted article {id} with slug '{slug}'");

        Ok(Article {
            id,
            title: article.title,
            category: article.category,
            content: article.content,
            slug,
            created_at,
            updated_at: None,
        })
    }

    async fn get_all(&self) -> Result<Vec<Article>> {
        let sql = format!("{}{}", self.select(), ORDER_NEWEST_FIRST);

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::storage(StorageCode::SelectFailed, e.to_string()))?;

        into_articles(rows, StorageCode::SelectFailed)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>> {
        let sql = format!("{} WHERE category = ?{}", self.select(), ORDER_NEWEST_FIRST);

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::storage(StorageCode::SelectFailed, e.to_string()))?;

        into_articles(rows, StorageCode::SelectFailed)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Article>> {
        let sql = format!("{} WHERE id = ?", self.select());

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CoreError::storage(StorageCode::SelectFailed, e.to_string()))?;

        row.map(|r| r.into_article(StorageCode::SelectFailed))
            .transpose()
    }

    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Article> {
        let slug = patch.slug();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET ");
        {
            let mut set = builder.separated(", ");
            set.push("title = COALESCE(")
                .push_bind_unseparated(patch.title.clone())
                .push_unseparated(", title)");
            set.push("slug = COALESCE(")
                .push_bind_unseparated(slug.clone())
                .push_unseparated(", slug)");
            set.push("category = COALESCE(")
                .push_bind_unseparated(patch.category.clone())
                .push_unseparated(", category)");
            set.push("content = COALESCE(")
                .push_bind_unseparated(patch.content.clone())
                .push_unseparated(", content)");
            if self.capabilities.updated_at {
                set.push("updated_at = ")
                    .push_bind_unseparated(timestamp::now().timestamp_micros());
            }
        }
        builder
            .push(" WHERE id = ")
            .push_bind(id.to_string())
            .push(" RETURNING ")
            .push(self.capabilities.sqlite_article_columns());

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, StorageCode::UpdateFailed, slug.as_deref().unwrap_or("")))?;

        match row {
            Some(row) => {
                debug!("Updated article {id}");
                row.into_article(StorageCode::UpdateFailed)
            }
            None => Err(CoreError::article_not_found()),
        }
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Article>> {
        let filters = filters.normalized();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(self.select());
        builder.push(" WHERE 1 = 1");

        // Keyword matching runs on the fetched rows; SQLite's lower() only folds ASCII.
        if let Some(category) = filters.category.clone() {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(from) = filters.date_from {
            builder
                .push(" AND created_at >= ")
                .push_bind(from.timestamp_micros());
        }
        if let Some(to) = filters.date_to {
            builder
                .push(" AND created_at <= ")
                .push_bind(to.timestamp_micros());
        }
        builder.push(ORDER_NEWEST_FIRST);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CoreError::storage(StorageCode::SearchFailed, e.to_string()))?;

        let articles = into_articles(rows, StorageCode::SearchFailed)?;
        Ok(articles
            .into_iter()
            .filter(|article| filters.matches(article))
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| CoreError::storage(StorageCode::DeleteFailed, e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
