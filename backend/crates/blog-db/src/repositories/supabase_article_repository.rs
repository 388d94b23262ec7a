use crate::{DbError, Result as DbErrorResult, SchemaCapabilities, timestamp};

use blog_core::{
    Article, ArticlePatch, ArticleRepository, CoreError, ErrorLocation, NewArticle, Result,
    SearchFilters, StorageCode, slugify,
};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const UNIQUE_VIOLATION: &str = "23505";

/// Row shape returned by PostgREST. Older rows may lack a slug.
#[derive(Debug, Deserialize)]
struct ArticleRow {
    id: Uuid,
    title: String,
    category: String,
    content: String,
    slug: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let slug = row.slug.unwrap_or_else(|| slugify(&row.title));
        Article {
            id: row.id,
            title: row.title,
            category: row.category,
            content: row.content,
            slug,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeletedRow {
    id: Uuid,
}

#[derive(Debug, Serialize)]
struct InsertBody<'a> {
    title: &'a str,
    category: &'a str,
    content: &'a str,
    slug: &'a str,
    created_at: String,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

/// Error body PostgREST sends on failure.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

impl PostgrestError {
    async fn read(response: Response) -> (StatusCode, Self) {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<Self>(&body).unwrap_or_else(|_| Self {
            code: None,
            message: (!body.is_empty()).then_some(body),
        });
        (status, error)
    }

    fn describe(&self, status: StatusCode) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{message} (code {code}, HTTP {status})"),
            (None, Some(message)) => format!("{message} (HTTP {status})"),
            _ => format!("HTTP {status}"),
        }
    }

    fn is_unique_violation(&self, status: StatusCode) -> bool {
        status == StatusCode::CONFLICT
            || self.code.as_deref() == Some(UNIQUE_VIOLATION)
            || self
                .message
                .as_deref()
                .is_some_and(|m| m.contains("duplicate key"))
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Quote a value for use inside a PostgREST `or=(...)` list.
fn quote_filter_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Articles stored in a Supabase `articles` table, reached through the
/// PostgREST API at `{url}/rest/v1/articles`.
pub struct SupabaseArticleRepository {
    client: Client,
    endpoint: Url,
    api_key: String,
    capabilities: SchemaCapabilities,
}

impl SupabaseArticleRepository {
    /// Build the client and probe whether the table has `updated_at`.
    pub async fn connect(url: &str, api_key: &str) -> DbErrorResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let mut repo = Self::with_capabilities(client, url, api_key, SchemaCapabilities::full())?;

        repo.capabilities = repo.probe().await?;
        if !repo.capabilities.updated_at {
            warn!("Supabase articles table has no updated_at column; updates will not be timestamped");
        }

        Ok(repo)
    }

    pub fn with_capabilities(
        client: Client,
        url: &str,
        api_key: &str,
        capabilities: SchemaCapabilities,
    ) -> DbErrorResult<Self> {
        let raw = format!("{}/rest/v1/articles", url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| DbError::Initialization {
            message: format!("Invalid Supabase URL '{url}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
            capabilities,
        })
    }

    fn url(&self, params: &[(&str, String)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params.iter());
        url
    }

    pub fn capabilities(&self) -> SchemaCapabilities {
        self.capabilities
    }

    async fn probe(&self) -> DbErrorResult<SchemaCapabilities> {
        let response = self
            .request(self.client.get(self.url(&[
                ("select", "id,updated_at".to_string()),
                ("limit", "1".to_string()),
            ])))
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(SchemaCapabilities::full());
        }

        let (status, error) = PostgrestError::read(response).await;
        if error
            .message
            .as_deref()
            .is_some_and(|m| m.contains("updated_at"))
        {
            return Ok(SchemaCapabilities::without_updated_at());
        }

        Err(DbError::SchemaProbe {
            message: error.describe(status),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
    }

    fn representation(&self, builder: RequestBuilder) -> RequestBuilder {
        self.request(builder)
            .header("Prefer", "return=representation")
    }

    fn columns(&self) -> &'static str {
        self.capabilities.postgrest_article_columns()
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        code: StorageCode,
        slug: Option<&str>,
    ) -> Result<Vec<T>> {
        let response = builder
            .send()
            .await
            .map_err(|e| CoreError::storage(code, e.to_string()))?;

        if !response.status().is_success() {
            let (status, error) = PostgrestError::read(response).await;
            if let Some(slug) = slug {
                if error.is_unique_violation(status) {
                    return Err(CoreError::slug_taken(slug));
                }
            }
            return Err(CoreError::storage(code, error.describe(status)));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| CoreError::storage(code, format!("unexpected response body: {e}")))
    }

    async fn list(&self, filters: Vec<(&str, String)>, code: StorageCode) -> Result<Vec<Article>> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", self.columns().to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        query.extend(filters);

        let rows: Vec<ArticleRow> = self
            .fetch_rows(
                self.request(self.client.get(self.url(&query))),
                code,
                None,
            )
            .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }
}

#[async_trait]
impl ArticleRepository for SupabaseArticleRepository {
    async fn save(&self, article: NewArticle) -> Result<Article> {
        let slug = article.slug();
        let body = InsertBody {
            title: &article.title,
            category: &article.category,
            content: &article.content,
            slug: &slug,
            created_at: rfc3339(timestamp::now()),
        };

        let rows: Vec<ArticleRow> = self
            .fetch_rows(
                self.representation(
                    self.client
                        .post(self.url(&[("select", self.columns().to_string())])),
                )
                .json(&body),
                StorageCode::InsertFailed,
                Some(&slug),
            )
            .await?;

        let saved = rows.into_iter().next().map(Article::from).ok_or_else(|| {
            CoreError::storage(StorageCode::InsertFailed, "insert returned no row")
        })?;

        debug!("Inserted article {} into Supabase", saved.id);
        Ok(saved)
    }

    async fn get_all(&self) -> Result<Vec<Article>> {
        self.list(Vec::new(), StorageCode::SelectFailed).await
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>> {
        self.list(
            vec![("category", format!("eq.{category}"))],
            StorageCode::SelectFailed,
        )
        .await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Article>> {
        let articles = self
            .list(
                vec![("id", format!("eq.{id}")), ("limit", "1".to_string())],
                StorageCode::SelectFailed,
            )
            .await?;

        Ok(articles.into_iter().next())
    }

    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Article> {
        let slug = patch.slug();
        let body = UpdateBody {
            title: patch.title.as_deref(),
            slug: slug.as_deref(),
            category: patch.category.as_deref(),
            content: patch.content.as_deref(),
            updated_at: self
                .capabilities
                .updated_at
                .then(|| rfc3339(timestamp::now())),
        };

        let url = self.url(&[
            ("id", format!("eq.{id}")),
            ("select", self.columns().to_string()),
        ]);
        let rows: Vec<ArticleRow> = self
            .fetch_rows(
                self.representation(self.client.patch(url)).json(&body),
                StorageCode::UpdateFailed,
                slug.as_deref(),
            )
            .await?;

        // PATCH with no matching row succeeds with an empty array.
        rows.into_iter()
            .next()
            .map(Article::from)
            .ok_or_else(CoreError::article_not_found)
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Article>> {
        let filters = filters.normalized();
        let mut query: Vec<(&str, String)> = Vec::new();

        if let Some(keyword) = filters.keyword {
            let pattern = quote_filter_value(&format!("*{keyword}*"));
            query.push((
                "or",
                format!("(title.ilike.{pattern},content.ilike.{pattern})"),
            ));
        }
        if let Some(category) = filters.category {
            query.push(("category", format!("eq.{category}")));
        }
        if let Some(from) = filters.date_from {
            query.push(("created_at", format!("gte.{}", rfc3339(from))));
        }
        if let Some(to) = filters.date_to {
            query.push(("created_at", format!("lte.{}", rfc3339(to))));
        }

        self.list(query, StorageCode::SearchFailed).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let url = self.url(&[("id", format!("eq.{id}")), ("select", "id".to_string())]);
        let rows: Vec<DeletedRow> = self
            .fetch_rows(
                self.representation(self.client.delete(url)),
                StorageCode::DeleteFailed,
                None,
            )
            .await?;

        if let Some(row) = rows.first() {
            debug!("Deleted article {} from Supabase", row.id);
        }
        Ok(!rows.is_empty())
    }
}
