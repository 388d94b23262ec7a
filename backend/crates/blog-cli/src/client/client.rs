use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the blog-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:3000")
    /// * `token` - Optional Supabase access token sent as a bearer token
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build an endpoint URL, percent-encoding path segments and query values.
    fn url(&self, segments: &[&str], params: &[(&str, &str)]) -> CliClientResult<Url> {
        let invalid = |message: String| ClientError::InvalidUrl {
            url: self.base_url.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Build a request with the bearer token when one is configured
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and turn error bodies into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let code = body
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .or(status.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Article Operations
    // =========================================================================

    /// List all articles, newest first
    pub async fn list_articles(&self) -> CliClientResult<Value> {
        let url = self.url(&["api", "articles"], &[])?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Get an article by ID
    pub async fn get_article(&self, id: &str) -> CliClientResult<Value> {
        let url = self.url(&["api", "articles", id], &[])?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// List articles in one category
    pub async fn list_articles_by_category(&self, category: &str) -> CliClientResult<Value> {
        let url = self.url(&["api", "articles", "category", category], &[])?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Search articles; absent filters are omitted from the query
    pub async fn search_articles(
        &self,
        keyword: Option<&str>,
        category: Option<&str>,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> CliClientResult<Value> {
        let params: Vec<(&str, &str)> = [
            ("keyword", keyword),
            ("category", category),
            ("dateFrom", date_from),
            ("dateTo", date_to),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();

        let url = self.url(&["api", "articles", "search"], &params)?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Create a new article
    pub async fn create_article(
        &self,
        title: &str,
        category: &str,
        content: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            title: &'a str,
            category: &'a str,
            content: &'a str,
        }

        let body = CreateRequest {
            title,
            category,
            content,
        };
        let url = self.url(&["api", "articles"], &[])?;
        self.execute(self.request(Method::POST, url).json(&body))
            .await
    }

    /// Update an article; only the given fields are sent
    pub async fn update_article(
        &self,
        id: &str,
        title: Option<&str>,
        category: Option<&str>,
        content: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            content: Option<&'a str>,
        }

        let body = UpdateRequest {
            title,
            category,
            content,
        };
        let url = self.url(&["api", "articles", id], &[])?;
        self.execute(self.request(Method::PUT, url).json(&body))
            .await
    }

    /// Delete an article
    pub async fn delete_article(&self, id: &str) -> CliClientResult<Value> {
        let url = self.url(&["api", "articles", id], &[])?;
        let body = self.execute(self.request(Method::DELETE, url)).await?;

        // 204 No Content
        if body.is_null() {
            return Ok(json!({ "id": id, "deleted": true }));
        }
        Ok(body)
    }

    // =========================================================================
    // AI Operations
    // =========================================================================

    /// Ask the completion provider to improve content
    pub async fn assist(
        &self,
        prompt: &str,
        article_content: Option<&str>,
        article_id: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AssistRequest<'a> {
            prompt: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            article_content: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            article_id: Option<&'a str>,
        }

        let body = AssistRequest {
            prompt,
            article_content,
            article_id,
        };
        let url = self.url(&["api", "ai", "assist"], &[])?;
        self.execute(self.request(Method::POST, url).json(&body))
            .await
    }

    /// Prompt history for one article, or all of it
    pub async fn assist_history(&self, article_id: Option<&str>) -> CliClientResult<Value> {
        let url = match article_id {
            Some(id) => self.url(&["api", "ai", "assist", "history", id], &[])?,
            None => self.url(&["api", "ai", "assist", "history"], &[])?,
        };
        self.execute(self.request(Method::GET, url)).await
    }

    // =========================================================================
    // Health
    // =========================================================================

    pub async fn health(&self) -> CliClientResult<Value> {
        let url = self.url(&["health"], &[])?;
        self.execute(self.request(Method::GET, url)).await
    }
}
