//! Composition root: turns a validated [`Config`] into an [`AppState`].

use crate::AppState;
use crate::error::{Result as ServerErrorResult, ServerError};

use blog_ai::{DisabledCompletionProvider, OpenAiCompletionProvider, OpenAiSettings};
use blog_auth::JwtValidator;
use blog_config::{Config, StorageBackend};
use blog_core::{ArticleRepository, ArticleRules, CompletionProvider, PromptLogRepository};
use blog_db::{
    InMemoryArticleRepository, InMemoryPromptLogRepository, SqliteArticleRepository,
    SqlitePromptLogRepository, SupabaseArticleRepository, open_sqlite_pool,
};
use blog_service::{AiAssistService, BlogService};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

type Stores = (Arc<dyn ArticleRepository>, Arc<dyn PromptLogRepository>);

pub async fn build_app_state(config: &Config) -> ServerErrorResult<AppState> {
    let backend = config.resolved_backend();
    let (articles, prompt_logs) = open_stores(config, backend).await?;

    let rules = ArticleRules::new(
        config.validation.max_title_length,
        config.validation.max_category_length,
    );
    let blog = BlogService::new(articles, rules);
    let assistant = AiAssistService::new(prompt_logs, completion_provider(config)?);

    Ok(AppState::new(
        blog,
        assistant,
        jwt_validator(config)?,
        backend.as_str(),
    ))
}

async fn open_stores(config: &Config, backend: StorageBackend) -> ServerErrorResult<Stores> {
    match backend {
        StorageBackend::Sqlite => {
            let path = config.database_path()?;
            info!("Opening SQLite database: {}", path.display());

            let pool = open_sqlite_pool(&path).await?;
            let articles: Arc<dyn ArticleRepository> =
                Arc::new(SqliteArticleRepository::new(pool.clone()).await?);
            let prompt_logs: Arc<dyn PromptLogRepository> =
                Arc::new(SqlitePromptLogRepository::new(pool));
            Ok((articles, prompt_logs))
        }
        StorageBackend::Supabase => {
            let (Some(url), Some(key)) = (config.supabase.url(), config.supabase.api_key()) else {
                return Err(ServerError::Startup {
                    message: "Supabase storage selected but URL or key is missing".to_string(),
                });
            };
            info!("Connecting to Supabase: {url}");

            let articles: Arc<dyn ArticleRepository> =
                Arc::new(SupabaseArticleRepository::connect(url, key).await?);
            // The remote schema has no prompt-log table.
            let prompt_logs: Arc<dyn PromptLogRepository> =
                Arc::new(InMemoryPromptLogRepository::new());
            Ok((articles, prompt_logs))
        }
        StorageBackend::Memory | StorageBackend::Auto => {
            warn!("Using in-memory storage; articles are lost on restart");
            let articles: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
            let prompt_logs: Arc<dyn PromptLogRepository> =
                Arc::new(InMemoryPromptLogRepository::new());
            Ok((articles, prompt_logs))
        }
    }
}

fn completion_provider(config: &Config) -> ServerErrorResult<Arc<dyn CompletionProvider>> {
    let Some(api_key) = config.ai.api_key() else {
        warn!("No AI API key configured; /api/ai/assist will fail");
        return Ok(Arc::new(DisabledCompletionProvider));
    };

    let settings = OpenAiSettings {
        api_key: api_key.to_string(),
        base_url: config.ai.base_url.clone(),
        model: config.ai.model.clone(),
        temperature: config.ai.temperature,
        max_tokens: config.ai.max_tokens,
        timeout: Duration::from_secs(config.ai.timeout_secs),
    };
    let provider = OpenAiCompletionProvider::new(settings)?;
    info!("AI assistance enabled (model {})", provider.model());

    Ok(Arc::new(provider))
}

fn jwt_validator(config: &Config) -> ServerErrorResult<Option<JwtValidator>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - every route is open");
        return Ok(None);
    }

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ServerError::Startup {
            message: "auth.enabled requires a JWT secret".to_string(),
        })?;
    info!("JWT: HS256 authentication enabled");

    Ok(Some(JwtValidator::with_hs256(
        secret.as_bytes(),
        &config.auth.audience,
    )))
}
