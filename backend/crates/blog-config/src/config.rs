use crate::{
    AiConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig, StorageBackend,
    StorageConfig, SupabaseConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub supabase: SupabaseConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BLOG_CONFIG_DIR env var, else use ./.blog/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply the plain deployment variables (PORT, SUPABASE_*, OPENAI_API_KEY, DISABLE_AUTH)
    /// 5. Apply BLOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_deployment_env();
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BLOG_CONFIG_DIR env var > ./.blog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        self.validation.validate()?;

        if self.storage.backend == StorageBackend::Supabase && !self.supabase.is_ready() {
            return Err(ConfigError::storage(
                "storage.backend = \"supabase\" requires supabase.url and a supabase key",
            ));
        }

        Ok(())
    }

    /// Backend actually used once `auto` is resolved.
    pub fn resolved_backend(&self) -> StorageBackend {
        match self.storage.backend {
            StorageBackend::Auto if self.supabase.is_ready() => StorageBackend::Supabase,
            StorageBackend::Auto => StorageBackend::Memory,
            explicit => explicit,
        }
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        let backend = self.resolved_backend();
        match backend {
            StorageBackend::Sqlite => info!("  storage: sqlite ({})", self.database.path),
            StorageBackend::Supabase => info!(
                "  storage: supabase ({})",
                self.supabase.url().unwrap_or("<unset>")
            ),
            other => info!("  storage: {other}"),
        }

        info!(
            "  auth: {} (audience: {})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.auth.audience.is_empty() {
                "<any>"
            } else {
                self.auth.audience.as_str()
            }
        );

        info!(
            "  ai: {} (model={}, temperature={}, max_tokens={}, timeout={}s)",
            if self.ai.api_key().is_some() {
                "configured"
            } else {
                "disabled"
            },
            self.ai.model,
            self.ai.temperature,
            self.ai.max_tokens,
            self.ai.timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );

        info!(
            "  validation: title={}, category={}",
            self.validation.max_title_length, self.validation.max_category_length
        );
    }

    /// Variable names used by hosted deployments of the blog.
    fn apply_deployment_env(&mut self) {
        Self::apply_env_parse("PORT", &mut self.server.port);

        Self::apply_env_option_string("SUPABASE_URL", &mut self.supabase.url);
        Self::apply_env_option_string("SUPABASE_ANON_KEY", &mut self.supabase.anon_key);
        Self::apply_env_option_string(
            "SUPABASE_SERVICE_ROLE_KEY",
            &mut self.supabase.service_role_key,
        );

        if let Ok(secret) = std::env::var("SUPABASE_JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
            self.auth.enabled = true;
        }
        if std::env::var("DISABLE_AUTH").is_ok_and(|v| v == "true") {
            self.auth.enabled = false;
        }

        Self::apply_env_option_string("OPENAI_API_KEY", &mut self.ai.api_key);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BLOG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BLOG_SERVER_PORT", &mut self.server.port);

        // Database / storage
        Self::apply_env_string("BLOG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse("BLOG_STORAGE_BACKEND", &mut self.storage.backend);

        // Supabase
        Self::apply_env_option_string("BLOG_SUPABASE_URL", &mut self.supabase.url);
        Self::apply_env_option_string("BLOG_SUPABASE_ANON_KEY", &mut self.supabase.anon_key);
        Self::apply_env_option_string(
            "BLOG_SUPABASE_SERVICE_ROLE_KEY",
            &mut self.supabase.service_role_key,
        );

        // Auth
        Self::apply_env_bool("BLOG_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("BLOG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("BLOG_AUTH_AUDIENCE", &mut self.auth.audience);

        // AI
        Self::apply_env_option_string("BLOG_AI_API_KEY", &mut self.ai.api_key);
        Self::apply_env_string("BLOG_AI_BASE_URL", &mut self.ai.base_url);
        Self::apply_env_string("BLOG_AI_MODEL", &mut self.ai.model);
        Self::apply_env_parse("BLOG_AI_TEMPERATURE", &mut self.ai.temperature);
        Self::apply_env_parse("BLOG_AI_MAX_TOKENS", &mut self.ai.max_tokens);
        Self::apply_env_parse("BLOG_AI_TIMEOUT_SECS", &mut self.ai.timeout_secs);

        // Logging
        Self::apply_env_parse("BLOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BLOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("BLOG_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("BLOG_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "BLOG_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "BLOG_VALIDATION_MAX_CATEGORY_LENGTH",
            &mut self.validation.max_category_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Some(parsed) = std::env::var(var_name)
            .ok()
            .and_then(|val| val.parse().ok())
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
