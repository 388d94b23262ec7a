use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_JWT_AUDIENCE,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// Supabase project JWT secret (HS256)
    pub jwt_secret: Option<String>,
    /// Expected `aud` claim; empty disables the audience check
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            audience: String::from(DEFAULT_JWT_AUDIENCE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match &self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.enabled = true requires auth.jwt_secret (or SUPABASE_JWT_SECRET)",
            )),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters, got {}",
                    MIN_JWT_SECRET_LENGTH,
                    secret.len()
                )))
            }
            Some(_) => Ok(()),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("enabled", &self.enabled)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("audience", &self.audience)
            .finish()
    }
}
