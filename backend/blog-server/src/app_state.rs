use blog_auth::JwtValidator;
use blog_service::{AiAssistService, BlogService};

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub assistant: Arc<AiAssistService>,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Name of the article store, reported by `/health`
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(
        blog: BlogService,
        assistant: AiAssistService,
        jwt_validator: Option<JwtValidator>,
        storage_backend: &'static str,
    ) -> Self {
        Self {
            blog: Arc::new(blog),
            assistant: Arc::new(assistant),
            jwt_validator: jwt_validator.map(Arc::new),
            storage_backend,
        }
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }
}
