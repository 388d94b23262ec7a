pub mod ai_assist_service;
pub mod blog_service;

#[cfg(test)]
mod tests;

pub use ai_assist_service::{AiAssistService, AssistOutcome, AssistRequest};
pub use blog_service::BlogService;
