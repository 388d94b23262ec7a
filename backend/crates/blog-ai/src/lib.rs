//! Completion providers for the AI-assist endpoint.

pub mod disabled_provider;
pub mod openai_provider;
pub mod openai_settings;

pub use disabled_provider::DisabledCompletionProvider;
pub use openai_provider::OpenAiCompletionProvider;
pub use openai_settings::OpenAiSettings;
