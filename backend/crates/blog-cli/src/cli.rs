use crate::commands::Commands;

use clap::Parser;

/// Fallback when neither `--server` nor `BLOG_SERVER_URL` is given.
pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub(crate) const SERVER_URL_ENV: &str = "BLOG_SERVER_URL";
pub(crate) const TOKEN_ENV: &str = "BLOG_TOKEN";

#[derive(Parser)]
#[command(name = "blog")]
#[command(about = "Command-line client for the blog-server REST API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (falls back to BLOG_SERVER_URL, then http://localhost:3000)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Bearer token for write operations (falls back to BLOG_TOKEN)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub(crate) fn server_url(&self) -> String {
        self.server
            .clone()
            .or_else(|| non_blank_env(SERVER_URL_ENV))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.token.clone().or_else(|| non_blank_env(TOKEN_ENV))
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
