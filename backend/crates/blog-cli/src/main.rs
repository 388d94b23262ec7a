//! blog - command-line client for blog-server
//!
//! # Examples
//!
//! ```bash
//! # List articles
//! blog article list --pretty
//!
//! # Create an article (writes need a token when auth is enabled)
//! blog --token "$BLOG_TOKEN" article create --title "Hello" --category rust --content "..."
//!
//! # Search
//! blog article search --keyword axum --date-from 2026-01-01
//! ```

mod ai_commands;
mod article_commands;
mod cli;
mod commands;

use crate::{
    ai_commands::AiCommands, article_commands::ArticleCommands, cli::Cli, commands::Commands,
};

use blog_cli::Client;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server_url(), cli.token().as_deref());

    let result = match cli.command {
        Commands::Article { action } => match action {
            ArticleCommands::List => client.list_articles().await,
            ArticleCommands::Get { id } => client.get_article(&id).await,
            ArticleCommands::Create {
                title,
                category,
                content,
            } => client.create_article(&title, &category, &content).await,
            ArticleCommands::Update {
                id,
                title,
                category,
                content,
            } => {
                client
                    .update_article(
                        &id,
                        title.as_deref(),
                        category.as_deref(),
                        content.as_deref(),
                    )
                    .await
            }
            ArticleCommands::Delete { id } => client.delete_article(&id).await,
            ArticleCommands::Search {
                keyword,
                category,
                date_from,
                date_to,
            } => {
                client
                    .search_articles(
                        keyword.as_deref(),
                        category.as_deref(),
                        date_from.as_deref(),
                        date_to.as_deref(),
                    )
                    .await
            }
            ArticleCommands::Category { category } => {
                client.list_articles_by_category(&category).await
            }
        },

        Commands::Ai { action } => match action {
            AiCommands::Assist {
                prompt,
                content,
                article_id,
            } => {
                client
                    .assist(&prompt, content.as_deref(), article_id.as_deref())
                    .await
            }
            AiCommands::History { article_id } => {
                client.assist_history(article_id.as_deref()).await
            }
        },

        Commands::Health => client.health().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
