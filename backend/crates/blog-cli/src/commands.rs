use crate::{ai_commands::AiCommands, article_commands::ArticleCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Article operations
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },

    /// AI writing assistant
    Ai {
        #[command(subcommand)]
        action: AiCommands,
    },

    /// Show server health
    Health,
}
