use clap::Subcommand;

#[derive(Subcommand)]
pub enum AiCommands {
    /// Ask the assistant to improve some content
    Assist {
        /// Instruction for the assistant
        #[arg(long)]
        prompt: String,
        /// Content to improve
        #[arg(long)]
        content: Option<String>,
        /// Article the prompt is logged against
        #[arg(long)]
        article_id: Option<String>,
    },
    /// Show logged prompts, optionally for a single article
    History {
        #[arg(long)]
        article_id: Option<String>,
    },
}
