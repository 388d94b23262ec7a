use clap::Subcommand;

#[derive(Subcommand)]
pub enum ArticleCommands {
    /// List all articles, newest first
    List,
    /// Get an article by ID
    Get {
        /// Article ID
        id: String,
    },
    /// Create a new article
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        content: String,
    },
    /// Update an article; omitted fields are left unchanged
    Update {
        /// Article ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete an article
    Delete {
        /// Article ID
        id: String,
    },
    /// Search by keyword, category and creation date range
    Search {
        /// Case-insensitive substring of the title or content
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Inclusive lower bound (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        date_from: Option<String>,
        /// Inclusive upper bound (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        date_to: Option<String>,
    },
    /// List articles in a category
    Category {
        category: String,
    },
}
