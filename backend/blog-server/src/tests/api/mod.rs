mod error;
mod search_articles_query;
