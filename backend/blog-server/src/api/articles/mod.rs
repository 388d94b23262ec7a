pub mod article_dto;
pub mod articles;
pub mod create_article_request;
pub mod search_articles_query;
pub mod update_article_request;
