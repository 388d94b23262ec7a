mod article_rules;
mod models;
