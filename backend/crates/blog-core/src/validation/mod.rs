pub mod article_rules;
