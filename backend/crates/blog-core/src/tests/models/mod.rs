mod article_patch;
mod search_filters;
