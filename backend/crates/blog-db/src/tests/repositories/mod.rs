mod in_memory_article_repository_tests;
mod in_memory_prompt_log_repository_tests;
