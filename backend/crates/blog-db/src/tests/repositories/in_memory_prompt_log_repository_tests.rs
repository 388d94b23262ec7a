use crate::InMemoryPromptLogRepository;

use blog_core::{NewPromptLog, PromptLogRepository};

use googletest::prelude::*;

fn log_for(article_id: Option<&str>, prompt: &str) -> NewPromptLog {
    NewPromptLog {
        article_id: article_id.map(String::from),
        prompt: prompt.to_string(),
        response: format!("response to {prompt}"),
    }
}

#[tokio::test]
async fn given_logs_when_listed_then_newest_first() {
    let repo = InMemoryPromptLogRepository::new();
    repo.save(log_for(None, "first")).await.unwrap();
    repo.save(log_for(Some("a1"), "second")).await.unwrap();

    let all = repo.list_all().await.unwrap();

    assert_that!(all, len(eq(2)));
    assert_that!(all[0].prompt, eq("second"));
    assert_that!(all[1].prompt, eq("first"));
}

#[tokio::test]
async fn given_logs_for_several_articles_when_listed_by_article_then_filtered() {
    let repo = InMemoryPromptLogRepository::new();
    repo.save(log_for(Some("a1"), "one")).await.unwrap();
    repo.save(log_for(Some("a2"), "two")).await.unwrap();
    repo.save(log_for(Some("a1"), "three")).await.unwrap();

    let logs = repo.list_by_article("a1").await.unwrap();

    assert_that!(logs, len(eq(2)));
    assert_that!(logs[0].prompt, eq("three"));
    assert_that!(logs[1].prompt, eq("one"));
}
