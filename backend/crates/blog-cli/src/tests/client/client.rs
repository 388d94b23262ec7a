use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:3000", Some("jwt-abc"));
    assert_eq!(client.token, Some("jwt-abc".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:3000", None);
    assert!(client.token.is_none());
}

#[test]
fn test_api_error_exposes_code() {
    let err = ClientError::api_error(404, "ARTICLE_NOT_FOUND".into(), "missing".into());
    assert_eq!(err.api_code(), Some("ARTICLE_NOT_FOUND"));
    assert!(err.to_string().contains("status: 404"));
}

#[tokio::test]
async fn test_invalid_base_url_is_rejected_before_sending() {
    let client = Client::new("not a url", None);
    let err = client.list_articles().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidUrl { .. }));
    assert!(err.api_code().is_none());
}
