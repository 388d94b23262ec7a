use crate::ApiError;

use blog_auth::AuthError;
use blog_core::{CoreError, StorageCode, ValidationCode};

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_field_validation_error_returns_400_with_code_and_field() {
    let error: ApiError = CoreError::field(
        ValidationCode::TitleRequired,
        "title",
        "Title is required",
    )
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Title is required");
    assert_eq!(json["code"], "TITLE_REQUIRED");
    assert_eq!(json["field"], "title");
}

#[tokio::test]
async fn test_article_not_found_returns_404() {
    let error: ApiError = CoreError::article_not_found().into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ARTICLE_NOT_FOUND");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_storage_error_returns_500_with_store_message() {
    let error: ApiError = CoreError::storage(StorageCode::InsertFailed, "disk full").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DB_INSERT_FAILED");
    assert_eq!(json["error"], "disk full");
}

#[tokio::test]
async fn test_completion_error_returns_500() {
    let error: ApiError = CoreError::completion("upstream timeout").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "COMPLETION_FAILED");
}

#[tokio::test]
async fn test_auth_error_returns_401_without_details() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "UNAUTHORIZED");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("expected a JSON object").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "expected a JSON object");
}

#[tokio::test]
async fn test_route_not_found_records_caller_location() {
    let error = ApiError::route_not_found("/api/nothing-here");

    match &error {
        ApiError::RouteNotFound { path, location } => {
            assert_eq!(path, "/api/nothing-here");
            assert!(location.file.ends_with("error.rs"));
            assert!(location.file.contains("tests"));
        }
        other => panic!("expected RouteNotFound, got {other:?}"),
    }

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
