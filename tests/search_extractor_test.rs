// tests/search_extractor_test.rs

mod common;

use mockito::Matcher;
use serde_json::json;
use skillshare_provider::{
    client::ApiClient,
    error::{AppError, AppResult},
    extractor::search::SearchExtractor,
};
use std::{sync::Arc, time::Duration};

#[tokio::test]
async fn test_search_returns_decoded_node() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;
    let config = common::config_for(&server.url());

    let mock = server
        .mock("POST", "/api/graphql")
        .match_body(Matcher::PartialJson(json!({
            "operationName": "GetClassesQuery",
            "variables": {
                "query": "python",
                "where": {"level": ["ALL_LEVELS", "BEGINNER", "INTERMEDIATE", "ADVANCED"]},
                "after": "-1",
                "first": 30
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::fixture("search_response.json"))
        .create_async()
        .await;

    let extractor = SearchExtractor::new(Arc::new(ApiClient::new(config)?));
    let results = extractor.search("python").await?;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    let course = &results[0];
    assert_eq!(course.id, "Q2xhc3M6MjAwMQ==");
    assert_eq!(course.title, "Python for Data Analysis");
    assert_eq!(course.course_id.as_deref(), Some("2001"));
    assert_eq!(
        course.url.as_deref(),
        Some("https://www.skillshare.com/en/classes/Python-for-Data-Analysis/2001")
    );
    assert_eq!(
        course.large_cover_url.as_deref(),
        Some("https://static.skillshare.test/2001-large.jpg")
    );
    Ok(())
}

#[tokio::test]
async fn test_search_term_with_quotes_reaches_server_intact() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;
    let config = common::config_for(&server.url());
    let term = r#"c++ "advanced" \ tips"#;

    let mock = server
        .mock("POST", "/api/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "query": term } })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"search":{"edges":[]}}}"#)
        .create_async()
        .await;

    let extractor = SearchExtractor::new(Arc::new(ApiClient::new(config)?));
    let results = extractor.search(term).await?;

    mock.assert_async().await;
    assert!(results.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_timeout_is_transport_error() -> AppResult<()> {
    let url = common::stalled_server().await;
    let config = common::with_timeout(common::config_for(&url), Duration::from_millis(300));
    let extractor = SearchExtractor::new(Arc::new(ApiClient::new(config)?));

    let err = extractor.search("python").await.expect_err("服务器无响应时应超时");
    assert!(
        matches!(err, AppError::Transport(ref e) if e.is_timeout()),
        "实际错误: {:?}",
        err
    );
    Ok(())
}
