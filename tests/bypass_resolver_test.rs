// tests/bypass_resolver_test.rs

mod common;

use skillshare_provider::{
    client::ApiClient,
    error::{AppError, AppResult},
    extractor::bypass::BypassResolver,
};
use std::sync::Arc;

fn resolver_for(server_url: &str) -> AppResult<BypassResolver> {
    let config = common::config_for(server_url);
    let mirrors = config.bypass_mirrors.clone();
    Ok(BypassResolver::new(Arc::new(ApiClient::new(config)?), mirrors))
}

#[tokio::test]
async fn test_primary_mirror_wins_when_valid() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;

    let primary = server
        .mock("GET", "/id/2001")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::fixture("bypass_response.json"))
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/fallback/2001/0")
        .expect(0)
        .create_async()
        .await;

    let detail = resolver_for(&server.url())?.resolve_course("2001").await?;

    assert_eq!(detail.title, "Python for Data Analysis");
    assert_eq!(detail.lessons.len(), 3);
    assert_eq!(detail.lessons[0].title.as_deref(), Some("Introduction"));
    assert_eq!(detail.lessons[2].url, "", "缺失的地址应回退为空字符串");

    primary.assert_async().await;
    fallback.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_unparsable_primary_falls_back_to_secondary() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;

    let primary = server
        .mock("GET", "/id/2001")
        .with_status(200)
        .with_body("<html>Repl is waking up...</html>")
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/fallback/2001/0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::fixture("bypass_response.json"))
        .create_async()
        .await;

    let detail = resolver_for(&server.url())?.resolve_course("2001").await?;

    assert_eq!(detail.lessons.len(), 3);
    assert_eq!(
        detail.large_cover_url.as_deref(),
        Some("https://static.skillshare.test/2001-thumb.jpg")
    );
    primary.assert_async().await;
    fallback.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_failed_primary_request_also_falls_back() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;

    let primary = server
        .mock("GET", "/id/2001")
        .with_status(502)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/fallback/2001/0")
        .with_status(200)
        .with_body(r#"{"class":"Only Fallback","lessons":[]}"#)
        .create_async()
        .await;

    let detail = resolver_for(&server.url())?.resolve_course("2001").await?;

    assert_eq!(detail.title, "Only Fallback");
    assert!(detail.lessons.is_empty());
    primary.assert_async().await;
    fallback.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_both_mirrors_invalid_is_load_error() -> AppResult<()> {
    let mut server = mockito::Server::new_async().await;

    let primary = server
        .mock("GET", "/id/2001")
        .with_status(200)
        .with_body(r#"{"error":"class not found"}"#)
        .create_async()
        .await;
    let fallback = server
        .mock("GET", "/fallback/2001/0")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let err = resolver_for(&server.url())?
        .resolve_course("2001")
        .await
        .expect_err("两个镜像都无效时必须失败");

    assert!(matches!(err, AppError::LoadFailed));
    assert_eq!(err.to_string(), "invalid response");
    primary.assert_async().await;
    fallback.assert_async().await;
    Ok(())
}
