//! Detail-page fetch sequence tests
//!
//! Exercises the loading -> ready / loading -> error lifecycle end to end:
//! three sequential lookups against a mock server, collapsed error
//! reporting, and the stale-generation guard.

use mockito::{Mock, Server, ServerGuard};
use tubetui::app::{self, App, FetchOutcome, LOAD_ERROR};
use tubetui::api::CatalogClient;

const VIDEO_BODY: &str = r#"{
    "id": "v1",
    "name": "Current video",
    "videoLink": "https://www.youtube.com/watch?v=abc111",
    "description": "The one being watched",
    "views": 1500000
}"#;

const CATALOG_BODY: &str = r#"[
    {"id": "v1", "name": "Current video", "videoLink": "https://www.youtube.com/watch?v=abc111", "description": "The one being watched", "views": 1500000},
    {"id": "v2", "name": "Other one", "videoLink": "https://youtu.be/def222", "description": "", "views": 300},
    {"id": "v3", "name": "Other two", "videoLink": "https://www.youtube.com/embed/ghi333", "description": "", "views": 40}
]"#;

const COMMENTS_BODY: &str = r#"[
    {"id": "c1", "videoId": "v1", "author": "ada", "text": "first"},
    {"id": "c2", "videoId": "v1", "author": "lin", "text": "second"}
]"#;

async fn mock_video(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/videos/v1")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_catalog(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/videos")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_comments(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/videos/v1/comments")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

// =============================================================================
// Success Path
// =============================================================================

#[tokio::test]
async fn test_load_page_reaches_ready() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 200, VIDEO_BODY).await;
    let _catalog = mock_catalog(&mut server, 200, CATALOG_BODY).await;
    let _comments = mock_comments(&mut server, 200, COMMENTS_BODY).await;

    let client = CatalogClient::new(server.url());
    let data = app::load_page(&client, "v1").await.unwrap();

    assert_eq!(data.current.id, "v1");
    assert_eq!(data.current.format_views(), "1,500,000");

    // Rail excludes the current video and preserves catalog order
    let rail_ids: Vec<&str> = data.others.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(rail_ids, ["v2", "v3"]);

    assert_eq!(data.comments.len(), 2);
    assert_eq!(data.comments[0].text, "first");
}

#[tokio::test]
async fn test_ready_outcome_applies_to_app() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 200, VIDEO_BODY).await;
    let _catalog = mock_catalog(&mut server, 200, CATALOG_BODY).await;
    let _comments = mock_comments(&mut server, 200, COMMENTS_BODY).await;

    let client = CatalogClient::new(server.url());

    let mut app = App::new();
    app.open_video("v1");
    let generation = app.detail.as_ref().unwrap().generation;

    let result = app::load_page(&client, "v1").await;
    app.apply(FetchOutcome::Page { generation, result });

    let detail = app.detail.as_ref().unwrap();
    let data = detail.page.data().expect("page should be ready");
    assert_eq!(data.current.name, "Current video");
    assert_eq!(detail.rail.len, 2);
}

// =============================================================================
// Failure Paths
// =============================================================================

#[tokio::test]
async fn test_video_failure_collapses_to_fixed_message() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 500, "boom").await;

    let client = CatalogClient::new(server.url());
    let err = app::load_page(&client, "v1").await.unwrap_err();
    assert_eq!(err, LOAD_ERROR);
}

#[tokio::test]
async fn test_catalog_failure_collapses_to_fixed_message() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 200, VIDEO_BODY).await;
    let _catalog = mock_catalog(&mut server, 500, "boom").await;

    let client = CatalogClient::new(server.url());
    let err = app::load_page(&client, "v1").await.unwrap_err();
    assert_eq!(err, LOAD_ERROR);
}

#[tokio::test]
async fn test_comments_failure_collapses_to_fixed_message() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 200, VIDEO_BODY).await;
    let _catalog = mock_catalog(&mut server, 200, CATALOG_BODY).await;
    let _comments = mock_comments(&mut server, 404, "missing").await;

    let client = CatalogClient::new(server.url());
    let err = app::load_page(&client, "v1").await.unwrap_err();
    assert_eq!(err, LOAD_ERROR);
}

#[tokio::test]
async fn test_failed_page_renders_no_video_content() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 500, "boom").await;

    let client = CatalogClient::new(server.url());

    let mut app = App::new();
    app.open_video("v1");
    let generation = app.detail.as_ref().unwrap().generation;

    let result = app::load_page(&client, "v1").await;
    app.apply(FetchOutcome::Page { generation, result });

    let detail = app.detail.as_ref().unwrap();
    assert!(detail.page.is_error());
    assert!(detail.page.data().is_none());
}

// =============================================================================
// Stale Response Guard
// =============================================================================

#[tokio::test]
async fn test_superseded_sequence_cannot_overwrite() {
    let mut server = Server::new_async().await;
    let _video = mock_video(&mut server, 200, VIDEO_BODY).await;
    let _catalog = mock_catalog(&mut server, 200, CATALOG_BODY).await;
    let _comments = mock_comments(&mut server, 200, COMMENTS_BODY).await;

    let client = CatalogClient::new(server.url());

    let mut app = App::new();
    app.open_video("v1");
    let stale = app.detail.as_ref().unwrap().generation;

    // The user navigates away before the first sequence lands
    app.open_video("v2");

    let result = app::load_page(&client, "v1").await;
    app.apply(FetchOutcome::Page {
        generation: stale,
        result,
    });

    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.video_id, "v2");
    assert!(
        detail.page.is_loading(),
        "out-of-order response must not overwrite the newer page"
    );
}
