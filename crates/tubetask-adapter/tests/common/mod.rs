/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tubetask-adapter tests

use serde_json::{Value, json};
use tubetask_adapter::{ClientConfig, VideoApiClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at a mock server
pub fn client_for(server: &MockServer) -> VideoApiClient {
    VideoApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// A complete search.list item with deterministic per-index fields
pub fn search_item(index: usize) -> Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": format!("video-{index:02}") },
        "snippet": {
            "publishedAt": "2024-03-01T12:00:00Z",
            "channelId": format!("channel-{index:02}"),
            "title": format!("Test Video {index}"),
            "description": format!("Description {index}"),
            "thumbnails": {
                "default": {
                    "url": format!("https://i.ytimg.com/vi/video-{index:02}/default.jpg"),
                    "width": 120,
                    "height": 90
                },
                "medium": {
                    "url": format!("https://i.ytimg.com/vi/video-{index:02}/mqdefault.jpg"),
                    "width": 320,
                    "height": 180
                }
            },
            "channelTitle": format!("Channel {index}")
        }
    })
}

/// A search.list response wrapping the given items
pub fn search_response(items: Vec<Value>) -> Value {
    json!({
        "kind": "youtube#searchListResponse",
        "items": items
    })
}
