/*
[INPUT]:  Mock search API plus a short-delay engine configuration
[OUTPUT]: Test results for the search -> select -> create -> complete pipeline
[POS]:    Integration tests - full automation flow
[UPDATE]: When the cross-crate flow changes
*/

use serde_json::{Value, json};
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tokio_test::assert_ok;
use tubetask_adapter::{ClientConfig, VideoApiClient};
use tubetask_engine::{EngineConfig, Session, TaskEngine, TaskId, TaskKind, TaskStatus};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT_DEADLINE: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn short_config() -> EngineConfig {
    EngineConfig {
        pending_to_running_ms: 50,
        running_to_completed_ms: 100,
    }
}

fn search_item(video_id: &str, title: &str) -> Value {
    json!({
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "publishedAt": "2024-03-01T12:00:00Z",
            "title": title,
            "description": format!("About {title}"),
            "thumbnails": {
                "medium": { "url": format!("https://i.ytimg.com/vi/{video_id}/mqdefault.jpg") }
            },
            "channelTitle": "Lofi Channel"
        }
    })
}

async fn mount_query(server: &MockServer, query: &str, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(server)
        .await;
}

async fn wait_for_status(engine: &TaskEngine, id: TaskId, status: TaskStatus) {
    let deadline = Instant::now() + WAIT_DEADLINE;
    loop {
        let current = engine.task(id).await.map(|task| task.status);
        if current == Some(status) {
            return;
        }
        if Instant::now() > deadline {
            panic!("task {id} stuck in {current:?}, expected {status:?}");
        }
        sleep(POLL_INTERVAL).await;
    }
}

#[tokio::test]
async fn test_search_select_create_complete_pipeline() {
    let server = MockServer::start().await;
    mount_query(
        &server,
        "lofi",
        vec![
            search_item("lofi-aaa", "Lofi Beats 1"),
            search_item("lofi-bbb", "Lofi Beats 2"),
        ],
    )
    .await;

    // Configure the session credential and search through the gateway.
    let mut session = Session::in_memory();
    session.set_credential("test-key").await.expect("set");
    let api_key = session
        .credential()
        .await
        .expect("get")
        .expect("credential configured");

    let client = VideoApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    let videos = assert_ok!(client.search("lofi", &api_key).await);
    assert_eq!(videos.len(), 2);
    session.replace_videos(videos);

    // Select both results.
    let ids: Vec<String> = session
        .videos()
        .iter()
        .map(|video| video.id.clone())
        .collect();
    for id in &ids {
        assert!(session.selection_mut().toggle(id));
    }
    assert_eq!(session.selection().len(), 2);

    // An earlier task should progress independently of the new one.
    let engine = TaskEngine::new(short_config());
    let earlier = engine
        .create_task(TaskKind::Download, 1)
        .await
        .expect("create earlier");

    let playlist = engine
        .create_task_from_selection(TaskKind::Playlist, session.selection_mut())
        .await
        .expect("create from selection");
    assert_eq!(playlist.name, "Playlist 2 videos");
    assert_eq!(playlist.status, TaskStatus::Pending);
    assert!(session.selection().is_empty());

    let tasks = engine.list_tasks().await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, playlist.id);
    assert_eq!(tasks[1].id, earlier.id);

    wait_for_status(&engine, playlist.id, TaskStatus::Running).await;
    wait_for_status(&engine, playlist.id, TaskStatus::Completed).await;
    wait_for_status(&engine, earlier.id, TaskStatus::Completed).await;

    let tasks = engine.list_tasks().await;
    assert_eq!(tasks[0].name, "Playlist 2 videos");
    assert_eq!(tasks[1].name, "Download 1 videos");
    assert!(tasks.iter().all(|task| task.status == TaskStatus::Completed));
}

#[tokio::test]
async fn test_latest_search_supersedes_previous_results() {
    let server = MockServer::start().await;
    mount_query(&server, "first", vec![search_item("one-aaa", "First")]).await;
    mount_query(
        &server,
        "second",
        vec![
            search_item("two-aaa", "Second A"),
            search_item("two-bbb", "Second B"),
        ],
    )
    .await;

    let client = VideoApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    let mut session = Session::in_memory();

    let videos = client.search("first", "test-key").await.expect("search");
    session.replace_videos(videos);
    assert_eq!(session.videos().len(), 1);

    let videos = client.search("second", "test-key").await.expect("search");
    session.replace_videos(videos);

    // Only the latest result list survives.
    assert_eq!(session.videos().len(), 2);
    assert!(session.videos().iter().all(|video| video.id.starts_with("two-")));
}
