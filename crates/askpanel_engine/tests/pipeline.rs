use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use askpanel_engine::{
    fallback_videos, retrieve, EnrichmentResult, SearchSettings, SerperClient, VideoResult,
    VideoSearch,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hit(n: usize) -> VideoResult {
    VideoResult {
        title: format!("hit {n}"),
        link: format!("https://v.example.com/{n}"),
        thumbnail: format!("https://i.example.com/{n}.jpg"),
        duration: "1:00".to_string(),
    }
}

/// In-process provider returning a canned answer and counting calls.
struct CannedSearch {
    answer: Result<Vec<VideoResult>, ()>,
    calls: AtomicUsize,
}

impl CannedSearch {
    fn ok(videos: Vec<VideoResult>) -> Self {
        Self {
            answer: Ok(videos),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl VideoSearch for CannedSearch {
    async fn search(&self, _query: &str) -> Result<Vec<VideoResult>, askpanel_engine::SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(videos) => Ok(videos.clone()),
            Err(()) => Err(askpanel_engine::parse_videos(b"not json").unwrap_err()),
        }
    }
}

#[tokio::test]
async fn eight_hits_truncate_to_first_five_live() {
    let search = CannedSearch::ok((1..=8).map(hit).collect());

    let result = retrieve(&search, "cats").await;

    assert!(result.is_live());
    assert_eq!(result.items(), &(1..=5).map(hit).collect::<Vec<_>>()[..]);
    assert_eq!(search.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn short_answers_fall_back() {
    for count in [0, 1, 4] {
        let search = CannedSearch::ok((1..=count).map(hit).collect());
        let result = retrieve(&search, "cats").await;
        assert_eq!(result, EnrichmentResult::Fallback(fallback_videos()));
    }
}

#[tokio::test]
async fn transport_error_falls_back() {
    let search = CannedSearch {
        answer: Err(()),
        calls: AtomicUsize::new(0),
    };
    let result = retrieve(&search, "cats").await;
    assert!(!result.is_live());
    let titles: Vec<_> = result.items().iter().map(|v| v.title.clone()).collect();
    assert_eq!(titles, ["Video 1", "Video 2", "Video 3", "Video 4", "Video 5"]);
}

#[tokio::test]
async fn malformed_videos_field_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"videos": {"title": "x"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SerperClient::new(SearchSettings {
        endpoint: format!("{}/videos", server.uri()),
        ..SearchSettings::default()
    });
    let result = retrieve(&client, "cats").await;
    assert_eq!(result, EnrichmentResult::Fallback(fallback_videos()));
}

#[tokio::test]
async fn unreachable_provider_falls_back() {
    let client = SerperClient::new(SearchSettings {
        // Reserved port; nothing listens there.
        endpoint: "http://127.0.0.1:9/videos".to_string(),
        connect_timeout: Some(Duration::from_millis(200)),
        request_timeout: Some(Duration::from_millis(500)),
        ..SearchSettings::default()
    });
    let result = retrieve(&client, "cats").await;
    assert_eq!(result.into_items(), fallback_videos());
}
