//! Drives the core update loop against the engine and a mock provider.

use std::time::Duration;

use askpanel_core::{update, AppState, Effect, EnrichmentPhase, Msg};
use askpanel_engine::{EngineHandle, SearchSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Applies effects the way the app does: sink messages are recorded, fetches
/// go to the engine.
fn run_effects(engine: &EngineHandle, effects: Vec<Effect>, appended: &mut Vec<String>) {
    for effect in effects {
        match effect {
            Effect::AppendUserMessage { content } => appended.push(content),
            Effect::FetchEnrichment { request_id, query } => engine.enqueue(request_id, query),
            _ => {}
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_query_times_out_and_shows_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/videos"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_json(json!({"q": "cats", "gl": "in"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_json(json!({"videos": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let engine = EngineHandle::new(SearchSettings {
        endpoint: format!("{}/videos", server.uri()),
        api_key: "test-key".to_string(),
        request_timeout: Some(Duration::from_millis(100)),
        ..SearchSettings::default()
    })
    .expect("engine");

    let mut appended = Vec::new();
    let mut state = AppState::new();
    // The seed is observed on load and again on every re-evaluation.
    for _ in 0..3 {
        let (next, effects) = update(state, Msg::SeedQueryObserved("cats".to_string()));
        run_effects(&engine, effects, &mut appended);
        state = next;
    }
    assert_eq!(appended, vec!["cats".to_string()]);

    let (engine, event) = tokio::task::spawn_blocking(move || {
        let event = engine.recv_timeout(Duration::from_secs(5));
        (engine, event)
    })
    .await
    .expect("join");
    let (state, _) = update(state, Msg::from(event.expect("settled")));

    let view = state.view();
    assert_eq!(view.enrichment.phase, EnrichmentPhase::Rejected);
    let titles: Vec<_> = view.enrichment.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Video 1", "Video 2", "Video 3", "Video 4", "Video 5"]);
    assert!(engine.try_recv().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn live_results_reach_the_panel_in_provider_order() {
    let server = MockServer::start().await;
    let videos: Vec<_> = (1..=8)
        .map(|n| {
            json!({
                "title": format!("Clip {n}"),
                "link": format!("https://www.youtube.com/watch?v={n}"),
                "thumbnail": format!("https://i.ytimg.com/vi/{n}/default.jpg"),
                "duration": "2:00",
            })
        })
        .collect();
    Mock::given(method("POST"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "videos": videos })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = EngineHandle::new(SearchSettings {
        endpoint: format!("{}/videos", server.uri()),
        ..SearchSettings::default()
    })
    .expect("engine");

    let mut appended = Vec::new();
    let (state, _) = update(AppState::new(), Msg::TextChanged("rust tutorials".into()));
    let (state, effects) = update(state, Msg::FormSubmitted);
    run_effects(&engine, effects, &mut appended);

    let (engine, event) = tokio::task::spawn_blocking(move || {
        let event = engine.recv_timeout(Duration::from_secs(5));
        (engine, event)
    })
    .await
    .expect("join");
    drop(engine);
    let (state, _) = update(state, Msg::from(event.expect("settled")));

    let view = state.view();
    assert_eq!(view.enrichment.phase, EnrichmentPhase::Accepted);
    let titles: Vec<_> = view.enrichment.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Clip 1", "Clip 2", "Clip 3", "Clip 4", "Clip 5"]);
    assert_eq!(appended, vec!["rust tutorials".to_string()]);
}
