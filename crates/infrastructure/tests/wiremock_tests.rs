//! Integration tests for the vibe pipeline over the video server adapters
//!
//! Each test drives `VibeService` end to end against a wiremock video server
//! and checks the assembled response.

use std::time::Duration;

use application::{CatalogService, VibeService};
use domain::{DifficultyBand, OrchestratedResponse, Query, messages};
use infrastructure::VideoServerAdapters;
use integration_ridevibe::RideVibeConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(base_url: impl Into<String>) -> VibeService {
    let adapters = VideoServerAdapters::from_config(RideVibeConfig::for_testing(base_url)).unwrap();
    VibeService::new(adapters.classifier, adapters.search, adapters.catalog)
}

async fn ask(service: &VibeService, text: &str) -> OrchestratedResponse {
    service.respond(&Query::new(text).unwrap()).await
}

async fn mount_classifier(server: &MockServer, is_location: bool, response: &str) {
    Mock::given(method("POST"))
        .and(path("/gemini/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isLocation": is_location,
            "response": response
        })))
        .mount(server)
        .await;
}

async fn mount_canyon_run_search(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "video_id": "v42",
            "trail_name": "Canyon Run",
            "start_sec": 83
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Video answers
// ============================================================================

#[tokio::test]
async fn match_with_metadata() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking for canyon trails...").await;
    mount_canyon_run_search(&server).await;
    Mock::given(method("GET"))
        .and(path("/videos/v42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "video_id": "v42",
            "trail_name": "Canyon Run",
            "difficulty_rating": "7",
            "location": {"latitude": 36.05, "longitude": -112.14}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "steep switchbacks canyon").await;

    assert_eq!(
        response.message,
        "Here's a clip that matches your vibe: **Canyon Run**. Jumping to 1:23."
    );
    let video = response.video.unwrap();
    assert_eq!(video.url, format!("{}/videos/v42/file", server.uri()));
    assert!((video.timestamp - 83.0).abs() < f64::EPSILON);
    let metadata = video.metadata.unwrap();
    assert!(metadata.coordinates().is_some());
}

#[tokio::test]
async fn match_with_metadata_failure() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking...").await;
    mount_canyon_run_search(&server).await;
    Mock::given(method("GET"))
        .and(path("/videos/v42"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "canyon").await;

    let video = response.video.unwrap();
    assert!(video.metadata.is_none());
    assert!((video.timestamp - 83.0).abs() < f64::EPSILON);
}

/// A record as the indexer writes it: nulls, an integer rating and
/// an LLM answer where a list was expected
fn irregular_record() -> serde_json::Value {
    serde_json::json!({
        "video_id": "v42",
        "trail_name": "Canyon Run",
        "difficulty_rating": 7,
        "summary": null,
        "terrain_type": null,
        "key_features": "rock gardens, drops",
        "location": null,
        "indexed_at": "2025-06-14T10:21:07"
    })
}

#[tokio::test]
async fn irregular_metadata_is_passed_through_verbatim() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking...").await;
    mount_canyon_run_search(&server).await;
    Mock::given(method("GET"))
        .and(path("/videos/v42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(irregular_record()))
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "canyon").await;

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["video"]["metadata"], irregular_record());
    let metadata = response.video.unwrap().metadata.unwrap();
    assert_eq!(metadata.key_features(), vec!["rock gardens", "drops"]);
}

#[tokio::test]
async fn catalog_keeps_good_records_next_to_odd_ones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            irregular_record(),
            "not a record",
            {"video_id": "v7", "trail_name": "Fern Gully", "difficulty_rating": "7/10"}
        ])))
        .mount(&server)
        .await;

    let adapters =
        VideoServerAdapters::from_config(RideVibeConfig::for_testing(server.uri())).unwrap();
    let catalog = CatalogService::new(adapters.catalog);
    let videos = catalog.list_videos().await;

    assert_eq!(videos.len(), 2);
    assert_eq!(serde_json::to_value(&videos[0]).unwrap(), irregular_record());
    assert_eq!(videos[1].trail_name(), Some("Fern Gully"));
    assert_eq!(videos[1].difficulty_band(), DifficultyBand::Hard);
}

#[tokio::test]
async fn classifier_down_still_searches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gemini/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_canyon_run_search(&server).await;
    Mock::given(method("GET"))
        .and(path("/videos/v42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "canyon").await;

    assert!(response.has_video());
    assert!(response.message.contains("Canyon Run"));
}

// ============================================================================
// Text answers
// ============================================================================

#[tokio::test]
async fn conversational_answer_makes_no_other_calls() {
    let server = MockServer::start().await;
    mount_classifier(&server, false, "Wear a helmet and gloves.").await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "what gear should I wear").await;

    assert_eq!(
        response,
        OrchestratedResponse::text("Wear a helmet and gloves.")
    );
}

#[tokio::test]
async fn no_match() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking...").await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "underwater volcano").await;

    assert_eq!(response, OrchestratedResponse::text(messages::NO_MATCH));
}

#[tokio::test]
async fn search_rate_limited_reads_as_no_match() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking...").await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "jumps").await;

    assert_eq!(response.message, messages::NO_MATCH);
}

#[tokio::test]
async fn search_timeout_reports_search_error() {
    let server = MockServer::start().await;
    mount_classifier(&server, true, "Looking...").await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"video_id": "v42"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let response = ask(&service_for(server.uri()), "jumps").await;

    assert_eq!(response, OrchestratedResponse::text(messages::SEARCH_ERROR));
}

#[tokio::test]
async fn backend_unreachable_reports_search_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let response = ask(&service_for(uri), "jumps").await;

    assert_eq!(response.message, messages::SEARCH_ERROR);
    assert!(response.video.is_none());
}
