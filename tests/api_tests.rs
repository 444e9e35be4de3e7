//! End-to-end API tests.
//!
//! Each test builds the full router against temporary storage directories and
//! drives it in-process with `tower::ServiceExt::oneshot` - no network, no
//! spawned server process.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use arcana::config::AppConfig;
use arcana::routes::create_router;
use arcana::startup;
use arcana::state::AppState;

/// Router state backed by a throwaway storage tree. The tempdir is held so it
/// outlives the test.
struct TestApp {
    state: AppState,
    _dir: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.storage.readings_dir = dir.path().join("readings");
    config.storage.logs_dir = dir.path().join("logs");
    config.storage.static_dir = dir.path().join("static");
    startup::init_storage(&config.storage).unwrap();

    let state = AppState::new(config);
    state.mark_ready();
    TestApp { state, _dir: dir }
}

async fn get(state: &AppState, uri: &str) -> Response<Body> {
    create_router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(state: &AppState, uri: &str, body: Value) -> Response<Body> {
    create_router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_200_when_ready() {
        let app = test_app();
        let response = get(&app.state, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Golden Dawn Tarot");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn returns_503_while_starting() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.readings_dir = dir.path().join("readings");
        config.storage.logs_dir = dir.path().join("logs");
        startup::init_storage(&config.storage).unwrap();

        // Readiness never flipped: the endpoint must answer, but not with success
        let state = AppState::new(config);
        let response = get(&state, "/health").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(response).await;
        assert_eq!(body["status"], "starting");
    }

    #[tokio::test]
    async fn is_never_cached() {
        let app = test_app();
        let response = get(&app.state, "/health").await;
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}

mod deck {
    use super::*;

    #[tokio::test]
    async fn cards_lists_the_full_deck() {
        let app = test_app();
        let response = get(&app.state, "/cards").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["deck"], "Golden Dawn Tarot");
        assert_eq!(body["cards"].as_array().unwrap().len(), 78);
    }

    #[tokio::test]
    async fn spreads_lists_all_six() {
        let app = test_app();
        let response = get(&app.state, "/spreads").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let spreads = body["spreads"].as_object().unwrap();
        assert_eq!(spreads.len(), 6);
        assert_eq!(spreads["celtic_cross"]["card_count"], 10);
    }

    #[tokio::test]
    async fn listings_are_cacheable() {
        let app = test_app();
        let response = get(&app.state, "/cards").await;
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600"
        );
    }
}

mod readings {
    use super::*;

    #[tokio::test]
    async fn create_then_fetch_roundtrips() {
        let app = test_app();

        let response = post_json(
            &app.state,
            "/reading",
            json!({
                "spread_type": "three_card",
                "question": "Will the deploy go well?",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        let reading = &body["reading"];
        assert_eq!(reading["spread_type"], "three_card");
        assert_eq!(reading["cards_drawn"].as_array().unwrap().len(), 3);
        let reading_id = reading["reading_id"].as_str().unwrap().to_string();

        // Persisted to the readings directory
        let path = app
            .state
            .store
            .root()
            .join(format!("{reading_id}.json"));
        assert!(path.exists(), "reading file should exist at {path:?}");

        // And retrievable through the API
        let response = get(&app.state, &format!("/reading/{reading_id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["reading"]["reading_id"], reading_id.as_str());
        assert_eq!(body["reading"]["question"], "Will the deploy go well?");
    }

    #[tokio::test]
    async fn empty_body_uses_defaults() {
        let app = test_app();
        let response = post_json(&app.state, "/reading", json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["reading"]["spread_type"], "three_card");
        assert!(body["reading"]["question"].is_null());
    }

    #[tokio::test]
    async fn unknown_spread_is_rejected() {
        let app = test_app();
        let response = post_json(
            &app.state,
            "/reading",
            json!({ "spread_type": "astral_projection" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("astral_projection"));
    }

    #[tokio::test]
    async fn missing_reading_is_404() {
        let app = test_app();
        let response = get(&app.state, "/reading/reading_20260101_000000_1234").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_reading_id_is_400() {
        let app = test_app();
        // Dots are outside the id alphabet, so this never touches the filesystem
        let response = get(&app.state, "/reading/evil..id").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod landing {
    use super::*;

    #[tokio::test]
    async fn index_serves_html() {
        let app = test_app();
        let response = get(&app.state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Golden Dawn Tarot"));
        assert!(html.contains("/health"));
    }
}
