use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pomodoro_timer::{
    api::responses::{ApiResponse, StatusResponse},
    create_router, AppState, Phase, Settings,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(settings: Settings, dev_mode: bool) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), settings, dev_mode));
    let router = create_router(Arc::clone(&state));
    (state, router)
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn status_reports_initial_work_phase() {
    let (_, app) = test_app(Settings::default(), false);

    let resp = app.oneshot(get("/status")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let status: StatusResponse = body_json(resp).await;
    assert_eq!(status.timer.phase, Phase::Work);
    assert_eq!(status.timer.remaining, "25:00");
    assert_eq!(status.timer.rounds_left, 4);
    assert_eq!(status.timer.progress, 0.0);
    assert!(status.timer.pristine);
    assert!(!status.timer.running);
    assert_eq!(status.settings, Settings::default());
}

#[tokio::test]
async fn start_pause_and_reset() {
    let (state, app) = test_app(Settings::default(), false);

    let resp = app.clone().oneshot(post("/start")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let started: ApiResponse = body_json(resp).await;
    assert_eq!(started.status, "running");
    assert!(started.timer.running);

    state.tick().unwrap();

    let resp = app.clone().oneshot(post("/pause")).await.unwrap();
    let paused: ApiResponse = body_json(resp).await;
    assert_eq!(paused.status, "paused");
    assert_eq!(paused.timer.remaining, "24:59");

    let resp = app.oneshot(post("/reset")).await.unwrap();
    let reset: ApiResponse = body_json(resp).await;
    assert_eq!(reset.timer.remaining, "25:00");
    assert!(reset.timer.pristine);
}

#[tokio::test]
async fn running_endpoint_sets_run_state() {
    let (_, app) = test_app(Settings::default(), false);

    let resp = app
        .clone()
        .oneshot(put_json("/running", json!({ "running": true })))
        .await
        .unwrap();
    let body: ApiResponse = body_json(resp).await;
    assert!(body.timer.running);

    let resp = app
        .oneshot(put_json("/running", json!({ "running": false })))
        .await
        .unwrap();
    let body: ApiResponse = body_json(resp).await;
    assert!(!body.timer.running);
}

#[tokio::test]
async fn settings_update_resets_timer() {
    let (state, app) = test_app(Settings::default(), false);
    state.start().unwrap();
    state.tick().unwrap();

    let resp = app
        .clone()
        .oneshot(put_json(
            "/settings",
            json!({
                "work_minutes": 50,
                "short_break_minutes": 10,
                "long_break_minutes": 30,
                "total_rounds": 2
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse = body_json(resp).await;
    assert_eq!(body.timer.remaining, "50:00");
    assert_eq!(body.timer.rounds_left, 2);
    assert!(!body.timer.running);

    let resp = app.oneshot(get("/settings")).await.unwrap();
    let settings: Settings = body_json(resp).await;
    assert_eq!(settings.work_minutes, 50);
}

#[tokio::test]
async fn zero_duration_settings_are_rejected() {
    let (state, app) = test_app(Settings::default(), false);

    let resp = app
        .oneshot(put_json(
            "/settings",
            json!({
                "work_minutes": 25,
                "short_break_minutes": 0,
                "long_break_minutes": 15,
                "total_rounds": 4
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("short_break_minutes"));
    assert_eq!(state.get_settings(), Settings::default());
}

#[tokio::test]
async fn skip_requires_dev_mode() {
    let (_, app) = test_app(Settings::default(), false);
    let resp = app.oneshot(post("/skip")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, app) = test_app(Settings::default(), true);
    let resp = app.oneshot(post("/skip")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse = body_json(resp).await;
    assert_eq!(body.timer.remaining, "00:01");
}

#[tokio::test]
async fn health_is_ok() {
    let (_, app) = test_app(Settings::default(), false);
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn oversized_duration_is_rejected_and_timer_stays_usable() {
    let (_, app) = test_app(Settings::default(), false);

    let resp = app
        .clone()
        .oneshot(put_json(
            "/settings",
            json!({
                "work_minutes": 80_000_000,
                "short_break_minutes": 5,
                "long_break_minutes": 15,
                "total_rounds": 4
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app.oneshot(get("/status")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let status: StatusResponse = body_json(resp).await;
    assert_eq!(status.timer.remaining, "25:00");
}
