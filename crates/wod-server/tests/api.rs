//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), so no TCP binding is
//! needed. Rolls come from scripted dice so responses are exact.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wod_mechanics::{MAX_DICE, ScriptedDice};
use wod_server::{AppState, ServerConfig, create_router};

fn app(faces: &[u32]) -> Router {
    create_router(AppState::new(ScriptedDice::new(faces), MAX_DICE))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ── GET / ───────────────────────────────────────────────────────────

#[tokio::test]
async fn home_reports_running() {
    let (status, json) = get(app(&[]), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "WOD Dice Roller API is running!");
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, json) = get(app(&[]), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
}

// ── GET /roll ───────────────────────────────────────────────────────

#[tokio::test]
async fn roll_with_scripted_dice() {
    let (status, json) = get(app(&[7, 2, 9]), "/roll?num_dice=3&difficulty=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "results": [7, 2, 9], "successes": 2, "difficulty": 7 })
    );
}

#[tokio::test]
async fn roll_defaults_to_one_die_at_six() {
    let (status, json) = get(app(&[6]), "/roll").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "results": [6], "successes": 1, "difficulty": 6 })
    );
}

#[tokio::test]
async fn roll_rejects_non_integer_dice() {
    let (status, json) = get(app(&[]), "/roll?num_dice=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("num_dice"));
}

#[tokio::test]
async fn roll_rejects_non_integer_difficulty() {
    let (status, json) = get(app(&[]), "/roll?num_dice=2&difficulty=hard").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("difficulty"));
}

#[tokio::test]
async fn roll_rejects_zero_dice() {
    let (status, json) = get(app(&[]), "/roll?num_dice=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn roll_accepts_difficulty_above_ten() {
    let (status, json) = get(app(&[10, 10, 9]), "/roll?num_dice=3&difficulty=11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "results": [10, 10, 9], "successes": 0, "difficulty": 11 })
    );
}

#[tokio::test]
async fn roll_accepts_difficulty_zero() {
    let (status, json) = get(app(&[2, 5]), "/roll?num_dice=2&difficulty=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["successes"], 2);
}

#[tokio::test]
async fn roll_reports_overflowing_dice_as_too_large() {
    let (status, json) = get(app(&[]), "/roll?num_dice=99999999999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid num_dice: '99999999999' is too large");
}

#[tokio::test]
async fn roll_respects_configured_limit() {
    let small = create_router(AppState::new(ScriptedDice::new([5]), 3));
    let (status, json) = get(small, "/roll?num_dice=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "dice count 4 exceeds the maximum of 3");
}

#[tokio::test]
async fn seeded_servers_roll_alike() {
    let config = ServerConfig::default().with_seed(42);
    let uri = "/roll?num_dice=10&difficulty=6";
    let (_, a) = get(create_router(AppState::from_config(&config)), uri).await;
    let (_, b) = get(create_router(AppState::from_config(&config)), uri).await;
    assert_eq!(a, b);
    let faces = a["results"].as_array().unwrap();
    assert_eq!(faces.len(), 10);
    assert!(faces.iter().all(|v| (1..=10u64).contains(&v.as_u64().unwrap())));
}

// ── GET /splats ─────────────────────────────────────────────────────

#[tokio::test]
async fn splats_lists_catalog() {
    let (status, json) = get(app(&[]), "/splats").await;
    assert_eq!(status, StatusCode::OK);
    let splats = json.as_array().unwrap();
    assert_eq!(splats.len(), 11);
    assert_eq!(splats[0]["name"], "Vampire");
    assert_eq!(splats[4]["name"], "Wraith");
    assert_eq!(splats[4]["rolls"][1]["label"], "Angst");
    assert_eq!(splats[4]["rolls"][1]["difficulty"]["value"], 6);
}
