//! Axum router and handlers.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Status message |
//! | GET | `/health` | Health check |
//! | GET | `/roll` | Roll `num_dice` d10s against `difficulty` |
//! | GET | `/splats` | The splat catalog with each splat's rolls |

use std::num::{IntErrorKind, ParseIntError};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wod_mechanics::{DEFAULT_DIFFICULTY, DiceSource, RollPreset, RollRequest, RollResult, Splat};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared router state: the dice and the pool limit.
#[derive(Clone)]
pub struct AppState {
    dice: Arc<Mutex<Box<dyn DiceSource + Send>>>,
    max_dice: u32,
}

impl AppState {
    /// State rolling from `dice`, accepting pools up to `max_dice`.
    pub fn new(dice: impl DiceSource + Send + 'static, max_dice: u32) -> Self {
        Self {
            dice: Arc::new(Mutex::new(Box::new(dice))),
            max_dice,
        }
    }

    /// State for a configured server: seeded when the config has a seed.
    pub fn from_config(config: &ServerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, config.max_dice)
    }

    fn roll(&self, request: &RollRequest) -> RollResult {
        // A panic while rolling cannot leave the source half-updated.
        let mut dice = self.dice.lock().unwrap_or_else(PoisonError::into_inner);
        wod_mechanics::roll(request, &mut **dice)
    }
}

/// Build the API router over `state`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_home))
        .route("/health", get(handle_health_check))
        .route("/roll", get(handle_roll))
        .route("/splats", get(handle_splats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `config.bind_address()` and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::from_config(&config));
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        seeded = config.seed.is_some(),
        max_dice = config.max_dice,
        "WOD dice roller API listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

// ── Request/Response types ──────────────────────────────────────────

/// Raw `/roll` query. Kept as strings so bad values get a JSON error.
#[derive(Debug, Deserialize)]
struct RollQuery {
    num_dice: Option<String>,
    difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
struct RollResponse {
    results: Vec<u32>,
    successes: u32,
    difficulty: u32,
}

impl From<RollResult> for RollResponse {
    fn from(result: RollResult) -> Self {
        Self {
            results: result.results,
            successes: result.successes,
            difficulty: result.difficulty,
        }
    }
}

#[derive(Debug, Serialize)]
struct SplatEntry {
    name: &'static str,
    rolls: &'static [RollPreset],
}

fn parse_param(name: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ApiError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => ApiError::ParameterTooLarge {
                name,
                value: value.to_string(),
            },
            _ => ApiError::InvalidParameter {
                name,
                value: value.to_string(),
            },
        }),
    }
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "WOD Dice Roller API is running!" }))
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_roll(
    State(state): State<AppState>,
    Query(query): Query<RollQuery>,
) -> Result<Json<RollResponse>, ApiError> {
    let num_dice = parse_param("num_dice", query.num_dice.as_deref(), 1)?;
    let difficulty = parse_param("difficulty", query.difficulty.as_deref(), DEFAULT_DIFFICULTY)?;
    let request = RollRequest::bounded(num_dice, difficulty, state.max_dice)?;
    Ok(Json(state.roll(&request).into()))
}

async fn handle_splats() -> Json<Vec<SplatEntry>> {
    Json(
        Splat::ALL
            .into_iter()
            .map(|splat| SplatEntry {
                name: splat.name(),
                rolls: splat.presets(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(parse_param("num_dice", None, 1).unwrap(), 1);
        assert_eq!(parse_param("difficulty", None, 6).unwrap(), 6);
    }

    #[test]
    fn params_are_trimmed() {
        assert_eq!(parse_param("num_dice", Some(" 4 "), 1).unwrap(), 4);
    }

    #[test]
    fn bad_params_are_rejected() {
        for raw in ["abc", "-2", "3.5", ""] {
            assert!(parse_param("num_dice", Some(raw), 1).is_err(), "{raw}");
        }
    }

    #[test]
    fn overflowing_params_are_too_large() {
        let err = parse_param("num_dice", Some("99999999999"), 1).unwrap_err();
        assert!(matches!(
            err,
            ApiError::ParameterTooLarge {
                name: "num_dice",
                ..
            }
        ));
        let err = parse_param("num_dice", Some("-99999999999"), 1).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { .. }));
    }

    #[test]
    fn response_keeps_only_wire_fields() {
        let request = RollRequest::new(3, 7).unwrap();
        let result = RollResult::from_values(&request, vec![7, 2, 9]);
        let json = serde_json::to_value(RollResponse::from(result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "results": [7, 2, 9], "successes": 2, "difficulty": 7 })
        );
    }
}
