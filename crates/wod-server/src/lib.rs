//! HTTP API for the World of Darkness dice roller.
//!
//! Exposes the d10 success-counting roll and the splat catalog as JSON over
//! axum. Every request is an independent roll; the only shared state is the
//! dice source.

pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{AppState, create_router, serve};
