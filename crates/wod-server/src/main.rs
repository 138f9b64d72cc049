//! Standalone HTTP server for the World of Darkness dice roller.

use wod_server::{ServerConfig, serve, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    serve(ServerConfig::from_env()).await
}
