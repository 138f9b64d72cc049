use wod_server::{ServerConfig, telemetry};

/// Run the HTTP API until Ctrl+C. Flags override `WOD_*` environment values.
pub fn run(
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
    max_dice: Option<u32>,
) -> Result<(), String> {
    telemetry::init();

    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max_dice) = max_dice {
        config = config.with_max_dice(max_dice);
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    runtime
        .block_on(wod_server::serve(config))
        .map_err(|e| format!("{e:#}"))
}
