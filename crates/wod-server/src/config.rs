//! Server configuration.
//!
//! Reads `WOD_HOST`, `WOD_PORT`, `WOD_SEED` and `WOD_MAX_DICE`. Values that
//! are missing or fail to parse keep their defaults.

use std::str::FromStr;

use wod_mechanics::MAX_DICE;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// RNG seed for reproducible rolls; fresh OS entropy when unset.
    pub seed: Option<u64>,
    /// Largest pool a single request may roll.
    pub max_dice: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed: None,
            max_dice: MAX_DICE,
        }
    }
}

impl ServerConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("WOD_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_value(lookup("WOD_PORT")).unwrap_or(defaults.port),
            seed: parse_value(lookup("WOD_SEED")),
            max_dice: parse_value(lookup("WOD_MAX_DICE"))
                .map_or(defaults.max_dice, |n: u32| n.clamp(1, MAX_DICE)),
        }
    }

    /// Set the bind interface.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pool limit (clamped to 1 through the mechanics maximum).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice.clamp(1, MAX_DICE);
        self
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}
