//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::PlannerConfig;

/// Static assets directory when `RUTA_STATIC_DIR` is unset.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Planner settings
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `RUTA_BIND_ADDR`, `RUTA_STATIC_DIR` and `RUTA_PLAN_DELAY_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("RUTA_BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: "RUTA_BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("RUTA_STATIC_DIR").filter(|v| !v.is_empty()) {
            config.static_dir = PathBuf::from(value);
        }

        if let Some(value) = lookup("RUTA_PLAN_DELAY_MS") {
            let delay_ms = value.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "RUTA_PLAN_DELAY_MS",
                value: value.clone(),
                reason: e.to_string(),
            })?;
            config.planner = PlannerConfig::new(delay_ms);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            planner: PlannerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.planner.simulated_delay_ms, 1500);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("RUTA_BIND_ADDR", "0.0.0.0:8080"),
            ("RUTA_STATIC_DIR", "/srv/ruta/static"),
            ("RUTA_PLAN_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.static_dir, PathBuf::from("/srv/ruta/static"));
        assert_eq!(config.planner.simulated_delay_ms, 0);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("RUTA_BIND_ADDR", "localhost")]))
            .unwrap_err();
        let ConfigError::Invalid { var, value, .. } = err;
        assert_eq!(var, "RUTA_BIND_ADDR");
        assert_eq!(value, "localhost");
    }

    #[test]
    fn rejects_bad_delay() {
        let err = ServerConfig::from_lookup(lookup(&[("RUTA_PLAN_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid value for RUTA_PLAN_DELAY_MS"));
    }

    #[test]
    fn empty_static_dir_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[("RUTA_STATIC_DIR", "")])).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }
}
