//! Configuration management for the Smart PDF Companion server

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub maestra: MaestraConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaestraConfig {
    /// Base URL of the Maestra backend
    pub url: String,
    pub mode: MaestraMode,
}

/// Where chat replies and manifests come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaestraMode {
    /// Deterministic local replies and synthesized manifests
    Mock,
    /// Proxy to the Maestra backend, degrading to fallbacks on failure
    Remote,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            maestra: MaestraConfig {
                url: "http://localhost:8825".to_string(),
                mode: MaestraMode::Mock,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            maestra: MaestraConfig {
                url: env::var("MAESTRA_URL")
                    .unwrap_or_else(|_| "http://localhost:8825".to_string()),
                mode: match env::var("MAESTRA_MODE")
                    .unwrap_or_else(|_| "mock".to_string())
                    .as_str()
                {
                    "remote" => MaestraMode::Remote,
                    _ => MaestraMode::Mock,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.maestra.url, "http://localhost:8825");
        assert_eq!(config.maestra.mode, MaestraMode::Mock);
    }
}
