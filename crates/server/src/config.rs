//! Server configuration from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_GREETING: &str = "Hello";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GREETER_ADDR must be a socket address like 0.0.0.0:8080, got {0:?}")]
    Addr(String),
    #[error("GREETER_COUNT_CALLS must be one of 1/0/true/false/yes/no, got {0:?}")]
    Flag(String),
    #[error("GREETER_FRONTEND_MODE must be proxy, static or disabled, got {0:?}")]
    FrontendMode(String),
}

/// Frontend serving mode configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendMode {
    /// Proxy requests to a development server (e.g., Dioxus dx serve).
    Proxy { target: String },
    /// Serve static files from a directory.
    Static { dir: String },
    /// No frontend serving - API only.
    Disabled,
}

impl FrontendMode {
    /// Environment variables:
    /// - `GREETER_FRONTEND_MODE`: "proxy" | "static" | "disabled" (default: "disabled")
    /// - `GREETER_PROXY_TARGET`: Target URL for proxy mode (default: "http://localhost:8081")
    /// - `GREETER_STATIC_DIR`: Directory for static mode (default: "./public")
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = lookup("GREETER_FRONTEND_MODE")
            .unwrap_or_else(|| "disabled".to_string())
            .to_lowercase();

        match mode.trim() {
            "proxy" => {
                let target = lookup("GREETER_PROXY_TARGET")
                    .unwrap_or_else(|| "http://localhost:8081".to_string());
                Ok(FrontendMode::Proxy { target })
            }
            "static" => {
                let dir = lookup("GREETER_STATIC_DIR").unwrap_or_else(|| "./public".to_string());
                Ok(FrontendMode::Static { dir })
            }
            "disabled" | "" => Ok(FrontendMode::Disabled),
            other => Err(ConfigError::FrontendMode(other.to_string())),
        }
    }
}

/// Everything the server reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Body returned by `GET /api/hello`.
    pub greeting: String,
    /// Append a per-call counter to the greeting.
    pub count_calls: bool,
    pub frontend: FrontendMode,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("GREETER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::Addr(raw_addr.clone()))?;

        let greeting = lookup("GREETER_GREETING").unwrap_or_else(|| DEFAULT_GREETING.to_string());

        let count_calls = match lookup("GREETER_COUNT_CALLS") {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Flag(raw))?,
        };

        Ok(Self {
            addr,
            greeting,
            count_calls,
            frontend: FrontendMode::from_lookup(&lookup)?,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.greeting, "Hello");
        assert!(!cfg.count_calls);
        assert_eq!(cfg.frontend, FrontendMode::Disabled);
    }

    #[test]
    fn frontend_modes() {
        let cfg = config(&[("GREETER_FRONTEND_MODE", "Proxy")]).unwrap();
        assert_eq!(
            cfg.frontend,
            FrontendMode::Proxy {
                target: "http://localhost:8081".to_string()
            }
        );

        let cfg = config(&[
            ("GREETER_FRONTEND_MODE", "static"),
            ("GREETER_STATIC_DIR", "/srv/greeter"),
        ])
        .unwrap();
        assert_eq!(
            cfg.frontend,
            FrontendMode::Static {
                dir: "/srv/greeter".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("GREETER_ADDR", "localhost")]),
            Err(ConfigError::Addr("localhost".to_string()))
        );
        assert_eq!(
            config(&[("GREETER_COUNT_CALLS", "maybe")]),
            Err(ConfigError::Flag("maybe".to_string()))
        );
        assert_eq!(
            config(&[("GREETER_FRONTEND_MODE", "cdn")]),
            Err(ConfigError::FrontendMode("cdn".to_string()))
        );
    }

    #[test]
    fn counter_flag() {
        assert!(config(&[("GREETER_COUNT_CALLS", "true")]).unwrap().count_calls);
        assert!(!config(&[("GREETER_COUNT_CALLS", "0")]).unwrap().count_calls);
    }
}
