//! Client configuration.
//!
//! Desktop builds read the environment at startup. Web builds take the API
//! base URL from the page origin and the poll interval from the build
//! environment.

use greeter_shared::PollPolicy;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GREETER_POLL_INTERVAL_MS must be a number of milliseconds or \"off\", got {0:?}")]
    PollInterval(String),
    #[error("GREETER_POLL_INTERVAL_MS must be greater than zero")]
    ZeroPollInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub poll: PollPolicy,
}

impl ClientConfig {
    /// Read the platform configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let (api_base_url, raw_interval) = platform_source();
        Ok(Self {
            api_base_url,
            poll: parse_poll_interval(raw_interval.as_deref())?,
        })
    }
}

/// Parse the poll interval setting.
///
/// Unset polls at the default period; `off`, `none`, `once` or an empty value
/// fetch once on mount.
pub fn parse_poll_interval(raw: Option<&str>) -> Result<PollPolicy, ConfigError> {
    let Some(raw) = raw else {
        return Ok(PollPolicy::default());
    };

    match raw.trim().to_lowercase().as_str() {
        "" | "off" | "none" | "once" => Ok(PollPolicy::Once),
        value => {
            let ms: u64 = value
                .parse()
                .map_err(|_| ConfigError::PollInterval(raw.to_string()))?;
            if ms == 0 {
                return Err(ConfigError::ZeroPollInterval);
            }
            Ok(PollPolicy::from_interval_ms(Some(ms)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_source() -> (String, Option<String>) {
    let api_base_url =
        std::env::var("GREETER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    (api_base_url, std::env::var("GREETER_POLL_INTERVAL_MS").ok())
}

#[cfg(target_arch = "wasm32")]
fn platform_source() -> (String, Option<String>) {
    // reqwest on wasm needs an absolute URL, so resolve against the page
    let api_base_url = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    (
        api_base_url,
        option_env!("GREETER_POLL_INTERVAL_MS").map(str::to_string),
    )
}
