//! Serving the front-end next to the API.
//!
//! The API router is matched first, so `/api/*` (including unknown API paths)
//! never reaches the front-end fallback.

use std::path::PathBuf;

use axum::{http::Uri, Router};
use axum_reverse_proxy::ReverseProxy;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::FrontendMode;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("GREETER_PROXY_TARGET must be an http(s) URL, got {0:?}")]
    ProxyTarget(String),
    #[error("front-end directory {} has no index.html", .0.display())]
    MissingIndex(PathBuf),
}

/// Attach the fallback `mode` asks for to an API router.
pub fn with_frontend(api: Router, mode: &FrontendMode) -> Result<Router, FrontendError> {
    match mode {
        FrontendMode::Proxy { target } => {
            let target = proxy_target(target)?;
            tracing::info!(upstream = %target, "Frontend mode: proxy to dev server");
            Ok(api.fallback_service(ReverseProxy::new("/".to_string(), target)))
        }
        FrontendMode::Static { dir } => {
            let dir = PathBuf::from(dir);
            let index = dir.join("index.html");
            if !index.is_file() {
                return Err(FrontendError::MissingIndex(dir));
            }
            tracing::info!(dir = %dir.display(), "Frontend mode: static bundle");
            // Unknown paths get index.html so a reload on any page still boots the app
            let bundle = ServeDir::new(&dir).fallback(ServeFile::new(index));
            Ok(api.fallback_service(bundle))
        }
        FrontendMode::Disabled => {
            tracing::info!("Frontend mode: disabled (API only)");
            Ok(api)
        }
    }
}

fn proxy_target(raw: &str) -> Result<String, FrontendError> {
    let uri: Uri = raw
        .parse()
        .map_err(|_| FrontendError::ProxyTarget(raw.to_string()))?;
    match (uri.scheme_str(), uri.authority()) {
        (Some("http" | "https"), Some(_)) => Ok(raw.trim_end_matches('/').to_string()),
        _ => Err(FrontendError::ProxyTarget(raw.to_string())),
    }
}
