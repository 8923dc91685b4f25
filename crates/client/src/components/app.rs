//! Application root.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::components::{HelloDisplay, HelloView};
use crate::config::{ClientConfig, ConfigError};

/// Provides the [`ApiClient`] and mounts the page.
///
/// A configuration error is shown in the status line instead of polling with
/// settings nobody asked for.
#[component]
pub fn Greeter(config: Result<ClientConfig, ConfigError>) -> Element {
    let base_url = config
        .as_ref()
        .map(|c| c.api_base_url.clone())
        .unwrap_or_default();
    use_context_provider(|| ApiClient::new().with_base_url(base_url));

    match config {
        Ok(config) => rsx! {
            HelloDisplay { policy: config.poll }
        },
        Err(e) => rsx! {
            HelloView { message: String::new(), error: Some(e.to_string()) }
        },
    }
}
