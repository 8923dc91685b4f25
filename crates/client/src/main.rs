//! Greeter Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use greeter_client::{log_error, ClientConfig, Greeter};

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("greeter_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::load();
        if let Err(e) = &config {
            log_error!("invalid client configuration: {}", e);
        }
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Greeter { config }
    }
}
