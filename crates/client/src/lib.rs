//! Greeter Client - Dioxus web application
//!
//! Shows the text served at `/api/hello` as the page heading, fetched once
//! on mount or polled at a fixed interval.

pub mod api_client;
pub mod config;
pub mod logging;
pub mod poller;
pub mod timer;

pub mod components;
pub mod hooks;

pub use api_client::ApiClient;
pub use components::{Greeter, HelloDisplay, HelloView};
pub use config::{ClientConfig, ConfigError};
pub use poller::run_poller;
