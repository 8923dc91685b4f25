//! UI components.

pub mod app;
pub mod hello_display;

pub use app::Greeter;
pub use hello_display::{HelloDisplay, HelloView};
