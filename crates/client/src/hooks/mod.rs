//! Dioxus hooks.

mod hello_message;

pub use hello_message::use_hello_message;
