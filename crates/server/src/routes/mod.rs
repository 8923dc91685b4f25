//! API route handlers.

pub mod hello;
