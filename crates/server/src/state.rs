//! Application state shared across request handlers.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    greeting: Arc<str>,
    count_calls: bool,
    calls: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(greeting: impl Into<String>, count_calls: bool) -> Self {
        Self {
            greeting: Arc::from(greeting.into()),
            count_calls,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.greeting.clone(), config.count_calls)
    }

    /// Record one call and build the body to send back.
    pub fn next_greeting(&self) -> String {
        let n = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if self.count_calls {
            format!("{} {}", self.greeting, n)
        } else {
            self.greeting.to_string()
        }
    }

    /// Number of `GET /api/hello` calls served so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_call() {
        let state = AppState::new("Hello", true);
        assert_eq!(state.next_greeting(), "Hello 1");
        assert_eq!(state.clone().next_greeting(), "Hello 2");
        assert_eq!(state.calls(), 2);
    }

    #[test]
    fn plain_greeting_still_counts() {
        let state = AppState::new("Hi there", false);
        assert_eq!(state.next_greeting(), "Hi there");
        assert_eq!(state.next_greeting(), "Hi there");
        assert_eq!(state.calls(), 2);
    }
}
