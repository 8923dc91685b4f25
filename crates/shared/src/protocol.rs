//! Wire constants and the refresh trigger policy.

use std::time::Duration;

/// Path the front-end polls for its heading.
pub const HELLO_PATH: &str = "/api/hello";

/// Liveness check served next to the greeting.
pub const HEALTH_PATH: &str = "/api/health";

/// Period used when polling is enabled without an explicit interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// When the heading is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPolicy {
    /// Refresh exactly once, right after mount.
    Once,
    /// Refresh right after mount, then again every period until unmount.
    Every(Duration),
}

impl PollPolicy {
    /// `None` means fetch once; `Some(ms)` means poll every `ms` milliseconds.
    pub fn from_interval_ms(poll_interval_ms: Option<u64>) -> Self {
        match poll_interval_ms {
            None => PollPolicy::Once,
            Some(ms) => PollPolicy::Every(Duration::from_millis(ms)),
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy::Every(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_selects_policy() {
        assert_eq!(PollPolicy::from_interval_ms(None), PollPolicy::Once);
        assert_eq!(
            PollPolicy::from_interval_ms(Some(1000)),
            PollPolicy::Every(Duration::from_secs(1))
        );
    }

    #[test]
    fn default_polls_every_quarter_second() {
        assert_eq!(
            PollPolicy::default(),
            PollPolicy::Every(Duration::from_millis(250))
        );
    }
}
