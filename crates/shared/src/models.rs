//! The displayed message and the outcomes that update it.

use crate::error::ApiError;

/// Result of one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(String),
    Failure(ApiError),
}

impl From<Result<String, ApiError>> for FetchOutcome {
    fn from(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(text) => FetchOutcome::Success(text),
            Err(err) => FetchOutcome::Failure(err),
        }
    }
}

/// A finished refresh, tagged with the order in which it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// 0 for the refresh issued on mount, then 1, 2, ... per tick.
    pub seq: u64,
    pub outcome: FetchOutcome,
}

/// The single piece of state shown in the heading.
///
/// Completions are applied in the order they finish, not the order they were
/// issued, so with overlapping refreshes `last_seq` can go backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub text: String,
    pub last_error: Option<ApiError>,
    pub completions: u64,
    pub last_seq: Option<u64>,
}

impl DisplayedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished refresh into the state. Failures keep the previous text.
    pub fn apply(&mut self, completion: Completion) {
        self.completions += 1;
        self.last_seq = Some(completion.seq);
        match completion.outcome {
            FetchOutcome::Success(text) => {
                self.text = text;
                self.last_error = None;
            }
            FetchOutcome::Failure(err) => {
                self.last_error = Some(err);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
