use crate::error::{ClientError, ValidationError};

/// Lifecycle of the single request a flow may have outstanding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    InFlight,
    Resolved(T),
    Failed(ClientError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            RequestState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Why a `submit()` call did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Invalid(ValidationError),
    Busy,
}

/// What a `submit()` call handed back to its caller.
///
/// `Resolved` is the only way a result leaves a flow; the caller decides
/// where to display it.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Skipped(SkipReason),
    Resolved(T),
    Failed(ClientError),
}

impl<T> Submission<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Submission::Skipped(_))
    }

    pub fn into_resolved(self) -> Option<T> {
        match self {
            Submission::Resolved(value) => Some(value),
            _ => None,
        }
    }
}
