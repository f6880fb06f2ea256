//! # Console Error Types
//!
//! Errors raised by the session layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ├── ValidationError ───► inline field message   (never a toast)    │
//! │     │                                                                   │
//! │     ├── SubmitError ───────► call rejected, nothing changed            │
//! │     │   (InFlight, AlreadySucceeded, TornDown)                          │
//! │     │                                                                   │
//! │     └── RemoteError ───────► error toast, form back to Idle            │
//! │         (Rejected, TimedOut, Unexpected)                                │
//! │                                                                         │
//! │  No error is fatal: every failure leaves the form editable.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use itam_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::state::ConfigError;

// =============================================================================
// Remote Error
// =============================================================================

/// Failure reported by a remote operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RemoteError {
    /// The backend answered and refused the request.
    #[error("request rejected: {reason}")]
    Rejected { reason: String },

    /// No answer before the configured deadline.
    #[error("no response after {after_ms} ms")]
    TimedOut { after_ms: u64 },

    /// Anything that does not match an expected failure shape.
    #[error("unexpected failure: {detail}")]
    Unexpected { detail: String },
}

impl RemoteError {
    /// True for failures the user can act on from the message alone.
    pub fn is_expected(&self) -> bool {
        !matches!(self, RemoteError::Unexpected { .. })
    }
}

// =============================================================================
// Submit Error
// =============================================================================

/// A `submit()` or edit call that was refused without changing state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A remote call for this form is already in flight.
    #[error("a submission is already in progress")]
    InFlight,

    /// The form already succeeded; the instance is about to be discarded.
    #[error("form already submitted successfully")]
    AlreadySucceeded,

    /// The view was unmounted.
    #[error("form has been torn down")]
    TornDown,

    /// The form has no such input.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

// =============================================================================
// Console Error
// =============================================================================

/// Top-level error for the console binary.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A walkthrough step ended somewhere other than expected.
    #[error("session flow stopped: {0}")]
    Flow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_messages() {
        let err = RemoteError::Rejected {
            reason: "invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "request rejected: invalid credentials");
        assert!(err.is_expected());

        assert_eq!(
            RemoteError::TimedOut { after_ms: 500 }.to_string(),
            "no response after 500 ms"
        );
        assert!(!RemoteError::Unexpected {
            detail: "boom".to_string()
        }
        .is_expected());
    }

    #[test]
    fn test_submit_error_converts_to_console_error() {
        let err: ConsoleError = SubmitError::InFlight.into();
        assert_eq!(err.to_string(), "a submission is already in progress");
    }
}
