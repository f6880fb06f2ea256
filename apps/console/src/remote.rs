//! # Remote Operations
//!
//! The seam between the console and whatever authenticates, registers and
//! resets passwords. The console only ever talks to [`RemoteOperation`];
//! in this repository the implementation is [`SimulatedRemote`], a fixed
//! delay that always succeeds unless failure injection is on.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  call(request)                                                          │
//! │     │                                                                   │
//! │     │  ... latency ...                                                  │
//! │     ▼                                                                   │
//! │  settles EXACTLY ONCE:  Ok(())  |  Err(RemoteError)                     │
//! │                                                                         │
//! │  The caller may wrap the call in a deadline (call_with_deadline);       │
//! │  hitting it yields RemoteError::TimedOut.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use itam_core::{FormKind, FormValues};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RemoteError;
use crate::state::ConsoleConfig;

/// What a remote call is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestKind {
    SignIn,
    SignUp,
    PasswordReset,
    SignOut,
}

impl RequestKind {
    /// Stable name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::SignIn => "sign_in",
            RequestKind::SignUp => "sign_up",
            RequestKind::PasswordReset => "password_reset",
            RequestKind::SignOut => "sign_out",
        }
    }
}

impl From<FormKind> for RequestKind {
    fn from(form: FormKind) -> Self {
        match form {
            FormKind::SignIn => RequestKind::SignIn,
            FormKind::SignUp => RequestKind::SignUp,
            FormKind::PasswordReset => RequestKind::PasswordReset,
        }
    }
}

/// A submitted form snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub kind: RequestKind,
    pub values: FormValues,
}

impl RemoteRequest {
    pub fn new(kind: RequestKind, values: FormValues) -> Self {
        RemoteRequest { kind, values }
    }
}

/// An opaque asynchronous backend operation.
#[async_trait]
pub trait RemoteOperation: Send + Sync {
    /// Performs the request. Must settle exactly once.
    async fn call(&self, request: &RemoteRequest) -> Result<(), RemoteError>;
}

/// Runs `remote.call` with an optional deadline.
pub async fn call_with_deadline(
    remote: &dyn RemoteOperation,
    request: &RemoteRequest,
    deadline: Option<Duration>,
) -> Result<(), RemoteError> {
    match deadline {
        Some(limit) => match tokio::time::timeout(limit, remote.call(request)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::TimedOut {
                after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
        None => remote.call(request).await,
    }
}

// =============================================================================
// Simulated Remote
// =============================================================================

/// Stand-in backend: sleeps, then succeeds (or fails when told to).
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    config: ConsoleConfig,
}

impl SimulatedRemote {
    pub fn new(config: ConsoleConfig) -> Self {
        SimulatedRemote { config }
    }
}

#[async_trait]
impl RemoteOperation for SimulatedRemote {
    async fn call(&self, request: &RemoteRequest) -> Result<(), RemoteError> {
        let latency = self.config.latency_for(request.kind);

        // Field names only: values carry passwords
        let fields: Vec<&str> = request.values.iter().map(|(k, _)| k).collect();
        debug!(kind = request.kind.as_str(), ?fields, ?latency, "simulated remote call");

        tokio::time::sleep(latency).await;

        if self.config.simulate_failure {
            return Err(RemoteError::Rejected {
                reason: "The server is unavailable (simulated failure).".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverSettles;

    #[async_trait]
    impl RemoteOperation for NeverSettles {
        async fn call(&self, _request: &RemoteRequest) -> Result<(), RemoteError> {
            std::future::pending().await
        }
    }

    fn request(kind: RequestKind) -> RemoteRequest {
        RemoteRequest::new(kind, FormValues::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_remote_succeeds_after_latency() {
        let remote = SimulatedRemote::new(ConsoleConfig::default());
        let started = tokio::time::Instant::now();

        remote.call(&request(RequestKind::SignUp)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_remote_failure_injection() {
        let remote = SimulatedRemote::new(ConsoleConfig {
            simulate_failure: true,
            ..ConsoleConfig::default()
        });

        let err = remote.call(&request(RequestKind::SignIn)).await.unwrap_err();
        assert!(matches!(err, RemoteError::Rejected { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_turns_hang_into_timeout() {
        let err = call_with_deadline(
            &NeverSettles,
            &request(RequestKind::PasswordReset),
            Some(Duration::from_millis(300)),
        )
        .await
        .unwrap_err();

        assert_eq!(err, RemoteError::TimedOut { after_ms: 300 });
    }

    #[test]
    fn test_request_kind_from_form() {
        assert_eq!(RequestKind::from(FormKind::SignUp), RequestKind::SignUp);
        assert_eq!(RequestKind::SignOut.as_str(), "sign_out");
    }
}
