//! # Configuration State
//!
//! Console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ITAM_*`)
//! 2. Defaults (this file)
//!
//! Latencies default to what the simulated backend has always used: one
//! second for sign-in, reset and logout, one and a half for sign-up.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::remote::RequestKind;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Product name in the auth header.
    pub title: String,

    /// Simulated sign-in latency in milliseconds.
    pub sign_in_latency_ms: u64,

    /// Simulated sign-up latency in milliseconds.
    pub sign_up_latency_ms: u64,

    /// Simulated password-reset latency in milliseconds.
    pub reset_latency_ms: u64,

    /// Simulated logout latency in milliseconds.
    pub sign_out_latency_ms: u64,

    /// Deadline for a remote call. `None` waits forever.
    pub remote_timeout_ms: Option<u64>,

    /// Make every simulated remote call fail.
    pub simulate_failure: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            title: itam_core::CONSOLE_TITLE.to_string(),
            sign_in_latency_ms: 1000,
            sign_up_latency_ms: 1500,
            reset_latency_ms: 1000,
            sign_out_latency_ms: 1000,
            remote_timeout_ms: None,
            simulate_failure: false,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `ITAM_CONSOLE_TITLE`: Override header title
    /// - `ITAM_SIGN_IN_LATENCY_MS`, `ITAM_SIGN_UP_LATENCY_MS`,
    ///   `ITAM_RESET_LATENCY_MS`, `ITAM_SIGN_OUT_LATENCY_MS`: Simulated latencies
    /// - `ITAM_REMOTE_TIMEOUT_MS`: Remote call deadline (unset = none)
    /// - `ITAM_SIMULATE_FAILURE`: `true` to fail every remote call
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ConsoleConfig::default();

        let millis = |key: &str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string())),
                None => Ok(default),
            }
        };

        let remote_timeout_ms = match lookup("ITAM_REMOTE_TIMEOUT_MS") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("ITAM_REMOTE_TIMEOUT_MS".to_string()))?,
            ),
            None => defaults.remote_timeout_ms,
        };

        let simulate_failure = match lookup("ITAM_SIMULATE_FAILURE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ITAM_SIMULATE_FAILURE".to_string()))?,
            None => defaults.simulate_failure,
        };

        Ok(ConsoleConfig {
            title: lookup("ITAM_CONSOLE_TITLE").unwrap_or(defaults.title),
            sign_in_latency_ms: millis("ITAM_SIGN_IN_LATENCY_MS", defaults.sign_in_latency_ms)?,
            sign_up_latency_ms: millis("ITAM_SIGN_UP_LATENCY_MS", defaults.sign_up_latency_ms)?,
            reset_latency_ms: millis("ITAM_RESET_LATENCY_MS", defaults.reset_latency_ms)?,
            sign_out_latency_ms: millis("ITAM_SIGN_OUT_LATENCY_MS", defaults.sign_out_latency_ms)?,
            remote_timeout_ms,
            simulate_failure,
        })
    }

    /// Simulated latency for one request kind.
    pub fn latency_for(&self, kind: RequestKind) -> Duration {
        let ms = match kind {
            RequestKind::SignIn => self.sign_in_latency_ms,
            RequestKind::SignUp => self.sign_up_latency_ms,
            RequestKind::PasswordReset => self.reset_latency_ms,
            RequestKind::SignOut => self.sign_out_latency_ms,
        };
        Duration::from_millis(ms)
    }

    /// Remote call deadline, if any.
    pub fn remote_timeout(&self) -> Option<Duration> {
        self.remote_timeout_ms.map(Duration::from_millis)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
