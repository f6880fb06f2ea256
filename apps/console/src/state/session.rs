//! # Session Navigator
//!
//! Turns a settled remote call into the user-visible consequence: a toast,
//! and on success either a page change or a local display change.
//!
//! ## Outcome Table
//! ```text
//! ┌────────────────┬────────────────────────────────┬──────────────────────────┐
//! │ Request        │ Success                        │ Failure                  │
//! ├────────────────┼────────────────────────────────┼──────────────────────────┤
//! │ SignIn         │ toast + navigate /dashboard    │ error toast only         │
//! │ SignUp         │ toast + navigate /             │ error toast only         │
//! │ PasswordReset  │ toast + "check your email"     │ error toast only         │
//! │ SignOut        │ toast + navigate /             │ error toast only         │
//! └────────────────┴────────────────────────────────┴──────────────────────────┘
//! ```

use std::sync::Arc;

use itam_core::form::fields;
use itam_core::{FormValues, Notification, Route};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use ts_rs::TS;

use crate::error::RemoteError;
use crate::remote::RequestKind;
use crate::sinks::{NavigationSink, NotificationSink};

/// How a remote call settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(RemoteError),
}

/// What the view should do after a successful outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavigationEffect {
    /// A navigation request was issued for this route.
    Navigate { route: Route },

    /// Stay on the page and show the "check your email" panel.
    ShowResetConfirmation { email: String },
}

/// Maps outcomes to notifications and navigation requests.
#[derive(Clone)]
pub struct SessionNavigator {
    notifier: Arc<dyn NotificationSink>,
    navigation: Arc<dyn NavigationSink>,
}

impl SessionNavigator {
    pub fn new(notifier: Arc<dyn NotificationSink>, navigation: Arc<dyn NavigationSink>) -> Self {
        SessionNavigator {
            notifier,
            navigation,
        }
    }

    /// Plain link navigation (no notification).
    pub fn go_to(&self, route: Route) {
        self.navigation.navigate(route);
    }

    /// The sink toasts go to, for components that notify on their own.
    pub fn notifier(&self) -> Arc<dyn NotificationSink> {
        Arc::clone(&self.notifier)
    }

    /// Emits the outcome's side effects.
    ///
    /// Issues at most one navigation request. Returns `None` on failure.
    pub fn on_outcome(
        &self,
        kind: RequestKind,
        outcome: &Outcome,
        values: &FormValues,
    ) -> Option<NavigationEffect> {
        match outcome {
            Outcome::Success => {
                let (title, description) = success_copy(kind);
                self.notifier.notify(Notification::info(title, description));

                let effect = match kind {
                    RequestKind::SignIn => NavigationEffect::Navigate {
                        route: Route::Dashboard,
                    },
                    RequestKind::SignUp | RequestKind::SignOut => NavigationEffect::Navigate {
                        route: Route::SignIn,
                    },
                    RequestKind::PasswordReset => NavigationEffect::ShowResetConfirmation {
                        email: values.get(fields::EMAIL).to_string(),
                    },
                };

                if let NavigationEffect::Navigate { route } = &effect {
                    self.navigation.navigate(*route);
                }

                Some(effect)
            }
            Outcome::Failure(err) => {
                let (title, fallback) = failure_copy(kind);
                let description = match err {
                    RemoteError::Rejected { reason } => {
                        warn!(kind = kind.as_str(), %reason, "remote operation rejected");
                        reason.clone()
                    }
                    RemoteError::TimedOut { after_ms } => {
                        warn!(kind = kind.as_str(), after_ms, "remote operation timed out");
                        fallback.to_string()
                    }
                    RemoteError::Unexpected { detail } => {
                        error!(kind = kind.as_str(), %detail, "unexpected remote failure");
                        fallback.to_string()
                    }
                };

                self.notifier.notify(Notification::error(title, description));
                None
            }
        }
    }
}

fn success_copy(kind: RequestKind) -> (&'static str, &'static str) {
    match kind {
        RequestKind::SignIn => (
            "Login successful",
            "Welcome to the IT Management dashboard.",
        ),
        RequestKind::SignUp => (
            "Account created successfully",
            "You can now sign in with your credentials.",
        ),
        RequestKind::PasswordReset => (
            "Reset link sent",
            "If an account exists with this email, you will receive a password reset link.",
        ),
        RequestKind::SignOut => (
            "Logged out successfully",
            "You have been logged out of your account.",
        ),
    }
}

fn failure_copy(kind: RequestKind) -> (&'static str, &'static str) {
    match kind {
        RequestKind::SignIn => ("Login failed", "Please check your credentials and try again."),
        RequestKind::SignUp => ("Error", "Failed to create account. Please try again."),
        RequestKind::PasswordReset => ("Request failed", "Failed to send reset link. Please try again."),
        RequestKind::SignOut => ("Logout failed", "Could not log out. Please try again."),
    }
}
