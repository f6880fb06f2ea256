//! # Notification and Navigation Sinks
//!
//! Where the console's side effects go. The UI owns toast delivery and the
//! router; the session layer only sees these two traits.
//!
//! ## Implementations
//! - [`TracingNotifier`] - logs every toast (used by the binary)
//! - [`RecordingNotifier`] - keeps toasts in memory for inspection
//! - [`RouteHistory`] - records navigation requests and the current route

use std::sync::{Arc, Mutex};

use itam_core::{Notification, NotificationKind, Route};
use tracing::{info, warn};

/// Accepts toast notifications. Fire and forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Accepts "go to route" requests.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info => info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            NotificationKind::Error => warn!(
                title = %notification.title,
                description = %notification.description,
                "error notification"
            ),
        }
    }
}

/// Collects notifications; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .expect("notification buffer mutex poisoned")
            .clone()
    }

    /// Titles only, oldest first.
    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }

    pub fn len(&self) -> usize {
        self.received
            .lock()
            .expect("notification buffer mutex poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .expect("notification buffer mutex poisoned")
            .push(notification);
    }
}

/// Records navigation requests; clones share the same history.
///
/// The console starts on the sign-in page, so `current()` is `/` until the
/// first navigation.
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    visited: Arc<Mutex<Vec<Route>>>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation requests received so far, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.visited
            .lock()
            .expect("route history mutex poisoned")
            .clone()
    }

    /// The route most recently navigated to.
    pub fn current(&self) -> Route {
        self.visited
            .lock()
            .expect("route history mutex poisoned")
            .last()
            .copied()
            .unwrap_or(Route::SignIn)
    }
}

impl NavigationSink for RouteHistory {
    fn navigate(&self, route: Route) {
        info!(route = %route, "navigate");
        self.visited
            .lock()
            .expect("route history mutex poisoned")
            .push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_shares_buffer_between_clones() {
        let recorder = RecordingNotifier::new();
        let sink: Arc<dyn NotificationSink> = Arc::new(recorder.clone());

        sink.notify(Notification::info("Login successful", "Welcome"));

        assert_eq!(recorder.titles(), vec!["Login successful".to_string()]);
        assert!(!recorder.is_empty());
    }

    #[test]
    fn test_route_history_current() {
        let history = RouteHistory::new();
        assert_eq!(history.current(), Route::SignIn);

        history.navigate(Route::Dashboard);
        history.navigate(Route::SignIn);

        assert_eq!(history.history(), vec![Route::Dashboard, Route::SignIn]);
        assert_eq!(history.current(), Route::SignIn);
    }
}
