//! # Domain Types
//!
//! Core types shared by the credential flow and the dashboard shell.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Route       │   │    ModuleId     │   │  Notification   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  SignIn   "/"   │   │  Dashboard      │   │  kind           │       │
//! │  │  SignUp         │   │  Users          │   │  title          │       │
//! │  │  ForgotPassword │   │  Purchases ...  │   │  description    │       │
//! │  │  Dashboard      │   │  Chatbot        │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Route
// =============================================================================

/// Top-level pages of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    /// `/` - the sign-in page.
    SignIn,
    /// `/signup`
    SignUp,
    /// `/forgot-password`
    ForgotPassword,
    /// `/dashboard` - the module shell.
    Dashboard,
}

impl Route {
    /// URL path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::SignIn => "/",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Resolves a path to a route.
    pub fn from_path(path: &str) -> Result<Self, CoreError> {
        match path {
            "/" => Ok(Route::SignIn),
            "/signup" => Ok(Route::SignUp),
            "/forgot-password" => Ok(Route::ForgotPassword),
            "/dashboard" => Ok(Route::Dashboard),
            other => Err(CoreError::UnknownRoute(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// Module Id
// =============================================================================

/// Selectable sections of the dashboard shell.
///
/// Closed set: adding a module forces every `match` on it (content lookup,
/// sidebar order) to be updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    #[default]
    Dashboard,
    Users,
    Purchases,
    Materials,
    Stock,
    Assets,
    Chatbot,
}

impl ModuleId {
    /// Sidebar order.
    pub const ALL: [ModuleId; 7] = [
        ModuleId::Dashboard,
        ModuleId::Users,
        ModuleId::Purchases,
        ModuleId::Materials,
        ModuleId::Stock,
        ModuleId::Assets,
        ModuleId::Chatbot,
    ];

    /// Stable identifier (matches the serialized form).
    pub const fn as_str(self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Users => "users",
            ModuleId::Purchases => "purchases",
            ModuleId::Materials => "materials",
            ModuleId::Stock => "stock",
            ModuleId::Assets => "assets",
            ModuleId::Chatbot => "chatbot",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownModule(s.to_string()))
    }
}

// =============================================================================
// Notification
// =============================================================================

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient toast-style banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,

    /// When the notification was raised.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Informational toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Info, title, description)
    }

    /// Destructive (error) toast.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Error, title, description)
    }

    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Checks if this is an error toast.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
