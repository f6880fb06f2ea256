//! # Views Module
//!
//! One struct per page. A view owns the state objects for its page and tears
//! them down when it goes away.
//!
//! ## View Organization
//! ```text
//! views/
//! ├── mod.rs             ◄─── You are here (shared pieces)
//! ├── sign_in.rs         ◄─── "/"                 SignInView
//! ├── sign_up.rs         ◄─── "/signup"           SignUpView
//! ├── password_reset.rs  ◄─── "/forgot-password"  PasswordResetView
//! └── dashboard.rs       ◄─── "/dashboard"        DashboardView
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View::new(&ctx)  ── mount: fresh values, fresh controller (Idle)       │
//! │        │                                                                │
//! │        ├── set_*()  / submit()   (user interaction)                    │
//! │        │                                                                │
//! │        └── unmount() or drop ── controller torn down; a late remote    │
//! │                                  result is discarded                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod dashboard;
mod password_reset;
mod sign_in;
mod sign_up;

pub use dashboard::DashboardView;
pub use password_reset::{PasswordResetView, ResetDisplay};
pub use sign_in::{PasswordInputType, SignInView};
pub use sign_up::SignUpView;

use itam_core::Route;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A navigation link rendered on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub label: String,
    pub route: Route,
}

impl Link {
    pub fn new(label: &str, route: Route) -> Self {
        Link {
            label: label.to_string(),
            route,
        }
    }
}

/// Title block shown above every auth form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuthHeader {
    pub title: String,
    pub tagline: String,
}

impl AuthHeader {
    pub fn new(title: impl Into<String>) -> Self {
        AuthHeader {
            title: title.into(),
            tagline: itam_core::CONSOLE_TAGLINE.to_string(),
        }
    }
}

impl Default for AuthHeader {
    fn default() -> Self {
        AuthHeader::new(itam_core::CONSOLE_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_auth_header() {
        let header = AuthHeader::default();
        assert_eq!(header.title, "Autoliv IT Management");
        assert_eq!(header.tagline, "Secure access for automotive safety technology");
    }

    #[test]
    fn test_custom_title_keeps_tagline() {
        let header = AuthHeader::new("Plant IT");
        assert_eq!(header.title, "Plant IT");
        assert_eq!(header.tagline, AuthHeader::default().tagline);
    }
}
