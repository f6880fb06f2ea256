//! # Password Reset View
//!
//! The `/forgot-password` page. On success it does not navigate; it swaps
//! the form for a "check your email" panel that echoes the address.
//!
//! ```text
//! ┌──────────────┐   submit() ok    ┌───────────────────────────┐
//! │  Form        │ ───────────────► │  CheckEmail { email }     │
//! └──────────────┘                  └───────────────────────────┘
//!        │ "Back to login"                  │ "Back to login"
//!        ▼                                  ▼
//!       "/"                                "/"
//! ```

use itam_core::form::fields;
use itam_core::{FormKind, Route};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Link;
use crate::error::SubmitError;
use crate::state::{
    ConsoleContext, NavigationEffect, SessionNavigator, SubmissionController, SubmitControl,
    SubmitOutcome,
};

/// What the reset card currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResetDisplay {
    Form,
    CheckEmail { email: String },
}

pub struct PasswordResetView {
    controller: SubmissionController,
    navigator: SessionNavigator,
    display: ResetDisplay,
}

impl PasswordResetView {
    pub fn new(ctx: &ConsoleContext) -> Self {
        PasswordResetView {
            controller: SubmissionController::new(FormKind::PasswordReset, ctx),
            navigator: ctx.navigator.clone(),
            display: ResetDisplay::Form,
        }
    }

    pub fn set_email(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::EMAIL, value)
    }

    /// Submits the form; on success switches to the confirmation panel.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let outcome = self.controller.submit().await?;

        if let SubmitOutcome::Succeeded(Some(NavigationEffect::ShowResetConfirmation { email })) =
            &outcome
        {
            self.display = ResetDisplay::CheckEmail {
                email: email.clone(),
            };
        }

        Ok(outcome)
    }

    pub fn display(&self) -> &ResetDisplay {
        &self.display
    }

    pub fn headline(&self) -> &'static str {
        match self.display {
            ResetDisplay::Form => "Reset your password",
            ResetDisplay::CheckEmail { .. } => "Check your email",
        }
    }

    pub fn message(&self) -> String {
        match &self.display {
            ResetDisplay::Form => {
                "Enter your email address and we'll send you a link to reset your password."
                    .to_string()
            }
            ResetDisplay::CheckEmail { email } => {
                format!("We've sent a password reset link to {}", email)
            }
        }
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.controller.field_error(field)
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.controller.submit_control()
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub fn back_to_login(&self) -> Link {
        Link::new("Back to login", Route::SignIn)
    }

    pub fn follow(self, link: &Link) {
        self.unmount();
        self.navigator.go_to(link.route);
    }

    pub fn unmount(&self) {
        self.controller.teardown();
    }
}
