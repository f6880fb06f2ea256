//! # Sign-In View
//!
//! The `/` page: email, password, a "remember me" box and a show/hide toggle
//! on the password input.

use itam_core::form::fields;
use itam_core::{FormKind, Route};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use super::Link;
use crate::error::SubmitError;
use crate::state::{
    ConsoleContext, SessionNavigator, SubmissionController, SubmitControl, SubmitOutcome,
};

/// HTML input type for the password box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PasswordInputType {
    Password,
    Text,
}

pub struct SignInView {
    controller: SubmissionController,
    navigator: SessionNavigator,
    remember_me: bool,
    show_password: bool,
}

impl SignInView {
    pub fn new(ctx: &ConsoleContext) -> Self {
        SignInView {
            controller: SubmissionController::new(FormKind::SignIn, ctx),
            navigator: ctx.navigator.clone(),
            remember_me: false,
            show_password: false,
        }
    }

    pub fn set_email(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::EMAIL, value)
    }

    pub fn set_password(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::PASSWORD, value)
    }

    /// Kept on the page only; nothing is persisted.
    pub fn set_remember_me(&mut self, checked: bool) {
        self.remember_me = checked;
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_input_type(&self) -> PasswordInputType {
        if self.show_password {
            PasswordInputType::Text
        } else {
            PasswordInputType::Password
        }
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        debug!(remember_me = self.remember_me, "sign-in submitted");
        self.controller.submit().await
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

    pub fn links(&self) -> Vec<Link> {
        vec![
            Link::new("Forgot password?", Route::ForgotPassword),
            Link::new("Sign up", Route::SignUp),
        ]
    }

    /// Leaves the page through one of its links.
    pub fn follow(self, link: &Link) {
        self.unmount();
        self.navigator.go_to(link.route);
    }

    pub fn unmount(&self) {
        self.controller.teardown();
    }
}
