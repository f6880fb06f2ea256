//! # Sign-Up View
//!
//! The `/signup` page. All field rules live in the sign-up schema; this view
//! only forwards input.

use itam_core::form::fields;
use itam_core::{FormKind, Route};

use super::Link;
use crate::error::SubmitError;
use crate::state::{
    ConsoleContext, SessionNavigator, SubmissionController, SubmitControl, SubmitOutcome,
};

pub struct SignUpView {
    controller: SubmissionController,
    navigator: SessionNavigator,
}

impl SignUpView {
    pub fn new(ctx: &ConsoleContext) -> Self {
        SignUpView {
            controller: SubmissionController::new(FormKind::SignUp, ctx),
            navigator: ctx.navigator.clone(),
        }
    }

    pub fn set_full_name(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::FULL_NAME, value)
    }

    pub fn set_email(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::EMAIL, value)
    }

    pub fn set_password(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::PASSWORD, value)
    }

    pub fn set_confirm_password(&self, value: &str) -> Result<(), SubmitError> {
        self.controller.set_field(fields::CONFIRM_PASSWORD, value)
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
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
        vec![Link::new("Sign in", Route::SignIn)]
    }

    pub fn follow(self, link: &Link) {
        self.unmount();
        self.navigator.go_to(link.route);
    }

    pub fn unmount(&self) {
        self.controller.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::remote::SimulatedRemote;
    use crate::sinks::{RecordingNotifier, RouteHistory};
    use crate::state::{ConsoleConfig, FailureReason, SubmissionState};

    fn context() -> (ConsoleContext, RecordingNotifier, RouteHistory) {
        let notifier = RecordingNotifier::new();
        let history = RouteHistory::new();
        let navigator = SessionNavigator::new(Arc::new(notifier.clone()), Arc::new(history.clone()));
        let remote = Arc::new(SimulatedRemote::new(ConsoleConfig::default()));
        (ConsoleContext::new(remote, navigator, None), notifier, history)
    }

    fn fill(view: &SignUpView, password: &str, confirm: &str) {
        view.set_full_name("Grace Hopper").unwrap();
        view.set_email("grace@example.com").unwrap();
        view.set_password(password).unwrap();
        view.set_confirm_password(confirm).unwrap();
    }

    #[tokio::test]
    async fn test_mismatched_passwords_block_submission() {
        let (ctx, notifier, history) = context();
        let view = SignUpView::new(&ctx);
        fill(&view, "abcdefgh", "abcdefgX");

        let outcome = view.submit().await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(
            view.field_error(fields::CONFIRM_PASSWORD).as_deref(),
            Some("Passwords do not match")
        );
        assert_eq!(view.field_error(fields::PASSWORD), None);
        assert!(matches!(
            view.controller().state(),
            SubmissionState::Failed(FailureReason::Validation(_))
        ));
        assert!(notifier.is_empty());
        assert!(history.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixing_confirmation_then_resubmitting_succeeds() {
        let (ctx, notifier, history) = context();
        let view = SignUpView::new(&ctx);
        fill(&view, "abcdefgh", "abcdefgX");
        view.submit().await.unwrap();

        view.set_confirm_password("abcdefgh").unwrap();
        assert_eq!(view.field_error(fields::CONFIRM_PASSWORD), None);

        let outcome = view.submit().await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Succeeded(_)));
        assert_eq!(history.current(), Route::SignIn);
        assert_eq!(notifier.titles(), vec!["Account created successfully".to_string()]);
    }
}
