//! # Submission Controller
//!
//! Owns the lifecycle of one mounted form: its values, its inline errors and
//! its submission state.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  submit()  ┌────────────┐  errors   ┌────────────────────┐   │
//! │   │ Idle │──────────►│ Validating │─────────►│ Failed(Validation) │   │
//! │   └──────┘            └─────┬──────┘           └─────────┬──────────┘   │
//! │      ▲                      │ valid                      │ submit()     │
//! │      │                      ▼                            ▼              │
//! │      │               ┌────────────┐            (back to Validating)    │
//! │      │               │ Submitting │◄── submit() here → InFlight         │
//! │      │               └─────┬──────┘                                    │
//! │      │          err        │        ok                                 │
//! │      │   ┌─────────────────┴───────────────┐                           │
//! │      │   ▼                                 ▼                           │
//! │   ┌──────────────────┐              ┌───────────┐                      │
//! │   │ Failed(Remote)   │              │ Succeeded │  (terminal)          │
//! │   └──────────────────┘              └───────────┘                      │
//! │      (immediately reset to Idle, values kept for retry)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! State sits behind `Arc<Mutex<_>>` and the lock is never held across the
//! remote call, so a second `submit()` made while the first is awaiting sees
//! `Submitting` and is refused.
//!
//! ## Teardown
//! After [`SubmissionController::teardown`] a resolution that arrives late is
//! dropped: no state change, no notification, no navigation.
//!
//! ## Cancellation
//! The remote call runs on its own task. A panic inside it surfaces as
//! `RemoteError::Unexpected`. If the `submit()` future is dropped before the
//! call settles, the call is aborted and the form goes back to `Idle`
//! through `Failed(Remote(Unexpected))`, without a notification.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use itam_core::{FieldErrors, FormKind, FormSchema, FormValues};
use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{RemoteError, SubmitError};
use crate::remote::{call_with_deadline, RemoteOperation, RemoteRequest, RequestKind};
use crate::state::session::{NavigationEffect, Outcome, SessionNavigator};

/// Why the last submission failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Local: at least one field is invalid. Shown inline.
    Validation(FieldErrors),
    /// The remote call failed. Shown as a toast.
    Remote(RemoteError),
}

/// Lifecycle state of one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

impl SubmissionState {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed(FailureReason::Validation(_)) => "failed_validation",
            SubmissionState::Failed(FailureReason::Remote(_)) => "failed_remote",
        }
    }
}

/// Result of an accepted `submit()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no remote call was made.
    Invalid(FieldErrors),
    /// The remote call succeeded.
    Succeeded(Option<NavigationEffect>),
    /// The remote call failed; the form is editable again.
    RemoteFailed(RemoteError),
    /// The form was torn down while the call was in flight.
    Discarded,
}

/// The submit button as the view should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

/// Shared dependencies every mounted view receives.
#[derive(Clone)]
pub struct ConsoleContext {
    pub remote: Arc<dyn RemoteOperation>,
    pub navigator: SessionNavigator,
    pub remote_timeout: Option<Duration>,
}

impl ConsoleContext {
    pub fn new(
        remote: Arc<dyn RemoteOperation>,
        navigator: SessionNavigator,
        remote_timeout: Option<Duration>,
    ) -> Self {
        ConsoleContext {
            remote,
            navigator,
            remote_timeout,
        }
    }
}

#[derive(Debug)]
struct FormState {
    values: FormValues,
    errors: FieldErrors,
    state: SubmissionState,
    transitions: Vec<SubmissionState>,
    revalidate_on_change: bool,
    torn_down: bool,
}

impl FormState {
    fn transition(&mut self, id: Uuid, kind: RequestKind, next: SubmissionState) {
        debug!(
            instance_id = %id,
            form = kind.as_str(),
            from = self.state.name(),
            to = next.name(),
            "form transition"
        );
        self.transitions.push(next.clone());
        self.state = next;
    }
}

/// Lifecycle owner for one form instance.
pub struct SubmissionController {
    id: Uuid,
    kind: RequestKind,
    schema: FormSchema,
    ctx: ConsoleContext,
    inner: Arc<Mutex<FormState>>,
}

impl SubmissionController {
    /// Mounts a controller for one of the credential forms.
    pub fn new(form: FormKind, ctx: &ConsoleContext) -> Self {
        Self::with_schema(form.into(), form.schema(), ctx)
    }

    /// Mounts a controller for the logout action (no inputs).
    pub fn sign_out(ctx: &ConsoleContext) -> Self {
        Self::with_schema(RequestKind::SignOut, FormSchema::default(), ctx)
    }

    fn with_schema(kind: RequestKind, schema: FormSchema, ctx: &ConsoleContext) -> Self {
        let id = Uuid::new_v4();
        debug!(instance_id = %id, form = kind.as_str(), "form mounted");

        let values = FormValues::for_schema(&schema);
        SubmissionController {
            id,
            kind,
            schema,
            ctx: ctx.clone(),
            inner: Arc::new(Mutex::new(FormState {
                values,
                errors: FieldErrors::default(),
                state: SubmissionState::Idle,
                transitions: vec![SubmissionState::Idle],
                revalidate_on_change: false,
                torn_down: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.inner.lock().expect("form state mutex poisoned")
    }

    /// Lock for cleanup paths that may run while unwinding.
    fn lock_for_cleanup(&self) -> MutexGuard<'_, FormState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Instance id used in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Updates one input.
    ///
    /// Once a submission has failed validation, every edit re-evaluates the
    /// whole schema so inline messages track the current values.
    pub fn set_field(&self, field: &str, value: impl Into<String>) -> Result<(), SubmitError> {
        if !self.schema.has_field(field) {
            return Err(SubmitError::UnknownField(field.to_string()));
        }

        let mut st = self.lock();
        if st.torn_down {
            return Err(SubmitError::TornDown);
        }

        st.values.set(field, value);
        if st.revalidate_on_change {
            st.errors = self.schema.evaluate(&st.values);
        }
        Ok(())
    }

    /// Runs validation and, if it passes, the remote call.
    ///
    /// ## Errors
    /// - `InFlight` while a previous call is pending (no second call is made)
    /// - `AlreadySucceeded` after success
    /// - `TornDown` after teardown
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let request = {
            let mut st = self.lock();
            if st.torn_down {
                return Err(SubmitError::TornDown);
            }
            match st.state {
                SubmissionState::Validating | SubmissionState::Submitting => {
                    debug!(instance_id = %self.id, "submit ignored: already in flight");
                    return Err(SubmitError::InFlight);
                }
                SubmissionState::Succeeded => return Err(SubmitError::AlreadySucceeded),
                SubmissionState::Idle | SubmissionState::Failed(_) => {}
            }

            st.transition(self.id, self.kind, SubmissionState::Validating);
            let errors = self.schema.evaluate(&st.values);
            st.errors = errors.clone();

            if !errors.is_valid() {
                st.revalidate_on_change = true;
                st.transition(
                    self.id,
                    self.kind,
                    SubmissionState::Failed(FailureReason::Validation(errors.clone())),
                );
                return Ok(SubmitOutcome::Invalid(errors));
            }

            st.transition(self.id, self.kind, SubmissionState::Submitting);
            RemoteRequest::new(self.kind, st.values.clone())
        };

        let remote = Arc::clone(&self.ctx.remote);
        let deadline = self.ctx.remote_timeout;
        let call = request.clone();
        let handle =
            tokio::spawn(async move { call_with_deadline(remote.as_ref(), &call, deadline).await });

        let mut guard = InFlightGuard {
            controller: self,
            abort: handle.abort_handle(),
            armed: true,
        };
        let joined = handle.await;
        guard.armed = false;

        let result = match joined {
            Ok(result) => result,
            Err(err) => {
                error!(instance_id = %self.id, form = self.kind.as_str(), %err, "remote task failed");
                Err(RemoteError::Unexpected {
                    detail: if err.is_panic() {
                        "remote operation panicked".to_string()
                    } else {
                        err.to_string()
                    },
                })
            }
        };

        {
            let mut st = self.lock();
            if st.torn_down {
                info!(instance_id = %self.id, form = self.kind.as_str(), "discarding late resolution");
                return Ok(SubmitOutcome::Discarded);
            }

            match &result {
                Ok(()) => st.transition(self.id, self.kind, SubmissionState::Succeeded),
                Err(err) => {
                    st.transition(
                        self.id,
                        self.kind,
                        SubmissionState::Failed(FailureReason::Remote(err.clone())),
                    );
                    st.transition(self.id, self.kind, SubmissionState::Idle);
                }
            }
        }

        match result {
            Ok(()) => {
                let effect = self
                    .ctx
                    .navigator
                    .on_outcome(self.kind, &Outcome::Success, &request.values);
                Ok(SubmitOutcome::Succeeded(effect))
            }
            Err(err) => {
                self.ctx.navigator.on_outcome(
                    self.kind,
                    &Outcome::Failure(err.clone()),
                    &request.values,
                );
                Ok(SubmitOutcome::RemoteFailed(err))
            }
        }
    }

    /// Marks the instance as discarded. Idempotent.
    pub fn teardown(&self) {
        let mut st = self.lock_for_cleanup();
        if !st.torn_down {
            debug!(instance_id = %self.id, form = self.kind.as_str(), "form torn down");
            st.torn_down = true;
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.lock().torn_down
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// Every state entered since mount, starting with `Idle`.
    pub fn transitions(&self) -> Vec<SubmissionState> {
        self.lock().transitions.clone()
    }

    /// Snapshot of the current values.
    pub fn values(&self) -> FormValues {
        self.lock().values.clone()
    }

    /// Inline errors from the latest validation pass.
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    /// Inline message for one field, if any.
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.lock().errors.message(field)
    }

    /// True while a remote call is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.lock().state, SubmissionState::Submitting)
    }

    /// Submit button label and enabled state.
    pub fn submit_control(&self) -> SubmitControl {
        let st = self.lock();
        let (idle, busy) = submit_labels(self.kind);
        let submitting = matches!(st.state, SubmissionState::Submitting);

        SubmitControl {
            label: if submitting { busy } else { idle }.to_string(),
            disabled: submitting || st.torn_down || st.state == SubmissionState::Succeeded,
        }
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Puts the form back in an editable state when `submit()` is dropped while
/// its remote call is still pending.
struct InFlightGuard<'a> {
    controller: &'a SubmissionController,
    abort: AbortHandle,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.abort.abort();

        let c = self.controller;
        let mut st = c.lock_for_cleanup();
        if st.torn_down || st.state != SubmissionState::Submitting {
            return;
        }

        warn!(instance_id = %c.id, form = c.kind.as_str(), "submission cancelled before the call settled");
        let reason = RemoteError::Unexpected {
            detail: "submission cancelled before the remote call settled".to_string(),
        };
        st.transition(c.id, c.kind, SubmissionState::Failed(FailureReason::Remote(reason)));
        st.transition(c.id, c.kind, SubmissionState::Idle);
    }
}

fn submit_labels(kind: RequestKind) -> (&'static str, &'static str) {
    match kind {
        RequestKind::SignIn => ("Sign in", "Signing in..."),
        RequestKind::SignUp => ("Create Account", "Creating account..."),
        RequestKind::PasswordReset => ("Send reset link", "Sending..."),
        RequestKind::SignOut => ("Logout", "Logging out..."),
    }
}
