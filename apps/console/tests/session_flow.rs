use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use itam_console::error::{ConsoleError, RemoteError, SubmitError};
use itam_console::{build_context, run_with};
use itam_console::remote::{RemoteOperation, RemoteRequest};
use itam_console::sinks::{RecordingNotifier, RouteHistory};
use itam_console::state::{
    ConsoleConfig, ConsoleContext, FailureReason, SessionNavigator, SubmissionState, SubmitOutcome,
};
use itam_console::views::{DashboardView, PasswordResetView, ResetDisplay, SignInView, SignUpView};
use itam_core::form::fields;
use itam_core::{ModuleId, NotificationKind, Route};

/// Fails the first `failures` calls, then succeeds. Counts every call.
struct FlakyRemote {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyRemote {
    fn new(failures: usize) -> Arc<Self> {
        Arc::new(FlakyRemote {
            failures,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteOperation for FlakyRemote {
    async fn call(&self, _request: &RemoteRequest) -> Result<(), RemoteError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        if n < self.failures {
            Err(RemoteError::Rejected {
                reason: "Service temporarily unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

struct Harness {
    ctx: ConsoleContext,
    notifier: RecordingNotifier,
    history: RouteHistory,
}

fn with_remote(remote: Arc<dyn RemoteOperation>, timeout: Option<Duration>) -> Harness {
    let notifier = RecordingNotifier::new();
    let history = RouteHistory::new();
    let navigator = SessionNavigator::new(Arc::new(notifier.clone()), Arc::new(history.clone()));
    Harness {
        ctx: ConsoleContext::new(remote, navigator, timeout),
        notifier,
        history,
    }
}

fn simulated(config: ConsoleConfig) -> Harness {
    let notifier = RecordingNotifier::new();
    let history = RouteHistory::new();
    let ctx = build_context(&config, Arc::new(notifier.clone()), Arc::new(history.clone()));
    Harness {
        ctx,
        notifier,
        history,
    }
}

#[tokio::test(start_paused = true)]
async fn sign_in_walks_every_state_and_lands_on_dashboard() {
    let h = simulated(ConsoleConfig::default());
    let view = SignInView::new(&h.ctx);
    view.set_email("user@example.com").unwrap();
    view.set_password("secret123").unwrap();

    let outcome = view.submit().await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Succeeded(_)));
    assert_eq!(
        view.controller().transitions(),
        vec![
            SubmissionState::Idle,
            SubmissionState::Validating,
            SubmissionState::Submitting,
            SubmissionState::Succeeded,
        ]
    );
    assert_eq!(h.history.history(), vec![Route::Dashboard]);

    let toasts = h.notifier.notifications();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Info);
    assert_eq!(toasts[0].title, "Login successful");
}

#[tokio::test]
async fn sign_up_mismatch_never_reaches_the_backend() {
    let remote = FlakyRemote::new(0);
    let h = with_remote(remote.clone(), None);
    let view = SignUpView::new(&h.ctx);
    view.set_full_name("Ada Lovelace").unwrap();
    view.set_email("ada@example.com").unwrap();
    view.set_password("abcdefgh").unwrap();
    view.set_confirm_password("abcdefgX").unwrap();

    view.submit().await.unwrap();

    assert_eq!(remote.calls(), 0);
    assert_eq!(
        view.field_error(fields::CONFIRM_PASSWORD).as_deref(),
        Some("Passwords do not match")
    );
    match view.controller().state() {
        SubmissionState::Failed(FailureReason::Validation(errors)) => {
            let invalid: Vec<&str> = errors.invalid_fields().collect();
            assert_eq!(invalid, vec![fields::CONFIRM_PASSWORD]);
        }
        other => panic!("unexpected state {:?}", other),
    }
    assert!(h.notifier.is_empty());
}

#[tokio::test(start_paused = true)]
async fn password_reset_echoes_address_and_stays_put() {
    let h = simulated(ConsoleConfig::default());
    let mut view = PasswordResetView::new(&h.ctx);
    view.set_email("a@b.co").unwrap();

    view.submit().await.unwrap();

    assert_eq!(
        view.display(),
        &ResetDisplay::CheckEmail {
            email: "a@b.co".to_string()
        }
    );
    assert!(h.history.history().is_empty());
    assert_eq!(h.notifier.titles(), vec!["Reset link sent".to_string()]);
}

#[test]
fn module_navigation_to_stock() {
    let h = simulated(ConsoleConfig::default());
    let mut view = DashboardView::new(&h.ctx);
    assert_eq!(view.current_module(), ModuleId::Dashboard);

    view.navigate_str("stock").unwrap();

    assert_eq!(view.current_module(), ModuleId::Stock);
    assert_eq!(view.router().content_for(ModuleId::Stock), view.content());
    let toast = &h.notifier.notifications()[0];
    assert!(toast.description.contains("stock"));
}

#[tokio::test(start_paused = true)]
async fn remote_failure_then_retry_succeeds() {
    let remote = FlakyRemote::new(1);
    let h = with_remote(remote.clone(), None);
    let view = SignInView::new(&h.ctx);
    view.set_email("user@example.com").unwrap();
    view.set_password("secret123").unwrap();

    let first = view.submit().await.unwrap();
    assert!(matches!(first, SubmitOutcome::RemoteFailed(RemoteError::Rejected { .. })));
    assert_eq!(view.controller().state(), SubmissionState::Idle);
    assert!(!view.submit_control().disabled);

    let second = view.submit().await.unwrap();
    assert!(matches!(second, SubmitOutcome::Succeeded(_)));

    assert_eq!(remote.calls(), 2);
    assert_eq!(
        h.notifier.titles(),
        vec!["Login failed".to_string(), "Login successful".to_string()]
    );
    assert_eq!(
        h.notifier.notifications()[0].description,
        "Service temporarily unavailable"
    );
    assert_eq!(h.history.history(), vec![Route::Dashboard]);
}

#[tokio::test(start_paused = true)]
async fn slow_backend_times_out_when_a_deadline_is_set() {
    let h = simulated(ConsoleConfig {
        remote_timeout_ms: Some(200),
        ..ConsoleConfig::default()
    });
    let view = SignInView::new(&h.ctx);
    view.set_email("user@example.com").unwrap();
    view.set_password("secret123").unwrap();

    let outcome = view.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::RemoteFailed(RemoteError::TimedOut { after_ms: 200 })
    );
    assert_eq!(view.controller().state(), SubmissionState::Idle);
    let toast = &h.notifier.notifications()[0];
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.description, "Please check your credentials and try again.");
}

#[tokio::test(start_paused = true)]
async fn leaving_the_page_mid_flight_discards_the_result() {
    let h = simulated(ConsoleConfig::default());
    let view = SignInView::new(&h.ctx);
    view.set_email("user@example.com").unwrap();
    view.set_password("secret123").unwrap();

    let (outcome, ()) = tokio::join!(view.submit(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        view.unmount();
    });

    assert_eq!(outcome, Ok(SubmitOutcome::Discarded));
    assert!(h.notifier.is_empty());
    assert!(h.history.history().is_empty());
    assert_eq!(view.submit().await, Err(SubmitError::TornDown));
}

#[tokio::test(start_paused = true)]
async fn separate_forms_do_not_block_each_other() {
    let h = simulated(ConsoleConfig::default());
    let sign_in = SignInView::new(&h.ctx);
    sign_in.set_email("user@example.com").unwrap();
    sign_in.set_password("secret123").unwrap();
    let mut reset = PasswordResetView::new(&h.ctx);
    reset.set_email("user@example.com").unwrap();

    let (a, b) = tokio::join!(sign_in.submit(), reset.submit());

    assert!(matches!(a, Ok(SubmitOutcome::Succeeded(_))));
    assert!(matches!(b, Ok(SubmitOutcome::Succeeded(_))));
}

#[tokio::test(start_paused = true)]
async fn abandoned_submit_can_be_retried() {
    let h = simulated(ConsoleConfig::default());
    let view = SignInView::new(&h.ctx);
    view.set_email("user@example.com").unwrap();
    view.set_password("secret123").unwrap();

    let abandoned = tokio::time::timeout(Duration::from_millis(10), view.submit()).await;
    assert!(abandoned.is_err());

    assert_eq!(view.controller().state(), SubmissionState::Idle);
    assert!(!view.controller().is_submitting());
    let control = view.submit_control();
    assert!(!control.disabled);
    assert_eq!(control.label, "Sign in");
    assert!(h.notifier.is_empty());

    let retry = view.submit().await.unwrap();

    assert!(matches!(retry, SubmitOutcome::Succeeded(_)));
    assert_eq!(h.notifier.titles(), vec!["Login successful".to_string()]);
    assert_eq!(h.history.history(), vec![Route::Dashboard]);
}

#[tokio::test(start_paused = true)]
async fn scripted_walkthrough_completes() {
    let notifier = RecordingNotifier::new();
    let history = RouteHistory::new();

    run_with(&ConsoleConfig::default(), Arc::new(notifier.clone()), history.clone())
        .await
        .unwrap();

    assert_eq!(
        history.history(),
        vec![Route::SignIn, Route::Dashboard, Route::SignIn]
    );
    let titles = notifier.titles();
    assert_eq!(titles.first().map(String::as_str), Some("Account created successfully"));
    assert_eq!(titles.last().map(String::as_str), Some("Reset link sent"));
}

#[tokio::test(start_paused = true)]
async fn scripted_walkthrough_stops_when_the_backend_rejects() {
    let config = ConsoleConfig {
        simulate_failure: true,
        ..ConsoleConfig::default()
    };

    let err = run_with(&config, Arc::new(RecordingNotifier::new()), RouteHistory::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ConsoleError::Flow(_)));
}
