//! # ITAM Console Library
//!
//! Session flow and dashboard shell for the IT asset management console.
//! The browser front end renders; this crate decides what happens when a
//! form is submitted or a sidebar entry is clicked.
//!
//! ## Module Organization
//! ```text
//! itam_console/
//! ├── lib.rs              ◄─── You are here (logging setup & walkthrough)
//! ├── error.rs            ◄─── RemoteError, SubmitError, ConsoleError
//! ├── remote.rs           ◄─── RemoteOperation trait, SimulatedRemote
//! ├── sinks.rs            ◄─── NotificationSink, NavigationSink
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── config.rs       ◄─── ConsoleConfig (env)
//! │   ├── submission.rs   ◄─── SubmissionController
//! │   ├── session.rs      ◄─── SessionNavigator
//! │   └── router.rs       ◄─── ModuleRouter
//! └── views/
//!     ├── mod.rs          ◄─── Link, AuthHeader
//!     ├── sign_in.rs      ◄─── "/"
//!     ├── sign_up.rs      ◄─── "/signup"
//!     ├── password_reset.rs ◄─ "/forgot-password"
//!     └── dashboard.rs    ◄─── "/dashboard"
//! ```
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  keystroke ──► set_field ──► FormValues                                 │
//! │                                                                         │
//! │  submit() ──► FormSchema::evaluate ──► invalid? inline errors, stop     │
//! │                     │ valid                                             │
//! │                     ▼                                                   │
//! │              RemoteOperation::call  (lock released while awaiting)      │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              SessionNavigator::on_outcome                               │
//! │                 ├── NotificationSink::notify                            │
//! │                 └── NavigationSink::navigate   (success only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod remote;
pub mod sinks;
pub mod state;
pub mod views;

use std::sync::Arc;

use itam_core::dashboard::DateRange;
use itam_core::ModuleId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ConsoleError;
use remote::SimulatedRemote;
use sinks::{NavigationSink, NotificationSink, RouteHistory, TracingNotifier};
use state::{ConsoleConfig, ConsoleContext, NavigationEffect, SessionNavigator, SubmitOutcome};
use views::{AuthHeader, DashboardView, PasswordResetView, SignInView, SignUpView};

/// Builds the shared context every view is mounted with.
pub fn build_context(
    config: &ConsoleConfig,
    notifier: Arc<dyn NotificationSink>,
    navigation: Arc<dyn NavigationSink>,
) -> ConsoleContext {
    ConsoleContext::new(
        Arc::new(SimulatedRemote::new(config.clone())),
        SessionNavigator::new(notifier, navigation),
        config.remote_timeout(),
    )
}

/// Runs a scripted session against the simulated backend.
///
/// ## Walkthrough
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration (ITAM_* env vars)                                │
/// │  2. Sign up      ──► "/"                                                │
/// │  3. Sign in      ──► "/dashboard"                                       │
/// │  4. Visit every module and quick link, switch range, render snapshot    │
/// │  5. Logout       ──► "/"                                                │
/// │  6. Forgot password ──► "Check your email"                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ConsoleError> {
    let config = ConsoleConfig::load()?;
    info!(?config, "configuration loaded");

    run_with(&config, Arc::new(TracingNotifier), RouteHistory::new()).await
}

/// Runs the scripted session with an explicit configuration and sinks.
pub async fn run_with(
    config: &ConsoleConfig,
    notifier: Arc<dyn NotificationSink>,
    history: RouteHistory,
) -> Result<(), ConsoleError> {
    let ctx = build_context(config, notifier, Arc::new(history.clone()));

    let header = AuthHeader::new(config.title.clone());
    info!(title = %header.title, tagline = %header.tagline, route = %history.current(), "console ready");

    // Sign up
    let sign_up = SignUpView::new(&ctx);
    sign_up.set_full_name("Demo Administrator")?;
    sign_up.set_email("admin@example.com")?;
    sign_up.set_password("correct-horse")?;
    sign_up.set_confirm_password("correct-horse")?;
    expect_success("sign-up", sign_up.submit().await?)?;
    sign_up.unmount();

    // Sign in
    let mut sign_in = SignInView::new(&ctx);
    sign_in.set_email("admin@example.com")?;
    sign_in.set_password("correct-horse")?;
    sign_in.set_remember_me(true);
    expect_success("sign-in", sign_in.submit().await?)?;
    sign_in.unmount();

    // Dashboard
    let mut dashboard = DashboardView::new(&ctx);
    for module in ModuleId::ALL {
        dashboard.navigate(module);
        let content = dashboard.content();
        info!(
            module = %module,
            operations = content.operations.len(),
            summary = %content.summary,
            "module content"
        );
    }
    for link in dashboard.quick_access() {
        dashboard.open_quick_link(&link);
    }
    dashboard.navigate(ModuleId::Dashboard);
    dashboard.set_date_range(DateRange::ThisQuarter);
    let snapshot = serde_json::to_string(&dashboard.snapshot())?;
    info!(caption = %dashboard.date_range_caption(), bytes = snapshot.len(), "dashboard rendered");
    expect_success("logout", dashboard.logout().await?)?;
    dashboard.unmount();

    // Password reset
    let mut reset = PasswordResetView::new(&ctx);
    reset.set_email("admin@example.com")?;
    expect_success("password reset", reset.submit().await?)?;
    info!(headline = reset.headline(), message = %reset.message(), "reset panel");
    reset.unmount();

    info!(route = %history.current(), visited = history.history().len(), "walkthrough finished");
    Ok(())
}

fn expect_success(
    step: &str,
    outcome: SubmitOutcome,
) -> Result<Option<NavigationEffect>, ConsoleError> {
    match outcome {
        SubmitOutcome::Succeeded(effect) => Ok(effect),
        SubmitOutcome::Invalid(errors) => {
            let fields: Vec<&str> = errors.invalid_fields().collect();
            Err(ConsoleError::Flow(format!("{} rejected fields {:?}", step, fields)))
        }
        SubmitOutcome::RemoteFailed(err) => Err(ConsoleError::Flow(format!("{} failed: {}", step, err))),
        SubmitOutcome::Discarded => Err(ConsoleError::Flow(format!("{} was discarded", step))),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=itam=trace` - Show trace for itam crates only
/// - Default: INFO, DEBUG for the itam crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,itam_console=debug,itam_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
