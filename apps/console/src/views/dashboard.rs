//! # Dashboard View
//!
//! The `/dashboard` page: sidebar modules, the "Quick Access" menu, the
//! date-range selector, the analytics snapshot and the logout button.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DashboardView                                                          │
//! │   ├── ModuleRouter            sidebar clicks, content pane              │
//! │   │     ▲                                                               │
//! │   │     └── QuickLink          header menu, same router                 │
//! │   ├── DateRange               "Currently viewing: This Month"           │
//! │   └── SubmissionController    logout (no inputs, one call at a time)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use itam_core::dashboard::{self, DashboardSnapshot, DateRange, QuickLink};
use itam_core::{ContentDescriptor, CoreError, ModuleId};
use tracing::debug;

use crate::error::SubmitError;
use crate::state::{
    ConsoleContext, ModuleRouter, SidebarItem, SubmissionController, SubmitControl, SubmitOutcome,
};

pub struct DashboardView {
    router: ModuleRouter,
    date_range: DateRange,
    logout: SubmissionController,
}

impl DashboardView {
    pub fn new(ctx: &ConsoleContext) -> Self {
        DashboardView {
            router: ModuleRouter::new(ctx.navigator.notifier()),
            date_range: DateRange::default(),
            logout: SubmissionController::sign_out(ctx),
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub fn navigate(&mut self, module: ModuleId) {
        self.router.navigate(module);
    }

    pub fn navigate_str(&mut self, module: &str) -> Result<ModuleId, CoreError> {
        self.router.navigate_str(module)
    }

    pub fn current_module(&self) -> ModuleId {
        self.router.current()
    }

    pub fn content(&self) -> ContentDescriptor {
        self.router.current_content()
    }

    pub fn sidebar(&self) -> Vec<SidebarItem> {
        self.router.sidebar()
    }

    pub fn router(&self) -> &ModuleRouter {
        &self.router
    }

    pub fn quick_access(&self) -> Vec<QuickLink> {
        dashboard::quick_access()
    }

    /// Opens a "Quick Access" entry. Behaves exactly like the sidebar click.
    pub fn open_quick_link(&mut self, link: &QuickLink) {
        debug!(label = %link.label, module = %link.module, "quick access");
        self.router.navigate(link.module);
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    pub fn set_date_range(&mut self, range: DateRange) {
        debug!(range = range.label(), "date range selected");
        self.date_range = range;
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn date_range_caption(&self) -> String {
        self.date_range.caption()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::sample(self.date_range)
    }

    // =========================================================================
    // Logout
    // =========================================================================

    /// Logs out. A second click while the first is pending is refused.
    pub async fn logout(&self) -> Result<SubmitOutcome, SubmitError> {
        self.logout.submit().await
    }

    pub fn logout_control(&self) -> SubmitControl {
        self.logout.submit_control()
    }

    pub fn unmount(&self) {
        self.logout.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use itam_core::Route;

    use crate::remote::SimulatedRemote;
    use crate::sinks::{RecordingNotifier, RouteHistory};
    use crate::state::{ConsoleConfig, SessionNavigator};

    fn context() -> (ConsoleContext, RecordingNotifier, RouteHistory) {
        let notifier = RecordingNotifier::new();
        let history = RouteHistory::new();
        let navigator = SessionNavigator::new(Arc::new(notifier.clone()), Arc::new(history.clone()));
        let remote = Arc::new(SimulatedRemote::new(ConsoleConfig::default()));
        (ConsoleContext::new(remote, navigator, None), notifier, history)
    }

    #[test]
    fn test_initial_state() {
        let (ctx, _, _) = context();
        let view = DashboardView::new(&ctx);

        assert_eq!(view.current_module(), ModuleId::Dashboard);
        assert_eq!(view.date_range(), DateRange::ThisMonth);
        assert_eq!(view.date_range_caption(), "Currently viewing: This Month");
        assert_eq!(view.logout_control().label, "Logout");
        assert!(!view.logout_control().disabled);
    }

    #[test]
    fn test_date_range_is_echoed_in_snapshot() {
        let (ctx, _, _) = context();
        let mut view = DashboardView::new(&ctx);

        view.set_date_range(DateRange::ThisQuarter);

        assert_eq!(view.snapshot().date_range, DateRange::ThisQuarter);
        assert_eq!(view.snapshot().kpis.len(), 4);
    }

    #[test]
    fn test_module_click_notifies_through_shared_sink() {
        let (ctx, notifier, _) = context();
        let mut view = DashboardView::new(&ctx);

        view.navigate(ModuleId::Chatbot);

        assert_eq!(view.content().title, "IT Support Assistant");
        assert_eq!(notifier.titles(), vec!["IT Support Assistant".to_string()]);
    }

    #[test]
    fn test_quick_link_opens_its_module() {
        let (ctx, notifier, history) = context();
        let mut view = DashboardView::new(&ctx);
        let links = view.quick_access();
        assert_eq!(links.len(), 4);

        let tickets = links
            .iter()
            .find(|link| link.label == "Support Tickets")
            .unwrap();
        view.open_quick_link(tickets);

        assert_eq!(view.current_module(), ModuleId::Chatbot);
        assert_eq!(notifier.titles(), vec!["IT Support Assistant".to_string()]);
        assert!(history.history().is_empty());

        view.open_quick_link(&links[1]);
        assert_eq!(view.current_module(), ModuleId::Assets);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_click_logout_makes_one_call() {
        let (ctx, notifier, history) = context();
        let view = DashboardView::new(&ctx);

        let (first, second) = tokio::join!(view.logout(), view.logout());

        assert!(matches!(first, Ok(SubmitOutcome::Succeeded(_))));
        assert_eq!(second, Err(SubmitError::InFlight));
        assert_eq!(history.history(), vec![Route::SignIn]);
        assert_eq!(notifier.titles(), vec!["Logged out successfully".to_string()]);
    }
}
