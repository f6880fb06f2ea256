//! # Module Router
//!
//! Which dashboard module is active, and what the content pane shows for it.
//!
//! ## Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sidebar click ──► navigate(target)                                     │
//! │                       │                                                 │
//! │                       ├── active = target   (no-op if already active)   │
//! │                       └── notify(Info, title_for(target),               │
//! │                                  "Switched to the {target} module")     │
//! │                                                                         │
//! │  Every click notifies, whether or not the module changed.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The router is owned by one dashboard view and has a single writer, so
//! `navigate` takes `&mut self` and there is no lock.

use std::sync::Arc;

use itam_core::modules::title_for;
use itam_core::{ContentDescriptor, CoreError, ModuleId, Notification};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::sinks::NotificationSink;

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    pub module: ModuleId,
    pub title: String,
    pub active: bool,
}

/// Active-module holder for one dashboard session.
pub struct ModuleRouter {
    active: ModuleId,
    notifier: Arc<dyn NotificationSink>,
}

impl ModuleRouter {
    /// Starts on the dashboard overview.
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        ModuleRouter {
            active: ModuleId::default(),
            notifier,
        }
    }

    /// Makes `target` active and announces it.
    pub fn navigate(&mut self, target: ModuleId) {
        if self.active != target {
            info!(from = %self.active, module = %target, "module switched");
            self.active = target;
        }

        self.notifier.notify(Notification::info(
            title_for(target),
            format!("Switched to the {} module", target),
        ));
    }

    /// Like [`navigate`](Self::navigate), from the string id the sidebar uses.
    pub fn navigate_str(&mut self, target: &str) -> Result<ModuleId, CoreError> {
        let id: ModuleId = target.parse()?;
        self.navigate(id);
        Ok(id)
    }

    /// The active module.
    pub fn current(&self) -> ModuleId {
        self.active
    }

    /// Static content for any module.
    pub fn content_for(&self, id: ModuleId) -> ContentDescriptor {
        itam_core::content_for(id)
    }

    /// Static content for the active module.
    pub fn current_content(&self) -> ContentDescriptor {
        self.content_for(self.active)
    }

    /// Sidebar entries in display order.
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        ModuleId::ALL
            .into_iter()
            .map(|module| SidebarItem {
                module,
                title: title_for(module).to_string(),
                active: module == self.active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::RecordingNotifier;

    fn router() -> (ModuleRouter, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        (ModuleRouter::new(Arc::new(notifier.clone())), notifier)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let (router, notifier) = router();
        assert_eq!(router.current(), ModuleId::Dashboard);
        assert_eq!(router.current_content().title, "IT Management Dashboard");
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_navigate_to_stock() {
        let (mut router, notifier) = router();

        router.navigate_str("stock").unwrap();

        assert_eq!(router.current(), ModuleId::Stock);
        assert_eq!(router.current_content().module, ModuleId::Stock);

        let toasts = notifier.notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Stock Management");
        assert!(toasts[0].description.contains("stock"));
    }

    #[test]
    fn test_repeat_click_still_notifies() {
        let (mut router, notifier) = router();

        router.navigate(ModuleId::Users);
        router.navigate(ModuleId::Users);

        assert_eq!(router.current(), ModuleId::Users);
        assert_eq!(notifier.len(), 2);
    }

    #[test]
    fn test_unknown_module_is_rejected_without_side_effects() {
        let (mut router, notifier) = router();

        let err = router.navigate_str("payroll").unwrap_err();

        assert!(matches!(err, CoreError::UnknownModule(ref id) if id == "payroll"));
        assert_eq!(router.current(), ModuleId::Dashboard);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_sidebar_marks_active_entry() {
        let (mut router, _) = router();
        router.navigate(ModuleId::Assets);

        let sidebar = router.sidebar();
        assert_eq!(sidebar.len(), ModuleId::ALL.len());
        let active: Vec<ModuleId> = sidebar.iter().filter(|i| i.active).map(|i| i.module).collect();
        assert_eq!(active, vec![ModuleId::Assets]);
    }
}
