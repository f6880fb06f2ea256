//! # State Module
//!
//! Per-view state objects for the console.
//!
//! Each view owns its own state and nothing is global: two forms mounted at
//! the same time never share values or submission state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     ConsoleContext (shared)                     │   │
//! │  │  Arc<dyn RemoteOperation> + SessionNavigator + timeout          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │ cloned into                              │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────────┐ ┌──────────────┐ ┌──────────────────┐            │
//! │  │ Submission       │ │ ModuleRouter │ │  ConsoleConfig   │            │
//! │  │ Controller       │ │              │ │                  │            │
//! │  │  Arc<Mutex<      │ │  active      │ │  latencies       │            │
//! │  │    FormState     │ │  ModuleId    │ │  timeout         │            │
//! │  │  >>              │ │              │ │                  │            │
//! │  └──────────────────┘ └──────────────┘ └──────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SubmissionController: Arc<Mutex<T>>, never held across .await       │
//! │  • ModuleRouter: single writer (&mut self)                             │
//! │  • ConsoleConfig: Read-only after initialization                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod router;
mod session;
mod submission;

pub use config::{ConfigError, ConsoleConfig};
pub use router::{ModuleRouter, SidebarItem};
pub use session::{NavigationEffect, Outcome, SessionNavigator};
pub use submission::{
    ConsoleContext, FailureReason, SubmissionController, SubmissionState, SubmitControl,
    SubmitOutcome,
};
