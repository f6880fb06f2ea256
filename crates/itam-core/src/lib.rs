//! # itam-core: Pure Logic for the ITAM Console
//!
//! This crate holds everything in the console that can be decided without
//! touching the outside world: field validation, form schemas, the module
//! catalog and the dashboard's sample data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ITAM Console Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser front end                            │   │
//! │  │    Sign in ──► Sign up ──► Forgot password ──► Dashboard        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    itam-console                                 │   │
//! │  │    SubmissionController, SessionNavigator, ModuleRouter         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ itam-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │   form    │  │  modules  │  │ dashboard │  │   │
//! │  │   │ FieldRule │  │FormSchema │  │ content   │  │ mock data │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Single-field rules (required, email, minimum length)
//! - [`form`] - Schemas, form values and the per-field verdict
//! - [`types`] - Routes, module ids, notifications
//! - [`modules`] - Static content descriptor per dashboard module
//! - [`dashboard`] - Sample KPIs, charts, activity and alerts
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use itam_core::form::{fields, FormSchema, FormValues};
//!
//! let values = FormValues::from_pairs([
//!     (fields::EMAIL, "user@example.com"),
//!     (fields::PASSWORD, "secret123"),
//! ]);
//! assert!(FormSchema::sign_in().evaluate(&values).is_valid());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dashboard;
pub mod error;
pub mod form;
pub mod modules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, SchemaError, ValidationError};
pub use form::{FieldErrors, FormKind, FormSchema, FormValues};
pub use modules::{content_for, ContentDescriptor};
pub use types::*;

/// Product name shown in the auth header.
pub const CONSOLE_TITLE: &str = "Autoliv IT Management";

/// Tagline under the auth header title.
pub const CONSOLE_TAGLINE: &str = "Secure access for automotive safety technology";
