//! # Error Types
//!
//! Domain-specific error types for itam-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  itam-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Field and cross-field validation failures      │
//! │  └── SchemaError      - Malformed form schema declarations             │
//! │                                                                         │
//! │  itam-console errors (app crate)                                       │
//! │  ├── RemoteError      - Remote operation failures (toast)              │
//! │  └── SubmitError      - Rejected submit() calls                        │
//! │                                                                         │
//! │  ValidationError → inline field message, never a notification          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` output of a `ValidationError` IS the inline message
//! 3. Errors are enum variants, never String

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A module id string did not name any dashboard module.
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// A path did not name any console route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Schema declaration error (wraps SchemaError).
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `field` carried by a variant is the human label ("Password",
/// "Full name"), not the form key, so the rendered message reads naturally
/// next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// A required field is empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Value has fewer characters than required.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Two fields that must agree do not.
    ///
    /// ## When This Occurs
    /// ```text
    /// password:        "abcdefgh"
    /// confirmPassword: "abcdefgI"
    ///      │
    ///      ▼
    /// Mismatch { message: "Passwords do not match" }  (blamed on confirmPassword)
    /// ```
    #[error("{message}")]
    Mismatch { message: String },
}

impl ValidationError {
    /// Returns the inline message shown under the offending input.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Schema Error
// =============================================================================

/// Errors raised while declaring a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A cross-field rule references a field the schema does not declare.
    #[error("cross-field rule references unknown field '{0}'")]
    UnknownField(String),

    /// The same field name was declared twice.
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
