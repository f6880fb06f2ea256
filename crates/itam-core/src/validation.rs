//! # Validation Module
//!
//! Field-level validation rules for the console's credential forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: FieldRule (THIS MODULE)                                      │
//! │  ├── required, email shape, minimum length                             │
//! │  └── pure: same input → same result, never panics                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: FormSchema (form.rs)                                         │
//! │  ├── ordered rules per field, first failure wins                       │
//! │  └── cross-field rules (password confirmation)                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SubmissionController (itam-console)                          │
//! │  └── blocks the remote call while any field is invalid                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use itam_core::validation::{validate_email, validate_min_length, FieldRule};
//!
//! assert!(validate_email("user@example.com").is_ok());
//! assert!(validate_min_length("Password", "short", 8).is_err());
//!
//! let rule = FieldRule::min_length("Password", 8);
//! assert!(rule.check("secret123").is_none());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length for every credential form.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum length of a display name on sign-up.
pub const DISPLAY_NAME_MIN_LENGTH: usize = 2;

/// `local@domain.tld` with an ASCII local part, hyphenated domain labels and a
/// TLD of at least two letters. Leading dots and `..` are rejected separately
/// because `regex` has no look-around.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("Invalid email regex")
});

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a value is non-empty after trimming.
///
/// ## Example
/// ```rust
/// use itam_core::validation::validate_required;
///
/// assert!(validate_required("Email", "a@b.co").is_ok());
/// assert!(validate_required("Email", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an email address shape.
///
/// ## Rules
/// - Exactly one `@` separating local part and domain
/// - Local part must not start with `.` or contain `..`
/// - Domain has at least one dot and a TLD of 2+ letters
///
/// ## Example
/// ```rust
/// use itam_core::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("first.last+it@corp.example.org").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email(".user@example.com").is_err());
/// ```
pub fn validate_email(value: &str) -> ValidationResult<()> {
    if value.starts_with('.') || value.contains("..") || !EMAIL_REGEX.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates that a value has at least `min` characters.
///
/// Counts `char`s, not bytes, so "señor" has 5 characters.
pub fn validate_min_length(field: &str, value: &str, min: usize) -> ValidationResult<()> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }

    Ok(())
}

// =============================================================================
// Field Rules
// =============================================================================

/// The check a [`FieldRule`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Trimmed value must be non-empty.
    Required,
    /// Value must look like an email address.
    Email,
    /// Value must have at least this many characters.
    MinLength(usize),
}

/// A single validation predicate attached to one input.
///
/// `label` is the human name used in messages ("Password"), independent of
/// the form key ("password").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    label: String,
    kind: RuleKind,
}

impl FieldRule {
    /// Rule failing with `Required` on blank input.
    pub fn required(label: impl Into<String>) -> Self {
        FieldRule {
            label: label.into(),
            kind: RuleKind::Required,
        }
    }

    /// Rule failing with `InvalidEmail` on malformed addresses.
    pub fn email(label: impl Into<String>) -> Self {
        FieldRule {
            label: label.into(),
            kind: RuleKind::Email,
        }
    }

    /// Rule failing with `TooShort { min }` below `min` characters.
    pub fn min_length(label: impl Into<String>, min: usize) -> Self {
        FieldRule {
            label: label.into(),
            kind: RuleKind::MinLength(min),
        }
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the human label used in messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the rule. `None` means the value passes.
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        let result = match self.kind {
            RuleKind::Required => validate_required(&self.label, value),
            RuleKind::Email => validate_email(value),
            RuleKind::MinLength(min) => validate_min_length(&self.label, value, min),
        };
        result.err()
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Required => write!(f, "{}: required", self.label),
            RuleKind::Email => write!(f, "{}: email", self.label),
            RuleKind::MinLength(min) => write!(f, "{}: min {}", self.label, min),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Email", "x").is_ok());
        assert!(validate_required("Email", "  x ").is_ok());

        assert_eq!(
            validate_required("Email", ""),
            Err(ValidationError::Required {
                field: "Email".to_string()
            })
        );
        assert!(validate_required("Email", " \t\n").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("USER@EXAMPLE.COM").is_ok());
        assert!(validate_email("o'brien@it.example.co.uk").is_ok());
        assert!(validate_email("a_b-c+d@sub-domain.example.io").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("user").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("user@example.c").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("us..er@example.com").is_err());
        assert!(validate_email("user.@example.com").is_err());
        assert!(validate_email(".user@example.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
        assert!(validate_email("user@-example.com").is_err());
    }

    #[test]
    fn test_password_shorter_than_eight_is_too_short() {
        let rule = FieldRule::min_length("Password", PASSWORD_MIN_LENGTH);
        for len in 0..PASSWORD_MIN_LENGTH {
            let value = "p".repeat(len);
            assert_eq!(
                rule.check(&value),
                Some(ValidationError::TooShort {
                    field: "Password".to_string(),
                    min: 8
                }),
                "length {len} should be too short"
            );
        }
        assert!(rule.check("12345678").is_none());
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        assert!(validate_min_length("Full name", "é", DISPLAY_NAME_MIN_LENGTH).is_err());
        assert!(validate_min_length("Full name", "Zoë", DISPLAY_NAME_MIN_LENGTH).is_ok());
    }

    #[test]
    fn test_rules_are_deterministic() {
        let rule = FieldRule::email("Email");
        assert_eq!(rule.check("nope"), rule.check("nope"));
        assert_eq!(rule.check("a@b.co"), None);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(FieldRule::min_length("Password", 8).to_string(), "Password: min 8");
        assert_eq!(FieldRule::required("Email").to_string(), "Email: required");
    }
}
