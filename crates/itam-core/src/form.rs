//! # Form Schemas
//!
//! Composes [`FieldRule`]s into named, ordered fields plus cross-field rules,
//! and evaluates a full set of [`FormValues`] into one [`FieldErrors`] verdict.
//!
//! ## Evaluation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate(values)                                                       │
//! │                                                                         │
//! │  1. For each field (declaration order):                                │
//! │       run rules in order ──► keep FIRST failure, skip the rest         │
//! │                                                                         │
//! │  2. For each cross-field rule:                                         │
//! │       failure ──► OVERWRITE the blamed field's entry                   │
//! │                                                                         │
//! │  3. valid  ⇔  every entry is None                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use itam_core::form::{fields, FormSchema, FormValues};
//!
//! let schema = FormSchema::sign_up();
//! let mut values = FormValues::for_schema(&schema);
//! values.set(fields::FULL_NAME, "Ada Lovelace");
//! values.set(fields::EMAIL, "ada@example.com");
//! values.set(fields::PASSWORD, "abcdefgh");
//! values.set(fields::CONFIRM_PASSWORD, "abcdefgI");
//!
//! let errors = schema.evaluate(&values);
//! assert!(!errors.is_valid());
//! assert_eq!(
//!     errors.message(fields::CONFIRM_PASSWORD).as_deref(),
//!     Some("Passwords do not match")
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{SchemaError, ValidationError};
use crate::validation::{FieldRule, DISPLAY_NAME_MIN_LENGTH, PASSWORD_MIN_LENGTH};

/// Form keys used by the built-in schemas.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const FULL_NAME: &str = "fullName";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

// =============================================================================
// Form Kind
// =============================================================================

/// The credential forms the console mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    SignIn,
    SignUp,
    PasswordReset,
}

impl FormKind {
    /// Returns the schema that validates this form.
    pub fn schema(self) -> FormSchema {
        match self {
            FormKind::SignIn => FormSchema::sign_in(),
            FormKind::SignUp => FormSchema::sign_up(),
            FormKind::PasswordReset => FormSchema::password_reset(),
        }
    }

    /// Stable name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::SignIn => "sign_in",
            FormKind::SignUp => "sign_up",
            FormKind::PasswordReset => "password_reset",
        }
    }
}

// =============================================================================
// Form Values
// =============================================================================

/// Current string value of every input in a form.
///
/// Missing keys read as `""`, matching an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Creates an empty value set.
    pub fn new() -> Self {
        FormValues(BTreeMap::new())
    }

    /// Creates a value set with every schema field defaulted to `""`.
    pub fn for_schema(schema: &FormSchema) -> Self {
        FormValues(
            schema
                .field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        )
    }

    /// Builds values from `(key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        FormValues(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Sets one field's value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns a field's value, or `""` when it was never set.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Field Errors (validation result)
// =============================================================================

/// One field's validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub field: String,
    pub error: Option<ValidationError>,
}

/// Validation verdict for a whole form, one entry per schema field in
/// declaration order. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub entries: Vec<FieldEntry>,
}

impl FieldErrors {
    /// Returns the error for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .and_then(|e| e.error.as_ref())
    }

    /// Returns the inline message for `field`, if any.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ValidationError::message)
    }

    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| e.error.is_none())
    }

    /// Keys of the fields that failed, in declaration order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.error.is_some())
            .map(|e| e.field.as_str())
    }

    fn set(&mut self, field: &str, error: ValidationError) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.field == field) {
            entry.error = Some(error);
        }
    }
}

// =============================================================================
// Cross-Field Rules
// =============================================================================

/// A predicate spanning two inputs, blamed on one of them for display.
///
/// The only shape the console needs is equality: `blame` must equal `other`.
/// The rule stays silent while either side is blank so the blamed field's
/// own `required` rule reports first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossFieldRule {
    blame: String,
    other: String,
    message: String,
}

impl CrossFieldRule {
    /// `blame` must equal `other`; failure reports `message` on `blame`.
    pub fn must_match(
        blame: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CrossFieldRule {
            blame: blame.into(),
            other: other.into(),
            message: message.into(),
        }
    }

    /// Field the error is displayed on.
    pub fn blame(&self) -> &str {
        &self.blame
    }

    /// Runs the rule against the full value set.
    pub fn check(&self, values: &FormValues) -> Option<ValidationError> {
        let blamed = values.get(&self.blame);
        let other = values.get(&self.other);

        if blamed.is_empty() || other.is_empty() || blamed == other {
            return None;
        }

        Some(ValidationError::Mismatch {
            message: self.message.clone(),
        })
    }

    fn references(&self) -> [&str; 2] {
        [&self.blame, &self.other]
    }
}

// =============================================================================
// Form Schema
// =============================================================================

/// Ordered field rules plus cross-field rules.
///
/// The default schema has no fields and always validates; the logout action
/// uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<(String, Vec<FieldRule>)>,
    cross_rules: Vec<CrossFieldRule>,
}

impl FormSchema {
    /// Starts an empty schema.
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    /// Sign-in: email + password.
    pub fn sign_in() -> Self {
        FormSchema {
            fields: vec![
                (
                    fields::EMAIL.to_string(),
                    vec![FieldRule::required("Email"), FieldRule::email("Email")],
                ),
                (
                    fields::PASSWORD.to_string(),
                    vec![
                        FieldRule::required("Password"),
                        FieldRule::min_length("Password", PASSWORD_MIN_LENGTH),
                    ],
                ),
            ],
            cross_rules: Vec::new(),
        }
    }

    /// Sign-up: full name, email, password and its confirmation.
    pub fn sign_up() -> Self {
        FormSchema {
            fields: vec![
                (
                    fields::FULL_NAME.to_string(),
                    vec![FieldRule::min_length("Full name", DISPLAY_NAME_MIN_LENGTH)],
                ),
                (fields::EMAIL.to_string(), vec![FieldRule::email("Email")]),
                (
                    fields::PASSWORD.to_string(),
                    vec![FieldRule::min_length("Password", PASSWORD_MIN_LENGTH)],
                ),
                (
                    fields::CONFIRM_PASSWORD.to_string(),
                    vec![FieldRule::required("Confirm password")],
                ),
            ],
            cross_rules: vec![CrossFieldRule::must_match(
                fields::CONFIRM_PASSWORD,
                fields::PASSWORD,
                "Passwords do not match",
            )],
        }
    }

    /// Password reset request: email only.
    pub fn password_reset() -> Self {
        FormSchema {
            fields: vec![(
                fields::EMAIL.to_string(),
                vec![FieldRule::required("Email"), FieldRule::email("Email")],
            )],
            cross_rules: Vec::new(),
        }
    }

    /// Field keys in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// True if the schema declares `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Evaluates every rule against `values`.
    ///
    /// Pure: calling it twice on equal values yields equal results.
    pub fn evaluate(&self, values: &FormValues) -> FieldErrors {
        let mut result = FieldErrors {
            entries: self
                .fields
                .iter()
                .map(|(name, rules)| {
                    let value = values.get(name);
                    FieldEntry {
                        field: name.clone(),
                        error: rules.iter().find_map(|rule| rule.check(value)),
                    }
                })
                .collect(),
        };

        for rule in &self.cross_rules {
            if let Some(err) = rule.check(values) {
                result.set(rule.blame(), err);
            }
        }

        result
    }

    /// Verifies that every cross-field rule references declared fields.
    pub fn check_references(&self) -> Result<(), SchemaError> {
        for rule in &self.cross_rules {
            for name in rule.references() {
                if !self.has_field(name) {
                    return Err(SchemaError::UnknownField(name.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Incremental schema construction with reference checking on `build`.
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    fields: Vec<(String, Vec<FieldRule>)>,
    cross_rules: Vec<CrossFieldRule>,
}

impl FormSchemaBuilder {
    /// Declares a field and its rules (checked in the given order).
    pub fn field(mut self, name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    /// Adds a cross-field rule.
    pub fn cross(mut self, rule: CrossFieldRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    /// Finishes the schema.
    ///
    /// ## Errors
    /// - `DuplicateField` if a key was declared twice
    /// - `UnknownField` if a cross-field rule names an undeclared key
    pub fn build(self) -> Result<FormSchema, SchemaError> {
        let mut seen = BTreeMap::new();
        for (name, _) in &self.fields {
            if seen.insert(name.as_str(), ()).is_some() {
                return Err(SchemaError::DuplicateField(name.clone()));
            }
        }

        let schema = FormSchema {
            fields: self.fields,
            cross_rules: self.cross_rules,
        };
        schema.check_references()?;
        Ok(schema)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
