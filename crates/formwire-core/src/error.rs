//! Error types for the formwire crates.
//!
//! Two kinds of failure exist in this library and they are handled very
//! differently. Configuration errors — an unsupported schema document, or a
//! bound component rendered outside of any `Field` — are programmer mistakes
//! and surface immediately as [`FormwireError`] values. Validation errors are
//! expected, user-facing data and travel as [`FieldError`] descriptors read
//! by the message components; they never propagate as `Err`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error type for fatal, programmer-facing failures.
#[derive(Error, Debug)]
pub enum FormwireError {
    /// The supplied schema document is not something a validation adapter
    /// recognizes. Raised once, at form construction time.
    #[error("schema type not supported: {0}")]
    UnsupportedSchema(String),

    /// The schema document was recognized but failed to compile into a
    /// validator.
    #[error("failed to compile schema: {0}")]
    SchemaCompile(String),

    /// A bound presentational component was rendered with no enclosing
    /// `Field`. There is no usable default to fall back to, so this is
    /// surfaced loudly instead.
    #[error("{component} used outside of a Field")]
    OutsideField {
        /// The component that was misused, e.g. `"FormLabel"`.
        component: &'static str,
    },
}

/// A single field's validation error.
///
/// Produced by the schema resolver, stored on the form session, and read by
/// the `FormMessage` component. Presence of a `FieldError` for a field name
/// means the field is in the error state; absence means valid or untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable message describing the failure.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
