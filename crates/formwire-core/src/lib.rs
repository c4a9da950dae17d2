//! # formwire-core
//!
//! Shared foundation for the formwire crates: the [`FormwireError`] enum,
//! the per-field [`FieldError`] descriptor, and generation of per-mount
//! instance identifiers.

pub mod error;
pub mod id;

pub use error::{FieldError, FormwireError};
pub use id::next_instance_id;
