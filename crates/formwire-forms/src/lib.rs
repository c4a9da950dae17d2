//! # formwire-forms
//!
//! The form layer: a [`FormSession`] holding field values and validation
//! state, [`Field`] providers that publish per-field context (name, base
//! id, live binding) to every descendant, and the bound presentational
//! components ([`FormLabel`], [`FormControl`], [`FormDescription`],
//! [`FormMessage`]) that read the nearest field context and contribute
//! accessibility wiring to whatever they render.
//!
//! Context travels through an explicit [`Scope`] value threaded down the
//! render tree — never a global. A bound component rendered with no
//! enclosing field scope fails fast with a descriptive error.

pub mod binding;
pub mod bound;
pub mod context;
pub mod field;
pub mod form;
pub mod session;

pub use binding::FieldBinding;
pub use bound::{FormControl, FormDescription, FormLabel, FormMessage};
pub use context::{FieldContext, Render, Scope};
pub use field::Field;
pub use form::Form;
pub use session::{FormSession, SubmitOutcome};
