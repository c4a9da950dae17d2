//! # formwire
//!
//! A thin composition layer for schema-validated forms. Forms are built
//! from six components — [`Form`], [`Field`], [`FormLabel`],
//! [`FormControl`], [`FormDescription`], [`FormMessage`] — over a plain
//! element model, with accessibility wiring (`for`, `id`,
//! `aria-describedby`, `aria-invalid`) derived from one generated base
//! identifier per field.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access; depend on the individual crates for finer-grained control.
//!
//! ```
//! use formwire::prelude::*;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "username": {
//!             "type": "string",
//!             "minLength": 2,
//!             "errorMessage": "Username must be at least 2 characters."
//!         }
//!     },
//!     "required": ["username"]
//! });
//!
//! let mut form = Form::new(SchemaSource::from(schema))
//!     .expect("supported schema")
//!     .child(
//!         Field::new("username")
//!             .child(FormLabel::new().text("Username"))
//!             .child(FormControl::new().child(Element::new("input").attr("type", "text")))
//!             .child(FormDescription::new().text("Your public name."))
//!             .child(FormMessage::new()),
//!     );
//!
//! form.session().set_value("username", json!("Alice"));
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//! ```

/// Error types and instance identifiers.
pub use formwire_core as core;

/// The element model, ref composition, and polymorphic render targets.
pub use formwire_element as element;

/// Schema sources and validation adapters.
pub use formwire_schema as schema;

/// The form session, field context, and components.
pub use formwire_forms as forms;

pub use schemars;
pub use serde_json;

/// The commonly used names, in one import.
pub mod prelude {
    pub use crate::core::{FieldError, FormwireError};
    pub use crate::element::{compose_refs, Element, Node, NodeRef, RefSink};
    pub use crate::forms::{
        Field, FieldBinding, Form, FormControl, FormDescription, FormLabel, FormMessage,
        FormSession, Render, Scope, SubmitOutcome,
    };
    pub use crate::schema::{SchemaResolver, SchemaSource};
}

pub use prelude::*;
