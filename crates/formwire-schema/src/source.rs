//! Schema sources.
//!
//! [`SchemaSource`] is the closed set of schema inputs a form accepts.
//! Dispatching on a sum type instead of inspecting runtime type tags means
//! adapter selection is exhaustive at compile time; the only runtime
//! failure left is a document that does not describe a valid schema.

use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde_json::Value;

/// A validation schema, in one of the two recognized forms.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// A raw JSON Schema document.
    Document(Value),
    /// A schema derived from a Rust type via `schemars`.
    Derived(RootSchema),
}

impl SchemaSource {
    /// Derives a schema from `T`'s `JsonSchema` implementation.
    pub fn of<T: JsonSchema>() -> Self {
        Self::Derived(schema_for!(T))
    }
}

impl From<Value> for SchemaSource {
    fn from(document: Value) -> Self {
        Self::Document(document)
    }
}

impl From<RootSchema> for SchemaSource {
    fn from(schema: RootSchema) -> Self {
        Self::Derived(schema)
    }
}
