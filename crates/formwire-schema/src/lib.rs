//! # formwire-schema
//!
//! Maps a validation schema to the adapter the form session uses. Two
//! schema-definition routes are recognized, as a closed tagged variant
//! ([`SchemaSource`]): raw JSON Schema documents, and schemas derived from
//! Rust types via `schemars`. Anything else fails loudly at construction
//! time with "schema type not supported" — never a silent default.
//!
//! Resolution happens once, when the form session is built; per-submit
//! work is only running the already-compiled validator and mapping its
//! errors back onto field names.

pub mod resolver;
pub mod source;

pub use resolver::{SchemaResolver, ValidationReport};
pub use source::SchemaSource;
