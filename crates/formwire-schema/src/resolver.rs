//! Schema resolution and error mapping.
//!
//! [`SchemaResolver::resolve`] compiles a [`SchemaSource`] into a reusable
//! validator. [`SchemaResolver::validate`] runs it and maps every reported
//! error back onto the form: the first segment of the error's instance
//! pointer names the field, errors with no usable pointer land in the
//! non-field bucket. A field's subschema may carry an `errorMessage`
//! annotation; when present it replaces the validator's generated text.

use indexmap::IndexMap;
use jsonschema::{validator_for, Validator};
use serde_json::Value;

use formwire_core::{FieldError, FormwireError};

use crate::source::SchemaSource;

/// A compiled schema plus the document it came from.
///
/// The document is retained for `errorMessage` lookups when mapping
/// validation errors.
#[derive(Debug)]
pub struct SchemaResolver {
    validator: Validator,
    document: Value,
}

/// The outcome of validating a value map against the schema.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// One error per failing field, keyed by top-level field name. Only the
    /// first error reported for a field is kept.
    pub field_errors: IndexMap<String, FieldError>,
    /// Errors that could not be attributed to a field.
    pub non_field_errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns `true` if no errors of either kind were recorded.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }
}

impl SchemaResolver {
    /// Resolves a schema source to a compiled validator.
    ///
    /// A `Document` that is not a JSON object or boolean is rejected with
    /// [`FormwireError::UnsupportedSchema`]; a document that does not
    /// compile is rejected with [`FormwireError::SchemaCompile`]. This runs
    /// once at form construction, not per submit.
    pub fn resolve(source: &SchemaSource) -> Result<Self, FormwireError> {
        let document = match source {
            SchemaSource::Document(value) => {
                if !value.is_object() && !value.is_boolean() {
                    return Err(FormwireError::UnsupportedSchema(format!(
                        "expected a JSON Schema object, got {}",
                        json_type_name(value)
                    )));
                }
                value.clone()
            }
            SchemaSource::Derived(schema) => serde_json::to_value(schema)
                .map_err(|err| FormwireError::SchemaCompile(err.to_string()))?,
        };

        let validator =
            validator_for(&document).map_err(|err| FormwireError::SchemaCompile(err.to_string()))?;

        Ok(Self {
            validator,
            document,
        })
    }

    /// Validates `value` and maps the outcome onto field names.
    pub fn validate(&self, value: &Value) -> ValidationReport {
        let mut report = ValidationReport::default();
        if self.validator.is_valid(value) {
            return report;
        }

        for error in self.validator.iter_errors(value) {
            let pointer = error.instance_path.to_string();
            match field_of(&pointer) {
                Some(field) => {
                    let message = self
                        .custom_message(&pointer)
                        .unwrap_or_else(|| error.to_string());
                    report
                        .field_errors
                        .entry(field.to_string())
                        .or_insert_with(|| FieldError::new(message));
                }
                None => report.non_field_errors.push(FieldError::new(error.to_string())),
            }
        }
        report
    }

    /// Looks up an `errorMessage` annotation on the subschema addressed by
    /// the failing instance pointer.
    fn custom_message(&self, pointer: &str) -> Option<String> {
        subschema_at(&self.document, pointer)?
            .get("errorMessage")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Extracts the top-level field name from an instance pointer like
/// `"/username"` or `"/log/level"`. Root-level errors have no field.
fn field_of(pointer: &str) -> Option<&str> {
    let first = pointer.strip_prefix('/')?.split('/').next()?;
    if first.is_empty() {
        None
    } else {
        Some(first)
    }
}

/// Walks the schema document along an instance pointer, descending through
/// `properties` for named segments and `items` for array indices.
fn subschema_at<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        current = if segment.bytes().all(|b| b.is_ascii_digit()) {
            current.get("items")?
        } else {
            current.get("properties")?.get(segment.as_str())?
        };
    }
    Some(current)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
