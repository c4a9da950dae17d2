//! The form session: the single owner of field values and validation state.
//!
//! Everything else in the crate only reads. The session is a cheaply
//! clonable handle over shared state, which fits the single-threaded UI
//! event-loop model this library assumes — no locking, but read-after-write
//! consistency within one render pass.
//!
//! Submissions carry an attempt number. A validation outcome is applied
//! only if its attempt is still the most recent one, so a newer submission
//! supersedes an in-flight one's user-visible effect.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use formwire_core::{FieldError, FormwireError};
use formwire_schema::{SchemaResolver, SchemaSource, ValidationReport};

use crate::binding::FieldBinding;

/// How a finished submit attempt was disposed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt was current and the values validated; errors were
    /// cleared and the submit handler may run.
    Accepted,
    /// The attempt was current but validation failed; errors were recorded
    /// and the submit handler must not run.
    Rejected,
    /// A newer attempt superseded this one; visible state was not touched.
    Superseded,
}

struct SessionState {
    values: Map<String, Value>,
    defaults: Map<String, Value>,
    field_errors: IndexMap<String, FieldError>,
    non_field_errors: Vec<FieldError>,
    touched: IndexSet<String>,
    resolver: SchemaResolver,
    submit_seq: u64,
}

/// Shared handle to one form's state.
#[derive(Clone)]
pub struct FormSession {
    inner: Rc<RefCell<SessionState>>,
}

impl FormSession {
    /// Builds a session from a schema source and default field values.
    ///
    /// Schema resolution happens here, once; an unsupported or uncompilable
    /// schema fails construction.
    pub fn new(source: &SchemaSource, defaults: Map<String, Value>) -> Result<Self, FormwireError> {
        let resolver = SchemaResolver::resolve(source)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(SessionState {
                values: defaults.clone(),
                defaults,
                field_errors: IndexMap::new(),
                non_field_errors: Vec::new(),
                touched: IndexSet::new(),
                resolver,
                submit_seq: 0,
            })),
        })
    }

    /// Returns the live binding for the named field.
    pub fn field(&self, name: &str) -> FieldBinding {
        FieldBinding::new(name, self.clone())
    }

    /// Returns the current value of the named field.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.inner.borrow().values.get(name).cloned()
    }

    /// Sets the value of the named field.
    pub fn set_value(&self, name: &str, value: Value) {
        self.inner.borrow_mut().values.insert(name.to_string(), value);
    }

    /// Replaces all current values (the explicit `values` override).
    pub fn set_values(&self, values: Map<String, Value>) {
        self.inner.borrow_mut().values = values;
    }

    /// Merges defaults in without overwriting values already present.
    pub fn apply_defaults(&self, defaults: Map<String, Value>) {
        let mut state = self.inner.borrow_mut();
        for (name, value) in &defaults {
            if !state.values.contains_key(name) {
                state.values.insert(name.clone(), value.clone());
            }
        }
        state.defaults = defaults;
    }

    /// Marks the named field as having lost focus at least once.
    pub fn notify_blur(&self, name: &str) {
        self.inner.borrow_mut().touched.insert(name.to_string());
    }

    /// Returns `true` if the named field has ever been blurred.
    pub fn is_touched(&self, name: &str) -> bool {
        self.inner.borrow().touched.contains(name)
    }

    /// Returns the named field's current validation error, if any.
    pub fn field_error(&self, name: &str) -> Option<FieldError> {
        self.inner.borrow().field_errors.get(name).cloned()
    }

    /// Returns errors that could not be attributed to any field.
    pub fn non_field_errors(&self) -> Vec<FieldError> {
        self.inner.borrow().non_field_errors.clone()
    }

    /// Returns a snapshot of the current values.
    pub fn values(&self) -> Map<String, Value> {
        self.inner.borrow().values.clone()
    }

    /// Starts a submit attempt, superseding any in-flight one. Returns the
    /// attempt number to pass to [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&self) -> u64 {
        let mut state = self.inner.borrow_mut();
        state.submit_seq += 1;
        state.submit_seq
    }

    /// Applies a validation outcome for the given attempt.
    ///
    /// Outcomes for superseded attempts are discarded without touching
    /// visible error state; only the most recent attempt is authoritative.
    pub fn finish_submit(&self, attempt: u64, report: ValidationReport) -> SubmitOutcome {
        let mut state = self.inner.borrow_mut();
        if attempt != state.submit_seq {
            return SubmitOutcome::Superseded;
        }
        if report.is_valid() {
            state.field_errors.clear();
            state.non_field_errors.clear();
            SubmitOutcome::Accepted
        } else {
            state.field_errors = report.field_errors;
            state.non_field_errors = report.non_field_errors;
            SubmitOutcome::Rejected
        }
    }

    /// Validates the current values.
    pub fn validate(&self) -> ValidationReport {
        let state = self.inner.borrow();
        state.resolver.validate(&Value::Object(state.values.clone()))
    }

    /// Runs a full submit: validates the current values and, if the attempt
    /// is still current and validation passed, calls `handler` exactly once
    /// with the validated values.
    pub fn submit<F>(&self, handler: F) -> SubmitOutcome
    where
        F: FnOnce(&Map<String, Value>),
    {
        let attempt = self.begin_submit();
        let report = self.validate();
        let outcome = self.finish_submit(attempt, report);
        if outcome == SubmitOutcome::Accepted {
            let snapshot = self.values();
            handler(&snapshot);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn username_session() -> FormSession {
        let source = SchemaSource::from(json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "minLength": 2,
                    "errorMessage": "Username must be at least 2 characters."
                }
            },
            "required": ["username"]
        }));
        let mut defaults = Map::new();
        defaults.insert("username".to_string(), json!(""));
        FormSession::new(&source, defaults).unwrap()
    }

    #[test]
    fn test_defaults_become_initial_values() {
        let session = username_session();
        assert_eq!(session.value("username"), Some(json!("")));
    }

    #[test]
    fn test_invalid_submit_records_error_and_skips_handler() {
        let session = username_session();
        let mut called = false;
        let outcome = session.submit(|_| called = true);
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!called);
        assert_eq!(
            session.field_error("username").unwrap().message,
            "Username must be at least 2 characters."
        );
    }

    #[test]
    fn test_valid_submit_calls_handler_once_and_clears_errors() {
        let session = username_session();
        session.submit(|_| {});
        assert!(session.field_error("username").is_some());

        session.set_value("username", json!("Alice"));
        let mut seen = Vec::new();
        let outcome = session.submit(|values| seen.push(values.clone()));
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].get("username"), Some(&json!("Alice")));
        assert!(session.field_error("username").is_none());
    }

    #[test]
    fn test_stale_attempt_is_superseded() {
        let session = username_session();
        let stale = session.begin_submit();
        let report = session.validate();
        let _current = session.begin_submit();

        let outcome = session.finish_submit(stale, report);
        assert_eq!(outcome, SubmitOutcome::Superseded);
        // Visible state untouched by the stale outcome.
        assert!(session.field_error("username").is_none());
    }

    #[test]
    fn test_current_attempt_applies_after_stale_discarded() {
        let session = username_session();
        let stale = session.begin_submit();
        let stale_report = session.validate();

        session.set_value("username", json!("Alice"));
        let current = session.begin_submit();
        let current_report = session.validate();

        assert_eq!(
            session.finish_submit(stale, stale_report),
            SubmitOutcome::Superseded
        );
        assert_eq!(
            session.finish_submit(current, current_report),
            SubmitOutcome::Accepted
        );
    }

    #[test]
    fn test_blur_marks_touched() {
        let session = username_session();
        assert!(!session.is_touched("username"));
        session.notify_blur("username");
        assert!(session.is_touched("username"));
    }

    #[test]
    fn test_set_values_overrides_everything() {
        let session = username_session();
        session.set_value("username", json!("Alice"));
        let mut values = Map::new();
        values.insert("username".to_string(), json!("Bob"));
        session.set_values(values);
        assert_eq!(session.value("username"), Some(json!("Bob")));
    }

    #[test]
    fn test_apply_defaults_does_not_clobber_edits() {
        let session = username_session();
        session.set_value("username", json!("Alice"));
        let mut defaults = Map::new();
        defaults.insert("username".to_string(), json!("anon"));
        defaults.insert("color".to_string(), json!("green"));
        session.apply_defaults(defaults);
        assert_eq!(session.value("username"), Some(json!("Alice")));
        assert_eq!(session.value("color"), Some(json!("green")));
    }
}
