//! Live field bindings.
//!
//! A [`FieldBinding`] is the value/change/blur/name bundle a control needs
//! to become controlled. It is a thin handle onto the session: reads always
//! see the latest value, writes go straight to the single owner of state.

use serde_json::Value;

use formwire_element::Element;

use crate::session::FormSession;

/// The live binding for one named field.
#[derive(Clone)]
pub struct FieldBinding {
    name: String,
    session: FormSession,
}

impl FieldBinding {
    pub(crate) fn new(name: &str, session: FormSession) -> Self {
        Self {
            name: name.to_string(),
            session,
        }
    }

    /// The field name, echoed back.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's current value; `Null` when unset.
    pub fn value(&self) -> Value {
        self.session.value(&self.name).unwrap_or(Value::Null)
    }

    /// Replaces the field's value (the change handler).
    pub fn set_value(&self, value: impl Into<Value>) {
        self.session.set_value(&self.name, value.into());
    }

    /// Records that the field lost focus (the blur handler).
    pub fn notify_blur(&self) {
        self.session.notify_blur(&self.name);
    }

    /// Spreads the binding onto an element, overwriting its `name` and
    /// `value` attributes so the element reflects the controlled state.
    pub fn spread_onto(&self, element: Element) -> Element {
        element
            .attr("name", self.name.clone())
            .attr("value", value_attr(&self.value()))
    }
}

fn value_attr(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
