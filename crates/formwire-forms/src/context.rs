//! Field context and scope propagation.
//!
//! A [`FieldContext`] is what a `Field` publishes to its descendants: the
//! field name, the generated base identifier, and the live binding. The
//! three accessibility identifiers are derived from the base id on every
//! read, so the label `for`, control `id`, description `id`, and message
//! `id` can never drift apart for the same mounted field.
//!
//! The [`Scope`] threads context down the render tree explicitly. Nesting a
//! `Field` inside another shadows the outer context; rendering a bound
//! component with no field in scope is a programmer error and fails fast.

use formwire_core::FormwireError;
use formwire_element::Node;

use crate::binding::FieldBinding;
use crate::session::FormSession;

/// The per-field descriptor visible to all descendants of a `Field`.
#[derive(Clone)]
pub struct FieldContext {
    name: String,
    base_id: String,
    binding: FieldBinding,
}

impl std::fmt::Debug for FieldContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldContext")
            .field("name", &self.name)
            .field("base_id", &self.base_id)
            .finish_non_exhaustive()
    }
}

impl FieldContext {
    pub(crate) fn new(name: String, base_id: String, binding: FieldBinding) -> Self {
        Self {
            name,
            base_id,
            binding,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generated base identifier for this mounted field.
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// The live binding for this field.
    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// The id carried by the control element and targeted by the label.
    pub fn item_id(&self) -> String {
        format!("{}-form-item", self.base_id)
    }

    /// The id of the description element.
    pub fn description_id(&self) -> String {
        format!("{}-form-item-description", self.base_id)
    }

    /// The id of the message element.
    pub fn message_id(&self) -> String {
        format!("{}-form-item-message", self.base_id)
    }
}

/// The ambient context passed down the render tree.
#[derive(Clone)]
pub struct Scope {
    session: FormSession,
    field: Option<FieldContext>,
}

impl Scope {
    /// Creates the root scope for a form, with no field in scope.
    pub fn new(session: FormSession) -> Self {
        Self {
            session,
            field: None,
        }
    }

    /// Returns a child scope with `context` as the nearest field,
    /// shadowing any outer one.
    pub fn with_field(&self, context: FieldContext) -> Self {
        Self {
            session: self.session.clone(),
            field: Some(context),
        }
    }

    /// The form session this scope belongs to.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// The nearest enclosing field context, or a descriptive error naming
    /// the component that was rendered outside any `Field`.
    pub fn field(&self, component: &'static str) -> Result<&FieldContext, FormwireError> {
        self.field
            .as_ref()
            .ok_or(FormwireError::OutsideField { component })
    }
}

/// Anything that can render itself within a scope.
pub trait Render {
    /// Renders to a node tree, or fails on configuration errors such as a
    /// bound component with no field in scope.
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError>;
}

impl Render for Node {
    fn render(&self, _scope: &Scope) -> Result<Node, FormwireError> {
        Ok(self.clone())
    }
}

impl Render for formwire_element::Element {
    fn render(&self, _scope: &Scope) -> Result<Node, FormwireError> {
        Ok(Node::Element(self.clone()))
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        (**self).render(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwire_schema::SchemaSource;
    use serde_json::{json, Map};

    fn scope() -> Scope {
        let source = SchemaSource::from(json!({"type": "object"}));
        Scope::new(FormSession::new(&source, Map::new()).unwrap())
    }

    fn context(scope: &Scope, name: &str, base: &str) -> FieldContext {
        FieldContext::new(
            name.to_string(),
            base.to_string(),
            scope.session().field(name),
        )
    }

    #[test]
    fn test_derived_ids_share_one_base() {
        let scope = scope();
        let ctx = context(&scope, "username", "fw-9");
        assert_eq!(ctx.item_id(), "fw-9-form-item");
        assert_eq!(ctx.description_id(), "fw-9-form-item-description");
        assert_eq!(ctx.message_id(), "fw-9-form-item-message");
    }

    #[test]
    fn test_scope_without_field_fails_fast() {
        let scope = scope();
        let err = scope.field("FormLabel").unwrap_err();
        assert_eq!(err.to_string(), "FormLabel used outside of a Field");
    }

    #[test]
    fn test_nested_field_shadows_outer() {
        let scope = scope();
        let outer = scope.with_field(context(&scope, "outer", "fw-1"));
        let inner = outer.with_field(context(&scope, "inner", "fw-2"));
        assert_eq!(outer.field("FormControl").unwrap().name(), "outer");
        assert_eq!(inner.field("FormControl").unwrap().name(), "inner");
    }
}
