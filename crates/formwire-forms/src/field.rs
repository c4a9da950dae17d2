//! The `Field` context provider.
//!
//! `Field` wraps everything belonging to one named field. At construction
//! it draws a base identifier, and at render time it obtains the live
//! binding from the session and publishes a [`FieldContext`] to all
//! descendants through the scope. The wrapper element itself is
//! polymorphic like every other component; the context is published either
//! way.

use formwire_core::{next_instance_id, FormwireError};
use formwire_element::{Node, RefSink, TargetProps};
use indexmap::IndexMap;

use crate::binding::FieldBinding;
use crate::context::{FieldContext, Render, Scope};

const DEFAULT_FIELD_TAG: &str = "div";

enum FieldChildren {
    None,
    Items(Vec<Box<dyn Render>>),
    Func(Box<dyn Fn(&FieldBinding) -> Node>),
}

/// Context provider for one named field.
pub struct Field {
    name: String,
    base_id: String,
    props: TargetProps,
    children: FieldChildren,
}

impl Field {
    /// Creates a field provider for `name`. The base identifier is drawn
    /// here, so it is stable for the lifetime of this value and changes
    /// only when a new `Field` is constructed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_id: next_instance_id(),
            props: TargetProps::default(),
            children: FieldChildren::None,
        }
    }

    /// Renders a caller-specified tag instead of the default `div`.
    #[must_use]
    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.props.as_tag = Some(tag.into());
        self
    }

    /// Merges the wrapper's attributes onto the single child instead of
    /// wrapping it.
    #[must_use]
    pub fn as_child(mut self) -> Self {
        self.props.as_child = true;
        self
    }

    /// Adds a class fragment to the wrapper.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.props.class = Some(class.into());
        self
    }

    /// Sets an attribute on the wrapper.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.insert(name.into(), value.into());
        self
    }

    /// Attaches a ref sink to the wrapper.
    #[must_use]
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.props.node_ref = Some(sink.into());
        self
    }

    /// Appends a child; descendants see this field's context.
    #[must_use]
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        match &mut self.children {
            FieldChildren::Items(items) => items.push(Box::new(child)),
            _ => self.children = FieldChildren::Items(vec![Box::new(child)]),
        }
        self
    }

    /// Supplies children as a function of the live binding; its return
    /// value is rendered directly inside the wrapper.
    #[must_use]
    pub fn render_with(mut self, f: impl Fn(&FieldBinding) -> Node + 'static) -> Self {
        self.children = FieldChildren::Func(Box::new(f));
        self
    }
}

impl Render for Field {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        let binding = scope.session().field(&self.name);
        let context = FieldContext::new(self.name.clone(), self.base_id.clone(), binding.clone());
        let field_scope = scope.with_field(context);

        let children = match &self.children {
            FieldChildren::None => Vec::new(),
            FieldChildren::Func(f) => vec![f(&binding)],
            FieldChildren::Items(items) => items
                .iter()
                .map(|child| child.render(&field_scope))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(self
            .props
            .render(DEFAULT_FIELD_TAG, IndexMap::new(), children))
    }
}
