//! The `Form` component.
//!
//! `Form` ties the pieces together: it resolves the schema once at
//! construction, owns (or borrows) the session, renders a `form` element
//! whose descendants all see the session through the scope, and drives
//! submission through the stored callback. The callback runs exactly once
//! per successful validated submission and never when validation fails.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use formwire_core::FormwireError;
use formwire_element::{Node, RefSink, TargetProps};
use formwire_schema::SchemaSource;

use crate::context::{Render, Scope};
use crate::session::{FormSession, SubmitOutcome};

const DEFAULT_FORM_TAG: &str = "form";

type SubmitHandler = Box<dyn FnMut(&Map<String, Value>)>;

enum FormChildren {
    None,
    Items(Vec<Box<dyn Render>>),
    Func(Box<dyn Fn(&FormSession) -> Node>),
}

/// The root form component.
pub struct Form {
    session: FormSession,
    on_submit: Option<SubmitHandler>,
    props: TargetProps,
    children: FormChildren,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Builds a form around a freshly constructed session for `schema`.
    ///
    /// Fails here, not at submit time, if the schema is unsupported or does
    /// not compile.
    pub fn new(schema: impl Into<SchemaSource>) -> Result<Self, FormwireError> {
        let session = FormSession::new(&schema.into(), Map::new())?;
        Ok(Self::with_session(session))
    }

    /// Builds a form around a pre-built session, which outlives the form.
    pub fn with_session(session: FormSession) -> Self {
        Self {
            session,
            on_submit: None,
            props: TargetProps::default(),
            children: FormChildren::None,
        }
    }

    /// Sets default field values, without overwriting values already set.
    #[must_use]
    pub fn default_values(self, defaults: Map<String, Value>) -> Self {
        self.session.apply_defaults(defaults);
        self
    }

    /// Explicitly sets the current field values.
    #[must_use]
    pub fn values(self, values: Map<String, Value>) -> Self {
        self.session.set_values(values);
        self
    }

    /// Sets the submit callback, invoked with the validated values.
    #[must_use]
    pub fn on_submit(mut self, handler: impl FnMut(&Map<String, Value>) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Renders a caller-specified tag instead of `form`.
    #[must_use]
    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.props.as_tag = Some(tag.into());
        self
    }

    /// Merges the form's attributes onto the single child instead of
    /// wrapping it.
    #[must_use]
    pub fn as_child(mut self) -> Self {
        self.props.as_child = true;
        self
    }

    /// Adds a class fragment to the form element.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.props.class = Some(class.into());
        self
    }

    /// Sets an attribute on the form element.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.insert(name.into(), value.into());
        self
    }

    /// Attaches a ref sink to the form element.
    #[must_use]
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.props.node_ref = Some(sink.into());
        self
    }

    /// Appends a child; descendants see this form's session.
    #[must_use]
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        match &mut self.children {
            FormChildren::Items(items) => items.push(Box::new(child)),
            _ => self.children = FormChildren::Items(vec![Box::new(child)]),
        }
        self
    }

    /// Supplies children as a function of the session.
    #[must_use]
    pub fn render_with(mut self, f: impl Fn(&FormSession) -> Node + 'static) -> Self {
        self.children = FormChildren::Func(Box::new(f));
        self
    }

    /// The session backing this form.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Renders the form tree.
    pub fn render(&self) -> Result<Node, FormwireError> {
        let scope = Scope::new(self.session.clone());
        let children = match &self.children {
            FormChildren::None => Vec::new(),
            FormChildren::Func(f) => vec![f(&self.session)],
            FormChildren::Items(items) => items
                .iter()
                .map(|child| child.render(&scope))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(self.props.render(DEFAULT_FORM_TAG, IndexMap::new(), children))
    }

    /// Renders the form tree and notifies all ref sinks.
    pub fn mount(&self) -> Result<Node, FormwireError> {
        let node = self.render()?;
        node.commit_refs();
        Ok(node)
    }

    /// Submits the form: validates current values and, on success, invokes
    /// the submit callback exactly once with the validated values.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.on_submit.as_mut() {
            Some(handler) => self.session.submit(|values| handler(values)),
            None => self.session.submit(|_| {}),
        }
    }
}

impl Render for Form {
    fn render(&self, _scope: &Scope) -> Result<Node, FormwireError> {
        self.render()
    }
}
