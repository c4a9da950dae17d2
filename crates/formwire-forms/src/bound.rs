//! The bound presentational components.
//!
//! `FormLabel`, `FormControl`, `FormDescription`, and `FormMessage` all
//! read the nearest enclosing field context — none create one — and
//! contribute their share of the accessibility wiring: the label points at
//! the control, the control carries the item id and `aria-describedby`,
//! the description and message carry the ids being pointed at. Rendering
//! any of them outside a `Field` fails fast.

use formwire_core::{FieldError, FormwireError};
use formwire_element::{Element, Node, RefSink, TargetProps};
use indexmap::IndexMap;

use crate::binding::FieldBinding;
use crate::context::{Render, Scope};

const DEFAULT_LABEL_TAG: &str = "label";
const DEFAULT_CONTROL_TAG: &str = "div";
const DEFAULT_DESCRIPTION_TAG: &str = "p";
const DEFAULT_MESSAGE_TAG: &str = "p";

macro_rules! target_prop_builders {
    () => {
        /// Renders a caller-specified tag instead of the built-in default.
        #[must_use]
        pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
            self.props.as_tag = Some(tag.into());
            self
        }

        /// Merges the computed attributes onto the single child instead of
        /// wrapping it.
        #[must_use]
        pub fn as_child(mut self) -> Self {
            self.props.as_child = true;
            self
        }

        /// Adds a class fragment.
        #[must_use]
        pub fn class(mut self, class: impl Into<String>) -> Self {
            self.props.class = Some(class.into());
            self
        }

        /// Sets an attribute; caller attributes overwrite computed ones.
        #[must_use]
        pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.props.attrs.insert(name.into(), value.into());
            self
        }

        /// Attaches a ref sink.
        #[must_use]
        pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
            self.props.node_ref = Some(sink.into());
            self
        }
    };
}

/// Label for the current field; points at the control via `for`.
#[derive(Default)]
pub struct FormLabel {
    props: TargetProps,
    children: Vec<Box<dyn Render>>,
}

impl FormLabel {
    /// Creates an empty label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    target_prop_builders!();
}

impl Render for FormLabel {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        let context = scope.field("FormLabel")?;
        let mut computed = IndexMap::new();
        computed.insert("for".to_string(), context.item_id());

        let children = render_all(&self.children, scope)?;
        Ok(self.props.render(DEFAULT_LABEL_TAG, computed, children))
    }
}

enum ControlChildren {
    None,
    Items(Vec<Box<dyn Render>>),
    Func(Box<dyn Fn(&FieldBinding) -> Node>),
}

/// Wrapper for the field's input element.
///
/// Carries the item id, `aria-describedby`, `aria-invalid`, and
/// `data-error`, and forwards the live binding: onto a single child
/// element when one is given, onto the render function's argument when a
/// function is given, and onto the wrapper itself otherwise.
pub struct FormControl {
    props: TargetProps,
    children: ControlChildren,
}

impl Default for FormControl {
    fn default() -> Self {
        Self::new()
    }
}

impl FormControl {
    /// Creates an empty control wrapper.
    pub fn new() -> Self {
        Self {
            props: TargetProps::default(),
            children: ControlChildren::None,
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        match &mut self.children {
            ControlChildren::Items(items) => items.push(Box::new(child)),
            _ => self.children = ControlChildren::Items(vec![Box::new(child)]),
        }
        self
    }

    /// Supplies children as a function of the live binding.
    #[must_use]
    pub fn render_with(mut self, f: impl Fn(&FieldBinding) -> Node + 'static) -> Self {
        self.children = ControlChildren::Func(Box::new(f));
        self
    }

    target_prop_builders!();
}

impl Render for FormControl {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        let context = scope.field("FormControl")?;
        let binding = context.binding();
        let error = scope.session().field_error(context.name());

        let described_by = if error.is_some() {
            format!("{} {}", context.description_id(), context.message_id())
        } else {
            context.description_id()
        };
        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), context.item_id());
        computed.insert("aria-describedby".to_string(), described_by);
        computed.insert("aria-invalid".to_string(), error.is_some().to_string());
        computed.insert("data-error".to_string(), error.is_some().to_string());

        let (children, bind_wrapper) = match &self.children {
            ControlChildren::None => (Vec::new(), true),
            ControlChildren::Func(f) => (vec![f(binding)], false),
            ControlChildren::Items(items) => {
                let rendered = render_all(items, scope)?;
                let single = {
                    let leaves: Vec<&Node> =
                        rendered.iter().flat_map(Node::renderable_nodes).collect();
                    match leaves.as_slice() {
                        [Node::Element(element)] => Some((*element).clone()),
                        _ => None,
                    }
                };
                match single {
                    Some(element) => {
                        (vec![Node::Element(binding.spread_onto(element))], false)
                    }
                    None => (rendered, true),
                }
            }
        };

        let node = self.props.render(DEFAULT_CONTROL_TAG, computed, children);
        if bind_wrapper {
            if let Node::Element(element) = node {
                return Ok(Node::Element(binding.spread_onto(element)));
            }
        }
        Ok(node)
    }
}

/// Descriptive help text for the current field.
#[derive(Default)]
pub struct FormDescription {
    props: TargetProps,
    children: Vec<Box<dyn Render>>,
}

impl FormDescription {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    target_prop_builders!();
}

impl Render for FormDescription {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        let context = scope.field("FormDescription")?;
        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), context.description_id());

        let children = render_all(&self.children, scope)?;
        Ok(self.props.render(DEFAULT_DESCRIPTION_TAG, computed, children))
    }
}

enum MessageChildren {
    None,
    Node(Node),
    Func(Box<dyn Fn(Option<&FieldError>) -> Node>),
}

/// The field's validation message.
///
/// With an error present, the error text takes precedence over any static
/// children; with neither an error nor content, nothing is rendered at all
/// so no empty accessible node is exposed.
pub struct FormMessage {
    props: TargetProps,
    children: MessageChildren,
}

impl Default for FormMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormMessage {
    /// Creates an empty message.
    pub fn new() -> Self {
        Self {
            props: TargetProps::default(),
            children: MessageChildren::None,
        }
    }

    /// Sets static fallback content, shown when no error is present.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children = MessageChildren::Node(child.into());
        self
    }

    /// Sets static fallback text.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Supplies content as a function of the optional error. The function
    /// is invoked whether or not an error is present, and its return value
    /// is the full content.
    #[must_use]
    pub fn render_with(mut self, f: impl Fn(Option<&FieldError>) -> Node + 'static) -> Self {
        self.children = MessageChildren::Func(Box::new(f));
        self
    }

    target_prop_builders!();
}

impl Render for FormMessage {
    fn render(&self, scope: &Scope) -> Result<Node, FormwireError> {
        let context = scope.field("FormMessage")?;
        let error = scope.session().field_error(context.name());

        let content = match (&self.children, &error) {
            (MessageChildren::Func(f), _) => f(error.as_ref()),
            (_, Some(err)) => Element::new("span").text(err.message.clone()).into(),
            (MessageChildren::Node(node), None) => node.clone(),
            (MessageChildren::None, None) => Node::Empty,
        };
        if !content.is_renderable() {
            return Ok(Node::Empty);
        }

        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), context.message_id());
        Ok(self
            .props
            .render(DEFAULT_MESSAGE_TAG, computed, vec![content]))
    }
}

fn render_all(children: &[Box<dyn Render>], scope: &Scope) -> Result<Vec<Node>, FormwireError> {
    children.iter().map(|child| child.render(scope)).collect()
}
