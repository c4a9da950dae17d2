//! The structured node model.
//!
//! A [`Node`] is either an [`Element`] (tag, ordered attributes, children,
//! ref sinks), escaped text, a fragment of sibling nodes, or nothing.
//! Attribute maps are insertion-ordered so rendered output is
//! deterministic.

use indexmap::IndexMap;

use crate::refs::{ElementHandle, RefSink};

/// A renderable tree node.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A text node; escaped on serialization.
    Text(String),
    /// A sequence of sibling nodes with no wrapper of its own.
    Fragment(Vec<Node>),
    /// Nothing. Renders to no output at all.
    #[default]
    Empty,
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns `true` if this node produces any output when rendered.
    ///
    /// Empty nodes, empty text, and fragments of nothing but those are all
    /// considered non-renderable.
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Element(_) => true,
            Self::Text(text) => !text.is_empty(),
            Self::Fragment(children) => children.iter().any(Self::is_renderable),
            Self::Empty => false,
        }
    }

    /// Collects the renderable leaves of this node, flattening fragments.
    pub fn renderable_nodes(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_renderable(&mut out);
        out
    }

    fn collect_renderable<'a>(&'a self, out: &mut Vec<&'a Self>) {
        match self {
            Self::Fragment(children) => {
                for child in children {
                    child.collect_renderable(out);
                }
            }
            Self::Empty => {}
            Self::Text(text) if text.is_empty() => {}
            other => out.push(other),
        }
    }

    /// Returns the single element this node resolves to, or `None` if the
    /// node is not exactly one element (extra text siblings also disqualify).
    pub fn single_element(&self) -> Option<&Element> {
        match self.renderable_nodes().as_slice() {
            [Self::Element(element)] => Some(element),
            _ => None,
        }
    }

    /// Walks the tree and notifies every element's ref sinks with its
    /// committed handle.
    pub fn commit_refs(&self) {
        match self {
            Self::Element(element) => {
                element.notify_refs();
                for child in &element.children {
                    child.commit_refs();
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.commit_refs();
                }
            }
            Self::Text(_) | Self::Empty => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element: a tag name, insertion-ordered attributes, children, and any
/// attached ref sinks.
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name, e.g. `"input"`.
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: IndexMap<String, String>,
    /// Child nodes.
    pub children: Vec<Node>,
    /// Ref sinks notified when the tree is committed.
    pub refs: Vec<RefSink>,
}

impl Element {
    /// Creates an element with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            refs: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Appends a class fragment to the `class` attribute.
    #[must_use]
    pub fn class(mut self, fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            match self.attrs.get_mut("class") {
                Some(existing) if !existing.is_empty() => {
                    existing.push(' ');
                    existing.push_str(fragment);
                }
                _ => {
                    self.attrs.insert("class".into(), fragment.to_string());
                }
            }
        }
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Attaches a ref sink.
    #[must_use]
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.refs.push(sink.into());
        self
    }

    /// Returns the handle describing this element.
    pub fn handle(&self) -> ElementHandle {
        ElementHandle {
            tag: self.tag.clone(),
            id: self.attrs.get("id").cloned(),
        }
    }

    /// Notifies every attached ref sink with this element's handle.
    pub fn notify_refs(&self) {
        if self.refs.is_empty() {
            return;
        }
        let handle = self.handle();
        for sink in &self.refs {
            sink.notify(&handle);
        }
    }
}
