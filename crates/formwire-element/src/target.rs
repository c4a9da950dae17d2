//! Polymorphic render-target resolution.
//!
//! Every presentational component accepts two render-target options: an
//! `as` tag override and an `asChild` flag. [`RenderTarget::resolve`]
//! collapses those into a three-way choice exactly once per render, and
//! [`RenderTarget::apply`] is the single place the choice is acted on —
//! components never branch on it themselves.

use indexmap::IndexMap;

use crate::merge::{merge_onto_child, AttrBag};
use crate::node::{Element, Node};
use crate::refs::RefSink;

/// The resolved render target for one component invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// Render the component's built-in default tag.
    Default,
    /// Render a caller-specified tag instead.
    Override(String),
    /// Merge the component's computed attributes onto its single child.
    MergeOntoChild,
}

impl RenderTarget {
    /// Resolves the target from the `as` / `asChild` pair.
    ///
    /// `asChild` wins over `as`; with neither set, the default tag is used.
    pub fn resolve(as_tag: Option<&str>, as_child: bool) -> Self {
        if as_child {
            Self::MergeOntoChild
        } else if let Some(tag) = as_tag {
            Self::Override(tag.to_string())
        } else {
            Self::Default
        }
    }

    /// Renders `bag` and `children` through this target.
    ///
    /// The computed attributes are applied uniformly whichever target is
    /// active; only the output shape differs.
    pub fn apply(&self, default_tag: &str, bag: AttrBag, children: Vec<Node>) -> Node {
        match self {
            Self::MergeOntoChild => merge_onto_child(&Node::Fragment(children), bag),
            Self::Default => build_element(default_tag, bag, children),
            Self::Override(tag) => build_element(tag, bag, children),
        }
    }
}

fn build_element(tag: &str, bag: AttrBag, children: Vec<Node>) -> Node {
    let mut element = Element::new(tag);
    element.attrs = bag.attrs;
    if let Some(class) = bag.class {
        element = element.class(class);
    }
    if let Some(sink) = bag.node_ref {
        element.refs.push(sink);
    }
    element.children = children;
    Node::Element(element)
}

/// The polymorphic props shared by every presentational component: render
/// target options plus the caller's attribute bag.
#[derive(Debug, Clone, Default)]
pub struct TargetProps {
    /// Tag to render instead of the built-in default.
    pub as_tag: Option<String>,
    /// Merge onto the single child instead of wrapping.
    pub as_child: bool,
    /// Caller-supplied class fragment.
    pub class: Option<String>,
    /// Caller-supplied attributes; these overwrite computed ones.
    pub attrs: IndexMap<String, String>,
    /// Caller-supplied ref sink.
    pub node_ref: Option<RefSink>,
}

impl TargetProps {
    /// Renders through the resolved target, with `computed` attributes
    /// applied first and the caller's attributes overwriting them.
    pub fn render(
        &self,
        default_tag: &str,
        computed: IndexMap<String, String>,
        children: Vec<Node>,
    ) -> Node {
        let mut attrs = computed;
        for (name, value) in &self.attrs {
            attrs.insert(name.clone(), value.clone());
        }
        let bag = AttrBag {
            class: self.class.clone(),
            attrs,
            node_ref: self.node_ref.clone(),
        };
        RenderTarget::resolve(self.as_tag.as_deref(), self.as_child).apply(
            default_tag,
            bag,
            children,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_as_child_wins() {
        assert_eq!(
            RenderTarget::resolve(Some("span"), true),
            RenderTarget::MergeOntoChild
        );
    }

    #[test]
    fn test_resolve_override() {
        assert_eq!(
            RenderTarget::resolve(Some("span"), false),
            RenderTarget::Override("span".into())
        );
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(RenderTarget::resolve(None, false), RenderTarget::Default);
    }

    #[test]
    fn test_apply_default_builds_wrapper() {
        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), "x".to_string());
        let props = TargetProps::default();
        let node = props.render("p", computed, vec![Node::text("hi")]);

        let Node::Element(el) = node else {
            panic!("expected an element");
        };
        assert_eq!(el.tag, "p");
        assert_eq!(el.attrs.get("id").unwrap(), "x");
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_apply_override_changes_tag() {
        let props = TargetProps {
            as_tag: Some("span".into()),
            ..TargetProps::default()
        };
        let Node::Element(el) = props.render("p", IndexMap::new(), vec![]) else {
            panic!("expected an element");
        };
        assert_eq!(el.tag, "span");
    }

    #[test]
    fn test_apply_merge_keeps_child_tag() {
        let props = TargetProps {
            as_child: true,
            ..TargetProps::default()
        };
        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), "x".to_string());
        let child: Node = Element::new("button").into();
        let Node::Element(el) = props.render("p", computed, vec![child]) else {
            panic!("expected an element");
        };
        assert_eq!(el.tag, "button");
        assert_eq!(el.attrs.get("id").unwrap(), "x");
    }

    #[test]
    fn test_caller_attrs_overwrite_computed() {
        let mut attrs = IndexMap::new();
        attrs.insert("id".to_string(), "caller".to_string());
        let props = TargetProps {
            attrs,
            ..TargetProps::default()
        };
        let mut computed = IndexMap::new();
        computed.insert("id".to_string(), "computed".to_string());
        let Node::Element(el) = props.render("div", computed, vec![]) else {
            panic!("expected an element");
        };
        assert_eq!(el.attrs.get("id").unwrap(), "caller");
    }
}
