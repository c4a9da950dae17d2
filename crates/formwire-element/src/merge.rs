//! Single-child prop merging, the `asChild` escape hatch.
//!
//! [`merge_onto_child`] takes a children value and a bag of additional
//! attributes and produces a new element identical to the single child but
//! with the caller's attributes applied. The precondition — exactly one
//! renderable element — is checked first; violations log one warning and
//! yield [`Node::Empty`] rather than panicking, so the rest of the tree is
//! unaffected.

use indexmap::IndexMap;

use crate::node::{Element, Node};
use crate::refs::{compose_refs, RefSink};

/// The attributes a component wants applied to its render target.
///
/// The class fragment and ref sink are kept apart from the plain attribute
/// map because they merge rather than overwrite: classes concatenate and
/// refs compose.
#[derive(Debug, Clone, Default)]
pub struct AttrBag {
    /// Class fragment, concatenated after the child's own classes.
    pub class: Option<String>,
    /// Plain attributes; on merge the caller's value wins.
    pub attrs: IndexMap<String, String>,
    /// Optional ref sink, composed with any refs the child already carries.
    pub node_ref: Option<RefSink>,
}

impl AttrBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag holding only plain attributes.
    pub fn with_attrs(attrs: IndexMap<String, String>) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }
}

/// Merges `bag` onto the single renderable element inside `children`.
///
/// On success the result keeps the child's tag and children, with:
/// - the caller's ref composed ahead of the child's existing refs,
/// - class fragments joined child-first with a single space,
/// - every other caller attribute overwriting the child's same-named one,
/// - attributes present only on the child preserved.
///
/// If `children` is not exactly one renderable element, one diagnostic is
/// logged and [`Node::Empty`] is returned.
pub fn merge_onto_child(children: &Node, bag: AttrBag) -> Node {
    let Some(child) = children.single_element() else {
        tracing::warn!("asChild requires exactly one renderable child element");
        return Node::Empty;
    };

    let mut merged = Element {
        tag: child.tag.clone(),
        attrs: child.attrs.clone(),
        children: child.children.clone(),
        refs: Vec::new(),
    };

    let class = join_classes(child.attrs.get("class").map(String::as_str), bag.class.as_deref());
    for (name, value) in bag.attrs {
        if name != "class" {
            merged.attrs.insert(name, value);
        }
    }
    match class {
        Some(class) => {
            merged.attrs.insert("class".into(), class);
        }
        None => {
            merged.attrs.shift_remove("class");
        }
    }

    let existing = child.refs.iter().cloned().map(Some);
    merged.refs = vec![compose_refs(std::iter::once(bag.node_ref).chain(existing))];

    Node::Element(merged)
}

/// Joins two class fragments child-first with a single space, dropping
/// empty fragments.
fn join_classes(child: Option<&str>, caller: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [child, caller]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
