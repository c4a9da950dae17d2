//! # formwire-element
//!
//! A plain structured representation of renderable output — elements with a
//! tag, an ordered attribute map, and children — together with the three
//! composition primitives the form components are built on:
//!
//! - ref composition ([`compose_refs`]): several reference sinks collapse
//!   into one, so a single element can satisfy a caller-supplied ref and an
//!   internally needed one at the same time;
//! - single-child prop merging ([`merge_onto_child`]): the `asChild` escape
//!   hatch, which applies a component's computed attributes to a provided
//!   child element instead of wrapping it;
//! - the three-way polymorphic render target ([`RenderTarget`]): default
//!   tag, caller-overridden tag, or merge-onto-child, resolved once per
//!   render and applied by a single function.
//!
//! Everything here is pure data transformation. Serializing a tree to HTML
//! (the output surface assistive technology actually sees) lives in
//! [`html`].

pub mod html;
pub mod merge;
pub mod node;
pub mod refs;
pub mod target;

pub use merge::{merge_onto_child, AttrBag};
pub use node::{Element, Node};
pub use refs::{compose_refs, ElementHandle, NodeRef, RefSink};
pub use target::{RenderTarget, TargetProps};
