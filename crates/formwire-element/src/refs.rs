//! Reference sinks and ref composition.
//!
//! A [`RefSink`] is either a callback invoked with the element handle, or a
//! slot ([`NodeRef`]) that stores the handle for later inspection.
//! [`compose_refs`] merges an ordered sequence of optional sinks into one
//! sink that forwards to every non-empty input, in order. Absent sinks are
//! skipped silently; there are no error conditions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A lightweight description of a committed element, handed to ref sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    /// The element's tag name.
    pub tag: String,
    /// The element's `id` attribute, if any.
    pub id: Option<String>,
}

/// A single-slot holder for an [`ElementHandle`], filled when the element
/// tree it is attached to is committed.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<ElementHandle>>>);

impl NodeRef {
    /// Creates an empty `NodeRef`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently stored handle, if the ref has been filled.
    pub fn get(&self) -> Option<ElementHandle> {
        self.0.borrow().clone()
    }

    pub(crate) fn set(&self, handle: &ElementHandle) {
        *self.0.borrow_mut() = Some(handle.clone());
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

/// A destination for an element handle.
#[derive(Clone)]
pub enum RefSink {
    /// Invoked with the handle on commit.
    Callback(Rc<dyn Fn(&ElementHandle)>),
    /// Mutated to hold the handle on commit.
    Slot(NodeRef),
    /// Forwards to each contained sink in order.
    Composed(Vec<RefSink>),
}

impl RefSink {
    /// Creates a callback-style sink.
    pub fn callback(f: impl Fn(&ElementHandle) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Forwards `handle` to this sink.
    pub fn notify(&self, handle: &ElementHandle) {
        match self {
            Self::Callback(f) => f(handle),
            Self::Slot(slot) => slot.set(handle),
            Self::Composed(sinks) => {
                for sink in sinks {
                    sink.notify(handle);
                }
            }
        }
    }
}

impl From<NodeRef> for RefSink {
    fn from(slot: NodeRef) -> Self {
        Self::Slot(slot)
    }
}

impl fmt::Debug for RefSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("RefSink::Callback"),
            Self::Slot(slot) => f.debug_tuple("RefSink::Slot").field(slot).finish(),
            Self::Composed(sinks) => f.debug_tuple("RefSink::Composed").field(sinks).finish(),
        }
    }
}

/// Merges an ordered sequence of optional sinks into a single sink.
///
/// The returned sink forwards each handle to every present input sink in
/// the given order. Absent entries are skipped.
pub fn compose_refs<I>(sinks: I) -> RefSink
where
    I: IntoIterator<Item = Option<RefSink>>,
{
    RefSink::Composed(sinks.into_iter().flatten().collect())
}
