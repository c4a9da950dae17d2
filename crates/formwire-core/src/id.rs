//! Per-mount instance identifiers.
//!
//! Every mounted `Field` gets one base identifier. The identifier is
//! generated once when the field value is constructed, so it is stable
//! across re-renders of the same tree and changes only when a new field
//! instance is built. Derived accessibility ids (`{base}-form-item` and
//! friends) are computed from this base on every read, never stored.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Returns a process-unique base identifier, e.g. `"fw-7"`.
pub fn next_instance_id() -> String {
    let n = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
    format!("fw-{n}")
}
