//! The process-wide event set.
//!
//! Every fire on an [`EventSet`] is first offered to the global set under the
//! name `"{namespace}/{name}"`, and only then dispatched to the set's own
//! subscribers. Subscribing to `"Window/Clicked"` on the global set therefore
//! observes every `Clicked` fired in the `Window` namespace, whichever set
//! fired it.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use trestle_core::{global_event_set, EventArgs, EventSet};
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let clicks_clone = clicks.clone();
//! let conn = global_event_set().subscribe_event("DocButton/Clicked", move |args| {
//!     assert_eq!(args.namespace(), "DocButton");
//!     clicks_clone.fetch_add(1, Ordering::SeqCst);
//!     false
//! });
//!
//! let button = EventSet::with_owner("OkButton");
//! button
//!     .fire_event_in_namespace("Clicked", &mut EventArgs::new(), "DocButton")
//!     .unwrap();
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! conn.disconnect();
//! ```

use std::sync::OnceLock;

use crate::event_set::EventSet;

/// Owner label of the global event set.
pub const GLOBAL_OWNER: &str = "GlobalEventSet";

static GLOBAL_EVENT_SET: OnceLock<EventSet> = OnceLock::new();

/// The global event set, created on first use.
///
/// Firing directly on the global set dispatches only to its own subscribers.
/// Muting it suppresses namespaced dispatch from every other set.
pub fn global_event_set() -> &'static EventSet {
    GLOBAL_EVENT_SET.get_or_init(|| EventSet::with_owner(GLOBAL_OWNER))
}

/// Name under which the global set sees `name` fired in `namespace`.
pub fn global_event_name(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

pub(crate) fn is_global(set: &EventSet) -> bool {
    GLOBAL_EVENT_SET
        .get()
        .is_some_and(|global| std::ptr::eq(global, set))
}
