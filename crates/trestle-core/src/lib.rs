//! Core systems for Trestle.
//!
//! This crate provides the event plumbing every Trestle widget embeds:
//!
//! - **Event Sets**: Named, dynamically extensible collections of events
//! - **Grouped Subscriptions**: Handlers run in ascending group order, then in
//!   the order they were subscribed
//! - **Connections**: Weak, idempotent handles for disconnecting subscriptions
//! - **Muting**: Suppress every event of a set during batch updates
//! - **Global Events**: Observe a namespaced event fired by any set
//! - **Logging**: `tracing` targets and debug views of event sets
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use trestle_core::{EventArgs, EventSet};
//!
//! let events = EventSet::with_owner("Scrollbar");
//! let moves = Arc::new(AtomicUsize::new(0));
//!
//! let moves_clone = moves.clone();
//! let conn = events.subscribe_event("ThumbMoved", move |args| {
//!     if let Some(position) = args.payload::<f32>() {
//!         assert_eq!(*position, 0.5);
//!     }
//!     moves_clone.fetch_add(1, Ordering::SeqCst);
//!     true
//! });
//!
//! events.fire_event("ThumbMoved", &mut EventArgs::with_payload(0.5_f32)).unwrap();
//! assert_eq!(moves.load(Ordering::SeqCst), 1);
//!
//! // Muted sets ignore fire requests.
//! events.set_muted(true);
//! events.fire_event("ThumbMoved", &mut EventArgs::new()).unwrap();
//! assert_eq!(moves.load(Ordering::SeqCst), 1);
//!
//! conn.disconnect();
//! ```

mod error;
pub mod event;
mod event_set;
mod global;
pub mod logging;

pub use error::{EventError, Result};
pub use event::{
    Connection, Event, EventArgs, Group, HandlerError, HandlerResult, ScopedConnection, Subscriber,
    SubscriptionId, DEFAULT_GROUP,
};
pub use event_set::{EventSet, EventSetBuilder, EventSetConfig};
pub use global::{global_event_name, global_event_set, GLOBAL_OWNER};
pub use logging::{DebugFormatOptions, EventSetDebug, TreeStyle};
