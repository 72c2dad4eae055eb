//! Handles for disconnecting subscriptions.

use std::sync::Weak;

use super::{BoundSlot, Event, Group, SubscriptionId};

/// Handle to a single subscription, returned by every subscribe call.
///
/// A `Connection` only holds weak references: it does not keep the
/// subscription, its event, or the owning [`EventSet`](crate::EventSet) alive.
/// Disconnecting is idempotent and is a no-op once the event has been removed
/// or the set dropped.
///
/// Connections are cheap to clone; every clone refers to the same subscription.
///
/// # Example
///
/// ```
/// use trestle_core::EventSet;
///
/// let events = EventSet::new();
/// let conn = events.subscribe_event("Clicked", |_| true);
/// assert!(conn.is_connected());
///
/// conn.disconnect();
/// conn.disconnect(); // already gone, nothing happens
/// assert!(!conn.is_connected());
/// ```
#[derive(Clone, Debug)]
pub struct Connection {
    event: Weak<Event>,
    slot: Weak<BoundSlot>,
    id: SubscriptionId,
}

impl Connection {
    pub(crate) fn new(event: Weak<Event>, slot: Weak<BoundSlot>, id: SubscriptionId) -> Self {
        Self { event, slot, id }
    }

    /// The subscription's identity token.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the subscription is still attached to its event.
    pub fn is_connected(&self) -> bool {
        self.slot.upgrade().is_some_and(|slot| slot.is_connected())
    }

    /// The subscription's group, or `None` once disconnected.
    pub fn group(&self) -> Option<Group> {
        self.slot
            .upgrade()
            .filter(|slot| slot.is_connected())
            .map(|slot| slot.group())
    }

    /// Detach the subscription from its event.
    pub fn disconnect(&self) {
        if let Some(event) = self.event.upgrade() {
            event.disconnect(self.id);
        }
    }
}

/// A connection that disconnects when dropped.
///
/// Useful for tying a subscription to the lifetime of whatever registered it.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use trestle_core::{EventArgs, EventSet, ScopedConnection};
///
/// let events = EventSet::new();
/// let hits = Arc::new(AtomicUsize::new(0));
/// {
///     let hits = hits.clone();
///     let _guard = ScopedConnection::from(events.subscribe_event("Moved", move |_| {
///         hits.fetch_add(1, Ordering::SeqCst);
///         false
///     }));
///     events.fire_event("Moved", &mut EventArgs::new()).unwrap();
/// }
/// events.fire_event("Moved", &mut EventArgs::new()).unwrap();
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Debug)]
#[must_use = "dropping a ScopedConnection immediately disconnects it"]
pub struct ScopedConnection {
    connection: Option<Connection>,
}

impl ScopedConnection {
    /// Take ownership of a connection.
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Borrow the wrapped connection.
    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    /// Whether the wrapped subscription is still attached.
    pub fn is_connected(&self) -> bool {
        self.connection.as_ref().is_some_and(Connection::is_connected)
    }

    /// Disconnect now rather than on drop.
    pub fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.disconnect();
        }
    }

    /// Give up scoped ownership without disconnecting.
    pub fn release(mut self) -> Option<Connection> {
        self.connection.take()
    }
}

impl From<Connection> for ScopedConnection {
    fn from(connection: Connection) -> Self {
        Self::new(connection)
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        self.disconnect();
    }
}
