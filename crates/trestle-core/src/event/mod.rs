//! Named events and their ordered subscription tables.
//!
//! An [`Event`] is one named channel inside an [`EventSet`](crate::EventSet).
//! It owns its subscriptions, keeps them ordered by group and then by
//! insertion, and invokes them in that order when fired.
//!
//! # Key Types
//!
//! - [`Event`] - A named channel with an ordered subscription table
//! - [`EventArgs`] - The argument block passed by reference through a dispatch
//! - [`Subscriber`] - A type-erased handler
//! - [`Connection`] - Weak handle used to disconnect a subscription
//! - [`ScopedConnection`] - RAII variant that disconnects on drop
//!
//! # Reentrancy
//!
//! The subscription table is never locked while a handler runs. Firing takes a
//! snapshot of the bound slots and checks each one is still connected right
//! before invoking it, so a handler may fire events, subscribe new handlers or
//! disconnect any subscription (itself included) without disturbing the
//! dispatch in progress. Handlers subscribed during a dispatch first run on the
//! next fire.

mod args;
mod connection;
mod subscriber;

pub use args::EventArgs;
pub use connection::{Connection, ScopedConnection};
pub use subscriber::{HandlerError, HandlerResult, Subscriber};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{EventError, Result};
use crate::logging::targets;

new_key_type! {
    /// Identity token of a single subscription.
    ///
    /// Returned inside every [`Connection`]. The key is never reused for a
    /// different subscription of the same event.
    pub struct SubscriptionId;
}

/// Subscription group. Groups are invoked in ascending order.
pub type Group = u32;

/// Group used when none is given; these subscribers run after every explicit group.
pub const DEFAULT_GROUP: Group = Group::MAX;

/// A subscription as stored by its event.
pub(crate) struct BoundSlot {
    group: Group,
    sequence: u64,
    subscriber: Subscriber,
    connected: AtomicBool,
}

impl BoundSlot {
    pub(crate) fn group(&self) -> Group {
        self.group
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    fn mark_disconnected(&self) {
        self.connected.store(false, Ordering::Release);
    }
}

#[derive(Default)]
struct SlotTable {
    slots: SlotMap<SubscriptionId, Arc<BoundSlot>>,
    /// Invocation order: ascending group, then insertion sequence.
    order: BTreeMap<(Group, u64), SubscriptionId>,
    next_sequence: u64,
}

/// A named event holding an ordered set of subscriptions.
///
/// Events are created and owned by an [`EventSet`](crate::EventSet); tooling
/// can obtain a shared handle through [`EventSet::event`](crate::EventSet::event)
/// to inspect it.
pub struct Event {
    name: String,
    table: Mutex<SlotTable>,
}

impl Event {
    pub(crate) fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            table: Mutex::new(SlotTable::default()),
        })
    }

    /// The event's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.table.lock().slots.len()
    }

    /// Whether no subscriptions are connected.
    pub fn is_empty(&self) -> bool {
        self.subscriber_count() == 0
    }

    pub(crate) fn subscribe(self: &Arc<Self>, group: Group, subscriber: Subscriber) -> Connection {
        let mut table = self.table.lock();
        let sequence = table.next_sequence;
        table.next_sequence += 1;

        let slot = Arc::new(BoundSlot {
            group,
            sequence,
            subscriber,
            connected: AtomicBool::new(true),
        });
        let weak_slot = Arc::downgrade(&slot);
        let id = table.slots.insert(slot);
        table.order.insert((group, sequence), id);
        drop(table);

        tracing::trace!(target: targets::EVENT, event = %self.name, group, "subscribed");
        Connection::new(Arc::downgrade(self), weak_slot, id)
    }

    /// Remove one subscription. Returns `false` if it was already gone.
    pub(crate) fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut table = self.table.lock();
        let Some(slot) = table.slots.remove(id) else {
            return false;
        };
        table.order.remove(&(slot.group, slot.sequence));
        drop(table);

        slot.mark_disconnected();
        tracing::trace!(target: targets::EVENT, event = %self.name, "disconnected");
        true
    }

    /// Remove every subscription.
    pub(crate) fn disconnect_all(&self) {
        let mut table = self.table.lock();
        table.order.clear();
        let removed: Vec<_> = table.slots.drain().map(|(_, slot)| slot).collect();
        drop(table);

        for slot in &removed {
            slot.mark_disconnected();
        }
        tracing::trace!(
            target: targets::EVENT,
            event = %self.name,
            count = removed.len(),
            "disconnected all"
        );
    }

    /// Invoke every connected subscriber in group, then insertion, order.
    ///
    /// A subscriber returning `true` marks `args` handled. Dispatch continues
    /// after an event is handled; it stops only when a subscriber fails.
    pub(crate) fn fire(&self, args: &mut EventArgs) -> Result<()> {
        let snapshot: Vec<Arc<BoundSlot>> = {
            let table = self.table.lock();
            table
                .order
                .values()
                .filter_map(|id| table.slots.get(*id).cloned())
                .collect()
        };
        tracing::trace!(
            target: targets::EVENT,
            event = %self.name,
            subscriber_count = snapshot.len(),
            "firing event"
        );

        for slot in snapshot {
            if !slot.is_connected() {
                continue;
            }
            match slot.subscriber.call(args) {
                Ok(true) => args.mark_handled(),
                Ok(false) => {}
                Err(source) => {
                    tracing::warn!(
                        target: targets::EVENT,
                        event = %self.name,
                        error = %source,
                        "subscriber failed, aborting dispatch"
                    );
                    return Err(EventError::handler(self.name.clone(), source));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
