//! Named collections of events.
//!
//! An [`EventSet`] is embedded in every widget-like object. It maps event names
//! to [`Event`]s and lets code subscribe handlers to a name and later fire that
//! name with an [`EventArgs`] block.
//!
//! Events do not need to be declared up front: the first subscription to a name
//! creates the event, and firing a name nobody subscribed to does nothing.
//!
//! # Example
//!
//! ```
//! use trestle_core::{EventArgs, EventSet};
//!
//! let events = EventSet::with_owner("OkButton");
//!
//! // Infrastructure handlers go in a low group so they run first.
//! events.subscribe_event_in_group("Clicked", 0, |args| {
//!     assert_eq!(args.name(), "Clicked");
//!     false
//! });
//! events.subscribe_event("Clicked", |_| true);
//!
//! let mut args = EventArgs::new();
//! events.fire_event("Clicked", &mut args).unwrap();
//! assert!(args.is_handled());
//!
//! // Nothing subscribed: not an error.
//! events.fire_event("Hidden", &mut EventArgs::new()).unwrap();
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::error::{EventError, Result};
use crate::event::{Connection, Event, EventArgs, Group, Subscriber, DEFAULT_GROUP};
use crate::global::{global_event_name, global_event_set, is_global};
use crate::logging::{span_names, targets};

/// Configuration for an [`EventSet`].
#[derive(Debug, Clone, Default)]
pub struct EventSetConfig {
    /// Label of the owning widget, used only in diagnostics.
    pub owner: String,
    /// Whether the set starts muted.
    pub muted: bool,
    /// Events to create up front, in order.
    pub events: Vec<String>,
}

impl EventSetConfig {
    /// Create a configuration with the given owner label.
    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Default::default()
        }
    }
}

/// Builder for creating event sets with custom configuration.
#[derive(Debug, Default)]
pub struct EventSetBuilder {
    config: EventSetConfig,
}

impl EventSetBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owner label.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.config.owner = owner.into();
        self
    }

    /// Set whether the set starts muted.
    pub fn muted(mut self, muted: bool) -> Self {
        self.config.muted = muted;
        self
    }

    /// Declare an event to create up front.
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.config.events.push(name.into());
        self
    }

    /// Build the event set.
    ///
    /// Fails with [`EventError::DuplicateName`] if an event was declared twice.
    pub fn build(self) -> Result<EventSet> {
        EventSet::with_config(self.config)
    }
}

/// A named, dynamically extensible collection of events.
///
/// `EventSet` is deliberately not `Clone`: it owns its events and every
/// subscription in them. Dropping the set disconnects them all, after which
/// any outstanding [`Connection`] reports itself disconnected.
///
/// All methods take `&self`, so handlers holding a reference (or a
/// [`Weak`](std::sync::Weak) pointer) to the set may fire, subscribe and
/// disconnect while a dispatch is in progress.
pub struct EventSet {
    owner: String,
    events: Mutex<IndexMap<String, Arc<Event>>>,
    muted: AtomicBool,
}

static_assertions::assert_impl_all!(EventSet: Send, Sync);
static_assertions::assert_not_impl_any!(EventSet: Clone);

impl Default for EventSet {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSet {
    /// Create an empty, unmuted event set.
    pub fn new() -> Self {
        Self::with_owner(String::new())
    }

    /// Create an empty event set labelled with its owner's name.
    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            events: Mutex::new(IndexMap::new()),
            muted: AtomicBool::new(false),
        }
    }

    /// Create an event set from a configuration.
    pub fn with_config(config: EventSetConfig) -> Result<Self> {
        let set = Self::with_owner(config.owner);
        set.muted.store(config.muted, Ordering::Release);
        for name in config.events {
            set.add_event(name)?;
        }
        Ok(set)
    }

    /// Start building an event set.
    pub fn builder() -> EventSetBuilder {
        EventSetBuilder::new()
    }

    /// Label of the owning widget.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Add an empty event with the given name.
    ///
    /// Fails with [`EventError::DuplicateName`] if the name is already present.
    pub fn add_event(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let mut events = self.events.lock();
        if events.contains_key(&name) {
            return Err(EventError::duplicate_name(name));
        }
        events.insert(name.clone(), Event::new(name.as_str()));
        drop(events);

        tracing::debug!(
            target: targets::EVENT_SET,
            owner = %self.owner,
            event = %name,
            "added event"
        );
        Ok(())
    }

    /// Remove the named event, disconnecting all of its subscriptions.
    ///
    /// Does nothing if no such event exists.
    pub fn remove_event(&self, name: &str) {
        let removed = self.events.lock().shift_remove(name);
        if let Some(event) = removed {
            event.disconnect_all();
            tracing::debug!(
                target: targets::EVENT_SET,
                owner = %self.owner,
                event = %name,
                "removed event"
            );
        }
    }

    /// Remove every event, disconnecting all subscriptions.
    pub fn remove_all_events(&self) {
        let removed: Vec<Arc<Event>> = self
            .events
            .lock()
            .drain(..)
            .map(|(_, event)| event)
            .collect();
        for event in &removed {
            event.disconnect_all();
        }
        if !removed.is_empty() {
            tracing::debug!(
                target: targets::EVENT_SET,
                owner = %self.owner,
                count = removed.len(),
                "removed all events"
            );
        }
    }

    /// Whether an event with the given name is present.
    pub fn is_event_present(&self, name: &str) -> bool {
        self.events.lock().contains_key(name)
    }

    /// Shared handle to the named event, for inspection.
    pub fn event(&self, name: &str) -> Option<Arc<Event>> {
        self.events.lock().get(name).cloned()
    }

    /// Names of all events, in the order they were added.
    pub fn event_names(&self) -> Vec<String> {
        self.events.lock().keys().cloned().collect()
    }

    /// Number of events in the set.
    pub fn event_count(&self) -> usize {
        self.events.lock().len()
    }

    /// Subscribe a handler to the named event in [`DEFAULT_GROUP`].
    ///
    /// The event is created if it does not exist yet.
    pub fn subscribe_event<F>(&self, name: &str, handler: F) -> Connection
    where
        F: Fn(&mut EventArgs) -> bool + Send + Sync + 'static,
    {
        self.subscribe(name, DEFAULT_GROUP, Subscriber::new(handler))
    }

    /// Subscribe a handler to a specific group of the named event.
    ///
    /// Groups run in ascending order; handlers within a group run in the
    /// order they were subscribed.
    pub fn subscribe_event_in_group<F>(&self, name: &str, group: Group, handler: F) -> Connection
    where
        F: Fn(&mut EventArgs) -> bool + Send + Sync + 'static,
    {
        self.subscribe(name, group, Subscriber::new(handler))
    }

    /// Subscribe a prebuilt [`Subscriber`] to a group of the named event.
    ///
    /// This is the way to attach handlers built with [`Subscriber::fallible`].
    pub fn subscribe(&self, name: &str, group: Group, subscriber: Subscriber) -> Connection {
        self.event_or_insert(name).subscribe(group, subscriber)
    }

    /// Fire the named event in the default (empty) namespace.
    ///
    /// See [`fire_event_in_namespace`](Self::fire_event_in_namespace).
    pub fn fire_event(&self, name: &str, args: &mut EventArgs) -> Result<()> {
        self.fire_event_in_namespace(name, args, "")
    }

    /// Fire the named event.
    ///
    /// Returns immediately if the set is muted. Otherwise the event is first
    /// offered to the [global event set](crate::global_event_set) as
    /// `"{namespace}/{name}"`, unless the global set is muted, and then every
    /// connected subscriber of this set runs, in group and then subscription
    /// order. Both dispatches see `args` recording `name` and `namespace`,
    /// and share its handled flag. A subscriber failure in either stops the
    /// rest of the fire and is returned as [`EventError::Handler`].
    pub fn fire_event_in_namespace(
        &self,
        name: &str,
        args: &mut EventArgs,
        namespace: &str,
    ) -> Result<()> {
        if self.is_muted() {
            tracing::trace!(
                target: targets::EVENT_SET,
                owner = %self.owner,
                event = %name,
                "event set muted, skipping fire"
            );
            return Ok(());
        }

        if !is_global(self) {
            let global = global_event_set();
            if !global.is_muted() && global.event_count() > 0 {
                let global_name = global_event_name(namespace, name);
                tracing::trace!(
                    target: targets::GLOBAL,
                    owner = %self.owner,
                    event = %global_name,
                    "offering event to global set"
                );
                global.dispatch(&global_name, name, args, namespace)?;
            }
        }

        self.dispatch(name, name, args, namespace)
    }

    /// Run the subscribers of the event stored under `key`.
    fn dispatch(&self, key: &str, name: &str, args: &mut EventArgs, namespace: &str) -> Result<()> {
        // Release the map lock before dispatch so handlers can reach the set.
        let Some(event) = self.event(key) else {
            return Ok(());
        };

        let _span = tracing::trace_span!(
            target: span_names::FIRE,
            "fire",
            owner = %self.owner,
            event = %key
        )
        .entered();
        args.set_origin(name, namespace);
        event.fire(args)
    }

    /// Whether firing is currently suppressed.
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    /// Suppress (`true`) or restore (`false`) event firing.
    pub fn set_muted(&self, muted: bool) {
        let was = self.muted.swap(muted, Ordering::AcqRel);
        if was != muted {
            tracing::debug!(
                target: targets::EVENT_SET,
                owner = %self.owner,
                muted,
                "mute state changed"
            );
        }
    }

    fn event_or_insert(&self, name: &str) -> Arc<Event> {
        let mut events = self.events.lock();
        if let Some(event) = events.get(name) {
            return event.clone();
        }
        let event = Event::new(name);
        events.insert(name.to_owned(), event.clone());
        drop(events);

        tracing::debug!(
            target: targets::EVENT_SET,
            owner = %self.owner,
            event = %name,
            "created event on first subscription"
        );
        event
    }
}

impl Drop for EventSet {
    fn drop(&mut self) {
        self.remove_all_events();
    }
}

impl fmt::Debug for EventSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSet")
            .field("owner", &self.owner)
            .field("muted", &self.is_muted())
            .field("events", &self.event_names())
            .finish()
    }
}
