//! The argument block passed through an event dispatch.

use std::any::Any;
use std::fmt;

/// Arguments handed by mutable reference to every subscriber of a fired event.
///
/// The same `EventArgs` value travels through the whole dispatch chain, so a
/// subscriber sees whatever earlier subscribers did to it. The `handled` flag
/// only ever goes from `false` to `true` during a dispatch; the event set never
/// resets it.
///
/// Widget-specific data (the mouse position for a click, the window for a
/// show/hide notification, ...) travels as a type-erased payload and is read
/// back with [`payload`](Self::payload).
///
/// # Example
///
/// ```
/// use trestle_core::EventArgs;
///
/// let mut args = EventArgs::with_payload(42_u32);
/// assert_eq!(args.payload::<u32>(), Some(&42));
/// assert!(!args.is_handled());
///
/// args.mark_handled();
/// assert!(args.is_handled());
/// ```
#[derive(Default)]
pub struct EventArgs {
    handled: bool,
    name: String,
    namespace: String,
    payload: Option<Box<dyn Any + Send>>,
}

impl EventArgs {
    /// Create empty arguments with no payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create arguments carrying a payload.
    pub fn with_payload<T: Any + Send>(payload: T) -> Self {
        Self {
            payload: Some(Box::new(payload)),
            ..Self::default()
        }
    }

    /// Whether any subscriber reported the event as handled.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the event as handled.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }

    /// Name of the event being dispatched.
    ///
    /// Empty until the arguments are passed to a fire call.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace the event was fired in (empty for the default namespace).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Borrow the payload as `T`, if one of that type is attached.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }

    /// Mutably borrow the payload as `T`, if one of that type is attached.
    pub fn payload_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.as_deref_mut()?.downcast_mut::<T>()
    }

    /// Replace the payload.
    pub fn set_payload<T: Any + Send>(&mut self, payload: T) {
        self.payload = Some(Box::new(payload));
    }

    /// Detach and return the payload as `T`.
    ///
    /// Leaves the payload in place when it is not a `T`.
    pub fn take_payload<T: Any>(&mut self) -> Option<T> {
        match self.payload.take()?.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(other) => {
                self.payload = Some(other);
                None
            }
        }
    }

    pub(crate) fn set_origin(&mut self, name: &str, namespace: &str) {
        name.clone_into(&mut self.name);
        namespace.clone_into(&mut self.namespace);
    }
}

impl fmt::Debug for EventArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventArgs")
            .field("handled", &self.handled)
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
