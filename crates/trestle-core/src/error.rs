//! Error types for the event system.

use crate::event::HandlerError;

/// Result type alias for event set operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors that can occur while managing or firing events.
///
/// Firing an event nobody subscribed to, and disconnecting a connection that
/// is already gone, are not errors.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// An event with this name is already present in the set.
    #[error("an event named '{name}' already exists in the event set")]
    DuplicateName { name: String },

    /// A subscriber failed; the remaining subscribers were not invoked.
    #[error("subscriber for event '{event}' failed: {source}")]
    Handler {
        event: String,
        #[source]
        source: HandlerError,
    },
}

impl EventError {
    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a handler error for the named event.
    pub fn handler(event: impl Into<String>, source: HandlerError) -> Self {
        Self::Handler {
            event: event.into(),
            source,
        }
    }
}
