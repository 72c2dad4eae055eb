//! Callable wrappers stored in an event's subscription table.

use std::fmt;
use std::sync::Arc;

use super::EventArgs;

/// Error type a fallible subscriber may return.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of invoking a subscriber: whether it handled the event, or why it failed.
pub type HandlerResult = Result<bool, HandlerError>;

/// A type-erased event handler.
///
/// Infallible handlers are built with [`Subscriber::new`] and only report
/// whether they handled the event. Handlers that can fail are built with
/// [`Subscriber::fallible`]; a failure aborts the rest of the dispatch and is
/// handed back to whoever fired the event.
///
/// Cloning a `Subscriber` is cheap and shares the underlying closure.
#[derive(Clone)]
pub struct Subscriber {
    func: Arc<dyn Fn(&mut EventArgs) -> HandlerResult + Send + Sync>,
}

impl Subscriber {
    /// Wrap an infallible handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut EventArgs) -> bool + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move |args: &mut EventArgs| -> HandlerResult { Ok(handler(args)) }),
        }
    }

    /// Wrap a handler that may fail.
    pub fn fallible<F>(handler: F) -> Self
    where
        F: Fn(&mut EventArgs) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(handler),
        }
    }

    /// Invoke the handler.
    pub fn call(&self, args: &mut EventArgs) -> HandlerResult {
        (self.func)(args)
    }
}

impl fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber").finish_non_exhaustive()
    }
}
