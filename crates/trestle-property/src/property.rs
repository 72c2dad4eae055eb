//! Reactive property cells.
//!
//! A [`Property<T>`] holds a widget field and reports whether writes actually
//! changed it, so the owner knows when to fire its change event. When `T` has
//! a property string form the cell can also be read and written as text.
//!
//! # Example
//!
//! ```
//! use trestle_property::{Property, SortDirection};
//!
//! let direction = Property::new(SortDirection::None);
//! assert!(direction.set_from_str("Descending").unwrap());
//! assert_eq!(direction.to_property_string(), "Descending");
//!
//! // Writing the same value again is not a change.
//! assert!(!direction.set(SortDirection::Descending));
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::error::Result;
use crate::helper::PropertyValue;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value behind a `RwLock` and is `Send + Sync` when
/// `T` is. [`set`](Self::set) compares against the current value and returns
/// whether it changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone + PartialEq + PropertyValue> Property<T> {
    /// Format the current value as property text.
    pub fn to_property_string(&self) -> String {
        self.with(T::to_property_string)
    }

    /// Parse `text` and store the result, returning `true` if the value
    /// changed.
    ///
    /// The text is parsed before the lock is taken; on a parse error the
    /// current value is left untouched.
    pub fn set_from_str(&self, text: &str) -> Result<bool> {
        let value = T::from_property_string(text)?;
        Ok(self.set(value))
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
///
/// Lets a widget expose a field publicly while keeping the setter private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

impl<T: Clone + PartialEq + PropertyValue> ReadOnlyProperty<'_, T> {
    /// Format the current value as property text.
    pub fn to_property_string(&self) -> String {
        self.inner.to_property_string()
    }
}
