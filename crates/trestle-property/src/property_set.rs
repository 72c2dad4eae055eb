//! String-keyed property tables.
//!
//! A [`PropertySet<R>`] maps property names to typed accessors on a receiver
//! `R`, so widget fields can be read and written as text by layout loaders
//! and tooling. Each [`PropertyDefinition`] pairs a getter and an optional
//! setter with the codec of its value type.
//!
//! # Example
//!
//! ```
//! use trestle_property::{PropertyDefinition, PropertySet, SortDirection};
//!
//! #[derive(Default)]
//! struct Header {
//!     sort: SortDirection,
//!     sizing_enabled: bool,
//! }
//!
//! let mut props = PropertySet::new();
//! props.add_property(PropertyDefinition::new(
//!     "SortDirection",
//!     "Sort direction of the header. Value is the direction name.",
//!     |h: &Header| h.sort,
//!     |h: &mut Header, v| h.sort = v,
//!     SortDirection::None,
//! )).unwrap();
//! props.add_property(PropertyDefinition::new(
//!     "SizingEnabled",
//!     "Whether columns can be resized.",
//!     |h: &Header| h.sizing_enabled,
//!     |h: &mut Header, v| h.sizing_enabled = v,
//!     true,
//! )).unwrap();
//!
//! let mut header = Header::default();
//! props.set_property(&mut header, "SortDirection", "Ascending").unwrap();
//! assert_eq!(props.get_property(&header, "SortDirection").unwrap(), "Ascending");
//! assert!(!props.is_property_default(&header, "SizingEnabled").unwrap());
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::error::{PropertyError, Result};
use crate::helper::PropertyValue;

const TARGET: &str = "trestle_property::property_set";

type Getter<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, &str) -> Result<()> + Send + Sync>;

/// A named, typed accessor pair for a receiver `R`.
pub struct PropertyDefinition<R> {
    name: String,
    help: String,
    type_name: &'static str,
    default: String,
    getter: Getter<R>,
    setter: Option<Setter<R>>,
}

impl<R: 'static> PropertyDefinition<R> {
    /// Define a read-write property of type `T`.
    ///
    /// The setter only runs once the text has parsed, so a malformed write
    /// never reaches the receiver.
    pub fn new<T, G, S>(
        name: impl Into<String>,
        help: impl Into<String>,
        getter: G,
        setter: S,
        default: T,
    ) -> Self
    where
        T: PropertyValue + 'static,
        G: Fn(&R) -> T + Send + Sync + 'static,
        S: Fn(&mut R, T) + Send + Sync + 'static,
    {
        let mut definition = Self::read_only(name, help, getter, default);
        definition.setter = Some(Box::new(move |receiver: &mut R, text: &str| {
            let value = T::from_property_string(text)?;
            setter(receiver, value);
            Ok(())
        }));
        definition
    }

    /// Define a read-only property of type `T`.
    pub fn read_only<T, G>(
        name: impl Into<String>,
        help: impl Into<String>,
        getter: G,
        default: T,
    ) -> Self
    where
        T: PropertyValue + 'static,
        G: Fn(&R) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            help: help.into(),
            type_name: T::TYPE_NAME,
            default: default.to_property_string(),
            getter: Box::new(move |receiver: &R| getter(receiver).to_property_string()),
            setter: None,
        }
    }
}

impl<R> PropertyDefinition<R> {
    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text describing the property.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Name of the value type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The default value, as property text.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Whether the property has no setter.
    pub fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }
}

impl<R> fmt::Debug for PropertyDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDefinition")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("default", &self.default)
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

/// A table of property definitions for receivers of type `R`.
///
/// Definitions keep their insertion order.
pub struct PropertySet<R> {
    definitions: IndexMap<String, PropertyDefinition<R>>,
}

impl<R> PropertySet<R> {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self {
            definitions: IndexMap::new(),
        }
    }

    /// Add a property definition.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::DuplicateName`] if a property with the same
    /// name is already defined.
    pub fn add_property(&mut self, definition: PropertyDefinition<R>) -> Result<()> {
        if self.definitions.contains_key(&definition.name) {
            return Err(PropertyError::duplicate_name(definition.name));
        }
        tracing::debug!(
            target: TARGET,
            name = %definition.name,
            type_name = definition.type_name,
            "property added"
        );
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Remove a property definition, returning it if it existed.
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyDefinition<R>> {
        let removed = self.definitions.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(target: TARGET, name, "property removed");
        }
        removed
    }

    /// Check whether a property is defined.
    pub fn is_property_present(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Names of every defined property, in insertion order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Look up a property definition.
    pub fn definition(&self, name: &str) -> Option<&PropertyDefinition<R>> {
        self.definitions.get(name)
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check whether no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn require(&self, name: &str) -> Result<&PropertyDefinition<R>> {
        self.definitions
            .get(name)
            .ok_or_else(|| PropertyError::not_found(name))
    }

    /// Read a property of `receiver` as text.
    pub fn get_property(&self, receiver: &R, name: &str) -> Result<String> {
        let definition = self.require(name)?;
        Ok((definition.getter)(receiver))
    }

    /// Write a property of `receiver` from text.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::NotFound`] if no such property is defined
    /// - [`PropertyError::ReadOnly`] if the property has no setter
    /// - [`PropertyError::Malformed`] if the text does not parse; `receiver`
    ///   is left unchanged
    pub fn set_property(&self, receiver: &mut R, name: &str, text: &str) -> Result<()> {
        let definition = self.require(name)?;
        let setter = definition
            .setter
            .as_ref()
            .ok_or_else(|| PropertyError::read_only(name))?;
        tracing::trace!(target: TARGET, name, text, "setting property");
        setter(receiver, text)
    }

    /// Restore a writable property to its default value.
    pub fn reset_property(&self, receiver: &mut R, name: &str) -> Result<()> {
        let default = self.require(name)?.default.clone();
        self.set_property(receiver, name, &default)
    }

    /// The default value of a property, as text.
    pub fn property_default(&self, name: &str) -> Result<&str> {
        Ok(self.require(name)?.default_value())
    }

    /// Whether the property of `receiver` currently holds its default value.
    ///
    /// Values are compared in their canonical text form.
    pub fn is_property_default(&self, receiver: &R, name: &str) -> Result<bool> {
        let definition = self.require(name)?;
        Ok((definition.getter)(receiver) == definition.default)
    }

    /// Help text of a property.
    pub fn property_help(&self, name: &str) -> Result<&str> {
        Ok(self.require(name)?.help())
    }
}

impl<R> Default for PropertySet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for PropertySet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.definitions.values()).finish()
    }
}
