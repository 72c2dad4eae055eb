//! String marshaling for property values.
//!
//! Every type a widget exposes as a property implements [`PropertyValue`],
//! which converts it to and from the textual form used by layout files and
//! tooling. The free functions [`format`] and [`parse`] are thin generic
//! wrappers, so the codec is picked at compile time.
//!
//! # Example
//!
//! ```
//! use trestle_property::helper::{format, parse};
//! use trestle_property::{Colour, UDim};
//!
//! assert_eq!(format(&Colour(0xFFAA00C9)), "ffaa00c9");
//! assert_eq!(parse::<UDim>("{0.5,-4}").unwrap(), UDim::new(0.5, -4.0));
//! assert!(parse::<i32>("twelve").is_err());
//! ```

mod colour;
mod enums;
mod geometry;
mod numeric;
mod unified;

pub use enums::{MetricsMode, SelectionMode, SortDirection};

use crate::error::{PropertyError, Result};

/// A type with a canonical property string form.
///
/// Implementations guarantee that `from_property_string(&v.to_property_string())`
/// yields a value equal to `v`.
pub trait PropertyValue: Sized {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Format the value as property text.
    fn to_property_string(&self) -> String;

    /// Parse property text into a value.
    fn from_property_string(text: &str) -> Result<Self>;
}

/// Format a value as property text.
#[inline]
pub fn format<T: PropertyValue>(value: &T) -> String {
    value.to_property_string()
}

/// Parse property text into a value.
#[inline]
pub fn parse<T: PropertyValue>(text: &str) -> Result<T> {
    T::from_property_string(text)
}

pub(crate) fn is_composite_separator(c: char) -> bool {
    c == '{' || c == '}' || c == ',' || c.is_whitespace()
}

/// Split composite text into exactly `N` numbers.
///
/// Braces, commas and whitespace are all separators, so `{1,2}`, `1 2` and
/// `{1,2` all give the same tokens. Returns `None` when the text holds no
/// tokens at all, leaving the empty-text default to the caller.
pub(crate) fn composite_numbers<const N: usize>(
    text: &str,
    type_name: &'static str,
) -> Result<Option<[f32; N]>> {
    let mut tokens = text.split(is_composite_separator).filter(|t| !t.is_empty());
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let malformed = || PropertyError::malformed(type_name, text);
    let mut numbers = [0.0_f32; N];
    let mut count = 0;
    for token in std::iter::once(first).chain(tokens) {
        let slot = numbers.get_mut(count).ok_or_else(malformed)?;
        *slot = token.parse::<f32>().map_err(|_| malformed())?;
        count += 1;
    }

    if count != N {
        return Err(malformed());
    }
    Ok(Some(numbers))
}
