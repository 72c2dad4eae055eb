//! Property values and string marshaling for Trestle.
//!
//! Widgets expose their configuration as named properties whose values travel
//! as text through layout files, look-and-feel definitions and tooling. This
//! crate provides:
//!
//! - **Value types**: [`Size`], [`Point`], [`Rect`], [`Colour`], [`ColourRect`],
//!   [`UDim`], [`UVector2`] and [`URect`]
//! - **Codec**: the [`PropertyValue`] trait with [`format`] and [`parse`]
//! - **Named modes**: [`SortDirection`], [`SelectionMode`], [`MetricsMode`]
//! - **Properties**: reactive [`Property<T>`] cells and string-keyed
//!   [`PropertySet`] tables
//!
//! # Example
//!
//! ```
//! use trestle_property::{format, parse, URect, UDim};
//!
//! let area = URect::new(
//!     UDim::new(0.25, 7.0),
//!     UDim::new(0.25, 222.0),
//!     UDim::new(0.0078125, 15.0),
//!     UDim::new(1.0, 13.0),
//! );
//! let text = format(&area);
//! assert_eq!(text, "{{0.25,7},{0.25,222},{0.0078125,15},{1,13}}");
//! assert_eq!(parse::<URect>(&text).unwrap(), area);
//! ```

mod error;
pub mod helper;
mod property;
mod property_set;
mod types;

pub use error::{PropertyError, Result};
pub use helper::{format, parse, MetricsMode, PropertyValue, SelectionMode, SortDirection};
pub use property::{Property, ReadOnlyProperty};
pub use property_set::{PropertyDefinition, PropertySet};
pub use types::{Colour, ColourRect, Point, Rect, Size, UDim, URect, UVector2};
