//! Named-mode enums and their symbol tables.
//!
//! Parsing is permissive: text that matches no symbol yields the enum's
//! default instead of an error, so stale layout files keep loading.

use std::fmt;

use super::PropertyValue;
use crate::error::Result;

macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The symbol used in property text.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Look up a variant by its exact symbol.
            pub fn from_symbol(symbol: &str) -> Option<Self> {
                match symbol {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl PropertyValue for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn to_property_string(&self) -> String {
                self.as_str().to_owned()
            }

            fn from_property_string(text: &str) -> Result<Self> {
                Ok(Self::from_symbol(text).unwrap_or_else(|| {
                    let fallback = Self::default();
                    tracing::debug!(
                        target: "trestle_property::helper",
                        kind = Self::TYPE_NAME,
                        text,
                        fallback = fallback.as_str(),
                        "unknown symbol, using default"
                    );
                    fallback
                }))
            }
        }
    };
}

property_enum! {
    /// Sort direction of a list column.
    pub enum SortDirection {
        /// Items stay in insertion order.
        None,
        Ascending,
        Descending,
    }
    default = None;
}

property_enum! {
    /// Which items of a multi-column list a click selects.
    pub enum SelectionMode {
        RowSingle,
        RowMultiple,
        CellSingle,
        CellMultiple,
        NominatedColumnSingle,
        NominatedColumnMultiple,
        ColumnSingle,
        ColumnMultiple,
        NominatedRowSingle,
        NominatedRowMultiple,
    }
    default = RowSingle;
}

property_enum! {
    /// How a window's metrics are interpreted.
    pub enum MetricsMode {
        /// Fractions of the parent's extent.
        Relative,
        /// Pixels.
        Absolute,
        /// Same as the parent window.
        Inherited,
    }
    default = Inherited;
}
