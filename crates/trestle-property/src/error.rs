//! Error types for the property system.

/// Result type alias for property operations.
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Errors that can occur while marshaling or accessing properties.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The text is not a valid instance of the target type's grammar.
    #[error("malformed {type_name} value: '{text}'")]
    Malformed { type_name: &'static str, text: String },

    /// No property with this name is defined.
    #[error("property '{name}' not found")]
    NotFound { name: String },

    /// A property with this name is already defined.
    #[error("property '{name}' is already defined")]
    DuplicateName { name: String },

    /// The property has no setter.
    #[error("property '{name}' is read-only")]
    ReadOnly { name: String },
}

impl PropertyError {
    /// Create a malformed value error.
    pub fn malformed(type_name: &'static str, text: impl Into<String>) -> Self {
        Self::Malformed {
            type_name,
            text: text.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a read-only error.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly { name: name.into() }
    }
}
