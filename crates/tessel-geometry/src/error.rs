//! Error types for geometry configuration.

use std::fmt;

/// Errors arising from parsing or validating projection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A configuration value is not one of the accepted spellings.
    InvalidConfig {
        /// Which setting was being parsed.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid {field}: {value:?}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
