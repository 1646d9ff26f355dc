//! Error types for tile map storage.

use std::error::Error;
use std::fmt;

use tessel_arena::ArenaError;
use tessel_core::ResourceKind;
use tessel_geometry::GeometryError;

/// Errors raised by [`TileMapStore`](crate::TileMapStore) and its views.
///
/// Every error is raised synchronously at the point of violation and
/// nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A coordinate or layer index is outside the declared bounds.
    OutOfRange {
        /// Which index was out of range (`"x"`, `"y"` or `"layer"`).
        what: &'static str,
        /// The offending value.
        value: u32,
        /// Exclusive upper bound.
        bound: u32,
    },
    /// A name is not known to the relevant registry.
    UnknownResource {
        /// Which registry was consulted.
        kind: ResourceKind,
        /// The unresolved name.
        name: String,
    },
    /// A stored handle is no longer known to its registry.
    DanglingHandle {
        /// Which registry was consulted.
        kind: ResourceKind,
        /// The raw handle or key.
        id: u32,
    },
    /// A bulk load's nested sequence does not match the grid dimensions.
    ShapeMismatch {
        /// Which dimension disagreed (`"size_x"` or `"size_y"`).
        axis: &'static str,
        /// The outer index of the mismatched row, for `size_y` mismatches.
        row: Option<usize>,
        /// The store's dimension.
        expected: usize,
        /// The length supplied.
        actual: usize,
    },
    /// An animation used to seed a layer has no frames.
    EmptyAnimation {
        /// The animation's name.
        name: String,
    },
    /// The backing buffer could not hold the grid.
    Allocation(ArenaError),
    /// The store's arena has already been released.
    UseAfterFree,
    /// Structurally invalid map configuration.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// A projection setting could not be parsed.
    Geometry(GeometryError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { what, value, bound } => {
                write!(f, "{what} {value} out of range [0, {bound})")
            }
            Self::UnknownResource { kind, name } => write!(f, "unknown {kind} {name:?}"),
            Self::DanglingHandle { kind, id } => {
                write!(f, "{kind} handle {id} is not registered")
            }
            Self::ShapeMismatch {
                axis,
                row,
                expected,
                actual,
            } => match row {
                Some(row) => write!(
                    f,
                    "shape mismatch in row {row}: expected {expected} entries along {axis}, got {actual}"
                ),
                None => write!(
                    f,
                    "shape mismatch: expected {expected} entries along {axis}, got {actual}"
                ),
            },
            Self::EmptyAnimation { name } => write!(f, "animation {name:?} has no frames"),
            Self::Allocation(e) => write!(f, "allocation failed: {e}"),
            Self::UseAfterFree => write!(f, "tile map memory has already been released"),
            Self::InvalidConfig { reason } => write!(f, "invalid map config: {reason}"),
            Self::Geometry(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for StoreError {
    fn from(e: ArenaError) -> Self {
        Self::Allocation(e)
    }
}

impl From<GeometryError> for StoreError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
