//! Projection modes and stagger settings.
//!
//! Each enum maps to and from its canonical lowercase spelling exactly
//! once, here. Everything else works with the typed values.

use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;

/// How grid coordinates are projected to screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rectangular grid.
    #[default]
    Orthogonal,
    /// Diamond tiles, alternate rows/columns offset by half a tile.
    Staggered,
    /// Staggered layout with a flat hex side.
    Hexagonal,
    /// Diamond projection of the whole grid.
    Isometric,
}

impl Orientation {
    /// Every supported orientation.
    pub const ALL: [Self; 4] = [
        Self::Orthogonal,
        Self::Staggered,
        Self::Hexagonal,
        Self::Isometric,
    ];

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Staggered => "staggered",
            Self::Hexagonal => "hexagonal",
            Self::Isometric => "isometric",
        }
    }

    /// Whether the stagger axis and index apply.
    pub fn is_staggered(self) -> bool {
        matches!(self, Self::Staggered | Self::Hexagonal)
    }
}

impl FromStr for Orientation {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| GeometryError::InvalidConfig {
                field: "orientation",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which grid axis is offset in staggered and hexagonal projections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StaggerAxis {
    /// Columns are offset vertically.
    X,
    /// Rows are offset horizontally.
    #[default]
    Y,
}

impl StaggerAxis {
    /// Canonical spelling: `"x"` or `"y"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl FromStr for StaggerAxis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(GeometryError::InvalidConfig {
                field: "stagger_axis",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StaggerAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rows/columns along the stagger axis are shifted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StaggerIndex {
    /// Even indices are shifted.
    Even,
    /// Odd indices are shifted.
    #[default]
    Odd,
}

impl StaggerIndex {
    /// Canonical spelling: `"even"` or `"odd"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }

    /// Whether row/column `index` is shifted under this parity.
    pub fn shifts(self, index: u32) -> bool {
        let odd = index % 2 == 1;
        match self {
            Self::Even => !odd,
            Self::Odd => odd,
        }
    }
}

impl FromStr for StaggerIndex {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            _ => Err(GeometryError::InvalidConfig {
                field: "stagger_index",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StaggerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
