//! Screen-space geometry for Tessel tile maps.
//!
//! A map's footprint on screen depends on how grid coordinates are
//! projected. This crate defines the four supported projections and the
//! pure functions that derive pixel sizes and positions from them.
//!
//! # Projections
//!
//! - [`Orientation::Orthogonal`]: plain rectangular grid
//! - [`Orientation::Staggered`]: diamond tiles with every other row or
//!   column shifted by half a tile
//! - [`Orientation::Hexagonal`]: staggered layout with a flat hex side of
//!   [`MapGeometry::hex_side_length`] pixels
//! - [`Orientation::Isometric`]: diamond projection of the full grid
//!
//! Stagger configuration ([`StaggerAxis`], [`StaggerIndex`]) only affects
//! the staggered and hexagonal projections.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod orientation;
pub mod scroll;

pub use error::GeometryError;
pub use geometry::{MapGeometry, ScreenPoint, ScreenSize, TileSize};
pub use orientation::{Orientation, StaggerAxis, StaggerIndex};
pub use scroll::{lock_scroll, Viewport};
