//! Core types and traits for the Tessel tile map engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the resource handles stored in every tile layer, the fixed-layout
//! [`TileRecord`], and the registry traits through which handles are
//! translated to and from human-readable names.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animation;
pub mod id;
pub mod record;
pub mod registry;

pub use animation::{Animation, Frame};
pub use id::{AnimationHandle, ModelHandle, ResourceKind, TextureKey};
pub use record::TileRecord;
pub use registry::{
    AnimationLibrary, AnimationRegistry, ModelRegistry, NameRegistry, ResourceRegistries,
    TextureRegistry,
};
