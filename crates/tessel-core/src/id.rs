//! Strongly-typed resource handles and keys.

use std::fmt;
use std::num::NonZeroU32;

/// Opaque reference to a loaded render model.
///
/// Handles are never zero, so `Option<ModelHandle>` is the same size as
/// a `u32` and `None` encodes "no model".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelHandle(NonZeroU32);

impl ModelHandle {
    /// Wrap a raw id. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The raw id.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for ModelHandle {
    fn from(raw: NonZeroU32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a loaded animation sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(NonZeroU32);

impl AnimationHandle {
    /// Wrap a raw id. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The raw id.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for AnimationHandle {
    fn from(raw: NonZeroU32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer key into the texture registry.
///
/// Key `0` is reserved for "unset" ([`TextureKey::UNSET`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureKey(pub u32);

impl TextureKey {
    /// The reserved "no texture" key.
    pub const UNSET: Self = Self(0);

    /// Whether this key is the reserved unset value.
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TextureKey {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Which registry a name or handle belongs to.
///
/// Carried by lookup errors so callers can tell a missing model from a
/// missing texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Render model.
    Model,
    /// Texture.
    Texture,
    /// Animation sequence.
    Animation,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::Texture => "texture",
            Self::Animation => "animation",
        })
    }
}
