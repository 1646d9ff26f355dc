//! Registry traits for name ↔ handle translation, plus in-memory backends.
//!
//! The store never owns resources. It holds a [`ResourceRegistries`]
//! bundle and asks it to translate the names callers use into the compact
//! handles kept in each [`TileRecord`](crate::TileRecord), and back again.
//! Registries are passed in explicitly, so tests can substitute fakes.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::animation::Animation;
use crate::id::{AnimationHandle, ModelHandle, TextureKey};

/// Bidirectional model name ↔ handle lookup.
pub trait ModelRegistry {
    /// Resolve a model name to its handle.
    fn model_handle(&self, name: &str) -> Option<ModelHandle>;
    /// Resolve a handle back to the model name.
    fn model_name(&self, handle: ModelHandle) -> Option<&str>;
}

/// Bidirectional texture name ↔ key lookup.
///
/// Implementations must never issue [`TextureKey::UNSET`].
pub trait TextureRegistry {
    /// Resolve a texture name to its key.
    fn texture_key(&self, name: &str) -> Option<TextureKey>;
    /// Resolve a key back to the texture name. `UNSET` resolves to `None`.
    fn texture_name(&self, key: TextureKey) -> Option<&str>;
}

/// Animation name ↔ handle lookup plus access to frame data.
pub trait AnimationRegistry {
    /// Resolve an animation name to its handle.
    fn animation_handle(&self, name: &str) -> Option<AnimationHandle>;
    /// Resolve a handle back to the animation name.
    fn animation_name(&self, handle: AnimationHandle) -> Option<&str>;
    /// The frame sequence behind a handle.
    fn animation(&self, handle: AnimationHandle) -> Option<&Animation>;
}

/// The three registries a tile map store needs, as shared trait objects.
///
/// Cloning is cheap (three `Arc` bumps). Several stores may share the
/// same bundle.
#[derive(Clone)]
pub struct ResourceRegistries {
    /// Model registry.
    pub models: Arc<dyn ModelRegistry + Send + Sync>,
    /// Texture registry.
    pub textures: Arc<dyn TextureRegistry + Send + Sync>,
    /// Animation registry.
    pub animations: Arc<dyn AnimationRegistry + Send + Sync>,
}

impl ResourceRegistries {
    /// Bundle three registries.
    pub fn new(
        models: Arc<dyn ModelRegistry + Send + Sync>,
        textures: Arc<dyn TextureRegistry + Send + Sync>,
        animations: Arc<dyn AnimationRegistry + Send + Sync>,
    ) -> Self {
        Self {
            models,
            textures,
            animations,
        }
    }
}

impl fmt::Debug for ResourceRegistries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistries").finish_non_exhaustive()
    }
}

/// Insertion-ordered name table issuing ids starting at 1.
///
/// Usable directly as a [`ModelRegistry`] or [`TextureRegistry`]. Id 0 is
/// never issued, which keeps it free for the "unset" encodings.
#[derive(Clone, Debug, Default)]
pub struct NameRegistry {
    names: IndexSet<String>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name, returning its id. Re-registering returns the
    /// existing id.
    pub fn register(&mut self, name: impl Into<String>) -> NonZeroU32 {
        let (index, _) = self.names.insert_full(name.into());
        id_of(index)
    }

    /// Look up the id of a registered name.
    pub fn id(&self, name: &str) -> Option<u32> {
        self.names.get_index_of(name).map(|i| id_of(i).get())
    }

    /// Look up the name behind an id.
    pub fn name(&self, id: u32) -> Option<&str> {
        let index = id.checked_sub(1)?;
        self.names.get_index(index as usize).map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Ids are 1-based positions in insertion order.
fn id_of(index: usize) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(index as u32)
}

impl<S: Into<String>> FromIterator<S> for NameRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut reg = Self::new();
        for name in iter {
            reg.register(name);
        }
        reg
    }
}

impl ModelRegistry for NameRegistry {
    fn model_handle(&self, name: &str) -> Option<ModelHandle> {
        self.id(name).and_then(ModelHandle::new)
    }

    fn model_name(&self, handle: ModelHandle) -> Option<&str> {
        self.name(handle.get())
    }
}

impl TextureRegistry for NameRegistry {
    fn texture_key(&self, name: &str) -> Option<TextureKey> {
        self.id(name).map(TextureKey)
    }

    fn texture_name(&self, key: TextureKey) -> Option<&str> {
        self.name(key.0)
    }
}

/// Named animations with their frame data.
#[derive(Clone, Debug, Default)]
pub struct AnimationLibrary {
    names: NameRegistry,
    animations: Vec<Animation>,
}

impl AnimationLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an animation, returning its handle.
    pub fn insert(&mut self, name: impl Into<String>, animation: Animation) -> AnimationHandle {
        let id = self.names.register(name);
        let index = id.get() as usize - 1;
        match self.animations.get_mut(index) {
            Some(slot) => *slot = animation,
            None => self.animations.push(animation),
        }
        AnimationHandle::from(id)
    }

    /// Number of animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl AnimationRegistry for AnimationLibrary {
    fn animation_handle(&self, name: &str) -> Option<AnimationHandle> {
        self.names.id(name).and_then(AnimationHandle::new)
    }

    fn animation_name(&self, handle: AnimationHandle) -> Option<&str> {
        self.names.name(handle.get())
    }

    fn animation(&self, handle: AnimationHandle) -> Option<&Animation> {
        self.animations.get(handle.get() as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Frame;
    use proptest::prelude::*;

    #[test]
    fn ids_start_at_one() {
        let mut reg = NameRegistry::new();
        assert_eq!(reg.register("grass").get(), 1);
        assert_eq!(reg.register("stone").get(), 2);
        assert_eq!(reg.name(0), None);
        assert_eq!(reg.name(1), Some("grass"));
    }

    #[test]
    fn reregistering_returns_same_id() {
        let mut reg = NameRegistry::new();
        let a = reg.register("grass");
        let b = reg.register("grass");
        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn texture_registry_never_resolves_unset() {
        let reg: NameRegistry = ["grass"].into_iter().collect();
        assert_eq!(reg.texture_name(TextureKey::UNSET), None);
        assert_eq!(reg.texture_key("grass"), Some(TextureKey(1)));
        assert_eq!(reg.texture_key("lava"), None);
    }

    #[test]
    fn model_registry_round_trip() {
        let reg: NameRegistry = ["quad", "cube"].into_iter().collect();
        let h = reg.model_handle("cube").unwrap();
        assert_eq!(reg.model_name(h), Some("cube"));
        assert!(reg.model_handle("sphere").is_none());
    }

    #[test]
    fn animation_library_replaces_in_place() {
        let mut lib = AnimationLibrary::new();
        let h1 = lib.insert("water", Animation::new(vec![Frame::new("w0", "quad", 100)]));
        let h2 = lib.insert("water", Animation::new(vec![Frame::new("w1", "quad", 100)]));
        assert_eq!(h1, h2);
        assert_eq!(lib.len(), 1);
        let frame = lib.animation(h1).and_then(Animation::first_frame).unwrap();
        assert_eq!(frame.texture, "w1");
        assert_eq!(lib.animation_name(h1), Some("water"));
    }

    #[test]
    fn animation_handles_follow_insertion_order() {
        let mut lib = AnimationLibrary::new();
        let water = lib.insert("water", Animation::default());
        let torch = lib.insert("torch", Animation::default());
        assert_eq!((water.get(), torch.get()), (1, 2));
        assert_eq!(lib.animation_handle("torch"), Some(torch));
        assert!(lib.animation(torch).is_some());
    }

    #[test]
    fn unknown_animation_handle_is_none() {
        let lib = AnimationLibrary::new();
        let h = AnimationHandle::new(4).unwrap();
        assert!(lib.animation(h).is_none());
        assert!(lib.animation_name(h).is_none());
    }

    proptest! {
        #[test]
        fn name_id_bijection(names in proptest::collection::vec("[a-z]{1,6}", 0..20)) {
            let reg: NameRegistry = names.iter().cloned().collect();
            for name in &names {
                let id = reg.id(name).unwrap();
                prop_assert!(id >= 1);
                prop_assert_eq!(reg.name(id), Some(name.as_str()));
            }
        }
    }
}
