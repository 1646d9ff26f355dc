//! Reusable resource fixtures.
//!
//! One small, fixed set of resources shared by store and facade tests:
//!
//! - models: `quad`, `cube`, `slope`
//! - textures: `grass`, `stone`, `sand`, `water-0`, `water-1`
//! - animations: `water` (two frames), `torch` (one frame), `still`
//!   (no frames), `broken` (first frame names an unknown texture)

use std::sync::Arc;

use tessel_core::{Animation, AnimationLibrary, Frame, NameRegistry, ResourceRegistries};

pub const MODELS: [&str; 3] = ["quad", "cube", "slope"];
pub const TEXTURES: [&str; 5] = ["grass", "stone", "sand", "water-0", "water-1"];

pub fn model_registry() -> NameRegistry {
    MODELS.into_iter().collect()
}

pub fn texture_registry() -> NameRegistry {
    TEXTURES.into_iter().collect()
}

pub fn animation_library() -> AnimationLibrary {
    let mut lib = AnimationLibrary::new();
    lib.insert(
        "water",
        Animation::new(vec![
            Frame::new("water-0", "quad", 250),
            Frame::new("water-1", "quad", 250),
        ]),
    );
    lib.insert("torch", Animation::new(vec![Frame::new("sand", "cube", 80)]));
    lib.insert("still", Animation::default());
    lib.insert(
        "broken",
        Animation::new(vec![Frame::new("lava", "quad", 100)]),
    );
    lib
}

/// The full fixture set, ready to hand to a store.
pub fn fixture_registries() -> ResourceRegistries {
    ResourceRegistries::new(
        Arc::new(model_registry()),
        Arc::new(texture_registry()),
        Arc::new(animation_library()),
    )
}

/// Registries with nothing registered.
pub fn empty_registries() -> ResourceRegistries {
    ResourceRegistries::new(
        Arc::new(NameRegistry::default()),
        Arc::new(NameRegistry::default()),
        Arc::new(AnimationLibrary::new()),
    )
}
