//! Name-level layer descriptions for bulk load and dump.

use tessel_core::{Frame, ResourceKind, ResourceRegistries, TileRecord};

use crate::error::StoreError;
use crate::layer::{
    animation_name, model_name, resolve_animation, resolve_model, resolve_texture, texture_name,
};

/// What one layer of one cell should hold, by name.
///
/// When `animation` is set it takes precedence: the animation's first
/// frame supplies the texture and model, and the descriptor's own
/// `texture`/`model` are ignored. A [`verbatim`](Self::verbatim)
/// descriptor skips that seeding and writes all three fields exactly as
/// given, absent fields included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerDescriptor {
    /// Target layer index within the cell.
    pub layer: u32,
    /// Model name.
    pub model: Option<String>,
    /// Texture name.
    pub texture: Option<String>,
    /// Animation name.
    pub animation: Option<String>,
    /// Write the fields as given instead of seeding from the animation.
    pub verbatim: bool,
}

/// The descriptors for one cell.
pub type CellLayers = Vec<LayerDescriptor>;

impl LayerDescriptor {
    /// A descriptor targeting `layer` with nothing assigned.
    pub fn new(layer: u32) -> Self {
        Self {
            layer,
            ..Self::default()
        }
    }

    /// Static layer with a model and a texture.
    pub fn tile(layer: u32, model: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            layer,
            model: Some(model.into()),
            texture: Some(texture.into()),
            ..Self::default()
        }
    }

    /// Animated layer, seeded from the animation's first frame.
    pub fn animated(layer: u32, animation: impl Into<String>) -> Self {
        Self {
            layer,
            animation: Some(animation.into()),
            ..Self::default()
        }
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the texture name.
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    /// Set the animation name.
    pub fn with_animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    /// Disable first-frame seeding for this descriptor.
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// Whether loading this descriptor seeds texture and model from the
    /// animation's first frame.
    pub fn seeds_from_animation(&self) -> bool {
        self.animation.is_some() && !self.verbatim
    }
}

/// The first frame of animation `name`.
fn first_frame<'r>(
    registries: &'r ResourceRegistries,
    name: &str,
) -> Result<&'r Frame, StoreError> {
    let handle = resolve_animation(registries, name)?;
    let animation =
        registries
            .animations
            .animation(handle)
            .ok_or(StoreError::DanglingHandle {
                kind: ResourceKind::Animation,
                id: handle.get(),
            })?;
    animation
        .first_frame()
        .ok_or_else(|| StoreError::EmptyAnimation {
            name: name.to_string(),
        })
}

/// The record a seeded load of animation `name` writes: the animation
/// plus its first frame's texture and model.
pub(crate) fn seeded_record(
    registries: &ResourceRegistries,
    name: &str,
) -> Result<TileRecord, StoreError> {
    let frame = first_frame(registries, name)?;
    Ok(TileRecord {
        model: Some(resolve_model(registries, &frame.model)?),
        texture: resolve_texture(registries, &frame.texture)?,
        animation: Some(resolve_animation(registries, name)?),
    })
}

/// Resolve every name a descriptor would write, without writing anything.
pub(crate) fn check_resolvable(
    registries: &ResourceRegistries,
    desc: &LayerDescriptor,
) -> Result<(), StoreError> {
    match &desc.animation {
        Some(name) if !desc.verbatim => {
            seeded_record(registries, name)?;
        }
        animation => {
            if let Some(name) = animation {
                resolve_animation(registries, name)?;
            }
            if let Some(texture) = &desc.texture {
                resolve_texture(registries, texture)?;
            }
            if let Some(model) = &desc.model {
                resolve_model(registries, model)?;
            }
        }
    }
    Ok(())
}

/// Describe `rec` so that loading the result writes `rec` back exactly.
///
/// An animated record that still matches its first-frame seed is named by
/// its animation alone; anything else is described verbatim.
pub(crate) fn describe_record(
    registries: &ResourceRegistries,
    layer: u32,
    rec: &TileRecord,
) -> Result<LayerDescriptor, StoreError> {
    let animation = rec
        .animation
        .map(|h| animation_name(registries, h))
        .transpose()?;
    if let Some(name) = animation {
        if seeded_record(registries, name).ok() == Some(*rec) {
            return Ok(LayerDescriptor::animated(layer, name));
        }
    }

    let texture = if rec.texture.is_unset() {
        None
    } else {
        Some(texture_name(registries, rec.texture)?.to_string())
    };
    Ok(LayerDescriptor {
        layer,
        model: rec
            .model
            .map(|h| model_name(registries, h).map(str::to_string))
            .transpose()?,
        texture,
        animation: animation.map(str::to_string),
        verbatim: animation.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tessel_core::{Animation, AnimationLibrary, ModelHandle, NameRegistry, TextureKey};

    fn registries() -> ResourceRegistries {
        let models: NameRegistry = ["quad"].into_iter().collect();
        let textures: NameRegistry = ["water-0"].into_iter().collect();
        let mut animations = AnimationLibrary::new();
        animations.insert(
            "water",
            Animation::new(vec![Frame::new("water-0", "quad", 100)]),
        );
        animations.insert("still", Animation::default());
        animations.insert(
            "broken",
            Animation::new(vec![Frame::new("missing", "quad", 100)]),
        );
        ResourceRegistries::new(Arc::new(models), Arc::new(textures), Arc::new(animations))
    }

    #[test]
    fn constructors_fill_expected_fields() {
        let d = LayerDescriptor::tile(1, "quad", "grass");
        assert_eq!(d.model.as_deref(), Some("quad"));
        assert_eq!(d.texture.as_deref(), Some("grass"));
        assert!(d.animation.is_none());

        let d = LayerDescriptor::new(2).with_texture("grass");
        assert_eq!(d.layer, 2);
        assert!(d.model.is_none());
    }

    #[test]
    fn first_frame_resolves_through_registry() {
        let regs = registries();
        let frame = first_frame(&regs, "water").unwrap();
        assert_eq!(frame.texture, "water-0");
    }

    #[test]
    fn frameless_animation_is_rejected() {
        let regs = registries();
        assert_eq!(
            first_frame(&regs, "still").unwrap_err(),
            StoreError::EmptyAnimation {
                name: "still".into()
            }
        );
    }

    #[test]
    fn check_resolvable_follows_frame_names() {
        let regs = registries();
        assert!(check_resolvable(&regs, &LayerDescriptor::animated(0, "water")).is_ok());
        assert!(matches!(
            check_resolvable(&regs, &LayerDescriptor::animated(0, "broken")),
            Err(StoreError::UnknownResource {
                kind: ResourceKind::Texture,
                ..
            })
        ));
        // Descriptor texture is ignored when an animation is present.
        let d = LayerDescriptor::animated(0, "water").with_texture("nope");
        assert!(check_resolvable(&regs, &d).is_ok());
        assert!(check_resolvable(&regs, &LayerDescriptor::new(0).with_model("cube")).is_err());
    }

    #[test]
    fn verbatim_descriptor_resolves_only_given_names() {
        let regs = registries();
        // A broken first frame does not matter when seeding is skipped.
        let d = LayerDescriptor::animated(0, "broken").verbatim();
        assert!(!d.seeds_from_animation());
        assert!(check_resolvable(&regs, &d).is_ok());
        assert!(check_resolvable(&regs, &d.clone().with_texture("nope")).is_err());
        assert!(check_resolvable(&regs, &LayerDescriptor::animated(0, "fire").verbatim()).is_err());
    }

    // ── describe_record ────────────────────────────────────────

    #[test]
    fn seeded_record_is_described_by_animation_alone() {
        let regs = registries();
        let rec = seeded_record(&regs, "water").unwrap();
        assert_eq!(
            describe_record(&regs, 1, &rec).unwrap(),
            LayerDescriptor::animated(1, "water")
        );
    }

    #[test]
    fn diverged_animated_record_is_described_verbatim() {
        let regs = registries();
        let animation_only = TileRecord {
            animation: seeded_record(&regs, "water").unwrap().animation,
            ..TileRecord::EMPTY
        };
        assert_eq!(
            describe_record(&regs, 0, &animation_only).unwrap(),
            LayerDescriptor::animated(0, "water").verbatim()
        );

        let broken = TileRecord {
            model: ModelHandle::new(1),
            texture: TextureKey(1),
            animation: regs.animations.animation_handle("broken"),
        };
        assert_eq!(
            describe_record(&regs, 0, &broken).unwrap(),
            LayerDescriptor::tile(0, "quad", "water-0")
                .with_animation("broken")
                .verbatim()
        );
    }

    #[test]
    fn static_record_is_described_by_name() {
        let regs = registries();
        let rec = TileRecord {
            texture: TextureKey(1),
            ..TileRecord::EMPTY
        };
        assert_eq!(
            describe_record(&regs, 3, &rec).unwrap(),
            LayerDescriptor::new(3).with_texture("water-0")
        );
    }
}
