//! Accessor over a single layer record.

use tessel_core::{
    AnimationHandle, ModelHandle, ResourceKind, ResourceRegistries, TextureKey, TileRecord,
};

use crate::descriptor::{seeded_record, LayerDescriptor};
use crate::error::StoreError;

/// A bound, read/write view of one layer of one cell.
///
/// The view borrows its record straight out of the store's arena: every
/// setter writes in place and every getter reads the live value. Names are
/// translated to handles (and back) through the store's registries.
/// Setters leave the record untouched when the name does not resolve.
#[derive(Debug)]
pub struct LayerView<'a> {
    record: &'a mut TileRecord,
    registries: &'a ResourceRegistries,
    layer: u32,
}

impl<'a> LayerView<'a> {
    pub(crate) fn new(
        record: &'a mut TileRecord,
        registries: &'a ResourceRegistries,
        layer: u32,
    ) -> Self {
        Self {
            record,
            registries,
            layer,
        }
    }

    /// Index of this layer within its cell.
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Copy of the raw record.
    pub fn record(&self) -> TileRecord {
        *self.record
    }

    /// Whether the layer has neither a model nor an animation.
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Name of the assigned model, or `None` when unset.
    pub fn model(&self) -> Result<Option<&'a str>, StoreError> {
        self.record
            .model
            .map(|h| model_name(self.registries, h))
            .transpose()
    }

    /// Assign a model by name.
    pub fn set_model(&mut self, name: &str) -> Result<(), StoreError> {
        self.record.model = Some(resolve_model(self.registries, name)?);
        Ok(())
    }

    /// Name of the assigned texture, or `None` when the key is unset.
    pub fn texture(&self) -> Result<Option<&'a str>, StoreError> {
        let key = self.record.texture;
        if key.is_unset() {
            return Ok(None);
        }
        texture_name(self.registries, key).map(Some)
    }

    /// Assign a texture by name.
    pub fn set_texture(&mut self, name: &str) -> Result<(), StoreError> {
        self.record.texture = resolve_texture(self.registries, name)?;
        Ok(())
    }

    /// Name of the assigned animation. `None` means "no animation" and is
    /// not an error.
    pub fn animation(&self) -> Result<Option<&'a str>, StoreError> {
        self.record
            .animation
            .map(|h| animation_name(self.registries, h))
            .transpose()
    }

    /// Assign an animation by name, or clear it with `None`.
    pub fn set_animation(&mut self, name: Option<&str>) -> Result<(), StoreError> {
        self.record.animation = match name {
            Some(name) => Some(resolve_animation(self.registries, name)?),
            None => None,
        };
        Ok(())
    }

    /// Write a bulk-load descriptor into this layer.
    ///
    /// A seeding descriptor replaces the record with the animation and its
    /// first frame's texture and model. Otherwise each present field is
    /// set and absent fields are left alone.
    pub(crate) fn apply(&mut self, desc: &LayerDescriptor) -> Result<(), StoreError> {
        match &desc.animation {
            Some(name) if !desc.verbatim => {
                *self.record = seeded_record(self.registries, name)?;
            }
            animation => {
                if let Some(name) = animation {
                    self.set_animation(Some(name))?;
                }
                if let Some(texture) = &desc.texture {
                    self.set_texture(texture)?;
                }
                if let Some(model) = &desc.model {
                    self.set_model(model)?;
                }
            }
        }
        Ok(())
    }
}

// ── Name resolution ───────────────────────────────────────────────

pub(crate) fn resolve_model(
    registries: &ResourceRegistries,
    name: &str,
) -> Result<ModelHandle, StoreError> {
    registries
        .models
        .model_handle(name)
        .ok_or_else(|| unknown(ResourceKind::Model, name))
}

pub(crate) fn resolve_texture(
    registries: &ResourceRegistries,
    name: &str,
) -> Result<TextureKey, StoreError> {
    match registries.textures.texture_key(name) {
        Some(key) if !key.is_unset() => Ok(key),
        _ => Err(unknown(ResourceKind::Texture, name)),
    }
}

pub(crate) fn resolve_animation(
    registries: &ResourceRegistries,
    name: &str,
) -> Result<AnimationHandle, StoreError> {
    registries
        .animations
        .animation_handle(name)
        .ok_or_else(|| unknown(ResourceKind::Animation, name))
}

pub(crate) fn model_name(
    registries: &ResourceRegistries,
    handle: ModelHandle,
) -> Result<&str, StoreError> {
    registries
        .models
        .model_name(handle)
        .ok_or(StoreError::DanglingHandle {
            kind: ResourceKind::Model,
            id: handle.get(),
        })
}

pub(crate) fn texture_name(
    registries: &ResourceRegistries,
    key: TextureKey,
) -> Result<&str, StoreError> {
    registries
        .textures
        .texture_name(key)
        .ok_or(StoreError::DanglingHandle {
            kind: ResourceKind::Texture,
            id: key.0,
        })
}

pub(crate) fn animation_name(
    registries: &ResourceRegistries,
    handle: AnimationHandle,
) -> Result<&str, StoreError> {
    registries
        .animations
        .animation_name(handle)
        .ok_or(StoreError::DanglingHandle {
            kind: ResourceKind::Animation,
            id: handle.get(),
        })
}

fn unknown(kind: ResourceKind, name: &str) -> StoreError {
    StoreError::UnknownResource {
        kind,
        name: name.to_string(),
    }
}
