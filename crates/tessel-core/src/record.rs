//! The fixed-layout per-layer record stored in the tile arena.

use crate::id::{AnimationHandle, ModelHandle, TextureKey};

/// Raw data for one layer of one cell.
///
/// Plain old data: twelve bytes, `Copy`, zero-initialised by `Default`.
/// Records carry no behaviour beyond the emptiness check; name
/// translation happens in the store's layer views.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileRecord {
    /// Model to render, if any.
    pub model: Option<ModelHandle>,
    /// Texture key; [`TextureKey::UNSET`] when no texture is assigned.
    pub texture: TextureKey,
    /// Animation sequence driving this layer, if any.
    pub animation: Option<AnimationHandle>,
}

impl TileRecord {
    /// A record with every field unset.
    pub const EMPTY: Self = Self {
        model: None,
        texture: TextureKey::UNSET,
        animation: None,
    };

    /// A layer is empty iff it has neither a model nor an animation.
    ///
    /// The texture key is deliberately ignored: a record holding only a
    /// texture is still empty.
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.animation.is_none()
    }

    /// Reset every field to the unset state.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(TileRecord::default(), TileRecord::EMPTY);
        assert!(TileRecord::default().is_empty());
    }

    #[test]
    fn texture_alone_does_not_fill_a_record() {
        let rec = TileRecord {
            texture: TextureKey(5),
            ..TileRecord::EMPTY
        };
        assert!(rec.is_empty());
    }

    #[test]
    fn model_or_animation_fills_a_record() {
        let with_model = TileRecord {
            model: ModelHandle::new(1),
            ..TileRecord::EMPTY
        };
        let with_anim = TileRecord {
            animation: AnimationHandle::new(2),
            ..TileRecord::EMPTY
        };
        assert!(!with_model.is_empty());
        assert!(!with_anim.is_empty());
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut rec = TileRecord {
            model: ModelHandle::new(1),
            texture: TextureKey(9),
            animation: AnimationHandle::new(3),
        };
        rec.clear();
        assert_eq!(rec, TileRecord::EMPTY);
    }

    #[test]
    fn record_layout_is_compact() {
        assert_eq!(std::mem::size_of::<TileRecord>(), 12);
    }
}
