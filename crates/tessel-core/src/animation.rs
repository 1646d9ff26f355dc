//! Animation sequences as exposed by the animation registry.

/// One frame of an animation: the texture and model shown while it plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Texture name, resolvable through the texture registry.
    pub texture: String,
    /// Model name, resolvable through the model registry.
    pub model: String,
    /// How long the frame is displayed, in milliseconds.
    pub duration_ms: u32,
}

impl Frame {
    /// Create a frame.
    pub fn new(texture: impl Into<String>, model: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            texture: texture.into(),
            model: model.into(),
            duration_ms,
        }
    }
}

/// An ordered, indexable sequence of frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    /// Frames in playback order.
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Create an animation from its frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// The first frame, used to seed a layer when the animation is assigned.
    pub fn first_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the animation has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total playback time in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.duration_ms)).sum()
    }
}
