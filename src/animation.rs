//! Sprite animation bookkeeping.
//!
//! Tracks which named frame set a sprite shows and which frame of it is
//! current. Drawing the frame is left to the renderer. Frame lookups are
//! bounds-checked and report [`AnimationError`] instead of reading past the
//! end of a frame list.

use glam::Vec2;
use hashbrown::HashMap;
use log::debug;

use crate::effects::AnimationSink;
use crate::error::AnimationError;
use crate::scene::NodeId;

/// Ordered frames making up one animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<u32>,
    looping: bool,
}

impl FrameSet {
    /// Creates a frame set from sprite sheet cell indices.
    #[must_use]
    pub const fn new(frames: Vec<u32>, looping: bool) -> Self {
        Self { frames, looping }
    }

    /// Whether playback wraps back to the first frame.
    #[must_use]
    pub const fn looping(&self) -> bool {
        self.looping
    }

    /// Number of frames in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` when the set holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sprite sheet cell shown at `index`.
    ///
    /// # Errors
    /// Returns [`AnimationError::FrameOutOfRange`] when `index` is past the
    /// last frame.
    pub fn frame(&self, animation: &str, index: usize) -> Result<u32, AnimationError> {
        self.frames
            .get(index)
            .copied()
            .ok_or_else(|| AnimationError::FrameOutOfRange {
                animation: animation.to_owned(),
                index,
                len: self.frames.len(),
            })
    }
}

/// Sprite sheet with named animations cut into fixed-size cells.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    cell_size: Vec2,
    animations: HashMap<String, FrameSet>,
    active: String,
    frame_index: usize,
}

impl AnimatedSprite {
    /// Builds a sprite from `(name, frames)` pairs.
    ///
    /// The first pair becomes the active animation.
    ///
    /// # Errors
    /// Returns [`AnimationError::EmptyLibrary`] when no animations are given.
    pub fn new<I, S>(cell_size: Vec2, animations: I) -> Result<Self, AnimationError>
    where
        I: IntoIterator<Item = (S, FrameSet)>,
        S: Into<String>,
    {
        let mut first = None;
        let mut library = HashMap::new();
        for (name, frames) in animations {
            let name = name.into();
            if first.is_none() {
                first = Some(name.clone());
            }
            library.insert(name, frames);
        }
        let active = first.ok_or(AnimationError::EmptyLibrary)?;
        Ok(Self {
            cell_size,
            animations: library,
            active,
            frame_index: 0,
        })
    }

    /// Width and height of one cell, which is the entity's visual size.
    #[must_use]
    pub const fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Name of the active animation.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Index into the active frame set.
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Switches animation and rewinds to its first frame.
    ///
    /// # Errors
    /// Returns [`AnimationError::UnknownAnimation`] when `name` is not
    /// registered; the active animation is left unchanged.
    pub fn activate(&mut self, name: &str) -> Result<(), AnimationError> {
        if !self.animations.contains_key(name) {
            return Err(AnimationError::UnknownAnimation(name.to_owned()));
        }
        name.clone_into(&mut self.active);
        self.frame_index = 0;
        Ok(())
    }

    /// Moves to the next frame, wrapping for looping sets and holding the
    /// last frame otherwise.
    ///
    /// # Errors
    /// Returns [`AnimationError::UnknownAnimation`] if the active animation
    /// is missing from the library.
    pub fn advance(&mut self) -> Result<(), AnimationError> {
        let frames = self.current_frames()?;
        let next = self.frame_index + 1;
        self.frame_index = if next < frames.len() {
            next
        } else if frames.looping() {
            0
        } else {
            self.frame_index
        };
        Ok(())
    }

    /// Frame set of the active animation.
    ///
    /// # Errors
    /// Returns [`AnimationError::UnknownAnimation`] if the active animation
    /// is missing from the library.
    pub fn current_frames(&self) -> Result<&FrameSet, AnimationError> {
        self.animations
            .get(&self.active)
            .ok_or_else(|| AnimationError::UnknownAnimation(self.active.clone()))
    }

    /// Sprite sheet cell currently shown.
    ///
    /// # Errors
    /// Propagates [`AnimationError::FrameOutOfRange`] for an empty frame set.
    pub fn current_frame(&self) -> Result<u32, AnimationError> {
        self.current_frames()?.frame(&self.active, self.frame_index)
    }
}

/// Animation sink keeping one [`AnimatedSprite`] per scene node.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    sprites: HashMap<NodeId, AnimatedSprite>,
}

impl Animator {
    /// Creates an animator with no sprites.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `sprite` to `node`, replacing any previous one.
    pub fn insert(&mut self, node: NodeId, sprite: AnimatedSprite) {
        self.sprites.insert(node, sprite);
    }

    /// Sprite attached to `node`.
    #[must_use]
    pub fn sprite(&self, node: NodeId) -> Option<&AnimatedSprite> {
        self.sprites.get(&node)
    }

    /// Advances every sprite by one frame.
    pub fn advance_all(&mut self) {
        for (node, sprite) in &mut self.sprites {
            if let Err(err) = sprite.advance() {
                debug!("animation advance skipped for {node}: {err}");
            }
        }
    }
}

impl AnimationSink for Animator {
    fn set_active_animation(&mut self, node: NodeId, name: &str) {
        let Some(sprite) = self.sprites.get_mut(&node) else {
            return;
        };
        if let Err(err) = sprite.activate(name) {
            debug!("{node} kept animation `{}`: {err}", sprite.active());
        }
    }
}
