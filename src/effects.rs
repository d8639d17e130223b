//! Narrow interfaces to the audio and animation collaborators.
//!
//! Controllers never talk to a device. They call these traits, and the
//! frontend decides what a sound or an animation change means.

use serde::Serialize;

use crate::scene::NodeId;

/// Opaque handle to a looping sound started through an [`AudioSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SoundHandle(pub u64);

/// Audio playback capability consumed by the controllers.
pub trait AudioSink {
    /// Plays `name` once.
    fn play_one_shot(&mut self, name: &str);
    /// Starts `name` looping and returns a handle for stopping it.
    fn play_looping(&mut self, name: &str) -> SoundHandle;
    /// Stops a loop previously started with [`AudioSink::play_looping`].
    fn stop(&mut self, handle: SoundHandle);
}

/// Animation selection capability consumed by the controllers.
pub trait AnimationSink {
    /// Selects the named animation on the visual representing `node`.
    fn set_active_animation(&mut self, node: NodeId, name: &str);
}

/// Collaborators handed to a tick.
///
/// Borrowed for the duration of one tick only, so the simulation itself
/// never owns a device.
pub struct Effects<'a> {
    /// Where sound requests go.
    pub audio: &'a mut dyn AudioSink,
    /// Where animation changes go.
    pub animation: &'a mut dyn AnimationSink,
}

impl<'a> Effects<'a> {
    /// Bundles an audio and an animation sink.
    pub fn new(audio: &'a mut dyn AudioSink, animation: &'a mut dyn AnimationSink) -> Self {
        Self { audio, animation }
    }
}

/// Sink that discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play_one_shot(&mut self, _name: &str) {}

    fn play_looping(&mut self, _name: &str) -> SoundHandle {
        SoundHandle(0)
    }

    fn stop(&mut self, _handle: SoundHandle) {}
}

impl AnimationSink for Silent {
    fn set_active_animation(&mut self, _node: NodeId, _name: &str) {}
}
