//! Presentation-facing views of the simulation.
//!
//! The core never draws or plays anything. Renderers read [`RenderItem`]s,
//! HUD and telemetry read [`EntitySnapshot`]s, and frontends that cannot
//! react to sink calls immediately use an [`EffectLog`] and replay the
//! recorded [`PresentationEffect`]s later. The presentation layer stays a
//! passive observer: nothing here feeds back into the update pass.

use bevy::prelude::Resource;
use glam::Vec2;
use hashbrown::HashMap;
use serde::Serialize;

use crate::aabb::Aabb;
use crate::effects::{AnimationSink, AudioSink, Effects, SoundHandle};
use crate::entity::{BehaviourState, WorldEntity};
use crate::scene::NodeId;

/// Converts a world-space footprint origin to a screen-space origin.
///
/// World space grows upwards from the bottom-left corner; screen space grows
/// downwards from the top-left corner, so the footprint is flipped about the
/// viewport's horizontal axis.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use skulk::presentation::to_screen;
/// let screen = to_screen(Vec2::new(10.0, 0.0), Vec2::new(32.0, 64.0), 600.0);
/// assert_eq!(screen, Vec2::new(10.0, 536.0));
/// ```
#[must_use]
pub fn to_screen(position: Vec2, size: Vec2, viewport_height: f32) -> Vec2 {
    Vec2::new(position.x, viewport_height - position.y - size.y)
}

/// Everything a renderer needs to place one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    /// Node being drawn.
    pub node: NodeId,
    /// Node name.
    pub name: String,
    /// Footprint origin in world space.
    pub position: Vec2,
    /// Width and height of the visual footprint.
    pub size: Vec2,
    /// Footprint origin in screen space.
    pub screen_origin: Vec2,
}

impl RenderItem {
    /// Builds the render view of `entity`.
    #[must_use]
    pub fn new(node: NodeId, name: &str, entity: &WorldEntity, viewport_height: f32) -> Self {
        let body = entity.body();
        Self {
            node,
            name: name.to_owned(),
            position: body.position(),
            size: body.size(),
            screen_origin: to_screen(body.position(), body.size(), viewport_height),
        }
    }
}

/// Serialisable per-entity state for HUDs and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    /// Node the snapshot describes.
    pub node: NodeId,
    /// Node name.
    pub name: String,
    /// Footprint origin in world space.
    pub position: Vec2,
    /// Current collision volume.
    pub bounding_box: Aabb,
    /// Behaviour state at the time of the snapshot.
    pub state: BehaviourState,
    /// Noise emitted on the last update.
    pub noise: f32,
}

impl EntitySnapshot {
    /// Captures `entity`.
    #[must_use]
    pub fn new(node: NodeId, name: &str, entity: &WorldEntity) -> Self {
        Self {
            node,
            name: name.to_owned(),
            position: entity.body().position(),
            bounding_box: entity.body().bounding_box(),
            state: entity.state(),
            noise: entity.noise_level(),
        }
    }
}

/// A side effect requested during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PresentationEffect {
    /// Play a sound once.
    OneShot {
        /// Sound name.
        name: String,
    },
    /// Start a looping sound.
    LoopStarted {
        /// Handle allocated for the loop.
        handle: SoundHandle,
        /// Sound name.
        name: String,
    },
    /// Stop a looping sound.
    LoopStopped {
        /// Handle of the loop.
        handle: SoundHandle,
    },
    /// Switch the animation of a node.
    Animation {
        /// Node whose visual changes.
        node: NodeId,
        /// Animation name.
        name: String,
    },
}

/// Audio sink that records requests and tracks live loops.
#[derive(Debug, Clone, Default)]
pub struct SoundLog {
    effects: Vec<PresentationEffect>,
    live_loops: HashMap<SoundHandle, String>,
    next_handle: u64,
}

impl SoundLog {
    /// Name of the loop playing under `handle`.
    #[must_use]
    pub fn live_loop(&self, handle: SoundHandle) -> Option<&str> {
        self.live_loops.get(&handle).map(String::as_str)
    }

    /// Number of loops currently playing.
    #[must_use]
    pub fn live_loop_count(&self) -> usize {
        self.live_loops.len()
    }
}

impl AudioSink for SoundLog {
    fn play_one_shot(&mut self, name: &str) {
        self.effects.push(PresentationEffect::OneShot {
            name: name.to_owned(),
        });
    }

    fn play_looping(&mut self, name: &str) -> SoundHandle {
        self.next_handle += 1;
        let handle = SoundHandle(self.next_handle);
        self.live_loops.insert(handle, name.to_owned());
        self.effects.push(PresentationEffect::LoopStarted {
            handle,
            name: name.to_owned(),
        });
        handle
    }

    fn stop(&mut self, handle: SoundHandle) {
        if self.live_loops.remove(&handle).is_some() {
            self.effects.push(PresentationEffect::LoopStopped { handle });
        }
    }
}

/// Animation sink that records requests.
#[derive(Debug, Clone, Default)]
pub struct AnimationLog {
    effects: Vec<PresentationEffect>,
}

impl AnimationSink for AnimationLog {
    fn set_active_animation(&mut self, node: NodeId, name: &str) {
        self.effects.push(PresentationEffect::Animation {
            node,
            name: name.to_owned(),
        });
    }
}

/// Recorder for every side effect of a tick, kept for later replay.
///
/// Sound and animation requests are recorded by separate halves so both can
/// be lent to one [`Effects`] at the same time.
#[derive(Resource, Debug, Clone, Default)]
pub struct EffectLog {
    /// Recorded sound requests.
    pub sounds: SoundLog,
    /// Recorded animation changes.
    pub animations: AnimationLog,
}

impl EffectLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lends both halves as the sinks of one tick.
    pub fn effects(&mut self) -> Effects<'_> {
        Effects::new(&mut self.sounds, &mut self.animations)
    }

    /// Number of effects waiting to be drained.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.sounds.effects.len() + self.animations.effects.len()
    }

    /// Removes and returns the recorded effects, sounds first, each half in
    /// the order it was recorded. Live loops stay tracked.
    pub fn drain(&mut self) -> Vec<PresentationEffect> {
        let mut drained = std::mem::take(&mut self.sounds.effects);
        drained.append(&mut self.animations.effects);
        drained
    }
}

/// Forwards every recorded animation change to `sink`.
///
/// Sound effects are skipped: their handles only mean something to the
/// [`SoundLog`] that allocated them.
pub fn replay_animations(effects: &[PresentationEffect], sink: &mut dyn AnimationSink) {
    for effect in effects {
        if let PresentationEffect::Animation { node, name } = effect {
            sink.set_active_animation(*node, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ground_level(Vec2::ZERO, Vec2::new(32.0, 64.0), Vec2::new(0.0, 536.0))]
    #[case::raised(Vec2::new(200.0, 200.0), Vec2::splat(32.0), Vec2::new(200.0, 368.0))]
    #[case::touching_top(Vec2::new(5.0, 568.0), Vec2::splat(32.0), Vec2::new(5.0, 0.0))]
    fn screen_origin_flips_y(#[case] position: Vec2, #[case] size: Vec2, #[case] expected: Vec2) {
        assert_eq!(to_screen(position, size, 600.0), expected);
    }

    #[test]
    fn loops_get_distinct_handles_and_stop_once() {
        let mut sounds = SoundLog::default();
        let walk = sounds.play_looping("walk");
        let run = sounds.play_looping("run");
        assert_ne!(walk, run);
        assert_eq!(sounds.live_loop(walk), Some("walk"));

        sounds.stop(walk);
        sounds.stop(walk);
        assert_eq!(sounds.live_loop_count(), 1);
        let stops = sounds
            .effects
            .iter()
            .filter(|effect| matches!(effect, PresentationEffect::LoopStopped { .. }))
            .count();
        assert_eq!(stops, 1);
    }

    #[test]
    fn drain_empties_the_log_but_keeps_loops() {
        let mut log = EffectLog::new();
        let handle = {
            let mut fx = log.effects();
            fx.animation.set_active_animation(NodeId::from_raw(1), "crouch");
            fx.audio.play_one_shot("jump");
            fx.audio.play_looping("crouch")
        };
        assert_eq!(log.pending(), 3);
        let drained = log.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(
            drained.first(),
            Some(&PresentationEffect::OneShot {
                name: "jump".to_owned()
            })
        );
        assert_eq!(log.pending(), 0);
        assert_eq!(log.sounds.live_loop(handle), Some("crouch"));
    }

    #[test]
    fn replay_forwards_only_animations() {
        let node = NodeId::from_raw(0);
        let mut animator = crate::animation::Animator::new();
        animator.insert(
            node,
            crate::animation::AnimatedSprite::new(
                Vec2::ONE,
                [
                    ("idle", crate::animation::FrameSet::new(vec![0], false)),
                    ("jump", crate::animation::FrameSet::new(vec![1], false)),
                ],
            )
            .expect("sprite"),
        );
        let effects = [
            PresentationEffect::OneShot {
                name: "jump".to_owned(),
            },
            PresentationEffect::Animation {
                node,
                name: "jump".to_owned(),
            },
        ];
        replay_animations(&effects, &mut animator);
        assert_eq!(
            animator.sprite(node).map(crate::animation::AnimatedSprite::active),
            Some("jump")
        );
    }

    #[test]
    fn effects_serialise_with_a_tag() {
        let effect = PresentationEffect::Animation {
            node: NodeId::from_raw(4),
            name: "walk".to_owned(),
        };
        let json = serde_json::to_value(&effect).expect("serialisable");
        assert_eq!(
            json,
            serde_json::json!({ "effect": "animation", "node": 4, "name": "walk" })
        );
    }
}
