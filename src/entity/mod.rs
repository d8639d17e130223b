//! World entities: scene nodes with a footprint in the 2D world.
//!
//! A [`WorldEntity`] pairs a [`Body`] (position, bounding box, displacement
//! tracking and classification flags) with a [`Behaviour`] variant. The
//! variant replaces subclassing: props use the default collision policy,
//! while players and enemies run their own state machines.

mod body;

pub use body::{Body, EntityFlags};

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::aabb::Aabb;
use crate::effects::Effects;
use crate::enemy::{EnemyController, EnemySenses, EnemyState};
use crate::player::{PlayerController, PlayerSenses, PlayerState};
use crate::scene::NodeId;

/// Behaviour attached to a world entity.
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// Scenery with no behaviour of its own.
    Prop,
    /// The player-controlled character.
    Player(PlayerController),
    /// A character tracking a target.
    Enemy(EnemyController),
}

/// Serialisable view of a behaviour's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "state", rename_all = "snake_case")]
pub enum BehaviourState {
    /// Props have no state.
    Prop,
    /// Current player state.
    Player(PlayerState),
    /// Current enemy state.
    Enemy(EnemyState),
}

/// What an entity perceives at the start of its update.
///
/// Gathered by the simulation from the rest of the scene before the entity
/// is borrowed mutably.
#[derive(Debug, Clone, PartialEq)]
pub enum Stimulus {
    /// Nothing to perceive.
    None,
    /// Input and surroundings for a player.
    Player(PlayerSenses),
    /// Target reading for an enemy.
    Enemy(EnemySenses),
}

/// Copy of the fields another entity needs to respond to a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Node the collider belongs to.
    pub node: NodeId,
    /// Classification flags of the collider.
    pub flags: EntityFlags,
    /// Bounding box of the collider at the time of the test.
    pub bounding_box: Aabb,
}

/// A scene node occupying space in the world.
#[derive(Debug, Clone)]
pub struct WorldEntity {
    body: Body,
    behaviour: Behaviour,
}

impl WorldEntity {
    /// Creates an entity from a body and a behaviour.
    #[must_use]
    pub const fn new(body: Body, behaviour: Behaviour) -> Self {
        Self { body, behaviour }
    }

    /// Creates scenery with default flags.
    #[must_use]
    pub fn prop(position: Vec2, size: Vec2) -> Self {
        Self::new(Body::new(position, size), Behaviour::Prop)
    }

    /// Creates a player. Players are pushed around by collisions.
    #[must_use]
    pub fn player(position: Vec2, size: Vec2, controller: PlayerController) -> Self {
        let mut body = Body::new(position, size);
        body.flags_mut().fixed = false;
        Self::new(body, Behaviour::Player(controller))
    }

    /// Creates an enemy. Enemies are pushed around by collisions.
    #[must_use]
    pub fn enemy(position: Vec2, size: Vec2, controller: EnemyController) -> Self {
        let mut body = Body::new(position, size);
        body.flags_mut().fixed = false;
        Self::new(body, Behaviour::Enemy(controller))
    }

    /// Replaces the classification flags.
    #[must_use]
    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        *self.body.flags_mut() = flags;
        self
    }

    /// Spatial state of the entity.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable spatial state of the entity.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Behaviour attached to the entity.
    #[must_use]
    pub const fn behaviour(&self) -> &Behaviour {
        &self.behaviour
    }

    /// Mutable behaviour attached to the entity.
    pub fn behaviour_mut(&mut self) -> &mut Behaviour {
        &mut self.behaviour
    }

    /// Player controller, when this entity is the player.
    #[must_use]
    pub const fn as_player(&self) -> Option<&PlayerController> {
        match &self.behaviour {
            Behaviour::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Enemy controller, when this entity is an enemy.
    #[must_use]
    pub const fn as_enemy(&self) -> Option<&EnemyController> {
        match &self.behaviour {
            Behaviour::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    /// Current state of the behaviour.
    #[must_use]
    pub const fn state(&self) -> BehaviourState {
        match &self.behaviour {
            Behaviour::Prop => BehaviourState::Prop,
            Behaviour::Player(player) => BehaviourState::Player(player.state()),
            Behaviour::Enemy(enemy) => BehaviourState::Enemy(enemy.state()),
        }
    }

    /// Noise the entity currently emits. Only players make noise.
    #[must_use]
    pub const fn noise_level(&self) -> f32 {
        match &self.behaviour {
            Behaviour::Player(player) => player.noise_level(),
            _ => 0.0,
        }
    }

    /// Collision view of this entity.
    #[must_use]
    pub const fn collider(&self, node: NodeId) -> Collider {
        Collider {
            node,
            flags: *self.body.flags(),
            bounding_box: self.body.bounding_box(),
        }
    }

    /// Runs one update: snapshot first, then the behaviour.
    ///
    /// Returns the node the player started interacting with, if any. A
    /// stimulus that does not match the behaviour leaves the behaviour idle
    /// for this tick.
    pub fn update(
        &mut self,
        node: NodeId,
        stimulus: &Stimulus,
        elapsed: f32,
        fx: &mut Effects<'_>,
    ) -> Option<NodeId> {
        self.body.begin_update();
        match (&mut self.behaviour, stimulus) {
            (Behaviour::Player(player), Stimulus::Player(senses)) => {
                player.update(node, &mut self.body, senses, elapsed, fx)
            }
            (Behaviour::Enemy(enemy), Stimulus::Enemy(senses)) => {
                enemy.update(node, &mut self.body, senses, elapsed);
                None
            }
            _ => None,
        }
    }

    /// Responds to an overlap with `other`.
    ///
    /// Players apply their state-dependent policy; everything else reverts
    /// this tick's displacement.
    pub fn process_collision(&mut self, other: &Collider) {
        match &mut self.behaviour {
            Behaviour::Player(player) => player.process_collision(&mut self.body, other),
            Behaviour::Prop | Behaviour::Enemy(_) => self.body.revert_displacement(),
        }
    }

    /// Called when `actor` interacts with this entity.
    pub fn on_interact(&mut self, node: NodeId, actor: NodeId) {
        debug!("{actor} interacted with {node}");
        self.body.record_interaction(actor);
    }
}
