//! The per-frame simulation step.
//!
//! A tick runs in two passes over the scene rooted at the simulation's root
//! node:
//!
//! 1. **Update.** Every updatable entity perceives the scene as it stood at
//!    the start of the tick, then runs its behaviour. Perception for all
//!    entities is gathered before any of them moves, so no update observes
//!    another update from the same tick.
//! 2. **Collide.** Every pair of collidables `(i, j)` with `i < j` is tested
//!    for overlap. On overlap the first entity responds to the second, then
//!    the second responds to the first as it stands after that response.
//!
//! Nothing is added or removed during a tick.

use std::time::Duration;

use glam::Vec2;
use log::{trace, warn};
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::constants::ROOT_NAME;
use crate::effects::Effects;
use crate::enemy::{EnemyController, EnemySenses, TargetReading};
use crate::entity::{Behaviour, Stimulus, WorldEntity};
use crate::error::SceneError;
use crate::input::InputSnapshot;
use crate::player::{PlayerController, PlayerSenses};
use crate::presentation::{EntitySnapshot, RenderItem};
use crate::scene::{NodeId, SceneGraph};

/// An overlapping pair found by the collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Earlier node in traversal order.
    pub first: NodeId,
    /// Later node in traversal order.
    pub second: NodeId,
}

/// Summary of one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// One-based tick number.
    pub tick: u64,
    /// Seconds simulated after clamping.
    pub elapsed: f32,
    /// Entities updated successfully.
    pub updated: usize,
    /// Overlaps resolved by the collision pass.
    pub contacts: Vec<Contact>,
}

/// A scene plus the rules that advance it.
#[derive(Debug, Clone)]
pub struct Simulation {
    graph: SceneGraph,
    root: NodeId,
    config: SimulationConfig,
    tick_count: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulation {
    /// Creates a simulation whose scene holds only the root group.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let (graph, root) = SceneGraph::with_root(ROOT_NAME, Vec2::ZERO);
        Self {
            graph,
            root,
            config,
            tick_count: 0,
        }
    }

    /// The scene.
    #[must_use]
    pub const fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Mutable access to the scene, for world setup.
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Root node every pass starts from.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of ticks run so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Adds `entity` directly under the root.
    ///
    /// # Errors
    /// Propagates [`SceneError`] from the graph.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        entity: WorldEntity,
    ) -> Result<NodeId, SceneError> {
        self.graph.add_entity(name, entity, Some(self.root))
    }

    /// Adds `entity` under `parent`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] when `parent` is not in the scene.
    pub fn spawn_under(
        &mut self,
        name: impl Into<String>,
        entity: WorldEntity,
        parent: NodeId,
    ) -> Result<NodeId, SceneError> {
        self.graph.add_entity(name, entity, Some(parent))
    }

    /// Adds a player under the root, named and tuned from the config.
    ///
    /// Enemies built with [`Simulation::spawn_enemy`] track this node.
    ///
    /// # Errors
    /// Propagates [`SceneError`] from the graph.
    pub fn spawn_player(&mut self, position: Vec2, size: Vec2) -> Result<NodeId, SceneError> {
        let controller = PlayerController::new(self.config.player);
        let name = self.config.player_name.clone();
        self.spawn(name, WorldEntity::player(position, size, controller))
    }

    /// Adds an enemy under the root, tuned from the config and tracking the
    /// configured player name.
    ///
    /// # Errors
    /// Propagates [`SceneError`] from the graph.
    pub fn spawn_enemy(
        &mut self,
        name: impl Into<String>,
        position: Vec2,
        size: Vec2,
    ) -> Result<NodeId, SceneError> {
        let controller = EnemyController::new(self.config.enemy, self.config.player_name.as_str());
        self.spawn(name, WorldEntity::enemy(position, size, controller))
    }

    /// First node named `name`, searching from the root.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.graph.find_by_name(self.root, name)
    }

    /// World entity at `id`.
    ///
    /// # Errors
    /// Propagates [`SceneError`] from the graph.
    pub fn entity(&self, id: NodeId) -> Result<&WorldEntity, SceneError> {
        self.graph.entity(id)
    }

    /// Runs one tick of `frame` wall-clock time.
    pub fn tick_duration(
        &mut self,
        frame: Duration,
        input: &InputSnapshot,
        fx: &mut Effects<'_>,
    ) -> TickReport {
        self.tick(frame.as_secs_f32(), input, fx)
    }

    /// Runs one tick: the update pass, then the collision pass.
    ///
    /// `elapsed` is clamped by [`SimulationConfig::clamp_elapsed`] first.
    pub fn tick(&mut self, elapsed: f32, input: &InputSnapshot, fx: &mut Effects<'_>) -> TickReport {
        let elapsed = self.config.clamp_elapsed(elapsed);
        self.tick_count += 1;
        let updated = self.update_all(elapsed, input, fx);
        let contacts = self.resolve_collisions();
        TickReport {
            tick: self.tick_count,
            elapsed,
            updated,
            contacts,
        }
    }

    /// Runs the update pass and returns how many entities were updated.
    ///
    /// An entity that fails to update is logged and skipped.
    pub fn update_all(&mut self, elapsed: f32, input: &InputSnapshot, fx: &mut Effects<'_>) -> usize {
        let perceived: Vec<_> = self
            .graph
            .updatables(self.root)
            .into_iter()
            .map(|id| (id, self.perceive(id, input)))
            .collect();

        let mut updated = 0;
        for (id, stimulus) in perceived {
            match stimulus.and_then(|stimulus| self.update_one(id, &stimulus, elapsed, fx)) {
                Ok(()) => updated += 1,
                Err(err) => warn!("skipping update of {id}: {err}"),
            }
        }
        updated
    }

    fn update_one(
        &mut self,
        id: NodeId,
        stimulus: &Stimulus,
        elapsed: f32,
        fx: &mut Effects<'_>,
    ) -> Result<(), SceneError> {
        let interacted = self.graph.entity_mut(id)?.update(id, stimulus, elapsed, fx);
        if let Some(target) = interacted {
            self.graph.entity_mut(target)?.on_interact(target, id);
        }
        Ok(())
    }

    fn perceive(&self, id: NodeId, input: &InputSnapshot) -> Result<Stimulus, SceneError> {
        let stimulus = match self.graph.entity(id)?.behaviour() {
            Behaviour::Prop => Stimulus::None,
            Behaviour::Player(player) => {
                let scene_root = self.graph.root(id);
                let radius = player.tuning().interaction_radius;
                Stimulus::Player(PlayerSenses {
                    input: *input,
                    interaction_target: self.graph.nearest_interactive(scene_root, id, radius)?,
                    object_under_box: player
                        .object_under()
                        .and_then(|under| self.graph.collider(under).ok())
                        .map(|collider| collider.bounding_box),
                })
            }
            Behaviour::Enemy(enemy) => Stimulus::Enemy(EnemySenses {
                target: self.read_target(id, enemy),
            }),
        };
        Ok(stimulus)
    }

    /// Reads the enemy's target, resolving it by name when not yet cached.
    fn read_target(&self, id: NodeId, enemy: &EnemyController) -> Option<TargetReading> {
        let target = enemy.target().or_else(|| {
            self.graph
                .find_by_name(self.graph.root(id), enemy.target_name())
        })?;
        let entity = self.graph.entity(target).ok()?;
        Some(TargetReading {
            id: target,
            position: entity.body().position(),
            noise: entity.noise_level(),
        })
    }

    /// Runs the pairwise collision pass and returns every overlap found.
    pub fn resolve_collisions(&mut self) -> Vec<Contact> {
        let collidables = self.graph.collidables(self.root);
        let mut contacts = Vec::new();
        for (i, &first) in collidables.iter().enumerate() {
            for &second in collidables.iter().skip(i + 1) {
                match self.collide(first, second) {
                    Ok(true) => contacts.push(Contact { first, second }),
                    Ok(false) => {}
                    Err(err) => warn!("skipping collision of {first} and {second}: {err}"),
                }
            }
        }
        contacts
    }

    fn collide(&mut self, first: NodeId, second: NodeId) -> Result<bool, SceneError> {
        let a = self.graph.collider(first)?;
        let b = self.graph.collider(second)?;
        if !a.bounding_box.overlaps(&b.bounding_box) {
            return Ok(false);
        }
        trace!("{first} overlaps {second}");
        self.graph.entity_mut(first)?.process_collision(&b);
        let a = self.graph.collider(first)?;
        self.graph.entity_mut(second)?.process_collision(&a);
        Ok(true)
    }

    /// Render views of every renderable entity in traversal order.
    #[must_use]
    pub fn renderables(&self, viewport_height: f32) -> Vec<RenderItem> {
        self.graph
            .renderables(self.root)
            .into_iter()
            .filter_map(|id| {
                let node = self.graph.node(id).ok()?;
                let entity = node.entity()?;
                Some(RenderItem::new(id, node.name(), entity, viewport_height))
            })
            .collect()
    }

    /// Serialisable state of every entity in traversal order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<EntitySnapshot> {
        self.graph
            .depth_first(self.root)
            .filter_map(|(id, node)| {
                node.entity()
                    .map(|entity| EntitySnapshot::new(id, node.name(), entity))
            })
            .collect()
    }
}
