//! Scene fixtures built around one player.

use glam::Vec2;
use skulk::effects::{Effects, Silent};
use skulk::enemy::{EnemyController, EnemyState};
use skulk::entity::{EntityFlags, WorldEntity};
use skulk::player::{PlayerController, PlayerState};
use skulk::scene::NodeId;
use skulk::simulation::{Simulation, TickReport};
use skulk::{InputSnapshot, SimulationConfig};

/// Frame delta used by [`TestWorld::tick`].
pub const STEP: f32 = 0.1;

/// Footprint given to every entity built here.
pub const SIZE: Vec2 = Vec2::new(10.0, 10.0);

/// Builds an input snapshot by toggling fields on the default.
///
/// # Examples
/// ```
/// use test_utils::press;
/// let input = press(|i| i.right = true);
/// assert!(input.movement_requested());
/// ```
pub fn press(keys: impl FnOnce(&mut InputSnapshot)) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    keys(&mut input);
    input
}

/// A simulation holding a player named after its config.
#[derive(Debug, Clone)]
pub struct TestWorld {
    /// The simulation under test.
    pub sim: Simulation,
    /// Handle of the player.
    pub player: NodeId,
}

impl TestWorld {
    /// Creates a world with the player at `position`.
    ///
    /// # Panics
    /// Panics if the player cannot be spawned.
    pub fn with_player_at(position: Vec2) -> Self {
        Self::with_config(SimulationConfig::default(), position)
    }

    /// Creates a world tuned by `config` with the player at `position`.
    ///
    /// # Panics
    /// Panics if the player cannot be spawned.
    pub fn with_config(config: SimulationConfig, position: Vec2) -> Self {
        let mut sim = Simulation::new(config);
        let player = sim.spawn_player(position, SIZE).expect("spawn player");
        Self { sim, player }
    }

    /// Adds `entity` under the root.
    ///
    /// # Panics
    /// Panics if the entity cannot be spawned.
    pub fn spawn(&mut self, name: &str, entity: WorldEntity) -> NodeId {
        self.sim.spawn(name, entity).expect("spawn entity")
    }

    /// Adds an enemy at `position` tracking the player.
    ///
    /// # Panics
    /// Panics if the enemy cannot be spawned.
    pub fn spawn_enemy(&mut self, position: Vec2) -> NodeId {
        self.sim
            .spawn_enemy("Enemy", position, SIZE)
            .expect("spawn enemy")
    }

    /// Adds scenery at `position` with `flags`.
    pub fn spawn_prop(&mut self, name: &str, position: Vec2, flags: EntityFlags) -> NodeId {
        self.spawn(name, WorldEntity::prop(position, SIZE).with_flags(flags))
    }

    /// Ticks once by [`STEP`] with silent sinks.
    pub fn tick(&mut self, input: InputSnapshot) -> TickReport {
        self.tick_for(STEP, input)
    }

    /// Ticks once by `elapsed` with silent sinks.
    pub fn tick_for(&mut self, elapsed: f32, input: InputSnapshot) -> TickReport {
        let mut audio = Silent;
        let mut animation = Silent;
        let mut fx = Effects::new(&mut audio, &mut animation);
        self.sim.tick(elapsed, &input, &mut fx)
    }

    /// Position of `id`.
    ///
    /// # Panics
    /// Panics if `id` is not an entity.
    pub fn position(&self, id: NodeId) -> Vec2 {
        self.sim.entity(id).expect("entity").body().position()
    }

    /// Current player state.
    ///
    /// # Panics
    /// Panics if the player node lost its controller.
    pub fn player_state(&self) -> PlayerState {
        self.sim
            .entity(self.player)
            .ok()
            .and_then(WorldEntity::as_player)
            .map(PlayerController::state)
            .expect("player controller")
    }

    /// Noise the player emitted on the last tick.
    ///
    /// # Panics
    /// Panics if the player node is missing.
    pub fn player_noise(&self) -> f32 {
        self.sim.entity(self.player).expect("player").noise_level()
    }

    /// Current state of the enemy at `id`.
    ///
    /// # Panics
    /// Panics if `id` is not an enemy.
    pub fn enemy_state(&self, id: NodeId) -> EnemyState {
        self.sim
            .entity(id)
            .ok()
            .and_then(WorldEntity::as_enemy)
            .map(EnemyController::state)
            .expect("enemy controller")
    }
}
