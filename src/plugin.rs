//! Bevy plugin stepping the simulation from the `Update` schedule.
//!
//! The simulation stays plain Rust; the plugin only stores it in a resource
//! and ticks it once per frame with the current [`ActionInput`]. Side effects
//! land in the [`EffectLog`] resource for the frontend to drain.

use bevy::prelude::*;
use log::trace;

use crate::input::InputSnapshot;
use crate::presentation::EffectLog;
use crate::simulation::Simulation;

/// Resource owning the simulation.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct SimulationResource(pub Simulation);

/// Resource carrying the input applied on the next tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct ActionInput(pub InputSnapshot);

/// Advances the simulation by the frame delta.
///
/// Without a [`Time`] resource the tick runs with a zero delta, so states
/// still transition but nothing moves.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn simulation_tick_system(
    time: Option<Res<Time>>,
    input: Res<ActionInput>,
    mut simulation: ResMut<SimulationResource>,
    mut log: ResMut<EffectLog>,
) {
    let elapsed = time.map_or(0.0, |time| time.delta_secs());
    let report = simulation.tick(elapsed, &input.0, &mut log.effects());
    trace!(
        "tick {} advanced {} entities by {:.4}s with {} contacts",
        report.tick,
        report.updated,
        report.elapsed,
        report.contacts.len()
    );
}

/// Bevy plugin installing the simulation resources and tick system.
///
/// A [`SimulationResource`] inserted before the plugin is added is kept, so
/// callers can build their world first. Otherwise an empty simulation is
/// created.
///
/// ```ignore
/// use bevy::prelude::*;
/// use skulk::plugin::{SimulationPlugin, SimulationResource};
///
/// let (sim, _animator) = skulk::spawn_world::spawn_world(Default::default())?;
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .insert_resource(SimulationResource(sim))
///     .add_plugins(SimulationPlugin)
///     .run();
/// ```
#[derive(Debug, Default)]
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationResource>();
        app.init_resource::<ActionInput>();
        app.init_resource::<EffectLog>();
        app.add_systems(Update, simulation_tick_system);
    }
}
