//! Compile-time guards on which simulation types may cross threads.
use skulk::effects::Effects;
use skulk::presentation::{EffectLog, EntitySnapshot, PresentationEffect};
use skulk::{Aabb, NodeId, SceneGraph, Simulation, SimulationConfig, WorldEntity};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(Simulation: Send, Sync, Clone);
assert_impl_all!(SceneGraph: Send, Sync, Clone);
assert_impl_all!(WorldEntity: Send, Sync, Clone);
assert_impl_all!(EffectLog: Send, Sync);
assert_impl_all!(SimulationConfig: Send, Sync, Clone);
assert_impl_all!(EntitySnapshot: Send, Sync);
assert_impl_all!(PresentationEffect: Send, Sync);
assert_impl_all!(NodeId: Copy, Send, Sync);
assert_impl_all!(Aabb: Copy, Send, Sync);

assert_not_impl_any!(Effects<'static>: Send, Sync);
assert_not_impl_any!(WorldEntity: Copy);
