//! Error types surfaced by the simulation core.

use thiserror::Error;

use crate::scene::NodeId;

/// Failures raised by scene graph lookups and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The handle does not refer to a node in this graph.
    #[error("unknown scene node {0}")]
    UnknownNode(NodeId),
    /// The node exists but carries no world entity.
    #[error("scene node {0} is not a world entity")]
    NotAnEntity(NodeId),
    /// Re-parenting would make a node its own ancestor.
    #[error("cannot attach {node} beneath {parent}: {parent} is {node} or one of its descendants")]
    WouldCreateCycle {
        /// Node being moved.
        node: NodeId,
        /// Requested new parent.
        parent: NodeId,
    },
}

/// Failures raised by animation frame lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// No frame set is registered under the requested name.
    #[error("unknown animation `{0}`")]
    UnknownAnimation(String),
    /// The frame index lies outside the frame set.
    #[error("frame index {index} out of range for animation `{animation}` with {len} frames")]
    FrameOutOfRange {
        /// Animation being sampled.
        animation: String,
        /// Requested frame index.
        index: usize,
        /// Number of frames in the set.
        len: usize,
    },
    /// A sprite was built without any animations.
    #[error("animated sprite requires at least one animation")]
    EmptyLibrary,
}

/// Failures raised while loading a [`crate::config::SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid configuration JSON.
    #[error("invalid simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("failed to read simulation config: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised while building a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A node could not be added to the scene.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// A sprite could not be built.
    #[error(transparent)]
    Animation(#[from] AnimationError),
}
