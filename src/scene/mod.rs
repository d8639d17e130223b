//! Scene graph: an arena of named nodes arranged in a single-parent tree.
//!
//! Nodes refer to one another through [`NodeId`] handles. A node is either a
//! plain group that only positions and owns its children, or a
//! [`WorldEntity`]. Queries walk the tree depth-first in pre-order, visiting a
//! node before its children and children in insertion order.

mod graph;
mod query;

pub use graph::SceneGraph;
pub use query::DepthFirst;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::WorldEntity;

/// Handle to a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Arena index of the node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Payload carried by a node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Plain grouping node.
    Group {
        /// Position of the group in world space.
        position: Vec2,
    },
    /// A node occupying space in the world.
    Entity(Box<WorldEntity>),
}

/// One node of the graph.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }

    /// Name given at creation. Names need not be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent handle, or `None` for a root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Payload of the node.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// World entity carried by the node.
    #[must_use]
    pub fn entity(&self) -> Option<&WorldEntity> {
        match &self.kind {
            NodeKind::Entity(entity) => Some(entity.as_ref()),
            NodeKind::Group { .. } => None,
        }
    }

    pub(crate) fn entity_mut(&mut self) -> Option<&mut WorldEntity> {
        match &mut self.kind {
            NodeKind::Entity(entity) => Some(entity.as_mut()),
            NodeKind::Group { .. } => None,
        }
    }

    /// World-space position. Entities report their footprint origin.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match &self.kind {
            NodeKind::Group { position } => *position,
            NodeKind::Entity(entity) => entity.body().position(),
        }
    }

    pub(crate) fn set_position(&mut self, to: Vec2) {
        match &mut self.kind {
            NodeKind::Group { position } => *position = to,
            NodeKind::Entity(entity) => entity.body_mut().set_position(to),
        }
    }

    /// Whether the node takes part in the update pass.
    #[must_use]
    pub const fn is_updatable(&self) -> bool {
        matches!(self.kind, NodeKind::Entity(_))
    }

    /// Whether the node takes part in the collision pass.
    #[must_use]
    pub const fn is_collidable(&self) -> bool {
        matches!(self.kind, NodeKind::Entity(_))
    }

    /// Whether the node has a visual representation.
    #[must_use]
    pub const fn is_renderable(&self) -> bool {
        matches!(self.kind, NodeKind::Entity(_))
    }

    pub(crate) fn attach_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn detach_child(&mut self, child: NodeId) {
        self.children.retain(|&id| id != child);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}

#[cfg(test)]
mod tests;
