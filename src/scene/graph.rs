//! Node storage and tree mutation.

use glam::Vec2;

use super::{Node, NodeId, NodeKind};
use crate::entity::{Collider, WorldEntity};
use crate::error::SceneError;

/// Arena owning every node of a scene.
///
/// Nodes are never removed, so a [`NodeId`] handed out by one graph stays
/// valid for that graph's lifetime.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding a single root group.
    #[must_use]
    pub fn with_root(name: impl Into<String>, position: Vec2) -> (Self, NodeId) {
        let graph = Self {
            nodes: vec![Node::new(name.into(), NodeKind::Group { position })],
        };
        (graph, NodeId::from_raw(0))
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a plain group under `parent`, or as a root when `parent` is
    /// `None`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] when `parent` is not in the graph.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        position: Vec2,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        self.insert(name.into(), NodeKind::Group { position }, parent)
    }

    /// Adds a world entity under `parent`, or as a root when `parent` is
    /// `None`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] when `parent` is not in the graph.
    pub fn add_entity(
        &mut self,
        name: impl Into<String>,
        entity: WorldEntity,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        self.insert(name.into(), NodeKind::Entity(Box::new(entity)), parent)
    }

    fn insert(
        &mut self,
        name: String,
        kind: NodeKind,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        if let Some(parent) = parent {
            self.node(parent)?;
        }
        let id = NodeId::from_raw(self.nodes.len());
        self.nodes.push(Node::new(name, kind));
        self.set_parent(id, parent)?;
        Ok(id)
    }

    /// Looks up a node.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] for a foreign handle.
    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id.index()).ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(SceneError::UnknownNode(id))
    }

    /// Looks up the world entity stored at `id`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] for a foreign handle and
    /// [`SceneError::NotAnEntity`] for a plain group.
    pub fn entity(&self, id: NodeId) -> Result<&WorldEntity, SceneError> {
        self.node(id)?.entity().ok_or(SceneError::NotAnEntity(id))
    }

    /// Mutable access to the world entity stored at `id`.
    ///
    /// # Errors
    /// Same as [`SceneGraph::entity`].
    pub fn entity_mut(&mut self, id: NodeId) -> Result<&mut WorldEntity, SceneError> {
        self.node_mut(id)?
            .entity_mut()
            .ok_or(SceneError::NotAnEntity(id))
    }

    /// Parent of `id`, or `None` for roots and unknown handles.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(Node::parent)
    }

    /// Children of `id` in insertion order. Empty for unknown handles.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or_default()
    }

    /// Topmost ancestor of `id`, found by walking parent links.
    #[must_use]
    pub fn root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Returns `true` when `ancestor` is `node` or lies on its parent chain.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Moves `node` beneath `parent`, detaching it from its previous parent
    /// first. `None` turns the node into a root.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] for foreign handles and
    /// [`SceneError::WouldCreateCycle`] when `parent` is `node` itself or one
    /// of its descendants.
    pub fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> Result<(), SceneError> {
        let previous = self.node(node)?.parent();
        if let Some(parent) = parent {
            self.node(parent)?;
            if self.is_ancestor_or_self(node, parent) {
                return Err(SceneError::WouldCreateCycle { node, parent });
            }
        }

        if let Some(previous) = previous {
            self.node_mut(previous)?.detach_child(node);
        }
        if let Some(parent) = parent {
            self.node_mut(parent)?.attach_child(node);
        }
        self.node_mut(node)?.set_parent(parent);
        Ok(())
    }

    /// World-space position of `id`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] for a foreign handle.
    pub fn position(&self, id: NodeId) -> Result<Vec2, SceneError> {
        self.node(id).map(Node::position)
    }

    /// Moves `id`. Entities re-centre their bounding box.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] for a foreign handle.
    pub fn set_position(&mut self, id: NodeId, position: Vec2) -> Result<(), SceneError> {
        self.node_mut(id)?.set_position(position);
        Ok(())
    }

    /// Collision view of the entity at `id`.
    ///
    /// # Errors
    /// Same as [`SceneGraph::entity`].
    pub fn collider(&self, id: NodeId) -> Result<Collider, SceneError> {
        self.entity(id).map(|entity| entity.collider(id))
    }
}
