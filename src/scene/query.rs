//! Depth-first queries over a [`SceneGraph`].

use super::{Node, NodeId, SceneGraph};
use crate::error::SceneError;

/// Pre-order depth-first walk starting at one node.
///
/// Yields the start node first, then each child subtree in insertion order.
/// Unknown handles yield nothing.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            let Ok(node) = self.graph.node(id) else {
                continue;
            };
            self.stack.extend(node.children().iter().rev());
            return Some((id, node));
        }
    }
}

impl SceneGraph {
    /// Walks the subtree rooted at `start` in depth-first pre-order.
    #[must_use]
    pub fn depth_first(&self, start: NodeId) -> DepthFirst<'_> {
        DepthFirst {
            graph: self,
            stack: vec![start],
        }
    }

    /// First node named `name` in the subtree rooted at `start`, checking
    /// `start` itself before its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use skulk::scene::SceneGraph;
    ///
    /// let mut graph = SceneGraph::new();
    /// let root = graph.add_group("root", Vec2::ZERO, None).unwrap();
    /// let crate_a = graph.add_group("crate", Vec2::ZERO, Some(root)).unwrap();
    /// graph.add_group("crate", Vec2::ONE, Some(root)).unwrap();
    /// assert_eq!(graph.find_by_name(root, "crate"), Some(crate_a));
    /// assert_eq!(graph.find_by_name(root, "missing"), None);
    /// ```
    #[must_use]
    pub fn find_by_name(&self, start: NodeId, name: &str) -> Option<NodeId> {
        self.depth_first(start)
            .find(|(_, node)| node.name() == name)
            .map(|(id, _)| id)
    }

    /// Every node in the subtree rooted at `start` satisfying `predicate`,
    /// in depth-first pre-order.
    #[must_use]
    pub fn collect_where<P>(&self, start: NodeId, mut predicate: P) -> Vec<NodeId>
    where
        P: FnMut(&Node) -> bool,
    {
        self.depth_first(start)
            .filter(|(_, node)| predicate(node))
            .map(|(id, _)| id)
            .collect()
    }

    /// Nodes taking part in the update pass.
    #[must_use]
    pub fn updatables(&self, start: NodeId) -> Vec<NodeId> {
        self.collect_where(start, Node::is_updatable)
    }

    /// Nodes taking part in the collision pass.
    #[must_use]
    pub fn collidables(&self, start: NodeId) -> Vec<NodeId> {
        self.collect_where(start, Node::is_collidable)
    }

    /// Nodes with a visual representation.
    #[must_use]
    pub fn renderables(&self, start: NodeId) -> Vec<NodeId> {
        self.collect_where(start, Node::is_renderable)
    }

    /// World entities other than `source` within `radius` of its position.
    ///
    /// Exclusion is by handle, so a different entity at the same position
    /// is included.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] when `source` is not in the graph.
    pub fn find_nearby(
        &self,
        start: NodeId,
        source: NodeId,
        radius: f32,
    ) -> Result<Vec<NodeId>, SceneError> {
        let origin = self.position(source)?;
        Ok(self
            .depth_first(start)
            .filter(|&(id, node)| {
                id != source
                    && node.entity().is_some()
                    && node.position().distance(origin) <= radius
            })
            .map(|(id, _)| id)
            .collect())
    }

    /// Closest interactive entity within `radius` of `source`.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownNode`] when `source` is not in the graph.
    pub fn nearest_interactive(
        &self,
        start: NodeId,
        source: NodeId,
        radius: f32,
    ) -> Result<Option<NodeId>, SceneError> {
        let origin = self.position(source)?;
        let nearest = self
            .find_nearby(start, source, radius)?
            .into_iter()
            .filter_map(|id| {
                let entity = self.entity(id).ok()?;
                entity.body().flags().interactive.then(|| {
                    (id, entity.body().position().distance(origin))
                })
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id);
        Ok(nearest)
    }
}
