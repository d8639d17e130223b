//! Unit tests for scene graph structure and queries.
use super::*;
use crate::entity::EntityFlags;
use crate::error::SceneError;
use rstest::{fixture, rstest};

fn prop_at(x: f32, y: f32) -> WorldEntity {
    WorldEntity::prop(Vec2::new(x, y), Vec2::splat(10.0))
}

struct Tree {
    graph: SceneGraph,
    root: NodeId,
    left: NodeId,
    left_leaf: NodeId,
    right: NodeId,
}

/// root
/// ├── left (group)
/// │   └── leaf (entity "crate")
/// └── right (entity "crate")
#[fixture]
fn tree() -> Tree {
    let mut graph = SceneGraph::new();
    let root = graph.add_group("root", Vec2::ZERO, None).expect("root");
    let left = graph.add_group("left", Vec2::ZERO, Some(root)).expect("left");
    let left_leaf = graph
        .add_entity("crate", prop_at(5.0, 0.0), Some(left))
        .expect("leaf");
    let right = graph
        .add_entity("crate", prop_at(40.0, 0.0), Some(root))
        .expect("right");
    Tree {
        graph,
        root,
        left,
        left_leaf,
        right,
    }
}

#[rstest]
fn depth_first_visits_parents_before_children(tree: Tree) {
    let order: Vec<NodeId> = tree.graph.depth_first(tree.root).map(|(id, _)| id).collect();
    assert_eq!(order, vec![tree.root, tree.left, tree.left_leaf, tree.right]);
}

#[rstest]
fn find_by_name_returns_first_preorder_match(tree: Tree) {
    assert_eq!(tree.graph.find_by_name(tree.root, "crate"), Some(tree.left_leaf));
    assert_eq!(tree.graph.find_by_name(tree.root, "root"), Some(tree.root));
    assert_eq!(tree.graph.find_by_name(tree.right, "left"), None);
}

#[test]
fn find_by_name_on_childless_node() {
    let mut graph = SceneGraph::new();
    let lone = graph.add_group("lone", Vec2::ZERO, None).expect("node");
    assert_eq!(graph.find_by_name(lone, "other"), None);
    assert_eq!(graph.find_by_name(lone, "lone"), Some(lone));
}

#[rstest]
fn capability_queries_skip_groups(tree: Tree) {
    let expected = vec![tree.left_leaf, tree.right];
    assert_eq!(tree.graph.updatables(tree.root), expected);
    assert_eq!(tree.graph.collidables(tree.root), expected);
    assert_eq!(tree.graph.renderables(tree.root), expected);
}

#[rstest]
fn reparenting_moves_between_child_lists(mut tree: Tree) {
    tree.graph
        .set_parent(tree.right, Some(tree.left))
        .expect("reparent");
    assert_eq!(tree.graph.children(tree.root), &[tree.left]);
    assert_eq!(tree.graph.children(tree.left), &[tree.left_leaf, tree.right]);
    assert_eq!(tree.graph.parent(tree.right), Some(tree.left));

    tree.graph.set_parent(tree.right, None).expect("detach");
    assert_eq!(tree.graph.children(tree.left), &[tree.left_leaf]);
    assert_eq!(tree.graph.root(tree.right), tree.right);
}

#[rstest]
fn cycles_are_rejected(mut tree: Tree) {
    let err = tree
        .graph
        .set_parent(tree.root, Some(tree.left_leaf))
        .expect_err("cycle");
    assert_eq!(
        err,
        SceneError::WouldCreateCycle {
            node: tree.root,
            parent: tree.left_leaf,
        }
    );
    assert!(tree.graph.set_parent(tree.left, Some(tree.left)).is_err());
    assert_eq!(tree.graph.parent(tree.left), Some(tree.root));
}

#[rstest]
fn root_walks_parent_links(tree: Tree) {
    assert_eq!(tree.graph.root(tree.left_leaf), tree.root);
    assert_eq!(tree.graph.root(tree.root), tree.root);
}

#[rstest]
fn unknown_handles_are_reported(mut tree: Tree) {
    let ghost = NodeId::from_raw(99);
    assert!(matches!(tree.graph.node(ghost), Err(SceneError::UnknownNode(id)) if id == ghost));
    assert!(matches!(
        tree.graph.entity(tree.left),
        Err(SceneError::NotAnEntity(_))
    ));
    assert!(tree.graph.add_group("x", Vec2::ZERO, Some(ghost)).is_err());
    assert_eq!(tree.graph.len(), 4);
    assert!(tree.graph.depth_first(ghost).next().is_none());
}

#[rstest]
fn find_nearby_excludes_only_the_source(mut tree: Tree) {
    let twin = tree
        .graph
        .add_entity("twin", prop_at(5.0, 0.0), Some(tree.root))
        .expect("twin");
    let nearby = tree
        .graph
        .find_nearby(tree.root, tree.left_leaf, 10.0)
        .expect("known source");
    assert_eq!(nearby, vec![twin]);

    let wide = tree
        .graph
        .find_nearby(tree.root, tree.left_leaf, 35.0)
        .expect("known source");
    assert_eq!(wide, vec![tree.right, twin]);
}

#[rstest]
fn nearest_interactive_ignores_scenery(mut tree: Tree) {
    let lever = tree
        .graph
        .add_entity(
            "lever",
            prop_at(30.0, 0.0).with_flags(EntityFlags {
                interactive: true,
                ..Default::default()
            }),
            Some(tree.root),
        )
        .expect("lever");
    assert_eq!(
        tree.graph
            .nearest_interactive(tree.root, tree.left_leaf, 50.0)
            .expect("known source"),
        Some(lever)
    );
    assert_eq!(
        tree.graph
            .nearest_interactive(tree.root, tree.left_leaf, 20.0)
            .expect("known source"),
        None
    );
}

#[rstest]
fn moving_an_entity_recentres_its_box(mut tree: Tree) {
    tree.graph
        .set_position(tree.right, Vec2::new(100.0, 50.0))
        .expect("move");
    let collider = tree.graph.collider(tree.right).expect("entity");
    assert_eq!(collider.bounding_box.centre(), Vec2::new(105.0, 55.0));
    assert_eq!(collider.node, tree.right);
}
