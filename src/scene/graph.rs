//! Scene graph: the renderer-owned node set paint mutations are applied to.
//!
//! [`PaintScene`] is the contract the placement core needs from a renderer.
//! [`SceneGraph`] is the in-memory implementation used by the demo binary and
//! the tests; each tick `draw_list()` produces everything the renderer draws.

use std::collections::HashMap;

use glam::{Mat4, Vec3};

use crate::brush::BrushGeometry;

use super::node::{Material, NodeRole, PaintNode, SceneNode, SceneNodeId};

/// Operations the placement core performs on a scene.
pub trait PaintScene {
    /// Take ownership of `node` and return its handle.
    fn insert(&mut self, node: PaintNode) -> SceneNodeId;

    /// Remove every node carrying `tag`. Returns how many were removed;
    /// removing an absent tag is a no-op.
    fn remove_tagged(&mut self, tag: &str) -> usize;
}

/// One node as the renderer should draw it this tick.
#[derive(Clone, Debug)]
pub struct DrawItem {
    pub id: SceneNodeId,
    pub geometry: BrushGeometry,
    pub material: Material,
    pub world_transform: Mat4,
    /// Axis-aligned world-space half extents around the node position
    pub bounds: Vec3,
}

/// Flat, unordered collection of paint nodes with a scene clock.
#[derive(Default)]
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    next_id: u64,
    clock: f32,
}

impl SceneGraph {
    /// Create an empty scene at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh node ID.
    fn alloc_id(&mut self) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Advance the scene clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.clock += dt;
    }

    /// Current scene clock in seconds.
    pub fn time(&self) -> f32 {
        self.clock
    }

    /// Get an immutable reference to a node.
    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Iterate over all nodes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes.values()
    }

    /// Total number of nodes in the scene.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes carrying `tag`.
    pub fn tagged_count(&self, tag: &str) -> usize {
        self.nodes.values().filter(|n| n.node.has_tag(tag)).count()
    }

    /// Number of nodes with the given role.
    pub fn count_role(&self, role: NodeRole) -> usize {
        self.nodes.values().filter(|n| n.node.role == role).count()
    }

    /// Everything to draw at the current clock, ordered by insertion.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items: Vec<DrawItem> = self
            .nodes
            .values()
            .map(|n| DrawItem {
                id: n.id,
                geometry: n.node.geometry,
                material: n.node.material,
                world_transform: n.world_transform(self.clock),
                bounds: n.node.geometry.rotated_half_extents(n.node.transform.rotation),
            })
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }
}

impl PaintScene for SceneGraph {
    fn insert(&mut self, node: PaintNode) -> SceneNodeId {
        let id = self.alloc_id();
        log::trace!("Inserting {:?} node {:?} at {:?}", node.role, id, node.position());
        self.nodes.insert(
            id,
            SceneNode {
                id,
                node,
                inserted_at: self.clock,
            },
        );
        id
    }

    fn remove_tagged(&mut self, tag: &str) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|_, n| !n.node.has_tag(tag));
        before - self.nodes.len()
    }
}
