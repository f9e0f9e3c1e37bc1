//! Scene mutation produced by one tracking frame

use crate::scene::{PaintScene, PaintNode, SceneNodeId};

/// Remove-then-insert batch for one frame.
///
/// The cleanup always runs, whatever role the new node has, so a cursor never
/// outlives the frame that created it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMutation {
    /// Tag whose nodes are removed before inserting
    pub cleanup_tag: &'static str,
    /// Node inserted after cleanup
    pub insert: PaintNode,
}

impl SceneMutation {
    pub fn new(cleanup_tag: &'static str, insert: PaintNode) -> Self {
        Self { cleanup_tag, insert }
    }

    /// Apply to a scene: cleanup first, then insert. Returns the new node's ID.
    pub fn apply<S: PaintScene + ?Sized>(self, scene: &mut S) -> SceneNodeId {
        let removed = scene.remove_tagged(self.cleanup_tag);
        if removed > 1 {
            log::warn!("Removed {} nodes tagged '{}', expected at most one", removed, self.cleanup_tag);
        }
        scene.insert(self.insert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{BrushGeometry, Rgba};
    use crate::scene::{CURSOR_TAG, NodeRole, SceneGraph};
    use glam::{Quat, Vec3};

    fn cursor() -> PaintNode {
        PaintNode::cursor(BrushGeometry::Sphere { radius: 0.1 }, Quat::IDENTITY, Vec3::ZERO, Rgba::LIGHT_GRAY)
    }

    #[test]
    fn test_apply_replaces_cursor() {
        let mut scene = SceneGraph::new();
        let first = SceneMutation::new(CURSOR_TAG, cursor()).apply(&mut scene);
        let second = SceneMutation::new(CURSOR_TAG, cursor()).apply(&mut scene);

        assert_eq!(scene.node_count(), 1);
        assert!(scene.get(first).is_none());
        assert!(scene.get(second).is_some());
    }

    #[test]
    fn test_apply_painted_still_clears_cursor() {
        let mut scene = SceneGraph::new();
        SceneMutation::new(CURSOR_TAG, cursor()).apply(&mut scene);

        let painted = PaintNode::painted(
            BrushGeometry::Sphere { radius: 0.1 },
            Quat::IDENTITY,
            Vec3::ZERO,
            Rgba::RED,
            None,
        );
        SceneMutation::new(CURSOR_TAG, painted).apply(&mut scene);

        assert_eq!(scene.tagged_count(CURSOR_TAG), 0);
        assert_eq!(scene.count_role(NodeRole::Painted), 1);
    }
}
