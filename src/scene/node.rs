//! Scene node types
//!
//! Node IDs, transforms, materials and the paint node handed to the scene.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::SpinAction;
use crate::brush::{BrushGeometry, Rgba};

/// Reserved tag carried by the transient cursor node
pub const CURSOR_TAG: &str = "paint-cursor";

/// Opaque handle for a node owned by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SceneNodeId(pub u64);

/// Placement of a node in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    /// Identity transform (no translation, rotation, or scaling).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Translation plus rotation, unit scale.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// Whether a node is a transient preview or committed paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// Preview shown while the trigger is released; replaced every frame
    Cursor,
    /// Committed brush stamp; never removed by the controller
    Painted,
}

/// Surface appearance of a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: Rgba,
    pub specular: Option<Rgba>,
}

impl Material {
    /// Flat color, no specular highlight
    pub fn flat(diffuse: Rgba) -> Self {
        Self { diffuse, specular: None }
    }

    /// Color with a white specular highlight
    pub fn glossy(diffuse: Rgba) -> Self {
        Self {
            diffuse,
            specular: Some(Rgba::WHITE),
        }
    }
}

/// A brush stamp ready to be inserted into the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintNode {
    pub geometry: BrushGeometry,
    /// World position plus the shape's default orientation
    pub transform: LocalTransform,
    pub role: NodeRole,
    pub material: Material,
    pub tag: Option<String>,
    /// Continuous rotation; only ever set on painted nodes
    pub spin: Option<SpinAction>,
}

impl PaintNode {
    /// Transient preview node, tagged with [`CURSOR_TAG`].
    pub fn cursor(geometry: BrushGeometry, orientation: Quat, position: Vec3, color: Rgba) -> Self {
        Self {
            geometry,
            transform: LocalTransform::from_position_rotation(position, orientation),
            role: NodeRole::Cursor,
            material: Material::flat(color),
            tag: Some(CURSOR_TAG.to_string()),
            spin: None,
        }
    }

    /// Committed brush stamp.
    pub fn painted(
        geometry: BrushGeometry,
        orientation: Quat,
        position: Vec3,
        color: Rgba,
        spin: Option<SpinAction>,
    ) -> Self {
        Self {
            geometry,
            transform: LocalTransform::from_position_rotation(position, orientation),
            role: NodeRole::Painted,
            material: Material::glossy(color),
            tag: None,
            spin,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn is_cursor(&self) -> bool {
        self.role == NodeRole::Cursor
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}

/// A paint node owned by the scene.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    pub node: PaintNode,
    /// Scene clock at insertion; animations play from here
    pub inserted_at: f32,
}

impl SceneNode {
    /// World transform at scene time `now`, with any spin applied on top of
    /// the node's default orientation.
    pub fn world_transform(&self, now: f32) -> Mat4 {
        let mut transform = self.node.transform;
        if let Some(spin) = &self.node.spin {
            transform.rotation = spin.rotation_at(now - self.inserted_at) * transform.rotation;
        }
        transform.to_mat4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> BrushGeometry {
        BrushGeometry::Sphere { radius: 0.1 }
    }

    #[test]
    fn test_local_transform_identity() {
        let t = LocalTransform::identity();
        assert_eq!(t.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_local_transform_translation() {
        let pos = Vec3::new(10.0, 5.0, -3.0);
        let t = LocalTransform::from_position_rotation(pos, Quat::IDENTITY);
        let (_, _, translation) = t.to_mat4().to_scale_rotation_translation();
        assert!((translation - pos).length() < 1e-5);
    }

    #[test]
    fn test_cursor_node() {
        let node = PaintNode::cursor(sphere(), Quat::IDENTITY, Vec3::Z, Rgba::LIGHT_GRAY);
        assert!(node.is_cursor());
        assert!(node.has_tag(CURSOR_TAG));
        assert_eq!(node.material.diffuse, Rgba::LIGHT_GRAY);
        assert!(node.material.specular.is_none());
        assert!(node.spin.is_none());
    }

    #[test]
    fn test_painted_node() {
        let node = PaintNode::painted(sphere(), Quat::IDENTITY, Vec3::Z, Rgba::RED, None);
        assert_eq!(node.role, NodeRole::Painted);
        assert!(node.tag.is_none());
        assert!(!node.has_tag(CURSOR_TAG));
        assert_eq!(node.material.specular, Some(Rgba::WHITE));
    }

    #[test]
    fn test_world_transform_applies_spin_from_insertion() {
        let spin = SpinAction::about_vertical(4.0);
        let node = PaintNode::painted(sphere(), Quat::IDENTITY, Vec3::new(1.0, 0.0, 0.0), Rgba::RED, Some(spin));
        let scene_node = SceneNode {
            id: SceneNodeId(1),
            node,
            inserted_at: 2.0,
        };

        // No rotation at the moment of insertion
        let m = scene_node.world_transform(2.0);
        assert!((m.transform_vector3(Vec3::X) - Vec3::X).length() < 1e-5);

        // Quarter turn one second later
        let m = scene_node.world_transform(3.0);
        assert!((m.transform_vector3(Vec3::X) - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        // Position is unaffected
        assert!((m.transform_point3(Vec3::ZERO) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }
}
