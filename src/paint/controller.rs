//! Placement controller: camera transform in, scene mutation out.
//!
//! The controller keeps no per-frame state. Whether a cursor is currently in
//! the scene is recorded only by the [`CURSOR_TAG`] on that node, so a fresh
//! controller cleans up after an old one.

use glam::Mat4;

use crate::animation::SpinAction;
use crate::brush::BrushSettings;
use crate::core::CameraPose;
use crate::scene::{CURSOR_TAG, PaintNode, PaintScene, SceneNodeId};

use super::config::PlacementConfig;
use super::mutation::SceneMutation;

/// Turns tracking frames into brush stamps.
#[derive(Clone, Debug, Default)]
pub struct PaintPlacementController {
    config: PlacementConfig,
}

impl PaintPlacementController {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Edge length of the brush for a size factor
    pub fn shape_size(&self, size_factor: f32) -> f32 {
        self.config.sizing.shape_size(size_factor)
    }

    /// Build the node for this frame at the pose's placement point.
    pub fn build_node(&self, pose: &CameraPose, trigger_engaged: bool, settings: &BrushSettings) -> PaintNode {
        let position = pose.ahead(self.config.placement_distance);
        let (geometry, orientation) = settings.shape.build(self.shape_size(settings.size_factor));

        if trigger_engaged {
            let spin = settings
                .spinning
                .then(|| SpinAction::about_vertical(self.config.spin_period));
            PaintNode::painted(geometry, orientation, position, settings.color, spin)
        } else {
            PaintNode::cursor(geometry, orientation, position, self.config.cursor_color)
        }
    }

    /// Mutation for one tracking frame, or `None` when tracking has no pose
    /// yet (the frame is skipped: nothing removed, nothing inserted).
    pub fn on_tracking_frame(
        &self,
        camera_transform: Option<&Mat4>,
        trigger_engaged: bool,
        settings: &BrushSettings,
    ) -> Option<SceneMutation> {
        let Some(transform) = camera_transform else {
            log::debug!("No camera pose this frame, skipping");
            return None;
        };

        let pose = CameraPose::from_transform(transform);
        let node = self.build_node(&pose, trigger_engaged, settings);
        Some(SceneMutation::new(CURSOR_TAG, node))
    }

    /// Compute and immediately apply this frame's mutation. For setups where
    /// tracking callbacks already run on the thread that owns the scene.
    pub fn process_frame<S: PaintScene + ?Sized>(
        &self,
        camera_transform: Option<&Mat4>,
        trigger_engaged: bool,
        settings: &BrushSettings,
        scene: &mut S,
    ) -> Option<SceneNodeId> {
        self.on_tracking_frame(camera_transform, trigger_engaged, settings)
            .map(|mutation| mutation.apply(scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{BrushGeometry, BrushShape, Rgba, SizeMapping};
    use crate::scene::{NodeRole, SceneGraph};
    use glam::{Quat, Vec3};

    fn settings() -> BrushSettings {
        BrushSettings::new(Rgba::ORANGE, BrushShape::Sphere, 0.5, false)
    }

    #[test]
    fn test_painted_sphere_from_identity() {
        let controller = PaintPlacementController::default();
        let mutation = controller
            .on_tracking_frame(Some(&Mat4::IDENTITY), true, &settings())
            .unwrap();
        let node = mutation.insert;

        assert_eq!(mutation.cleanup_tag, CURSOR_TAG);
        assert_eq!(node.role, NodeRole::Painted);
        assert_eq!(node.position(), Vec3::new(0.0, 0.0, -1.0));
        match node.geometry {
            BrushGeometry::Sphere { radius } => assert!((radius - 0.14).abs() < 1e-6),
            other => panic!("expected sphere, got {:?}", other),
        }
        assert_eq!(node.material.diffuse, Rgba::ORANGE);
        assert_eq!(node.material.specular, Some(Rgba::WHITE));
        assert!(node.spin.is_none());
        assert!(node.tag.is_none());
    }

    #[test]
    fn test_cursor_when_trigger_released() {
        let controller = PaintPlacementController::default();
        let node = controller
            .on_tracking_frame(Some(&Mat4::IDENTITY), false, &settings().with_spinning(true))
            .unwrap()
            .insert;

        assert_eq!(node.role, NodeRole::Cursor);
        assert!(node.has_tag(CURSOR_TAG));
        assert_eq!(node.material.diffuse, Rgba::LIGHT_GRAY);
        // Spin never applies to the cursor
        assert!(node.spin.is_none());
    }

    #[test]
    fn test_spin_only_when_painting() {
        let controller = PaintPlacementController::default();
        let node = controller
            .on_tracking_frame(Some(&Mat4::IDENTITY), true, &settings().with_spinning(true))
            .unwrap()
            .insert;

        let spin = node.spin.unwrap();
        assert_eq!(spin.axis, Vec3::Y);
        assert_eq!(spin.period, 3.0);
    }

    #[test]
    fn test_no_pose_skips_frame() {
        let controller = PaintPlacementController::default();
        let mut scene = SceneGraph::new();
        controller.process_frame(Some(&Mat4::IDENTITY), false, &settings(), &mut scene);

        assert!(controller.on_tracking_frame(None, true, &settings()).is_none());
        assert!(controller.process_frame(None, false, &settings(), &mut scene).is_none());
        // Existing cursor untouched on a skipped frame
        assert_eq!(scene.tagged_count(CURSOR_TAG), 1);
    }

    #[test]
    fn test_placement_follows_camera() {
        let controller = PaintPlacementController::default();
        let transform = Mat4::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::PI),
            Vec3::new(2.0, 1.0, 0.0),
        );
        let node = controller
            .on_tracking_frame(Some(&transform), true, &settings())
            .unwrap()
            .insert;
        // Turned around: looking down +Z
        assert!((node.position() - Vec3::new(2.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_placement_distance_from_config() {
        let config = PlacementConfig { placement_distance: 0.5, ..Default::default() };
        let controller = PaintPlacementController::new(config);
        let node = controller
            .on_tracking_frame(Some(&Mat4::IDENTITY), true, &settings())
            .unwrap()
            .insert;
        assert_eq!(node.position(), Vec3::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn test_clamped_sizing_from_config() {
        let mut config = PlacementConfig::default();
        config.sizing.mapping = SizeMapping::Clamped;
        let controller = PaintPlacementController::new(config);
        assert!((controller.shape_size(1.0) - 0.5).abs() < 1e-6);

        let faithful = PaintPlacementController::default();
        assert!((faithful.shape_size(1.0) - 1.02).abs() < 1e-6);
    }

    #[test]
    fn test_orientation_is_shape_default() {
        let controller = PaintPlacementController::default();
        let node = controller
            .on_tracking_frame(Some(&Mat4::IDENTITY), true, &settings().with_shape(BrushShape::Torus))
            .unwrap()
            .insert;
        let expected = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(node.transform.rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_two_cursor_frames_leave_one_cursor() {
        let controller = PaintPlacementController::default();
        let mut scene = SceneGraph::new();
        controller.process_frame(Some(&Mat4::IDENTITY), false, &settings(), &mut scene);
        controller.process_frame(Some(&Mat4::IDENTITY), false, &settings(), &mut scene);

        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.tagged_count(CURSOR_TAG), 1);
        assert_eq!(scene.count_role(NodeRole::Painted), 0);
    }
}
