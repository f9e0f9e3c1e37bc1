//! Scene graph collaborator: the node set the renderer draws every tick

pub mod graph;
pub mod node;

pub use graph::{DrawItem, PaintScene, SceneGraph};
pub use node::{CURSOR_TAG, LocalTransform, Material, NodeRole, PaintNode, SceneNode, SceneNodeId};
