//! ar-paint - camera-tracked brush placement for augmented-reality painting
//!
//! A tracking provider supplies camera transforms; every frame the placement
//! controller stamps a brush shape one facing-length ahead of the camera,
//! either as a transient cursor or as committed paint, and hands the change
//! to the scene that the renderer draws.

pub mod core;
pub mod brush;
pub mod animation;
pub mod scene;
pub mod paint;
pub mod tracking;
