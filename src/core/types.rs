//! Math re-exports and the crate-wide result alias

pub use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Standard Result type for the paint core
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
