//! Core types shared by every paint subsystem

pub mod types;
pub mod error;
pub mod logging;
pub mod pose;

pub use types::*;
pub use error::Error;
pub use pose::CameraPose;
