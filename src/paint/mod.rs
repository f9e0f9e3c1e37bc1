//! Per-frame paint placement
//!
//! Each tracking frame becomes one [`SceneMutation`]: drop the previous cursor,
//! insert either a new cursor or a painted stamp one facing-length ahead of the
//! camera. Mutations travel to the render thread through a [`MutationSender`].

pub mod config;
pub mod controller;
pub mod mutation;
pub mod queue;
pub mod session;

pub use config::PlacementConfig;
pub use controller::PaintPlacementController;
pub use mutation::SceneMutation;
pub use queue::{MutationReceiver, MutationSender, channel};
pub use session::{PaintSession, SessionStats};
