//! Node animations applied by the scene at draw time

pub mod spin;

pub use spin::{SpinAction, DEFAULT_SPIN_PERIOD};
