//! Binary Radar Runtime - keeps the face's selection current
//!
//! This crate wires the pure engine to a running face:
//! 1. Read the clock on a draw-mode dependent period
//! 2. Compute the grid selection with the current style
//! 3. Apply the draw-mode filter
//! 4. Publish the newest frame (older unread frames are dropped)
//! 5. Stop on an explicit shutdown signal

pub mod face;
pub mod poller;
pub mod style;
pub mod telemetry;

pub use face::*;
pub use poller::*;
pub use style::*;
pub use telemetry::*;
