//! Binary Radar Time Sources
//!
//! The selection engine never reads the clock itself. Callers hand it a
//! [`TimeSource`]:
//! - [`SystemClock`]: local wall clock of the device
//! - [`ManualClock`]: settable clock for tests and simulation

pub mod clock;

pub use clock::*;
