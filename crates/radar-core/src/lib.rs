//! Binary Radar Core - Fundamental types and primitives
//!
//! This crate defines the core types shared by every other crate:
//! - Wall-clock decomposition (TimeComponents, HourCycle)
//! - Radial grid coordinates (GridCell, Selection)
//! - Display draw modes
//! - Error type

pub mod error;
pub mod grid;
pub mod mode;
pub mod time;

pub use error::*;
pub use grid::*;
pub use mode::*;
pub use time::*;
