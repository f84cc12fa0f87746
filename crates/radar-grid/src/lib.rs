//! Binary Radar Grid Engine - time to radial grid selection
//!
//! Each of hours, minutes and (optionally) seconds is written as two
//! decimal digits. Every digit becomes a 4-bit nibble whose set bits light
//! sectors of one ring:
//! - seconds: rings 4 (tens) and 5 (ones)
//! - minutes: rings 2 (tens) and 3 (ones)
//! - hours: rings 0 (tens) and 1 (ones)
//!
//! The combined cells are ordered outermost first, then shifted one ring
//! outward and rotated half a turn into display coordinates.

pub mod encoding;
pub mod engine;
pub mod filter;

pub use encoding::*;
pub use engine::*;
pub use filter::*;
