//! Binary Radar Test Harness
//!
//! This crate provides:
//! - Full-day sweeps of the selection engine against its invariants
//! - Seeded random sampling of wall-clock times
//! - Benchmarks (see `benches/`)

pub mod day_sweep;

pub use day_sweep::*;
