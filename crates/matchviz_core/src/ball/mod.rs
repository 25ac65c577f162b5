//! # Ball
//!
//! Rough ball position estimates from a sparse event log.
//!
//! - `interpolate` - linear estimate between two time-anchored fixes
//! - `reconstruct` - per-scene time -> position map

pub mod interpolate;
pub mod reconstruct;

pub use interpolate::estimate;
pub use reconstruct::{reconstruct, BallPositionMap};
