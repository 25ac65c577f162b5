//! # Geometry
//!
//! Plain 2D value types shared by reconstruction, stats and rendering.

pub mod point;

pub use point::*;
