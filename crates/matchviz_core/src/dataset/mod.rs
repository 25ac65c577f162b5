//! # Dataset
//!
//! Typed model of a match log, JSON loading and structural validation.
//!
//! - `event` - event records and the anchor/non-anchor classification
//! - `model` - teams, sides, units and the dataset root
//! - `loader` - parsing, validation, period grouping, JSON schema
//! - `roster` - player -> team lookup

pub mod event;
pub mod loader;
pub mod model;
pub mod roster;

pub use event::*;
pub use loader::*;
pub use model::*;
pub use roster::*;
