//! # Stats
//!
//! Incremental match statistics, one `update` per event.
//!
//! - `running` - distance covered per player
//! - `touches` - touch counts per player
//! - `score` - goals per team
//! - `streaming` - the three composed

pub mod running;
pub mod score;
pub mod streaming;
pub mod touches;

pub use running::*;
pub use score::*;
pub use streaming::*;
pub use touches::*;
