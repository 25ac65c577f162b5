//! # matchviz_core - Ball Reconstruction and Streaming Match Stats
//!
//! Core of a frame-by-frame 2D football match viewer driven by an event log.
//!
//! ## Features
//! - Dense per-event ball position estimates from sparse fixes (touches,
//!   out-of-play and goal locations), rebuilt independently per scene
//! - Running distance, touch and score statistics updated once per event
//! - Typed dataset model with structural validation and a JSON schema
//! - Playback driver that feeds frames to a pluggable sink
//!
//! Drawing is left to the [`playback::FrameSink`] implementation.

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// NaN-rejecting comparisons are written as negated `<`/`<=` on purpose
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod ball;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod geometry;
pub mod playback;
pub mod stats;

pub use ball::{estimate, reconstruct, BallPositionMap};
pub use config::VizConfig;
pub use dataset::{Event, EventKind, MatchDataset};
pub use error::{DatasetError, PlaybackError, ReconstructError, Result, StatsError};
pub use geometry::{GridPoint, Point};
pub use playback::{FrameSink, FrameView, Playback, PlaybackOutcome, PlaybackSummary};
pub use stats::{RunningStats, ScoreStats, StreamingStats, TouchStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
