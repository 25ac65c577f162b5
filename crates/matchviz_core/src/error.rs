//! Error taxonomy.
//!
//! - [`DatasetError`]: the dataset is malformed. Fatal, nothing is processed.
//!   A bad [`ConfigError`] is treated the same way.
//! - [`ReconstructError`] / [`StatsError`]: a data-integrity contract was broken
//!   mid-stream. Fatal for the run.
//! - A missing ball position is *not* an error; it is `None` at lookup time.

use crate::config::ConfigError;
use crate::dataset::Side;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported dataset version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },
    #[error("dataset needs at least 2 periods, found {0}")]
    TooFewPeriods(usize),
    #[error("period {0} has no events")]
    EmptyPeriod(usize),
    #[error("fps must be a positive number, got {0}")]
    InvalidFps(f64),
    #[error("{event_type} event at t={time} is missing `{field}`")]
    MissingField { event_type: String, time: f64, field: &'static str },
    #[error("{event_type} event at t={time} touched by `{player}` who is not in the frame")]
    UnknownToucher { event_type: String, time: f64, player: String },
    #[error("team `{team}` has sides for {found} periods but the dataset has {expected}")]
    MissingSides { team: String, expected: usize, found: usize },
    #[error("event at t={time} says period {found} but is stored in period {expected}")]
    PeriodMismatch { expected: usize, found: usize, time: f64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReconstructError {
    #[error("invalid time ordering: prev={prev}, cur={cur}, next={next}")]
    InvalidTimeOrdering { prev: f64, cur: f64, next: f64 },
    #[error("event #{index} at t={time} comes before previous event at t={previous}")]
    NonMonotonicTime { index: usize, previous: f64, time: f64 },
    #[error("two ball fixes at t={time} disagree: ({ax}, {ay}) vs ({bx}, {by})")]
    ConflictingAnchors { time: f64, ax: f64, ay: f64, bx: f64, by: f64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("invalid goal location x={x}: must be beyond |x| > {min_abs_x}")]
    InvalidGoalLocation { x: f64, min_abs_x: f64 },
    #[error("no team plays on the {side} side in period {period}")]
    NoTeamOnSide { side: Side, period: usize },
    #[error("more than one team plays on the {side} side in period {period}")]
    AmbiguousSide { side: Side, period: usize },
    #[error("team `{team}` has no side assigned for period {period}")]
    MissingSide { team: String, period: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scene {scene} of period {period}: {source}")]
    Reconstruct { period: usize, scene: usize, source: ReconstructError },
    #[error("event at t={time}: {source}")]
    Stats { time: f64, source: StatsError },
    #[error("frame sink failed: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
