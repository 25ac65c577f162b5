//! Per-scene ball position reconstruction.
//!
//! Anchors are events with a known ball position (touch-type events and
//! location-bearing events). Every event between two anchors gets a linear
//! estimate; events before the first or after the last anchor get nothing.

use super::interpolate::estimate;
use crate::dataset::Event;
use crate::error::ReconstructError;
use crate::geometry::Point;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Event time usable as an ordered map key.
#[derive(Debug, Clone, Copy)]
struct TimeKey(f64);

impl TimeKey {
    fn new(time: f64) -> Self {
        // -0.0 and 0.0 must land on the same key
        TimeKey(time + 0.0)
    }
}

impl PartialEq for TimeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeKey {}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Ball position by event time for one scene. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallPositionMap {
    positions: BTreeMap<TimeKey, Point>,
}

impl BallPositionMap {
    /// `None` means the ball position is unknown at `time` (not drawn).
    pub fn get(&self, time: f64) -> Option<Point> {
        self.positions.get(&TimeKey::new(time)).copied()
    }

    pub fn contains(&self, time: f64) -> bool {
        self.positions.contains_key(&TimeKey::new(time))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Entries in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, Point)> + '_ {
        self.positions.iter().map(|(k, p)| (k.0, *p))
    }

    pub fn first_time(&self) -> Option<f64> {
        self.positions.keys().next().map(|k| k.0)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.positions.keys().next_back().map(|k| k.0)
    }

    fn insert(&mut self, time: f64, pos: Point) {
        self.positions.insert(TimeKey::new(time), pos);
    }
}

/// Build the ball position map for one scene.
///
/// `events` must be in non-decreasing time order. Two anchors sharing a time
/// are accepted only if they agree on the position.
pub fn reconstruct(events: &[Event]) -> Result<BallPositionMap, ReconstructError> {
    check_monotonic(events)?;

    let mut map = BallPositionMap::default();

    // Pass 1: direct fixes
    let mut anchors = 0usize;
    for event in events {
        let Some(fix) = event.ball_fix() else {
            continue;
        };
        if let Some(existing) = map.get(event.time) {
            if existing != fix {
                return Err(ReconstructError::ConflictingAnchors {
                    time: event.time,
                    ax: existing.x,
                    ay: existing.y,
                    bx: fix.x,
                    by: fix.y,
                });
            }
        }
        map.insert(event.time, fix);
        anchors += 1;
    }

    // Pass 2: fill the gaps between consecutive anchors
    let mut prev_anchor: Option<(f64, Point)> = None;
    let mut since_prev: Vec<f64> = Vec::new();
    for event in events {
        let Some(next_pos) = event.ball_fix() else {
            since_prev.push(event.time);
            continue;
        };
        if let Some((prev_time, prev_pos)) = prev_anchor {
            for &cur_time in &since_prev {
                let pos = estimate(prev_time, prev_pos, event.time, next_pos, cur_time)?;
                map.insert(cur_time, pos);
            }
        }
        prev_anchor = Some((event.time, next_pos));
        since_prev.clear();
    }

    log::debug!(
        "Reconstructed {} ball positions from {} anchors over {} events ({} uncovered)",
        map.len(),
        anchors,
        events.len(),
        events.iter().filter(|e| !map.contains(e.time)).count()
    );

    Ok(map)
}

fn check_monotonic(events: &[Event]) -> Result<(), ReconstructError> {
    for (index, pair) in events.windows(2).enumerate() {
        let (previous, time) = (pair[0].time, pair[1].time);
        // written this way so NaN times fail too
        if !(previous <= time) {
            return Err(ReconstructError::NonMonotonicTime { index: index + 1, previous, time });
        }
    }
    Ok(())
}
