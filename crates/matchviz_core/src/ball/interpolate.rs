//! Linear fill-in between two known ball positions.
//!
//! This is a rough estimate: the ball is assumed to travel in a straight
//! line at constant speed between fixes. No flight, spin or bounce.

use crate::error::ReconstructError;
use crate::geometry::Point;

/// Estimate the ball position at `cur_time` given fixes at `prev_time` and
/// `next_time`.
///
/// Exact at both ends: `cur_time == prev_time` returns `prev_pos` and
/// `cur_time == next_time` returns `next_pos` without any arithmetic.
/// Anything else outside `prev_time < cur_time < next_time` is rejected.
pub fn estimate(
    prev_time: f64,
    prev_pos: Point,
    next_time: f64,
    next_pos: Point,
    cur_time: f64,
) -> Result<Point, ReconstructError> {
    if cur_time == prev_time {
        return Ok(prev_pos);
    }
    if cur_time == next_time {
        return Ok(next_pos);
    }
    if !(prev_time < cur_time && cur_time < next_time) {
        return Err(ReconstructError::InvalidTimeOrdering {
            prev: prev_time,
            cur: cur_time,
            next: next_time,
        });
    }
    let frac = (cur_time - prev_time) / (next_time - prev_time);
    Ok(prev_pos * (1.0 - frac) + next_pos * frac)
}
