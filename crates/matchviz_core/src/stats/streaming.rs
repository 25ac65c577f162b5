use super::running::RunningStats;
use super::score::ScoreStats;
use super::touches::TouchStats;
use crate::dataset::{Event, PlayerId, Teams};
use crate::error::StatsError;
use std::collections::HashMap;

/// All running statistics for one dataset session.
///
/// Updated once per event, in stream order. Never reset; replaying an
/// event counts it twice.
#[derive(Debug, Clone)]
pub struct StreamingStats {
    pub running: RunningStats,
    pub touches: TouchStats,
    pub score: ScoreStats,
    events_seen: u64,
}

impl StreamingStats {
    pub fn new(teams: &Teams) -> Self {
        Self::from_parts(ScoreStats::new(teams))
    }

    pub fn with_goal_threshold(teams: &Teams, goal_min_abs_x: f64) -> Self {
        Self::from_parts(ScoreStats::with_goal_threshold(teams, goal_min_abs_x))
    }

    fn from_parts(score: ScoreStats) -> Self {
        Self { running: RunningStats::new(), touches: TouchStats::new(), score, events_seen: 0 }
    }

    pub fn update(&mut self, event: &Event, fps: f64) -> Result<(), StatsError> {
        self.running.update(event, fps);
        self.touches.update(event);
        self.score.update(event)?;
        self.events_seen += 1;
        Ok(())
    }

    pub fn distance_by_player(&self) -> &HashMap<PlayerId, f64> {
        self.running.distance_by_player()
    }

    pub fn touches_by_player(&self) -> &HashMap<PlayerId, u32> {
        self.touches.touches_by_player()
    }

    pub fn score(&self) -> &HashMap<String, u32> {
        self.score.score()
    }

    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    /// Players by distance covered, farthest first.
    pub fn distance_leaderboard(&self) -> Vec<(&str, f64)> {
        let mut board: Vec<(&str, f64)> =
            self.distance_by_player().iter().map(|(p, d)| (p.as_str(), *d)).collect();
        board.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        board
    }

    /// Players by touch count, most first.
    pub fn touch_leaderboard(&self) -> Vec<(&str, u32)> {
        let mut board: Vec<(&str, u32)> =
            self.touches_by_player().iter().map(|(p, n)| (p.as_str(), *n)).collect();
        board.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        board
    }
}
