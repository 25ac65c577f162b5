use crate::dataset::{Event, Side, Teams};
use crate::error::StatsError;
use std::collections::HashMap;

/// A goal can't be scored this close to the halfway line.
pub const DEFAULT_GOAL_MIN_ABS_X: f64 = 50.0;

#[derive(Debug, Clone)]
struct TeamSides {
    name: String,
    sides: Vec<Side>,
}

/// Goals per team, resolved from goal location and the period's side assignment.
#[derive(Debug, Clone)]
pub struct ScoreStats {
    teams: Vec<TeamSides>,
    score: HashMap<String, u32>,
    goal_min_abs_x: f64,
}

impl ScoreStats {
    pub fn new(teams: &Teams) -> Self {
        Self::with_goal_threshold(teams, DEFAULT_GOAL_MIN_ABS_X)
    }

    pub fn with_goal_threshold(teams: &Teams, goal_min_abs_x: f64) -> Self {
        let teams: Vec<TeamSides> = teams
            .iter()
            .map(|t| TeamSides { name: t.name.clone(), sides: t.sides.clone() })
            .collect();
        let score = teams.iter().map(|t| (t.name.clone(), 0)).collect();
        Self { teams, score, goal_min_abs_x }
    }

    pub fn update(&mut self, event: &Event) -> Result<(), StatsError> {
        let Some(team) = self.team_that_scored(event)? else {
            return Ok(());
        };
        let team = team.to_string();
        log::info!("GOAL for {} at t={:.2} (period {})", team, event.time, event.period);
        *self.score.entry(team).or_insert(0) += 1;
        Ok(())
    }

    /// Team credited with `event`, or `None` if it isn't a goal.
    pub fn team_that_scored(&self, event: &Event) -> Result<Option<&str>, StatsError> {
        let Some(location) = event.kind.goal_location() else {
            return Ok(None);
        };
        if !(location.x.abs() > self.goal_min_abs_x) {
            return Err(StatsError::InvalidGoalLocation {
                x: location.x,
                min_abs_x: self.goal_min_abs_x,
            });
        }
        // Scored by the team playing from the other half
        let goal_side = if location.x < 0.0 { Side::Left } else { Side::Right };
        let side_that_scored = goal_side.opposite();

        let mut scored: Option<&str> = None;
        for team in &self.teams {
            let side = team.sides.get(event.period).copied().ok_or_else(|| {
                StatsError::MissingSide { team: team.name.clone(), period: event.period }
            })?;
            if side == side_that_scored {
                if scored.is_some() {
                    return Err(StatsError::AmbiguousSide {
                        side: side_that_scored,
                        period: event.period,
                    });
                }
                scored = Some(&team.name);
            }
        }
        scored
            .map(Some)
            .ok_or(StatsError::NoTeamOnSide { side: side_that_scored, period: event.period })
    }

    pub fn score(&self) -> &HashMap<String, u32> {
        &self.score
    }

    pub fn score_of(&self, team: &str) -> u32 {
        self.score.get(team).copied().unwrap_or(0)
    }
}
