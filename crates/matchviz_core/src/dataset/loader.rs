//! Dataset loading and structural validation.

use super::event::Event;
use super::model::{MatchDataset, Scene, DATASET_VERSION};
use crate::error::DatasetError;
use std::fs;
use std::path::Path;

impl MatchDataset {
    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: MatchDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        log::info!(
            "Loaded dataset: {} vs {}, {} periods, {} events @ {} fps",
            dataset.teams.home.name,
            dataset.teams.away.name,
            dataset.periods.len(),
            dataset.event_count(),
            dataset.fps
        );
        Ok(dataset)
    }

    /// Read, parse and validate a dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.version != DATASET_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: DATASET_VERSION,
                found: self.version,
            });
        }
        if self.periods.len() < 2 {
            return Err(DatasetError::TooFewPeriods(self.periods.len()));
        }
        for (i, period) in self.periods.iter().enumerate() {
            if period.iter().all(|scene| scene.is_empty()) {
                return Err(DatasetError::EmptyPeriod(i));
            }
        }
        for (period, _, scene) in self.scenes() {
            if let Some(event) = scene.iter().find(|e| e.period != period) {
                return Err(DatasetError::PeriodMismatch {
                    expected: period,
                    found: event.period,
                    time: event.time,
                });
            }
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(DatasetError::InvalidFps(self.fps));
        }
        for team in self.teams.iter() {
            if team.sides.len() < self.periods.len() {
                return Err(DatasetError::MissingSides {
                    team: team.name.clone(),
                    expected: self.periods.len(),
                    found: team.sides.len(),
                });
            }
        }
        Ok(())
    }

    /// Every scene in dataset order as `(period, scene_index, scene)`.
    pub fn scenes(&self) -> impl Iterator<Item = (usize, usize, &Scene)> {
        self.periods
            .iter()
            .enumerate()
            .flat_map(|(p, scenes)| scenes.iter().enumerate().map(move |(s, scene)| (p, s, scene)))
    }

    pub fn event_count(&self) -> usize {
        self.scenes().map(|(_, _, scene)| scene.len()).sum()
    }
}

/// Regroup a flat, period-ordered event list into periods.
///
/// Requires at least two periods and no gap in period numbering.
pub fn events_by_period(events: Vec<Event>) -> Result<Vec<Vec<Event>>, DatasetError> {
    let mut periods: Vec<Vec<Event>> = Vec::new();
    for event in events {
        let period = event.period;
        if period >= periods.len() {
            periods.resize_with(period + 1, Vec::new);
        }
        periods[period].push(event);
    }
    if periods.len() < 2 {
        return Err(DatasetError::TooFewPeriods(periods.len()));
    }
    if let Some(i) = periods.iter().position(|p| p.is_empty()) {
        return Err(DatasetError::EmptyPeriod(i));
    }
    Ok(periods)
}

/// JSON schema of the dataset wire format.
pub fn dataset_schema_json() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(MatchDataset);
    serde_json::to_string_pretty(&schema)
}
