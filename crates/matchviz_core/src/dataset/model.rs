use super::event::{Event, PlayerId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Only dataset layout this crate understands.
pub const DATASET_VERSION: u32 = 0;

/// Contiguous run of events reconstructed on its own.
pub type Scene = Vec<Event>;

/// Physical half of the pitch a team defends.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TeamInfo {
    pub name: String,
    /// Roster metadata, keyed by player name
    #[serde(default)]
    pub players: BTreeMap<PlayerId, serde_json::Value>,
    /// Side defended in each period, indexed by period
    pub sides: Vec<Side>,
}

impl TeamInfo {
    pub fn side_in(&self, period: usize) -> Option<Side> {
        self.sides.get(period).copied()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Teams {
    pub home: TeamInfo,
    pub away: TeamInfo,
}

impl Teams {
    pub fn iter(&self) -> impl Iterator<Item = &TeamInfo> {
        [&self.home, &self.away].into_iter()
    }
}

/// Distance unit of every coordinate and velocity in the dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Yard,
    Foot,
    Meter,
}

impl Unit {
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            // 36 in * 2.54 cm
            Unit::Yard => 36.0 * 2.54 / 100.0,
            Unit::Foot => 12.0 * 2.54 / 100.0,
            Unit::Meter => 1.0,
        }
    }

    pub fn to_meters(&self, distance: f64) -> f64 {
        distance * self.meters_per_unit()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct Stadium {
    pub field_height: f64,
    pub field_width: f64,
}

/// A parsed match log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MatchDataset {
    pub version: u32,
    pub teams: Teams,
    /// periods -> scenes -> events
    pub periods: Vec<Vec<Scene>>,
    pub fps: f64,
    pub unit: Unit,
    pub stadium: Stadium,
}
