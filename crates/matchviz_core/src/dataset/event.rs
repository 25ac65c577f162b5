//! Match events.
//!
//! The wire format is a flat record whose optional fields depend on `type`.
//! It is decoded through [`RawEvent`] into [`Event`], where the fields a
//! kind needs are carried by the [`EventKind`] variant itself.

use crate::error::DatasetError;
use crate::geometry::Point;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PlayerId = String;

/// Tracked state of one player in one frame.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    /// Velocity in native units per frame
    pub vx: f64,
    pub vy: f64,
}

impl PlayerState {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Magnitude of the velocity vector
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// All players present in a frame, keyed by name.
pub type PlayerFrame = BTreeMap<PlayerId, PlayerState>;

/// Events where a player is on the ball; the ball sits at the toucher's feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchKind {
    Touch,
    ThrowIn,
    GoalKick,
    Corner,
    Kickoff,
    Pk,
    DirectFreeKick,
    IndirectFreeKick,
}

impl TouchKind {
    pub const ALL: [TouchKind; 8] = [
        TouchKind::Touch,
        TouchKind::ThrowIn,
        TouchKind::GoalKick,
        TouchKind::Corner,
        TouchKind::Kickoff,
        TouchKind::Pk,
        TouchKind::DirectFreeKick,
        TouchKind::IndirectFreeKick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TouchKind::Touch => "TOUCH",
            TouchKind::ThrowIn => "THROW_IN",
            TouchKind::GoalKick => "GOAL_KICK",
            TouchKind::Corner => "CORNER",
            TouchKind::Kickoff => "KICKOFF",
            TouchKind::Pk => "PK",
            TouchKind::DirectFreeKick => "DIRECT_FREE_KICK",
            TouchKind::IndirectFreeKick => "INDIRECT_FREE_KICK",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == label)
    }
}

/// Events that carry the ball's location explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatedKind {
    BallOutForThrowIn,
    BallOutForGoalKick,
    BallOutForCorner,
    Goal,
    Handball,
}

impl LocatedKind {
    pub const ALL: [LocatedKind; 5] = [
        LocatedKind::BallOutForThrowIn,
        LocatedKind::BallOutForGoalKick,
        LocatedKind::BallOutForCorner,
        LocatedKind::Goal,
        LocatedKind::Handball,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocatedKind::BallOutForThrowIn => "BALL_OUT_FOR_THROW_IN",
            LocatedKind::BallOutForGoalKick => "BALL_OUT_FOR_GOAL_KICK",
            LocatedKind::BallOutForCorner => "BALL_OUT_FOR_CORNER",
            LocatedKind::Goal => "GOAL",
            LocatedKind::Handball => "HANDBALL",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Touch-type event; `ball` is `player`'s position in this frame.
    Touch { kind: TouchKind, player: PlayerId, ball: Point },
    /// Location-bearing event.
    Located { kind: LocatedKind, location: Point },
    /// Any other event type (tracking frames, passes, cards, ...).
    Unanchored { label: String, location: Option<Point> },
}

impl EventKind {
    /// Known ball position for this event, if the kind provides one.
    pub fn ball_fix(&self) -> Option<Point> {
        match self {
            EventKind::Touch { ball, .. } => Some(*ball),
            EventKind::Located { location, .. } => Some(*location),
            EventKind::Unanchored { .. } => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventKind::Touch { kind, .. } => kind.as_str(),
            EventKind::Located { kind, .. } => kind.as_str(),
            EventKind::Unanchored { label, .. } => label,
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.ball_fix().is_some()
    }

    /// Goal location, only for `GOAL` events.
    pub fn goal_location(&self) -> Option<Point> {
        match self {
            EventKind::Located { kind: LocatedKind::Goal, location } => Some(*location),
            _ => None,
        }
    }
}

/// One entry of the match log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub struct Event {
    /// Seconds since the start of the period
    pub time: f64,
    pub period: usize,
    pub kind: EventKind,
    /// Player named by a non-touch event. Touch events carry theirs in [`EventKind::Touch`].
    pub touch: Option<PlayerId>,
    pub players: Option<PlayerFrame>,
    /// Broadcast camera footprint
    pub camera: Option<Vec<Point>>,
}

impl Event {
    pub fn ball_fix(&self) -> Option<Point> {
        self.kind.ball_fix()
    }

    pub fn is_anchor(&self) -> bool {
        self.kind.is_anchor()
    }

    /// Player credited with this event, whatever its kind.
    pub fn toucher(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Touch { player, .. } => Some(player.as_str()),
            _ => self.touch.as_deref(),
        }
    }

    pub fn has_players(&self) -> bool {
        self.players.is_some()
    }
}

/// Wire shape of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawEvent {
    pub time: f64,
    pub period: usize,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<PlayerFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Vec<Point>>,
}

impl TryFrom<RawEvent> for Event {
    type Error = DatasetError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let missing = |field: &'static str| DatasetError::MissingField {
            event_type: raw.event_type.clone(),
            time: raw.time,
            field,
        };

        let (kind, touch) = if let Some(kind) = TouchKind::parse(&raw.event_type) {
            let player = raw.touch.clone().ok_or_else(|| missing("touch"))?;
            let players = raw.players.as_ref().ok_or_else(|| missing("players"))?;
            let state = players.get(&player).ok_or_else(|| DatasetError::UnknownToucher {
                event_type: raw.event_type.clone(),
                time: raw.time,
                player: player.clone(),
            })?;
            (EventKind::Touch { kind, player, ball: state.position() }, None)
        } else if let Some(kind) = LocatedKind::parse(&raw.event_type) {
            let location = raw.location.ok_or_else(|| missing("location"))?;
            (EventKind::Located { kind, location }, raw.touch.clone())
        } else {
            let label = raw.event_type.clone();
            (EventKind::Unanchored { label, location: raw.location }, raw.touch.clone())
        };

        Ok(Event {
            time: raw.time,
            period: raw.period,
            kind,
            touch,
            players: raw.players,
            camera: raw.camera,
        })
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        let event_type = event.kind.label().to_string();
        let (touch, location) = match event.kind {
            EventKind::Touch { player, .. } => (Some(player), None),
            EventKind::Located { location, .. } => (event.touch, Some(location)),
            EventKind::Unanchored { location, .. } => (event.touch, location),
        };
        RawEvent {
            time: event.time,
            period: event.period,
            event_type,
            touch,
            location,
            players: event.players,
            camera: event.camera,
        }
    }
}

impl JsonSchema for Event {
    fn schema_name() -> String {
        "Event".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        RawEvent::json_schema(gen)
    }
}
