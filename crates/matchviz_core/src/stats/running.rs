use crate::dataset::{Event, PlayerId};
use std::collections::HashMap;

/// Distance covered per player, in native units.
///
/// Each frame contributes `speed / fps` for every player it lists. Players
/// missing from a frame are left untouched.
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    distance_by_player: HashMap<PlayerId, f64>,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: &Event, fps: f64) {
        let Some(players) = &event.players else {
            return;
        };
        for (name, state) in players {
            *self.distance_by_player.entry(name.clone()).or_insert(0.0) += state.speed() / fps;
        }
    }

    pub fn distance_by_player(&self) -> &HashMap<PlayerId, f64> {
        &self.distance_by_player
    }

    pub fn distance_of(&self, player: &str) -> f64 {
        self.distance_by_player.get(player).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{frame_event, frame_of, state};

    #[test]
    fn test_constant_velocity_accumulates() {
        let mut stats = RunningStats::new();
        let mut event = frame_event(0.0, 0);
        event.players = Some(frame_of(&[("Ana", state(0.0, 0.0, 3.0, 4.0))]));

        for _ in 0..10 {
            stats.update(&event, 10.0);
        }

        assert!((stats.distance_of("Ana") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_absent_players_are_not_updated() {
        let mut stats = RunningStats::new();
        let mut both = frame_event(0.0, 0);
        both.players = Some(frame_of(&[
            ("Ana", state(0.0, 0.0, 1.0, 0.0)),
            ("Bo", state(0.0, 0.0, 0.0, 2.0)),
        ]));
        let mut only_ana = frame_event(0.1, 0);
        only_ana.players = Some(frame_of(&[("Ana", state(0.0, 0.0, 1.0, 0.0))]));

        stats.update(&both, 1.0);
        stats.update(&only_ana, 1.0);

        assert_eq!(stats.distance_of("Ana"), 2.0);
        assert_eq!(stats.distance_of("Bo"), 2.0);
        assert_eq!(stats.distance_by_player().len(), 2);
    }

    #[test]
    fn test_events_without_players_are_ignored() {
        let mut stats = RunningStats::new();
        let mut event = frame_event(0.0, 0);
        event.players = None;
        stats.update(&event, 25.0);
        assert!(stats.distance_by_player().is_empty());
    }
}
