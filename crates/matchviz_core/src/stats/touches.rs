use crate::dataset::{Event, PlayerId};
use std::collections::HashMap;

/// Number of events credited to each player.
#[derive(Debug, Clone, Default)]
pub struct TouchStats {
    touches_by_player: HashMap<PlayerId, u32>,
}

impl TouchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: &Event) {
        if let Some(player) = event.toucher() {
            *self.touches_by_player.entry(player.to_string()).or_insert(0) += 1;
        }
    }

    pub fn touches_by_player(&self) -> &HashMap<PlayerId, u32> {
        &self.touches_by_player
    }

    pub fn touches_of(&self, player: &str) -> u32 {
        self.touches_by_player.get(player).copied().unwrap_or(0)
    }
}
