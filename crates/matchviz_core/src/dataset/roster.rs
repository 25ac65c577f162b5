use super::model::Teams;
use std::collections::HashMap;

/// Player name -> team name, with the referee as a team of its own.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    team_by_player: HashMap<String, String>,
}

impl Roster {
    pub fn from_teams(teams: &Teams, referee_name: &str) -> Self {
        let mut team_by_player = HashMap::new();
        for team in teams.iter() {
            for player in team.players.keys() {
                team_by_player.insert(player.clone(), team.name.clone());
            }
        }
        team_by_player.insert(referee_name.to_string(), referee_name.to_string());
        Self { team_by_player }
    }

    pub fn team_of(&self, player: &str) -> Option<&str> {
        self.team_by_player.get(player).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.team_by_player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_by_player.is_empty()
    }
}
