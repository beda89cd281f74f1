//! Player and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Players are identified by their (trimmed, unique) name.
pub type PlayerId = String;

/// Statistics view of a player (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub points: u32,
    pub matches_played: u32,
    pub matches_won: u32,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            points: p.points,
            matches_played: p.matches_played,
            matches_won: p.matches_won,
        }
    }
}

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerId,
    /// Accumulated standings points; never decremented.
    pub points: u32,
    pub matches_played: u32,
    pub matches_won: u32,
}

impl Player {
    /// Create a new player with the given name. Counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            matches_played: 0,
            matches_won: 0,
        }
    }

    /// Current stats as a separate struct (for API responses).
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    /// Record a played match, and whether it was won.
    pub fn record_match(&mut self, won: bool) {
        self.matches_played += 1;
        if won {
            self.matches_won += 1;
        }
    }
}
