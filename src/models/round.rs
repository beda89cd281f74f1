//! Round and RoundState.

use crate::models::game::{GameMatch, MatchId, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// Matches generated, no winner entered yet.
    #[default]
    Pending,
    /// Some but not all matches have a winner.
    PartiallyScored,
    /// Every match has a winner; ready to commit.
    Validated,
    /// Standings updated; read-only from here on.
    Committed,
}

/// A numbered round owning its 1 or 2 matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub matches: Vec<GameMatch>,
    pub state: RoundState,
    pub committed_at: Option<DateTime<Utc>>,
}

impl Round {
    pub fn new(number: u32, matches: Vec<GameMatch>) -> Self {
        Self {
            number,
            matches,
            state: RoundState::Pending,
            committed_at: None,
        }
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Courts whose match still has no winner.
    pub fn courts_without_winner(&self) -> Vec<u8> {
        self.matches
            .iter()
            .filter(|m| m.winner.is_none())
            .map(|m| m.court)
            .collect()
    }

    /// Winning teams in court order (only matches with a winner).
    pub fn winning_teams(&self) -> Vec<Team> {
        self.matches
            .iter()
            .filter_map(|m| m.winning_team().cloned())
            .collect()
    }

    /// Recompute the state from match outcomes. Committed rounds stay committed.
    pub fn refresh_state(&mut self) {
        if self.state == RoundState::Committed {
            return;
        }
        let decided = self.matches.iter().filter(|m| m.winner.is_some()).count();
        self.state = if decided == 0 {
            RoundState::Pending
        } else if decided < self.matches.len() {
            RoundState::PartiallyScored
        } else {
            RoundState::Validated
        };
    }
}
