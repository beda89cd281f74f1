//! Match (game), Team, and Side for 2v2 court play.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Highest game score a team can enter for one match.
pub const MAX_GAME_SCORE: u8 = 4;

/// Which side of the match won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// An unordered pair of two distinct players, built fresh for one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team(pub [PlayerId; 2]);

impl Team {
    pub fn new(first: impl Into<PlayerId>, second: impl Into<PlayerId>) -> Self {
        Self([first.into(), second.into()])
    }

    pub fn members(&self) -> &[PlayerId; 2] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p == name)
    }
}

// Teams are unordered: {A, B} == {B, A}.
impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = &self.0;
        let [c, d] = &other.0;
        (a == c && b == d) || (a == d && b == c)
    }
}

impl Eq for Team {}

/// A single match on one court: team A vs team B, with the entered game score.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Court number, unique within a round (1 or 2).
    pub court: u8,
    pub team_a: Team,
    pub team_b: Team,
    /// Last entered score as (team A, team B); (0, 0) means "not entered".
    pub score: (u8, u8),
    /// None until a valid, non-tied score has been entered.
    pub winner: Option<Side>,
}

impl GameMatch {
    pub fn new(court: u8, team_a: Team, team_b: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            court,
            team_a,
            team_b,
            score: (0, 0),
            winner: None,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    /// The winning team, once a winner has been set.
    pub fn winning_team(&self) -> Option<&Team> {
        self.winner.map(|side| self.team(side))
    }

    /// All four players on court, team A first.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.team_a.members().iter().chain(self.team_b.members().iter())
    }
}
