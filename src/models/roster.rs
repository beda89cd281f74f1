//! Roster: the fixed, ordered list of 12 players and their standings.

use crate::models::game::Team;
use crate::models::player::{Player, PlayerId};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of players in a Mexicano tournament (3 groups of 4, 2 courts).
pub const ROSTER_SIZE: usize = 12;

/// Players in their original input order. Input order drives the round 1 and 2 seeding,
/// so it is never re-sorted; ranking views are produced on demand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from exactly 12 distinct names (trimmed, compared case-sensitively).
    /// Every player starts at 0 points.
    pub fn initialize<I, S>(names: I) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        if names.len() != ROSTER_SIZE {
            return Err(TournamentError::WrongPlayerCount {
                expected: ROSTER_SIZE,
                found: names.len(),
            });
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(TournamentError::EmptyPlayerName);
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(TournamentError::DuplicatePlayerName(name.clone()));
            }
        }
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
        })
    }

    /// Players in input order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Name of the player at a 1-based input position.
    pub fn name_at(&self, position: usize) -> Option<&PlayerId> {
        position
            .checked_sub(1)
            .and_then(|i| self.players.get(i))
            .map(|p| &p.name)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Player, TournamentError> {
        self.players
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))
    }

    /// Check that both members of a team are on the roster.
    pub fn check_team(&self, team: &Team) -> Result<(), TournamentError> {
        for name in team.members() {
            if self.get(name).is_none() {
                return Err(TournamentError::PlayerNotFound(name.clone()));
            }
        }
        Ok(())
    }

    /// Add `points` to each member of the team.
    pub fn award(&mut self, team: &Team, points: u32) -> Result<(), TournamentError> {
        self.check_team(team)?;
        for name in team.members() {
            self.get_mut(name)?.add_points(points);
        }
        Ok(())
    }

    /// Count one played match (and a win, if `won`) for each member of the team.
    pub fn record_result(&mut self, team: &Team, won: bool) -> Result<(), TournamentError> {
        self.check_team(team)?;
        for name in team.members() {
            self.get_mut(name)?.record_match(won);
        }
        Ok(())
    }

    /// Players by descending points, ties broken by ascending name.
    /// Deterministic for identical standings; late-round pairing depends on it.
    pub fn ranked(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
        ranked
    }

    /// (player, points) in ranked order.
    pub fn leaderboard(&self) -> Vec<(PlayerId, u32)> {
        self.ranked()
            .into_iter()
            .map(|p| (p.name.clone(), p.points))
            .collect()
    }
}
