//! Leaderboard export as CSV.

use crate::models::{Tournament, TournamentError};
use serde::Serialize;

#[derive(Serialize)]
struct LeaderboardRow<'a> {
    rank: usize,
    player: &'a str,
    points: u32,
    played: u32,
    won: u32,
}

/// Leaderboard as CSV with a header row, in `leaderboard()` order.
pub fn leaderboard_csv(tournament: &Tournament) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, p) in tournament.roster.ranked().into_iter().enumerate() {
        writer
            .serialize(LeaderboardRow {
                rank: i + 1,
                player: &p.name,
                points: p.points,
                played: p.matches_played,
                won: p.matches_won,
            })
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
