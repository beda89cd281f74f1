//! Data structures for the Mexicano tournament: players, roster, matches, rounds, tournament state.

mod config;
mod game;
mod player;
mod roster;
mod round;
mod tournament;

pub use config::{
    AdvancementPolicy, LateRoundPolicy, ScoringPolicy, TournamentConfig, DEFAULT_TOTAL_ROUNDS,
};
pub use game::{GameMatch, MatchId, Side, Team, MAX_GAME_SCORE};
pub use player::{Player, PlayerId, PlayerStats};
pub use roster::{Roster, ROSTER_SIZE};
pub use round::{Round, RoundState};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
