//! Mexicano tournament organizer: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    advancement_matches, commit_round, elimination_matches, fixed_seed_matches, leaderboard_csv,
    mix_teams, parse_player_names, ranking_reseed_matches, schedule_round, setup, submit_score,
};
pub use models::{
    AdvancementPolicy, GameMatch, LateRoundPolicy, MatchId, Player, PlayerId, PlayerStats, Roster,
    Round, RoundState, ScoringPolicy, Side, Team, Tournament, TournamentConfig, TournamentError,
    TournamentId, TournamentState, DEFAULT_TOTAL_ROUNDS, MAX_GAME_SCORE, ROSTER_SIZE,
};
