//! Tournament business logic: setup, scheduling, score entry, round commit, export.

mod export;
mod round_play;
mod scheduler;
mod setup;

pub use export::leaderboard_csv;
pub use round_play::{commit_round, submit_score};
pub use scheduler::{
    advancement_matches, elimination_matches, fixed_seed_matches, mix_teams,
    ranking_reseed_matches, schedule_round,
};
pub use setup::{parse_player_names, setup};
