//! Tournament configuration: the scheduling and scoring policies fixed at setup.

use serde::{Deserialize, Serialize};

/// Rounds played under ranking reseed unless configured otherwise (2 seeded + 3 ranked).
pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;

/// How the round 1 court winners meet on court 2 in round 2.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancementPolicy {
    /// The two winning teams play each other as they are.
    #[default]
    PreserveTeams,
    /// The four winners are re-paired into two new teams, chosen at random
    /// so that no original pairing survives.
    MixWinners,
}

/// How rounds from 3 onwards are scheduled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateRoundPolicy {
    /// Top 8 of the standings play, {1,4} vs {2,3} on court 1 and {5,8} vs {6,7} on court 2.
    #[default]
    RankingReseed,
    /// Only the previous round's winners play on; ends when one winning team remains.
    EliminationBracket,
}

/// How a committed match converts into standings points.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// One point to each player of the winning team.
    #[default]
    MatchWins,
    /// Each team's players receive the games that team won.
    GamesWon,
}

/// Policies chosen at setup time; fixed for the life of a tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub advancement: AdvancementPolicy,
    pub late_rounds: LateRoundPolicy,
    pub scoring: ScoringPolicy,
    /// Last round played under `RankingReseed`. Ignored by `EliminationBracket`.
    pub total_rounds: u32,
    /// Seed for team mixing; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            advancement: AdvancementPolicy::default(),
            late_rounds: LateRoundPolicy::default(),
            scoring: ScoringPolicy::default(),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            rng_seed: None,
        }
    }
}
