//! Tournament and TournamentState.

use crate::models::config::{LateRoundPolicy, TournamentConfig};
use crate::models::game::{MatchId, Team};
use crate::models::player::PlayerId;
use crate::models::roster::Roster;
use crate::models::round::Round;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Setup needs exactly 12 player names.
    WrongPlayerCount { expected: usize, found: usize },
    /// A player name is blank after trimming.
    EmptyPlayerName,
    /// The same name was entered twice (case-sensitive).
    DuplicatePlayerName(String),
    /// The configuration cannot produce a tournament.
    InvalidConfig(String),
    /// A game score above the allowed maximum.
    ScoreOutOfRange { max: u8, score_a: u8, score_b: u8 },
    /// Equal non-zero scores: the match has no winner.
    RejectedTie { court: u8, score: u8 },
    /// (0, 0): the score has not been entered yet.
    RejectedUnset { court: u8 },
    /// Commit attempted while these courts have no winner.
    IncompleteRound { courts: Vec<u8> },
    /// The scheduler was handed context that does not fit the round.
    Scheduling(String),
    /// No match with this id in the current round.
    MatchNotFound(MatchId),
    /// Player not on the roster.
    PlayerNotFound(PlayerId),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Writing an export failed.
    Export(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::WrongPlayerCount { expected, found } => {
                write!(f, "Please enter exactly {} player names (got {})", expected, found)
            }
            TournamentError::EmptyPlayerName => write!(f, "Player names cannot be empty"),
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "Player name '{}' was entered more than once", name)
            }
            TournamentError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            TournamentError::ScoreOutOfRange { max, score_a, score_b } => {
                write!(f, "Scores must be between 0 and {} (got {}-{})", max, score_a, score_b)
            }
            TournamentError::RejectedTie { court, score } => {
                write!(f, "Court {}: a tie ({}-{}) is not a valid result", court, score, score)
            }
            TournamentError::RejectedUnset { court } => {
                write!(f, "Court {}: score has not been entered", court)
            }
            TournamentError::IncompleteRound { courts } => {
                write!(f, "Not all matches have a winner (courts {:?})", courts)
            }
            TournamentError::Scheduling(reason) => write!(f, "Scheduling error: {}", reason),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found in the current round"),
            TournamentError::PlayerNotFound(name) => write!(f, "Player '{}' not found", name),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::Export(reason) => write!(f, "Export failed: {}", reason),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// A round is open for scores.
    #[default]
    InProgress,
    /// No further round is scheduled; standings are final.
    Complete,
}

/// Full tournament state: roster, the open round, committed history, and policies.
///
/// Every operation takes this explicitly; there is no global session state.
#[derive(Clone, Debug, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub config: TournamentConfig,
    pub roster: Roster,
    /// The round currently accepting scores. None once the tournament is complete.
    pub current_round: Option<Round>,
    /// Committed rounds, oldest first.
    pub history: Vec<Round>,
    pub state: TournamentState,
    /// Source for team mixing; seeded from `config.rng_seed` when set.
    #[serde(skip)]
    pub(crate) rng: StdRng,
}

impl Tournament {
    /// Create a tournament with no round scheduled yet. Use `logic::setup` to start one.
    pub fn new(roster: Roster, config: TournamentConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            config,
            roster,
            current_round: None,
            history: Vec::new(),
            state: TournamentState::InProgress,
            rng,
        }
    }

    /// The round currently accepting scores.
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Number of the open round, or of the last committed one once complete.
    pub fn round_number(&self) -> u32 {
        self.current_round
            .as_ref()
            .or_else(|| self.history.last())
            .map(|r| r.number)
            .unwrap_or(0)
    }

    pub fn last_committed_round(&self) -> Option<&Round> {
        self.history.last()
    }

    /// (player, points), descending points, ties by ascending name.
    pub fn leaderboard(&self) -> Vec<(PlayerId, u32)> {
        self.roster.leaderboard()
    }

    pub fn is_complete(&self) -> bool {
        self.state == TournamentState::Complete
    }

    /// Winning team of the final match, for a completed elimination bracket.
    pub fn champions(&self) -> Option<&Team> {
        if !self.is_complete() || self.config.late_rounds != LateRoundPolicy::EliminationBracket {
            return None;
        }
        let last = self.history.last()?;
        match last.matches.as_slice() {
            [only] => only.winning_team(),
            _ => None,
        }
    }
}
