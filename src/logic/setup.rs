//! Setup phase: validate the player list and config, then open round 1.

use crate::logic::scheduler::schedule_round;
use crate::models::{LateRoundPolicy, Roster, Round, Tournament, TournamentConfig, TournamentError};

/// Split free text into player names: one per line, trimmed, blank lines dropped.
pub fn parse_player_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Start a tournament: exactly 12 distinct names; round 1 is scheduled immediately.
/// On failure nothing is created.
pub fn setup<I, S>(names: I, config: TournamentConfig) -> Result<Tournament, TournamentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_config(&config)?;
    let roster = Roster::initialize(names)?;
    let mut tournament = Tournament::new(roster, config);

    let matches = schedule_round(1, &tournament.roster, None, &config, &mut tournament.rng)?;
    tournament.current_round = Some(Round::new(1, matches));

    log::info!(
        "Tournament {} started with 12 players ({:?}, {:?}, {:?})",
        tournament.id,
        config.advancement,
        config.late_rounds,
        config.scoring
    );
    Ok(tournament)
}

fn validate_config(config: &TournamentConfig) -> Result<(), TournamentError> {
    if config.late_rounds == LateRoundPolicy::RankingReseed && config.total_rounds < 2 {
        return Err(TournamentError::InvalidConfig(format!(
            "total_rounds must be at least 2 (got {})",
            config.total_rounds
        )));
    }
    Ok(())
}
