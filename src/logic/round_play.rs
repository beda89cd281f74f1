//! Round play: score entry per match and the all-or-nothing round commit.

use crate::logic::scheduler::schedule_round;
use crate::models::{
    GameMatch, MatchId, Roster, Round, RoundState, ScoringPolicy, Side, Tournament,
    TournamentError, TournamentState, MAX_GAME_SCORE,
};
use chrono::Utc;

/// Enter the score for one match of the current round.
///
/// The score is stored either way, but only a non-tied, non-(0, 0) score sets a winner:
/// (0, 0) fails with `RejectedUnset`, equal non-zero scores with `RejectedTie`, and any
/// winner set by an earlier submission is cleared. Scores above 4 are rejected without
/// touching the match.
pub fn submit_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_a: u8,
    score_b: u8,
) -> Result<GameMatch, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    if score_a > MAX_GAME_SCORE || score_b > MAX_GAME_SCORE {
        return Err(TournamentError::ScoreOutOfRange {
            max: MAX_GAME_SCORE,
            score_a,
            score_b,
        });
    }
    let round = tournament
        .current_round
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    let round_number = round.number;
    let m = round
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;

    m.score = (score_a, score_b);
    m.winner = match score_a.cmp(&score_b) {
        std::cmp::Ordering::Greater => Some(Side::A),
        std::cmp::Ordering::Less => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    };
    let result = match (score_a, score_b) {
        (0, 0) => Err(TournamentError::RejectedUnset { court: m.court }),
        (a, b) if a == b => {
            log::warn!("Round {} court {}: tie {}-{} rejected", round_number, m.court, a, b);
            Err(TournamentError::RejectedTie { court: m.court, score: a })
        }
        _ => Ok(m.clone()),
    };
    round.refresh_state();
    result
}

/// Commit the current round: award every match at once, close the round, and schedule
/// the next one (or complete the tournament when nothing is left to schedule).
///
/// Fails with `IncompleteRound` if any match lacks a winner; standings are untouched
/// unless the whole commit, including scheduling the next round, succeeds.
/// Returns a snapshot of the updated roster.
pub fn commit_round(tournament: &mut Tournament) -> Result<Roster, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .current_round
        .as_ref()
        .ok_or(TournamentError::InvalidState)?;
    let courts = round.courts_without_winner();
    if !courts.is_empty() {
        return Err(TournamentError::IncompleteRound { courts });
    }

    // Work on copies so a failure leaves the tournament exactly as it was.
    let mut roster = tournament.roster.clone();
    for m in &round.matches {
        apply_match_result(&mut roster, m, tournament.config.scoring)?;
    }
    let mut committed = round.clone();
    committed.state = RoundState::Committed;
    committed.committed_at = Some(Utc::now());

    let next_number = committed.number + 1;
    let next_matches = schedule_round(
        next_number,
        &roster,
        Some(&committed),
        &tournament.config,
        &mut tournament.rng,
    )?;

    log::info!(
        "Tournament {}: round {} committed ({} matches)",
        tournament.id,
        committed.number,
        committed.matches.len()
    );
    tournament.roster = roster;
    tournament.history.push(committed);
    if next_matches.is_empty() {
        tournament.current_round = None;
        tournament.state = TournamentState::Complete;
        log::info!(
            "Tournament {} complete after {} rounds",
            tournament.id,
            tournament.history.len()
        );
    } else {
        tournament.current_round = Some(Round::new(next_number, next_matches));
    }
    Ok(tournament.roster.clone())
}

/// Apply one decided match to the standings and per-player match counters.
fn apply_match_result(
    roster: &mut Roster,
    m: &GameMatch,
    scoring: ScoringPolicy,
) -> Result<(), TournamentError> {
    let winner = m.winner.ok_or(TournamentError::IncompleteRound {
        courts: vec![m.court],
    })?;
    let (winning_team, losing_team) = match winner {
        Side::A => (&m.team_a, &m.team_b),
        Side::B => (&m.team_b, &m.team_a),
    };
    match scoring {
        ScoringPolicy::MatchWins => roster.award(winning_team, 1)?,
        ScoringPolicy::GamesWon => {
            roster.award(&m.team_a, u32::from(m.score.0))?;
            roster.award(&m.team_b, u32::from(m.score.1))?;
        }
    }
    roster.record_result(winning_team, true)?;
    roster.record_result(losing_team, false)?;
    Ok(())
}
