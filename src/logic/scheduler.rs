//! Round scheduling: who plays whom each round.
//!
//! - Round 1: fixed seed by input position, (1,2) vs (3,4) and (5,6) vs (7,8).
//! - Round 2: positions (9,10) vs (11,12) on court 1; the two round 1 winners meet on
//!   court 2, as whole teams or mixed depending on [`AdvancementPolicy`].
//! - Round 3+: [`LateRoundPolicy`] decides between reseeding the top 8 of the standings
//!   and an elimination bracket fed only by the previous winners.
//!
//! Every schedule is pure given its inputs (and the RNG for mixing).

use crate::models::{
    AdvancementPolicy, GameMatch, LateRoundPolicy, Roster, Round, Team, TournamentConfig,
    TournamentError,
};
use rand::Rng;
use std::collections::HashSet;

/// Produce the matches for `round_number`. An empty result means the tournament is over.
///
/// `previous` is the last committed round; it is required from round 2 on.
pub fn schedule_round<R: Rng + ?Sized>(
    round_number: u32,
    roster: &Roster,
    previous: Option<&Round>,
    config: &TournamentConfig,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    let matches = match round_number {
        0 => {
            return Err(TournamentError::Scheduling(
                "rounds are numbered from 1".to_string(),
            ))
        }
        1 => fixed_seed_matches(roster)?,
        2 => {
            let winners = previous_winners(round_number, previous)?;
            advancement_matches(roster, &winners, config.advancement, rng)?
        }
        _ => match config.late_rounds {
            LateRoundPolicy::RankingReseed => {
                if round_number > config.total_rounds {
                    Vec::new()
                } else {
                    ranking_reseed_matches(roster)?
                }
            }
            LateRoundPolicy::EliminationBracket => {
                let winners = previous_winners(round_number, previous)?;
                elimination_matches(&winners, config.advancement, rng)?
            }
        },
    };

    ensure_disjoint(&matches)?;
    log::debug!(
        "Scheduled round {}: {}",
        round_number,
        matches
            .iter()
            .map(|m| format!(
                "court {} {:?} vs {:?}",
                m.court,
                m.team_a.members(),
                m.team_b.members()
            ))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(matches)
}

/// Round 1: positions 1-4 on court 1, 5-8 on court 2. Positions 9-12 sit out.
pub fn fixed_seed_matches(roster: &Roster) -> Result<Vec<GameMatch>, TournamentError> {
    Ok(vec![
        GameMatch::new(1, team_at(roster, 1, 2)?, team_at(roster, 3, 4)?),
        GameMatch::new(2, team_at(roster, 5, 6)?, team_at(roster, 7, 8)?),
    ])
}

/// Round 2: positions 9-12 on court 1, the round 1 winners on court 2.
pub fn advancement_matches<R: Rng + ?Sized>(
    roster: &Roster,
    winners: &[Team],
    policy: AdvancementPolicy,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    let (team_a, team_b) = match winners {
        [first, second] => advance(first, second, policy, rng),
        _ => {
            return Err(TournamentError::Scheduling(format!(
                "round 2 needs exactly 2 round 1 winners, got {}",
                winners.len()
            )))
        }
    };
    Ok(vec![
        GameMatch::new(1, team_at(roster, 9, 10)?, team_at(roster, 11, 12)?),
        GameMatch::new(2, team_a, team_b),
    ])
}

/// Round 3+ under ranking reseed: within each group of four by rank,
/// highest and lowest play the two middle ranks. Ranks 9-12 sit out.
pub fn ranking_reseed_matches(roster: &Roster) -> Result<Vec<GameMatch>, TournamentError> {
    let ranked: Vec<&str> = roster.ranked().into_iter().map(|p| p.name.as_str()).collect();
    if ranked.len() < 8 {
        return Err(TournamentError::Scheduling(format!(
            "ranking reseed needs at least 8 players, got {}",
            ranked.len()
        )));
    }
    Ok(ranked[..8]
        .chunks_exact(4)
        .zip(1u8..)
        .map(|(group, court)| {
            GameMatch::new(
                court,
                Team::new(group[0], group[3]),
                Team::new(group[1], group[2]),
            )
        })
        .collect())
}

/// Round 3+ under the elimination bracket: two remaining winning teams play a single
/// match on court 1; a lone winner ends the tournament.
pub fn elimination_matches<R: Rng + ?Sized>(
    winners: &[Team],
    policy: AdvancementPolicy,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    match winners {
        [_] => Ok(Vec::new()),
        [first, second] => {
            let (team_a, team_b) = advance(first, second, policy, rng);
            Ok(vec![GameMatch::new(1, team_a, team_b)])
        }
        _ => Err(TournamentError::Scheduling(format!(
            "elimination bracket needs 1 or 2 previous winners, got {}",
            winners.len()
        ))),
    }
}

/// Re-pair the players of two teams {a,b} and {c,d} so no original pair survives:
/// either {a,c} vs {b,d} or {a,d} vs {b,c}, each with probability 1/2.
pub fn mix_teams<R: Rng + ?Sized>(first: &Team, second: &Team, rng: &mut R) -> (Team, Team) {
    let [a, b] = first.members();
    let [c, d] = second.members();
    if rng.gen_bool(0.5) {
        (Team::new(a.clone(), c.clone()), Team::new(b.clone(), d.clone()))
    } else {
        (Team::new(a.clone(), d.clone()), Team::new(b.clone(), c.clone()))
    }
}

fn advance<R: Rng + ?Sized>(
    first: &Team,
    second: &Team,
    policy: AdvancementPolicy,
    rng: &mut R,
) -> (Team, Team) {
    match policy {
        AdvancementPolicy::PreserveTeams => (first.clone(), second.clone()),
        AdvancementPolicy::MixWinners => mix_teams(first, second, rng),
    }
}

/// Winning teams of the round just before `round_number`, which must be fully decided.
fn previous_winners(round_number: u32, previous: Option<&Round>) -> Result<Vec<Team>, TournamentError> {
    let previous = previous.ok_or_else(|| {
        TournamentError::Scheduling(format!("round {} needs the previous round's results", round_number))
    })?;
    if previous.number + 1 != round_number {
        return Err(TournamentError::Scheduling(format!(
            "round {} cannot follow round {}",
            round_number, previous.number
        )));
    }
    let undecided = previous.courts_without_winner();
    if !undecided.is_empty() {
        return Err(TournamentError::Scheduling(format!(
            "round {} has no winner on courts {:?}",
            previous.number, undecided
        )));
    }
    Ok(previous.winning_teams())
}

fn team_at(roster: &Roster, first: usize, second: usize) -> Result<Team, TournamentError> {
    let name = |pos: usize| {
        roster
            .name_at(pos)
            .cloned()
            .ok_or_else(|| TournamentError::Scheduling(format!("no player at position {}", pos)))
    };
    Ok(Team::new(name(first)?, name(second)?))
}

/// No player may appear twice within one round, and courts must be unique.
fn ensure_disjoint(matches: &[GameMatch]) -> Result<(), TournamentError> {
    let mut players = HashSet::new();
    let mut courts = HashSet::new();
    for m in matches {
        if !courts.insert(m.court) {
            return Err(TournamentError::Scheduling(format!("court {} used twice", m.court)));
        }
        for p in m.players() {
            if !players.insert(p.as_str()) {
                return Err(TournamentError::Scheduling(format!(
                    "player '{}' scheduled twice in one round",
                    p
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_disjoint_rejects_player_on_two_courts() {
        let matches = vec![
            GameMatch::new(1, Team::new("A", "B"), Team::new("C", "D")),
            GameMatch::new(2, Team::new("A", "E"), Team::new("F", "G")),
        ];
        assert!(matches!(
            ensure_disjoint(&matches),
            Err(TournamentError::Scheduling(_))
        ));
    }

    #[test]
    fn ensure_disjoint_rejects_repeated_court() {
        let matches = vec![
            GameMatch::new(1, Team::new("A", "B"), Team::new("C", "D")),
            GameMatch::new(1, Team::new("E", "F"), Team::new("G", "H")),
        ];
        assert!(ensure_disjoint(&matches).is_err());
    }
}
