//! Tournament-level flow: generate the schedule (Upcoming -> Active) and record results
//! (Active -> Completed when the final is decided).

use crate::logic::results::{apply_result, ResultOutcome};
use crate::logic::schedule::generate_schedule;
use crate::models::{Score, Tournament, TournamentError, TournamentStatus};
use rand::Rng;

/// Generate all matches for the roster and start the tournament.
pub fn generate_matches<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Upcoming {
        return Err(TournamentError::InvalidState);
    }
    let matches = generate_schedule(
        &tournament.teams,
        tournament.format,
        tournament.group_size(),
        rng,
    )?;
    tournament.matches = matches;
    tournament.status = TournamentStatus::Active;
    tournament.winner = None;
    log::info!(
        "tournament '{}' started with {} matches",
        tournament.name,
        tournament.matches.len()
    );
    Ok(())
}

/// Record a score for one match and update the tournament's status and winner.
///
/// Groups tournaments never complete here; standings are left to the caller.
pub fn record_result(
    tournament: &mut Tournament,
    match_id: &str,
    score: Score,
) -> Result<ResultOutcome, TournamentError> {
    if tournament.status == TournamentStatus::Upcoming {
        return Err(TournamentError::InvalidState);
    }
    let outcome = apply_result(&mut tournament.matches, match_id, score)?;

    if let Some(champion) = &outcome.champion {
        tournament.status = TournamentStatus::Completed;
        tournament.winner = Some(champion.clone());
        log::info!("tournament '{}' completed, champion: {}", tournament.name, champion);
    } else if tournament.status == TournamentStatus::Completed {
        // A correction turned the final into a draw.
        let final_reopened = tournament
            .matches
            .final_match()
            .is_some_and(|m| m.id == match_id && !m.is_completed());
        if final_reopened {
            tournament.status = TournamentStatus::Active;
            tournament.winner = None;
        }
    }
    Ok(outcome)
}
