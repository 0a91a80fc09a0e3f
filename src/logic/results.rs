//! Result propagation: score a match, move the winner forward, detect the champion.

use crate::models::{MatchSet, MatchStatus, Participant, Score, TournamentError};

/// What a recorded result produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResultOutcome {
    /// None for a draw.
    pub winner: Option<Participant>,
    /// Set when the scored match is the bracket final and has a winner.
    pub champion: Option<Participant>,
}

/// Apply a score to one match.
///
/// The higher score wins and the match becomes `Completed`; level scores leave it
/// `InProgress` with no winner (no tie-break, the bracket waits). A winner is copied into
/// the successor's `team_1` when this match's position is even, `team_2` when odd.
/// Re-applying the same score gives the same match set; a different winner overwrites the
/// successor slot.
///
/// Fails without touching anything if the id is unknown, either slot is still TBD, or the
/// successor is missing.
pub fn apply_result(
    matches: &mut MatchSet,
    match_id: &str,
    score: Score,
) -> Result<ResultOutcome, TournamentError> {
    let current = matches
        .get(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    if !current.is_ready() {
        return Err(TournamentError::MatchNotReady(match_id.to_string()));
    }

    let winner = if score.score_1 > score.score_2 {
        Some(current.team_1.clone())
    } else if score.score_2 > score.score_1 {
        Some(current.team_2.clone())
    } else {
        None
    };

    let successor = match (&winner, &current.next_match_id) {
        (Some(_), Some(next_id)) => {
            if !matches.contains(next_id) {
                return Err(TournamentError::BrokenBracketLink(current.id.clone()));
            }
            let into_first_slot = current.position.unwrap_or(0) % 2 == 0;
            Some((next_id.clone(), into_first_slot))
        }
        _ => None,
    };
    let is_final = current.round.is_some() && current.round == matches.final_round();

    let m = matches
        .get_mut(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    m.score_1 = score.score_1;
    m.score_2 = score.score_2;
    m.winner = winner.clone();
    m.status = if winner.is_some() {
        MatchStatus::Completed
    } else {
        MatchStatus::InProgress
    };

    if let (Some(w), Some((next_id, into_first_slot))) = (&winner, successor) {
        if let Some(next) = matches.get_mut(&next_id) {
            if into_first_slot {
                next.team_1 = w.clone();
            } else {
                next.team_2 = w.clone();
            }
            log::debug!("{} advances from {} to {}", w, match_id, next_id);
        }
    }

    let champion = if is_final { winner.clone() } else { None };
    if let Some(c) = &champion {
        log::info!("{} wins the final ({})", c, match_id);
    }
    Ok(ResultOutcome { winner, champion })
}
