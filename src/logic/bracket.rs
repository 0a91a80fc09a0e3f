//! Single-elimination bracket: rounds, byes and successor links.

use crate::models::{bracket_match_id, Match, Participant, TournamentError};

/// Build a linked bracket from entrants in seeding order (already shuffled by the caller).
///
/// 1. `round_size` is the smallest power of two >= n; `round_size - n` entrants get a bye.
/// 2. The last `bye_count` entrants skip round 1 and go straight into round 2, taking
///    `team_1` of distinct round-2 matches first and `team_2` slots only when byes
///    outnumber round-2 matches.
/// 3. The remaining entrants are paired in order into round-1 matches. Each round-1 match
///    takes the next free round-2 slot as its `position`, so its winner lands in
///    `team_1` (even position) or `team_2` (odd) of match `position / 2`.
/// 4. Rounds 2..=total start with empty (TBD) slots apart from the byes.
///
/// Produces exactly `n - 1` matches.
pub fn build_bracket(entrants: &[Participant]) -> Result<Vec<Match>, TournamentError> {
    let n = entrants.len();
    if n < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }

    let round_size = n.next_power_of_two();
    let total_rounds = round_size.trailing_zeros();
    let bye_count = round_size - n;
    let played = n - bye_count;
    let slot_count = round_size / 2;

    log::debug!(
        "bracket: {} entrants, {} rounds, {} byes, {} first-round matches",
        n,
        total_rounds,
        bye_count,
        played / 2
    );

    let bye_slots = bye_slots(bye_count, slot_count);
    // Round-1 positions are the round-2 entry slots left over by byes, so they may skip values.
    let free_slots: Vec<usize> = (0..slot_count).filter(|s| !bye_slots.contains(s)).collect();

    let mut matches: Vec<Match> = entrants[..played]
        .chunks_exact(2)
        .zip(&free_slots)
        .map(|(pair, &slot)| Match::bracket_match(1, slot as u32, pair[0].clone(), pair[1].clone()))
        .collect();

    for round in 2..=total_rounds {
        let matches_in_round = 1u32 << (total_rounds - round);
        matches.extend(
            (0..matches_in_round)
                .map(|position| Match::bracket_match(round, position, String::new(), String::new())),
        );
    }

    for (entrant, &slot) in entrants[played..].iter().zip(&bye_slots) {
        let id = bracket_match_id(2, (slot / 2) as u32);
        if let Some(m) = matches.iter_mut().find(|m| m.id == id) {
            if slot % 2 == 0 {
                m.team_1 = entrant.clone();
            } else {
                m.team_2 = entrant.clone();
            }
        }
    }

    for m in &mut matches {
        if let (Some(round), Some(position)) = (m.round, m.position) {
            if round < total_rounds {
                m.next_match_id = Some(bracket_match_id(round + 1, position / 2));
            }
        }
    }

    Ok(matches)
}

/// Round-2 entry slots taken by byes: even (`team_1`) slots first, then odd ones.
fn bye_slots(bye_count: usize, slot_count: usize) -> Vec<usize> {
    (0..slot_count)
        .step_by(2)
        .chain((1..slot_count).step_by(2))
        .take(bye_count)
        .collect()
}
