//! Group stage: split participants into labelled groups and schedule a round-robin in each.

use crate::models::{Match, Participant, TournamentError};

/// Label for the group at `index`: `A`..`Z`, then `A1`..`Z1`, `A2`.. and so on.
pub fn group_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        cycle => format!("{}{}", letter, cycle),
    }
}

/// Build round-robin matches for participants in seeding order.
///
/// Participants are cut into consecutive groups of up to `group_size` (the last group may
/// be smaller). Each unordered pair within a group plays once, enumerated as `(i, j)`
/// with `i < j`. No rounds or links.
pub fn build_groups(
    participants: &[Participant],
    group_size: usize,
) -> Result<Vec<Match>, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }
    if group_size < 2 {
        return Err(TournamentError::InvalidGroupSize(group_size));
    }

    let mut matches = Vec::new();
    for (g, members) in participants.chunks(group_size).enumerate() {
        let label = group_label(g);
        log::debug!("group {}: {} participants", label, members.len());
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                matches.push(Match::group_match(
                    format!("match_group{}_{}_{}", label, i, j),
                    members[i].clone(),
                    members[j].clone(),
                    label.clone(),
                ));
            }
        }
    }
    Ok(matches)
}
