//! Participant names: the roster is a list of display names, unique per tournament.

use crate::models::tournament::TournamentError;

/// Participants are identified by their display name.
pub type Participant = String;

/// Trim a raw name and reject empty ones.
pub fn normalize_name(raw: &str) -> Result<Participant, TournamentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Case-insensitive lookup of a name in the roster; returns its index.
pub fn find_name(roster: &[Participant], name: &str) -> Option<usize> {
    let name = name.trim();
    roster.iter().position(|p| p.eq_ignore_ascii_case(name))
}

/// Check that no name appears twice in `participants` (exact comparison; roster entry
/// already rejects case variants).
pub fn ensure_unique(participants: &[Participant]) -> Result<(), TournamentError> {
    for (i, name) in participants.iter().enumerate() {
        if participants[..i].contains(name) {
            return Err(TournamentError::DuplicateParticipant(name.clone()));
        }
    }
    Ok(())
}
