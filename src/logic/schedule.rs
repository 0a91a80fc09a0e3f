//! Schedule generation: validate, shuffle, then build groups or a bracket.

use crate::logic::bracket::build_bracket;
use crate::logic::groups::build_groups;
use crate::models::{ensure_unique, MatchSet, Participant, TournamentError, TournamentFormat};
use rand::seq::SliceRandom;
use rand::Rng;

/// Group size used when the groups format is scheduled without one.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// Generate the complete match set for `participants` in the given format.
///
/// Participants are shuffled with `rng` first (pass `rand::thread_rng()` in production,
/// a seeded `StdRng` in tests). Knockout and mixed both produce a linked bracket; groups
/// produce round-robin matches with `group_size` (default 4) participants per group.
///
/// Validation happens before anything is built: at least 2 distinct participants, and a
/// group size of at least 2 for groups.
pub fn generate_schedule<R: Rng + ?Sized>(
    participants: &[Participant],
    format: TournamentFormat,
    group_size: Option<usize>,
    rng: &mut R,
) -> Result<MatchSet, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }
    ensure_unique(participants)?;
    let group_size = group_size.unwrap_or(DEFAULT_GROUP_SIZE);
    if format == TournamentFormat::Groups && group_size < 2 {
        return Err(TournamentError::InvalidGroupSize(group_size));
    }

    let mut seeded = participants.to_vec();
    seeded.shuffle(rng);

    let matches = if format.has_bracket() {
        build_bracket(&seeded)?
    } else {
        build_groups(&seeded, group_size)?
    };
    let set = MatchSet::new(matches)?;
    set.validate_links()?;
    log::debug!(
        "generated {} matches for {} participants ({})",
        set.len(),
        participants.len(),
        format
    );
    Ok(set)
}
