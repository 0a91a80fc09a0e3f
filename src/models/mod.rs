//! Data structures for the organizer: participants, matches, tournaments.

mod game;
mod match_set;
mod participant;
mod tournament;

pub use game::{bracket_match_id, Match, MatchId, MatchStatus, Score};
pub use match_set::MatchSet;
pub use participant::{ensure_unique, find_name, normalize_name, Participant};
pub use tournament::{
    Tournament, TournamentError, TournamentFilter, TournamentFormat, TournamentId, TournamentStatus,
};
