//! Tournament organizer: library with models, schedule generation and result propagation.

pub mod import_export;
pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    apply_result, build_bracket, build_groups, generate_matches, generate_schedule, group_label,
    record_result, ResultOutcome, DEFAULT_GROUP_SIZE,
};
pub use models::{
    Match, MatchId, MatchSet, MatchStatus, Participant, Score, Tournament, TournamentError,
    TournamentFilter, TournamentFormat, TournamentId, TournamentStatus,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, TournamentRepository};
