//! Tournament, TournamentFormat and TournamentStatus.

use crate::models::game::MatchId;
use crate::models::match_set::MatchSet;
use crate::models::participant::{find_name, normalize_name, Participant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 participants (or a planned roster below 2).
    NotEnoughParticipants,
    /// Group size below 2 for the groups format.
    InvalidGroupSize(usize),
    /// Tournament or participant name is blank.
    EmptyName,
    /// A participant with this name already exists.
    DuplicateParticipant(String),
    ParticipantNotFound(String),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    MatchNotFound(MatchId),
    /// One of the match's slots is still waiting for a feeding match.
    MatchNotReady(MatchId),
    DuplicateMatchId(MatchId),
    /// The match points at a successor that is missing or misplaced.
    BrokenBracketLink(MatchId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughParticipants => write!(f, "Need at least 2 participants"),
            TournamentError::InvalidGroupSize(size) => {
                write!(f, "Each group needs at least 2 participants (got {})", size)
            }
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DuplicateParticipant(name) => {
                write!(f, "Participant '{}' has already been added", name)
            }
            TournamentError::ParticipantNotFound(name) => write!(f, "Participant '{}' not found", name),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::MatchNotFound(id) => write!(f, "Match '{}' not found", id),
            TournamentError::MatchNotReady(id) => {
                write!(f, "Match '{}' is still waiting for its participants", id)
            }
            TournamentError::DuplicateMatchId(id) => write!(f, "Duplicate match id '{}'", id),
            TournamentError::BrokenBracketLink(id) => {
                write!(f, "Match '{}' links to a missing or misplaced successor", id)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How the schedule is built.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Round-robin within groups.
    #[default]
    Groups,
    /// Single-elimination bracket.
    Knockout,
    /// Scheduled like knockout.
    Mixed,
}

impl TournamentFormat {
    /// Knockout and mixed both produce a linked bracket.
    pub fn has_bracket(self) -> bool {
        matches!(self, TournamentFormat::Knockout | TournamentFormat::Mixed)
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentFormat::Groups => write!(f, "groups"),
            TournamentFormat::Knockout => write!(f, "knockout"),
            TournamentFormat::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for TournamentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groups" => Ok(TournamentFormat::Groups),
            "knockout" => Ok(TournamentFormat::Knockout),
            "mixed" => Ok(TournamentFormat::Mixed),
            other => Err(format!("unknown format '{}' (expected groups, knockout or mixed)", other)),
        }
    }
}

/// Lifecycle of a tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Roster is editable; no matches yet.
    #[default]
    Upcoming,
    /// Matches generated; scores being recorded.
    Active,
    /// The final has been decided.
    Completed,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Upcoming => write!(f, "upcoming"),
            TournamentStatus::Active => write!(f, "active"),
            TournamentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Listing filter: `Active` covers both upcoming and running tournaments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TournamentFilter {
    pub fn matches(self, status: TournamentStatus) -> bool {
        match self {
            TournamentFilter::All => true,
            TournamentFilter::Active => {
                matches!(status, TournamentStatus::Upcoming | TournamentStatus::Active)
            }
            TournamentFilter::Completed => status == TournamentStatus::Completed,
        }
    }
}

fn default_sport() -> String {
    "football".to_string()
}

fn default_teams_per_group() -> usize {
    4
}

/// Full tournament record as persisted: settings, roster, matches and result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default = "default_sport")]
    pub sport: String,
    #[serde(default)]
    pub format: TournamentFormat,
    /// Planned roster size (informational).
    #[serde(default)]
    pub teams_count: usize,
    #[serde(default = "default_teams_per_group")]
    pub teams_per_group: usize,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: TournamentStatus,
    /// Registered participants in registration order.
    #[serde(default)]
    pub teams: Vec<Participant>,
    #[serde(default)]
    pub matches: MatchSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Participant>,
}

impl Tournament {
    /// Create a new tournament in Upcoming state with an empty roster.
    pub fn new(
        name: &str,
        sport: impl Into<String>,
        format: TournamentFormat,
        teams_count: usize,
        teams_per_group: usize,
    ) -> Result<Self, TournamentError> {
        let name = normalize_name(name)?;
        if teams_count < 2 {
            return Err(TournamentError::NotEnoughParticipants);
        }
        if format == TournamentFormat::Groups && teams_per_group < 2 {
            return Err(TournamentError::InvalidGroupSize(teams_per_group));
        }
        let sport: String = sport.into();
        let sport = if sport.trim().is_empty() {
            default_sport()
        } else {
            sport.trim().to_string()
        };
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            sport,
            format,
            teams_count,
            teams_per_group,
            date: Utc::now(),
            status: TournamentStatus::Upcoming,
            teams: Vec::new(),
            matches: MatchSet::default(),
            winner: None,
        })
    }

    /// Add a participant (only while Upcoming). Names are trimmed and unique (case-insensitive).
    pub fn add_team(&mut self, name: &str) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Upcoming {
            return Err(TournamentError::InvalidState);
        }
        let name = normalize_name(name)?;
        if find_name(&self.teams, &name).is_some() {
            return Err(TournamentError::DuplicateParticipant(name));
        }
        self.teams.push(name);
        Ok(())
    }

    /// Remove a participant by name (only while Upcoming).
    pub fn remove_team(&mut self, name: &str) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Upcoming {
            return Err(TournamentError::InvalidState);
        }
        let idx = find_name(&self.teams, name)
            .ok_or_else(|| TournamentError::ParticipantNotFound(name.trim().to_string()))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Group size to schedule with; only meaningful for the groups format.
    pub fn group_size(&self) -> Option<usize> {
        (self.format == TournamentFormat::Groups).then_some(self.teams_per_group)
    }

    /// The champion, once the tournament is completed.
    pub fn champion(&self) -> Option<&str> {
        match self.status {
            TournamentStatus::Completed => self.winner.as_deref(),
            _ => None,
        }
    }
}
