//! Match, MatchStatus and Score for a single fixture between two participants.

use serde::{Deserialize, Serialize};

/// Unique identifier for a match within a tournament (e.g. `match_r2_0`, `match_groupA_0_1`).
pub type MatchId = String;

/// Progress of a single match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    /// Scores entered but level; no winner yet.
    InProgress,
    Completed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::InProgress => write!(f, "in_progress"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A score entry for one match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score_1: u32,
    pub score_2: u32,
}

impl Score {
    pub fn new(score_1: u32, score_2: u32) -> Self {
        Self { score_1, score_2 }
    }
}

/// A single match: two participant slots, scores and bracket/group placement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Empty while waiting for the winner of a feeding match.
    pub team_1: String,
    pub team_2: String,
    #[serde(default)]
    pub score_1: u32,
    #[serde(default)]
    pub score_2: u32,
    #[serde(default)]
    pub status: MatchStatus,
    /// Only set when `status` is `Completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Group label (groups format only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// 1-indexed bracket round (bracket formats only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// 0-indexed slot within the round, left to right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Match that receives this match's winner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<MatchId>,
}

impl Match {
    /// A round-robin match between two known participants.
    pub fn group_match(
        id: impl Into<MatchId>,
        team_1: impl Into<String>,
        team_2: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            team_1: team_1.into(),
            team_2: team_2.into(),
            group: Some(group.into()),
            ..Self::default()
        }
    }

    /// A bracket match; slots may be empty (TBD).
    pub fn bracket_match(round: u32, position: u32, team_1: String, team_2: String) -> Self {
        Self {
            id: bracket_match_id(round, position),
            team_1,
            team_2,
            round: Some(round),
            position: Some(position),
            ..Self::default()
        }
    }

    /// Both participant slots are filled.
    pub fn is_ready(&self) -> bool {
        !self.team_1.is_empty() && !self.team_2.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

/// Id of the bracket match at `round`/`position`.
pub fn bracket_match_id(round: u32, position: u32) -> MatchId {
    format!("match_r{}_{}", round, position)
}
