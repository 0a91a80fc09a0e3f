//! MatchSet: the tournament's matches, kept in generation order and indexed by id.
//!
//! Bracket links (`next_match_id`) are plain ids resolved through the index, so the
//! set serializes as a flat JSON array.

use crate::models::game::{Match, MatchId};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Match>", into = "Vec<Match>")]
pub struct MatchSet {
    matches: Vec<Match>,
    index: HashMap<MatchId, usize>,
}

impl MatchSet {
    /// Build a set from generated matches. Ids must be unique.
    pub fn new(matches: Vec<Match>) -> Result<Self, TournamentError> {
        let mut index = HashMap::with_capacity(matches.len());
        for (i, m) in matches.iter().enumerate() {
            if index.insert(m.id.clone(), i).is_some() {
                return Err(TournamentError::DuplicateMatchId(m.id.clone()));
            }
        }
        Ok(Self { matches, index })
    }

    pub fn get(&self, id: &str) -> Option<&Match> {
        self.index.get(id).map(|&i| &self.matches[i])
    }

    /// Mutable access by id. Callers must not change the match's `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Match> {
        match self.index.get(id) {
            Some(&i) => self.matches.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Highest bracket round in the set; None for group-only sets.
    pub fn final_round(&self) -> Option<u32> {
        self.matches.iter().filter_map(|m| m.round).max()
    }

    /// The single match of the last bracket round.
    pub fn final_match(&self) -> Option<&Match> {
        let last = self.final_round()?;
        self.matches.iter().find(|m| m.round == Some(last))
    }

    /// Matches grouped by group label, groups in order of first appearance.
    pub fn by_group(&self) -> Vec<(&str, Vec<&Match>)> {
        let mut groups: Vec<(&str, Vec<&Match>)> = Vec::new();
        for m in &self.matches {
            let Some(label) = m.group.as_deref() else {
                continue;
            };
            match groups.iter_mut().find(|(l, _)| *l == label) {
                Some((_, list)) => list.push(m),
                None => groups.push((label, vec![m])),
            }
        }
        groups
    }

    /// Bracket matches by round, each round sorted by position.
    pub fn by_round(&self) -> BTreeMap<u32, Vec<&Match>> {
        let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
        for m in &self.matches {
            if let Some(r) = m.round {
                rounds.entry(r).or_default().push(m);
            }
        }
        for list in rounds.values_mut() {
            list.sort_by_key(|m| m.position);
        }
        rounds
    }

    /// Check every `next_match_id`: the successor exists, is one round later and sits at
    /// `position / 2`.
    pub fn validate_links(&self) -> Result<(), TournamentError> {
        for m in &self.matches {
            let Some(next_id) = m.next_match_id.as_deref() else {
                continue;
            };
            let next = self
                .get(next_id)
                .ok_or_else(|| TournamentError::BrokenBracketLink(m.id.clone()))?;
            let round_ok = matches!((m.round, next.round), (Some(r), Some(nr)) if nr == r + 1);
            let position_ok =
                matches!((m.position, next.position), (Some(p), Some(np)) if np == p / 2);
            if !round_ok || !position_ok {
                return Err(TournamentError::BrokenBracketLink(m.id.clone()));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Match>> for MatchSet {
    type Error = TournamentError;

    fn try_from(matches: Vec<Match>) -> Result<Self, Self::Error> {
        Self::new(matches)
    }
}

impl From<MatchSet> for Vec<Match> {
    fn from(set: MatchSet) -> Self {
        set.matches
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
