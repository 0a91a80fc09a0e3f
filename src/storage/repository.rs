//! TournamentRepository: the tournament list stored as one JSON array under `tournaments`.

use crate::models::{Tournament, TournamentError, TournamentFilter, TournamentId};
use crate::storage::kv::KeyValueStore;
use crate::storage::StorageError;

/// Key holding the JSON array of all tournaments.
pub const TOURNAMENTS_KEY: &str = "tournaments";

pub struct TournamentRepository<S> {
    store: S,
}

impl<S: KeyValueStore> TournamentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// All tournaments in insertion order.
    pub fn load_all(&self) -> Result<Vec<Tournament>, StorageError> {
        match self.store.get(TOURNAMENTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store_all(&mut self, tournaments: &[Tournament]) -> Result<(), StorageError> {
        let json = serde_json::to_string(tournaments)?;
        self.store.set(TOURNAMENTS_KEY, json)
    }

    /// Tournaments whose status passes `filter`.
    pub fn list(&self, filter: TournamentFilter) -> Result<Vec<Tournament>, StorageError> {
        let mut all = self.load_all()?;
        all.retain(|t| filter.matches(t.status));
        Ok(all)
    }

    pub fn get(&self, id: TournamentId) -> Result<Tournament, StorageError> {
        self.load_all()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StorageError::NotFound(id))
    }

    /// Append a new tournament.
    pub fn insert(&mut self, tournament: Tournament) -> Result<(), StorageError> {
        let mut all = self.load_all()?;
        if all.iter().any(|t| t.id == tournament.id) {
            return Err(StorageError::AlreadyExists(tournament.id));
        }
        log::info!("created tournament '{}' ({})", tournament.name, tournament.id);
        all.push(tournament);
        self.store_all(&all)
    }

    /// Replace the stored tournament with the same id.
    pub fn save(&mut self, tournament: Tournament) -> Result<(), StorageError> {
        let mut all = self.load_all()?;
        let slot = all
            .iter_mut()
            .find(|t| t.id == tournament.id)
            .ok_or(StorageError::NotFound(tournament.id))?;
        *slot = tournament;
        self.store_all(&all)
    }

    /// Load, modify and save one tournament. Nothing is written if `f` fails.
    pub fn update<T, F>(&mut self, id: TournamentId, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Tournament) -> Result<T, TournamentError>,
    {
        let mut all = self.load_all()?;
        let tournament = all
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StorageError::NotFound(id))?;
        let value = f(tournament)?;
        self.store_all(&all)?;
        Ok(value)
    }

    pub fn delete(&mut self, id: TournamentId) -> Result<(), StorageError> {
        let mut all = self.load_all()?;
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Err(StorageError::NotFound(id));
        }
        self.store_all(&all)
    }
}
