use std::fs;
use std::path::PathBuf;

use crate::entry::LeaderboardEntry;
use crate::ranking::{merge_entry, MAX_ENTRIES};

/// Key-value style storage slot holding the serialized leaderboard.
/// Writes and removals never surface errors: persistence failures leave the
/// in-memory state authoritative for the running session.
pub trait StorageBackend {
    fn read(&self) -> Option<String>;
    fn write(&mut self, data: &str);
    fn remove(&mut self);
}

/// Single-file backend
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, data: &str) {
        if let Err(err) = fs::write(&self.path, data) {
            log::warn!("leaderboard write to {:?} failed: {err}", self.path);
        }
    }

    fn remove(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("leaderboard removal of {:?} failed: {err}", self.path);
            }
        }
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryBackend {
    data: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.data.clone()
    }

    fn write(&mut self, data: &str) {
        self.data = Some(data.to_string());
    }

    fn remove(&mut self) {
        self.data = None;
    }
}

/// Persisted, ranked collection of match records
pub struct Leaderboard {
    backend: Box<dyn StorageBackend>,
}

impl Leaderboard {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Parse the stored list, dropping malformed or partially-invalid
    /// records instead of failing the load.
    pub fn load(&self) -> Vec<LeaderboardEntry> {
        let Some(raw) = self.backend.read() else {
            return Vec::new();
        };
        let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(&raw) else {
            return Vec::new();
        };
        values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()
    }

    /// Merge a finished match into the stored ranking and persist the
    /// capped result. Returns the new ranking.
    pub fn add(&mut self, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
        let next = merge_entry(self.load(), entry);
        self.save(&next);
        next
    }

    pub fn clear(&mut self) {
        self.backend.remove();
    }

    fn save(&mut self, entries: &[LeaderboardEntry]) {
        let capped = &entries[..entries.len().min(MAX_ENTRIES)];
        match serde_json::to_string(capped) {
            Ok(json) => self.backend.write(&json),
            Err(err) => log::warn!("leaderboard serialization failed: {err}"),
        }
    }
}
