//! Tour persistence
//!
//! All tours live in `tours.json`; the active tour selection lives in
//! `session.json`. Loading never fails: a missing or unreadable file yields an
//! empty map so the application can still start.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::config::paths::TourPaths;
use crate::error::TourError;
use crate::models::{Tour, TourId};

use super::file_io::{read_json, write_json_atomic};

/// Persistence collaborator for the session
pub trait TourStore {
    /// Load every tour. Absent or corrupt data yields an empty map.
    fn load_tours(&self) -> HashMap<TourId, Tour>;

    /// Replace the stored tours with `tours`
    fn save_tours(&self, tours: &HashMap<TourId, Tour>) -> Result<(), TourError>;

    /// Load the stored active tour id, if any
    fn load_active_tour(&self) -> Option<TourId>;

    /// Store (or clear) the active tour id
    fn save_active_tour(&self, id: Option<TourId>) -> Result<(), TourError>;
}

/// Serializable tour data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TourData {
    tours: Vec<Tour>,
}

/// Serializable session data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    active_tour_id: Option<TourId>,
}

/// JSON file store under the data directory
pub struct JsonTourStore {
    tours_path: PathBuf,
    session_path: PathBuf,
}

impl JsonTourStore {
    /// Create a store for the given paths
    pub fn new(paths: &TourPaths) -> Self {
        Self {
            tours_path: paths.tours_file(),
            session_path: paths.session_file(),
        }
    }
}

impl TourStore for JsonTourStore {
    fn load_tours(&self) -> HashMap<TourId, Tour> {
        match read_json::<TourData, _>(&self.tours_path) {
            Ok(data) => {
                tracing::debug!(
                    path = %self.tours_path.display(),
                    count = data.tours.len(),
                    "Loaded tours"
                );
                data.tours.into_iter().map(|t| (t.id, t)).collect()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not load tours, starting empty");
                HashMap::new()
            }
        }
    }

    fn save_tours(&self, tours: &HashMap<TourId, Tour>) -> Result<(), TourError> {
        let mut list: Vec<Tour> = tours.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        write_json_atomic(&self.tours_path, &TourData { tours: list })?;
        tracing::debug!(path = %self.tours_path.display(), count = tours.len(), "Saved tours");
        Ok(())
    }

    fn load_active_tour(&self) -> Option<TourId> {
        match read_json::<SessionData, _>(&self.session_path) {
            Ok(data) => data.active_tour_id,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load active tour");
                None
            }
        }
    }

    fn save_active_tour(&self, id: Option<TourId>) -> Result<(), TourError> {
        write_json_atomic(&self.session_path, &SessionData { active_tour_id: id })
    }
}

/// In-memory store, used by tests
#[derive(Default)]
pub struct MemoryTourStore {
    tours: RwLock<HashMap<TourId, Tour>>,
    active: RwLock<Option<TourId>>,
    fail_saves: bool,
}

impl MemoryTourStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always fail
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Seed the store with tours
    pub fn with_tours(tours: impl IntoIterator<Item = Tour>) -> Self {
        let store = Self::default();
        if let Ok(mut data) = store.tours.write() {
            data.extend(tours.into_iter().map(|t| (t.id, t)));
        }
        store
    }

    fn check_writable(&self) -> Result<(), TourError> {
        if self.fail_saves {
            Err(TourError::Storage("store is read-only".into()))
        } else {
            Ok(())
        }
    }
}

impl TourStore for MemoryTourStore {
    fn load_tours(&self) -> HashMap<TourId, Tour> {
        self.tours.read().map(|d| d.clone()).unwrap_or_default()
    }

    fn save_tours(&self, tours: &HashMap<TourId, Tour>) -> Result<(), TourError> {
        self.check_writable()?;
        let mut data = self
            .tours
            .write()
            .map_err(|e| TourError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = tours.clone();
        Ok(())
    }

    fn load_active_tour(&self) -> Option<TourId> {
        self.active.read().ok().and_then(|a| *a)
    }

    fn save_active_tour(&self, id: Option<TourId>) -> Result<(), TourError> {
        self.check_writable()?;
        let mut active = self
            .active
            .write()
            .map_err(|e| TourError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *active = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn tour(name: &str) -> Tour {
        let day = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let mut tour = Tour::new(name, "", day, day);
        tour.add_member(Member::new("Alex"));
        tour
    }

    fn json_store() -> (TempDir, TourPaths, JsonTourStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonTourStore::new(&paths);
        (temp_dir, paths, store)
    }

    #[test]
    fn test_json_round_trip() {
        let (_temp, _paths, store) = json_store();
        let t = tour("Bangkok");
        let mut tours = HashMap::new();
        tours.insert(t.id, t.clone());

        store.save_tours(&tours).unwrap();
        store.save_active_tour(Some(t.id)).unwrap();

        let loaded = store.load_tours();
        assert_eq!(loaded.get(&t.id), Some(&t));
        assert_eq!(store.load_active_tour(), Some(t.id));
    }

    #[test]
    fn test_missing_files_load_empty() {
        let (_temp, _paths, store) = json_store();
        assert!(store.load_tours().is_empty());
        assert_eq!(store.load_active_tour(), None);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_temp, paths, store) = json_store();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.tours_file(), "{ definitely not json").unwrap();
        std::fs::write(paths.session_file(), "[]").unwrap();

        assert!(store.load_tours().is_empty());
        assert_eq!(store.load_active_tour(), None);
    }

    #[test]
    fn test_memory_store() {
        let t = tour("Rome");
        let store = MemoryTourStore::with_tours([t.clone()]);
        assert_eq!(store.load_tours().len(), 1);

        store.save_tours(&HashMap::new()).unwrap();
        assert!(store.load_tours().is_empty());

        let failing = MemoryTourStore::failing();
        assert!(failing.save_tours(&HashMap::new()).is_err());
        assert!(failing.save_active_tour(Some(t.id)).is_err());
        assert_eq!(failing.load_active_tour(), None);
    }
}
