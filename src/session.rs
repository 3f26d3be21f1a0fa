//! Session context
//!
//! Holds every loaded tour, the active tour id, and the store they are saved
//! through. The in-memory state is authoritative: a failed save is logged and
//! the session carries on.

use std::collections::HashMap;

use crate::engine::TourOverview;
use crate::error::{TourError, TourResult};
use crate::models::{names_match, Tour, TourId};
use crate::storage::TourStore;

pub struct Session {
    store: Box<dyn TourStore>,
    tours: HashMap<TourId, Tour>,
    active: Option<TourId>,
}

impl Session {
    /// Load all tours and the active selection from `store`
    pub fn open(store: Box<dyn TourStore>) -> Self {
        let tours = store.load_tours();
        let active = store.load_active_tour();

        let mut session = Self {
            store,
            tours,
            active,
        };
        session.ensure_active();
        session
    }

    /// Tours ordered by creation time
    pub fn tours(&self) -> Vec<&Tour> {
        let mut tours: Vec<&Tour> = self.tours.values().collect();
        tours.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        tours
    }

    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tours.get(&id)
    }

    /// Find a tour by name (case-insensitive) or ID
    pub fn find_tour(&self, identifier: &str) -> Option<&Tour> {
        let needle = identifier.trim();
        self.tours()
            .into_iter()
            .find(|t| names_match(&t.name, needle))
            .or_else(|| self.tours.values().find(|t| t.id.matches(needle)))
    }

    pub fn active_id(&self) -> Option<TourId> {
        self.active
    }

    pub fn is_active(&self, id: TourId) -> bool {
        self.active == Some(id)
    }

    pub fn active_tour(&self) -> TourResult<&Tour> {
        self.active
            .and_then(|id| self.tours.get(&id))
            .ok_or(TourError::NoActiveTour)
    }

    pub fn active_tour_mut(&mut self) -> TourResult<&mut Tour> {
        match self.active {
            Some(id) => self.tours.get_mut(&id).ok_or(TourError::NoActiveTour),
            None => Err(TourError::NoActiveTour),
        }
    }

    /// Make `id` the active tour and persist the choice
    pub fn set_active(&mut self, id: TourId) -> TourResult<()> {
        if !self.tours.contains_key(&id) {
            return Err(TourError::tour_not_found(id.to_string()));
        }
        self.active = Some(id);
        tracing::info!(tour = %id, "Switched active tour");
        self.persist();
        Ok(())
    }

    /// Add a tour; the first tour becomes active automatically
    pub fn insert_tour(&mut self, tour: Tour) {
        self.tours.insert(tour.id, tour);
        self.ensure_active();
    }

    /// Remove a tour, moving the active selection if it pointed there
    pub fn remove_tour(&mut self, id: TourId) -> Option<Tour> {
        let removed = self.tours.remove(&id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        self.ensure_active();
        Some(removed)
    }

    /// Recompute every derived view of the active tour
    pub fn overview(&self) -> TourResult<TourOverview> {
        Ok(TourOverview::compute(self.active_tour()?))
    }

    /// Save tours and the active selection; failures are logged, not returned
    pub fn persist(&self) {
        if let Err(e) = self.store.save_tours(&self.tours) {
            tracing::warn!(error = %e, "Failed to save tours");
        }
        if let Err(e) = self.store.save_active_tour(self.active) {
            tracing::warn!(error = %e, "Failed to save active tour");
        }
    }

    /// Fall back to the oldest tour when the selection is missing or stale
    fn ensure_active(&mut self) {
        let valid = self.active.is_some_and(|id| self.tours.contains_key(&id));
        if !valid {
            self.active = self.tours().first().map(|t| t.id);
            if let Some(id) = self.active {
                tracing::debug!(tour = %id, "Defaulting active tour");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{sample_tour, MemoryTourStore};
    use chrono::{Duration, NaiveDate};

    fn tour(name: &str, offset_secs: i64) -> Tour {
        let day = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        let mut tour = Tour::new(name, "", day, day);
        tour.created_at += Duration::seconds(offset_secs);
        tour
    }

    #[test]
    fn test_empty_session_has_no_active_tour() {
        let session = Session::open(Box::new(MemoryTourStore::new()));
        assert!(session.tours().is_empty());
        assert!(matches!(session.active_tour(), Err(TourError::NoActiveTour)));
        assert!(session.overview().is_err());
    }

    #[test]
    fn test_stale_active_falls_back_to_oldest() {
        let older = tour("Older", 0);
        let newer = tour("Newer", 60);
        let store = MemoryTourStore::with_tours([newer.clone(), older.clone()]);
        store.save_active_tour(Some(TourId::new())).unwrap();

        let session = Session::open(Box::new(store));
        assert_eq!(session.active_id(), Some(older.id));
        let names: Vec<_> = session.tours().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["Older", "Newer"]);
    }

    #[test]
    fn test_set_active_and_find() {
        let a = tour("Rome", 0);
        let b = tour("Paris", 10);
        let mut session = Session::open(Box::new(MemoryTourStore::with_tours([a.clone(), b.clone()])));

        assert_eq!(session.find_tour("paris").map(|t| t.id), Some(b.id));
        assert_eq!(session.find_tour(&a.id.to_string()).map(|t| t.id), Some(a.id));
        assert!(session.find_tour("Berlin").is_none());

        session.set_active(b.id).unwrap();
        assert_eq!(session.active_tour().unwrap().name, "Paris");
        assert!(session.set_active(TourId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_active_tour_moves_selection() {
        let a = tour("Rome", 0);
        let b = tour("Paris", 10);
        let mut session = Session::open(Box::new(MemoryTourStore::with_tours([a.clone(), b.clone()])));
        assert_eq!(session.active_id(), Some(a.id));

        session.remove_tour(a.id).unwrap();
        assert_eq!(session.active_id(), Some(b.id));
        session.remove_tour(b.id).unwrap();
        assert_eq!(session.active_id(), None);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut session = Session::open(Box::new(MemoryTourStore::failing()));
        session.insert_tour(sample_tour());
        session.persist();

        assert_eq!(session.tours().len(), 1);
        let overview = session.overview().unwrap();
        assert_eq!(overview.summary.member_count, 5);
    }
}
