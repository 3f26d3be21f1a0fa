//! Tour service
//!
//! Creates, selects and deletes tours. Every mutation is persisted through
//! the session before returning.

use chrono::{Local, NaiveDate};

use crate::error::{TourError, TourResult};
use crate::models::{names_match, Tour};
use crate::session::Session;

/// Service for tour management
pub struct TourService<'a> {
    session: &'a mut Session,
}

impl<'a> TourService<'a> {
    /// Create a new tour service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Create a new tour
    ///
    /// Missing dates default to today. The new tour becomes the active one.
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> TourResult<Tour> {
        let name = name.trim();
        if self.session.find_tour(name).is_some_and(|t| names_match(&t.name, name)) {
            return Err(TourError::Duplicate {
                entity_type: "Tour",
                identifier: name.to_string(),
            });
        }

        let today = Local::now().date_naive();
        let start = start_date.unwrap_or(today);
        let end = end_date.unwrap_or(today.max(start));

        let tour = Tour::new(name, description.trim(), start, end);
        tour.validate()
            .map_err(|e| TourError::Validation(e.to_string()))?;

        tracing::info!(tour = %tour.id, name = %tour.name, "Created tour");
        self.session.insert_tour(tour.clone());
        self.session.set_active(tour.id)?;

        Ok(tour)
    }

    /// Find a tour by name or ID
    pub fn find(&self, identifier: &str) -> TourResult<&Tour> {
        self.session
            .find_tour(identifier)
            .ok_or_else(|| TourError::tour_not_found(identifier))
    }

    /// All tours, oldest first
    pub fn list(&self) -> Vec<&Tour> {
        self.session.tours()
    }

    /// Make a tour the active one
    pub fn switch(&mut self, identifier: &str) -> TourResult<Tour> {
        let tour = self.find(identifier)?.clone();
        self.session.set_active(tour.id)?;
        Ok(tour)
    }

    /// Delete a tour along with its members and expenses
    pub fn delete(&mut self, identifier: &str) -> TourResult<Tour> {
        let id = self.find(identifier)?.id;
        let tour = self
            .session
            .remove_tour(id)
            .ok_or_else(|| TourError::tour_not_found(identifier))?;

        tracing::info!(tour = %tour.id, name = %tour.name, "Deleted tour");
        self.session.persist();

        Ok(tour)
    }
}
