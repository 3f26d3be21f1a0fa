//! Member service
//!
//! Adds and removes members of the active tour. Removing a member also removes
//! every expense that member paid for or shared in.

use crate::error::{TourError, TourResult};
use crate::models::{Expense, Member};
use crate::session::Session;

/// Service for member management
pub struct MemberService<'a> {
    session: &'a mut Session,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Add a member to the active tour
    pub fn add(&mut self, name: &str, contact: Option<&str>) -> TourResult<Member> {
        let member = Member::with_contact(name.trim(), contact.unwrap_or("").trim());
        member
            .validate()
            .map_err(|e| TourError::Validation(e.to_string()))?;

        let tour = self.session.active_tour_mut()?;
        if tour.member_by_name(&member.name).is_some() {
            return Err(TourError::Duplicate {
                entity_type: "Member",
                identifier: member.name,
            });
        }

        tour.add_member(member.clone());
        tracing::info!(member = %member.id, name = %member.name, tour = %tour.id, "Added member");
        self.session.persist();

        Ok(member)
    }

    /// Members of the active tour in insertion order
    pub fn list(&self) -> TourResult<&[Member]> {
        Ok(&self.session.active_tour()?.members)
    }

    /// Find a member of the active tour by name or ID
    pub fn find(&self, identifier: &str) -> TourResult<&Member> {
        self.session
            .active_tour()?
            .find_member(identifier)
            .ok_or_else(|| TourError::member_not_found(identifier))
    }

    /// Remove a member and every expense that references it
    ///
    /// Returns the removed member and the expenses swept with it.
    pub fn remove(&mut self, identifier: &str) -> TourResult<(Member, Vec<Expense>)> {
        let id = self.find(identifier)?.id;
        let tour = self.session.active_tour_mut()?;
        let (member, swept) = tour
            .remove_member(id)
            .ok_or_else(|| TourError::member_not_found(identifier))?;

        tracing::info!(
            member = %member.id,
            name = %member.name,
            expenses_removed = swept.len(),
            "Removed member"
        );
        self.session.persist();

        Ok((member, swept))
    }
}
