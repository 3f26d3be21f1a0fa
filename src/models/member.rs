//! Member model
//!
//! A participant in a tour. Members pay for expenses and share in them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A tour participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Contact details (phone, email, ...)
    #[serde(default)]
    pub contact: String,
}

impl Member {
    /// Create a new member without contact details
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            contact: String::new(),
        }
    }

    /// Create a new member with contact details
    pub fn with_contact(name: impl Into<String>, contact: impl Into<String>) -> Self {
        let mut member = Self::new(name);
        member.contact = contact.into();
        member
    }

    /// Case-insensitive name comparison used for lookups
    pub fn has_name(&self, name: &str) -> bool {
        super::names_match(&self.name, name)
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MemberValidationError::EmptyName);
        }
        if name.len() > 100 {
            return Err(MemberValidationError::NameTooLong(name.len()));
        }
        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::with_contact("Alex Chen", "+1-555-0101");
        assert_eq!(member.name, "Alex Chen");
        assert_eq!(member.contact, "+1-555-0101");
        assert!(member.validate().is_ok());
    }

    #[test]
    fn test_has_name_is_case_insensitive() {
        let member = Member::new("Sarah Johnson");
        assert!(member.has_name("sarah johnson"));
        assert!(member.has_name("  SARAH JOHNSON "));
        assert!(!member.has_name("Sarah"));

        let member = Member::new("Émile");
        assert!(member.has_name("émile"));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Member::new("   ").validate(),
            Err(MemberValidationError::EmptyName)
        );
        assert!(matches!(
            Member::new("x".repeat(101)).validate(),
            Err(MemberValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_missing_contact_deserializes() {
        let id = MemberId::new();
        let json = format!(r#"{{"id": "{}", "name": "Mike"}}"#, id.as_uuid());
        let member: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(member.id, id);
        assert!(member.contact.is_empty());
    }
}
