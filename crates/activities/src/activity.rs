use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use clubhub_core::{ActivityName, DomainError, DomainResult, Email};

pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";
pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";

/// Activity name → activity, ordered by name.
pub type Catalog = BTreeMap<ActivityName, Activity>;

/// A named extracurricular offering with its roster.
///
/// `participants` is kept in signup order. Uniqueness is enforced by
/// [`Activity::enroll`], not by the container. `max_participants` is
/// informational only; nothing rejects a signup once it is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, max_participants: u32) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster. Duplicates in `emails` are dropped, first occurrence wins.
    pub fn with_participants<I, E>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        for email in emails {
            let _ = self.enroll(email.into());
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Append `email` to the roster.
    pub fn enroll(&mut self, email: Email) -> DomainResult<()> {
        if self.is_enrolled(email.as_str()) {
            return Err(DomainError::conflict(ALREADY_SIGNED_UP));
        }
        self.participants.push(email);
        Ok(())
    }

    /// Remove `email` from the roster, keeping the order of everyone else.
    pub fn withdraw(&mut self, email: &str) -> DomainResult<()> {
        let pos = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DomainError::conflict(NOT_SIGNED_UP))?;
        self.participants.remove(pos);
        Ok(())
    }
}

/// Which way a roster changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Enrolled,
    Withdrawn,
}

/// Successful enroll/withdraw result; `Display` renders the client message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub change: MembershipChange,
    pub activity: ActivityName,
    pub email: Email,
}

impl core::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.change {
            MembershipChange::Enrolled => write!(f, "Signed up {} for {}", self.email, self.activity),
            MembershipChange::Withdrawn => write!(f, "Unregistered {} from {}", self.email, self.activity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
    }

    #[test]
    fn enroll_appends_in_signup_order() {
        let mut a = chess();
        a.enroll(Email::from("a@mergington.edu")).unwrap();
        a.enroll(Email::from("b@mergington.edu")).unwrap();
        assert_eq!(a.participants, vec![Email::from("a@mergington.edu"), Email::from("b@mergington.edu")]);
    }

    #[test]
    fn enroll_rejects_duplicate() {
        let mut a = chess().with_participants(["a@mergington.edu"]);
        let err = a.enroll(Email::from("a@mergington.edu")).unwrap_err();
        assert_eq!(err, DomainError::conflict(ALREADY_SIGNED_UP));
        assert_eq!(a.participants.len(), 1);
    }

    #[test]
    fn enroll_ignores_capacity() {
        let mut a = Activity::new("Tiny", "Never", 1).with_participants(["a@mergington.edu"]);
        a.enroll(Email::from("b@mergington.edu")).unwrap();
        assert_eq!(a.participants.len(), 2);
    }

    #[test]
    fn withdraw_removes_only_that_email() {
        let mut a = chess().with_participants(["a@x", "b@x", "c@x"]);
        a.withdraw("b@x").unwrap();
        assert_eq!(a.participants, vec![Email::from("a@x"), Email::from("c@x")]);
    }

    #[test]
    fn withdraw_rejects_absent_email() {
        let mut a = chess();
        let err = a.withdraw("ghost@mergington.edu").unwrap_err();
        assert_eq!(err, DomainError::conflict(NOT_SIGNED_UP));
    }

    #[test]
    fn with_participants_drops_duplicates() {
        let a = chess().with_participants(["a@x", "a@x", "b@x"]);
        assert_eq!(a.participants.len(), 2);
    }

    #[test]
    fn serializes_with_the_four_public_fields() {
        let json = serde_json::to_value(chess().with_participants(["a@x"])).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["max_participants"], 12);
        assert!(obj["participants"].is_array());
        assert_eq!(obj["participants"][0], "a@x");
    }

    #[test]
    fn confirmation_message_mentions_email_and_activity() {
        let c = Confirmation {
            change: MembershipChange::Enrolled,
            activity: ActivityName::from("Chess Club"),
            email: Email::from("a@x"),
        };
        assert_eq!(c.to_string(), "Signed up a@x for Chess Club");

        let c = Confirmation { change: MembershipChange::Withdrawn, ..c };
        assert_eq!(c.to_string(), "Unregistered a@x from Chess Club");
    }
}
