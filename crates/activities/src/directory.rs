//! Activity Directory: owns the catalog and enforces membership rules.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use clubhub_core::{ActivityName, DomainError, DomainResult, Email};

use crate::activity::{Activity, Catalog, Confirmation, MembershipChange};
use crate::catalog::seed_catalog;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

/// Shared, lock-guarded catalog.
///
/// Reads take the read lock; enroll/withdraw hold the write lock across the
/// whole lookup-check-mutate sequence so concurrent requests cannot both pass
/// the membership check.
#[derive(Debug)]
pub struct ActivityDirectory {
    inner: RwLock<Catalog>,
}

impl ActivityDirectory {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// Directory loaded with the school's fixed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Snapshot of every activity.
    pub fn list(&self) -> Catalog {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> DomainResult<Activity> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(ACTIVITY_NOT_FOUND))
    }

    /// Sign `email` up for `name`.
    pub fn enroll(&self, name: &str, email: Email) -> DomainResult<Confirmation> {
        let mut catalog = self.write();
        let activity = lookup_mut(&mut catalog, name)?;
        let activity_name = ActivityName::from(name);

        if let Err(e) = activity.enroll(email.clone()) {
            tracing::debug!(activity = %activity_name, email = %email, "signup rejected: {e}");
            return Err(e);
        }

        tracing::info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            "participant enrolled"
        );

        Ok(Confirmation {
            change: MembershipChange::Enrolled,
            activity: activity_name,
            email,
        })
    }

    /// Drop `email` from `name`.
    pub fn withdraw(&self, name: &str, email: Email) -> DomainResult<Confirmation> {
        let mut catalog = self.write();
        let activity = lookup_mut(&mut catalog, name)?;
        let activity_name = ActivityName::from(name);

        if let Err(e) = activity.withdraw(email.as_str()) {
            tracing::debug!(activity = %activity_name, email = %email, "unregister rejected: {e}");
            return Err(e);
        }

        tracing::info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            "participant withdrawn"
        );

        Ok(Confirmation {
            change: MembershipChange::Withdrawn,
            activity: activity_name,
            email,
        })
    }

    // A panicking writer cannot leave a roster half-updated (every mutation is a
    // single push/remove), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn lookup_mut<'a>(catalog: &'a mut Catalog, name: &str) -> DomainResult<&'a mut Activity> {
    catalog.get_mut(name).ok_or_else(|| {
        tracing::debug!(activity = name, "unknown activity");
        DomainError::not_found(ACTIVITY_NOT_FOUND)
    })
}
