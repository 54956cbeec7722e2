//! Activities domain module.
//!
//! Holds the extracurricular catalog and the membership rules for signing up
//! to and dropping activities. Pure in-memory logic (no IO, no HTTP).

pub mod activity;
pub mod catalog;
pub mod directory;

pub use activity::{Activity, Catalog, Confirmation, MembershipChange};
pub use catalog::seed_catalog;
pub use directory::ActivityDirectory;
