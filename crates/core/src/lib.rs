//! `clubhub-core` — shared domain building blocks.
//!
//! Pure domain primitives only (no IO, no HTTP).

pub mod error;
pub mod name;

pub use error::{DomainError, DomainResult};
pub use name::{ActivityName, Email};
