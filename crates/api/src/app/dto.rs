use serde::{Deserialize, Serialize};

use clubhub_activities::Confirmation;

// -------------------------
// Request DTOs
// -------------------------

/// `?email=...` on signup/unregister.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Confirmation> for MessageResponse {
    fn from(c: Confirmation) -> Self {
        Self {
            message: c.to_string(),
        }
    }
}
