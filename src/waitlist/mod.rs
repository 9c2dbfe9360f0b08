//! Waitlist signup: form state machine, HTTP client, and the manager that
//! runs submissions off the UI loop.

pub mod client;
pub mod error;
pub mod form;
pub mod manager;

pub use client::{HttpWaitlistClient, WaitlistClient};
pub use error::WaitlistError;
pub use form::{FormId, SubmissionStatus, WaitlistForm};
pub use manager::WaitlistManager;

/// Result of one submission attempt.
pub type SubmitOutcome = Result<WaitlistReceipt, WaitlistError>;

/// What the backend said about an accepted signup. Every field is optional;
/// only the presence of a JSON body matters for success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistReceipt {
    pub message: Option<String>,
    pub email: Option<String>,
    pub id: Option<i64>,
}

impl WaitlistReceipt {
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self {
            message: value
                .get("message")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            email: value.get("email").and_then(|v| v.as_str()).map(str::to_string),
            id: value.get("id").and_then(|v| v.as_i64()),
        }
    }
}
