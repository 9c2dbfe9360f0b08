use thiserror::Error;

/// Why a single submission attempt did not land on the waitlist.
///
/// Only [`WaitlistError::DuplicateEmail`] is shown differently to the user;
/// every other variant collapses into the generic error message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("email is already on the waitlist")]
    DuplicateEmail,
    #[error("waitlist request failed with HTTP {status}")]
    RequestFailed { status: u16 },
    #[error("waitlist service unreachable: {0}")]
    NetworkUnavailable(String),
    #[error("unexpected response from waitlist service: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for WaitlistError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => WaitlistError::RequestFailed {
                status: status.as_u16(),
            },
            None if err.is_decode() => WaitlistError::InvalidResponse(err.to_string()),
            None => WaitlistError::NetworkUnavailable(err.to_string()),
        }
    }
}
