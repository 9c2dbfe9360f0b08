//! Waitlist form state machine.
//!
//! `Idle -> Submitting -> Success | Duplicate | Error`. A form in
//! `Submitting` refuses new submissions, so each form has at most one
//! request in flight.

use crate::app::state::InputState;
use crate::content::{FormCopy, HERO_FORM, MAIN_FORM};
use crate::waitlist::{SubmitOutcome, WaitlistError};

/// Which of the two page forms an event or action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    Hero,
    Main,
}

impl FormId {
    pub fn copy(self) -> &'static FormCopy {
        match self {
            FormId::Hero => &HERO_FORM,
            FormId::Main => &MAIN_FORM,
        }
    }

    /// Whether this form reads the reply body. Only the main form shows
    /// receipt details, so only it treats an unreadable 2xx reply as failure.
    pub fn reads_reply(self) -> bool {
        matches!(self, FormId::Main)
    }

    pub fn name(self) -> &'static str {
        match self {
            FormId::Hero => "hero",
            FormId::Main => "main",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Duplicate,
    Error,
}

#[derive(Debug)]
pub struct WaitlistForm {
    pub id: FormId,
    pub email: InputState,
    status: SubmissionStatus,
}

impl WaitlistForm {
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            email: InputState::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Start a submission. Returns the email to send, or `None` when the
    /// input is empty or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.email.text.is_empty() || self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.email.text.clone())
    }

    /// Apply the result of the in-flight request. Results arriving while the
    /// form is not submitting are stale and ignored.
    pub fn complete(&mut self, outcome: &SubmitOutcome) {
        if !self.is_submitting() {
            tracing::warn!(form = self.id.name(), "ignoring waitlist response with no request in flight");
            return;
        }
        self.status = match outcome {
            Ok(_) => {
                self.email.clear();
                SubmissionStatus::Success
            }
            Err(WaitlistError::DuplicateEmail) => {
                self.email.clear();
                SubmissionStatus::Duplicate
            }
            Err(_) => SubmissionStatus::Error,
        };
    }

    pub fn button_label(&self) -> &'static str {
        let copy = self.id.copy();
        if self.is_submitting() {
            copy.button_busy
        } else {
            copy.button
        }
    }

    /// User-facing result line, if the current status has one.
    pub fn status_message(&self) -> Option<&'static str> {
        let copy = self.id.copy();
        match self.status {
            SubmissionStatus::Success => Some(copy.success),
            SubmissionStatus::Duplicate => Some(copy.duplicate),
            SubmissionStatus::Error => Some(copy.error),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::client::classify_response;
    use crate::waitlist::WaitlistReceipt;
    use reqwest::StatusCode;

    fn form_with(email: &str) -> WaitlistForm {
        form_for(FormId::Main, email)
    }

    fn form_for(id: FormId, email: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new(id);
        for c in email.chars() {
            form.email.insert_char(c);
        }
        form
    }

    #[test]
    fn test_empty_email_is_not_submitted() {
        let mut form = WaitlistForm::new(FormId::Hero);
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_suppressed() {
        let mut form = form_with("ada@example.com");
        assert_eq!(form.begin_submit().as_deref(), Some("ada@example.com"));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_success_clears_email() {
        let mut form = form_with("ada@example.com");
        form.begin_submit();
        form.complete(&Ok(WaitlistReceipt::default()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.email.text.is_empty());
        assert_eq!(form.email.cursor, 0);
        assert_eq!(form.status_message(), Some(MAIN_FORM.success));
    }

    #[test]
    fn test_duplicate_clears_email() {
        let mut form = form_with("ada@example.com");
        form.begin_submit();
        form.complete(&Err(WaitlistError::DuplicateEmail));
        assert_eq!(form.status(), SubmissionStatus::Duplicate);
        assert!(form.email.text.is_empty());
    }

    #[test]
    fn test_errors_keep_email() {
        let failures = [
            WaitlistError::RequestFailed { status: 500 },
            WaitlistError::NetworkUnavailable("connection refused".into()),
            WaitlistError::InvalidResponse("not json".into()),
        ];
        for err in failures {
            let mut form = form_with("ada@example.com");
            form.begin_submit();
            form.complete(&Err(err));
            assert_eq!(form.status(), SubmissionStatus::Error);
            assert_eq!(form.email.text, "ada@example.com");
            assert_eq!(form.status_message(), Some(MAIN_FORM.error));
        }
    }

    #[test]
    fn test_can_resubmit_after_error() {
        let mut form = form_with("ada@example.com");
        form.begin_submit();
        form.complete(&Err(WaitlistError::RequestFailed { status: 502 }));
        assert!(form.begin_submit().is_some());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut form = form_with("ada@example.com");
        form.complete(&Ok(WaitlistReceipt::default()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.email.text, "ada@example.com");
    }

    #[test]
    fn test_editing_keeps_previous_status() {
        let mut form = form_with("ada@example.com");
        form.begin_submit();
        form.complete(&Err(WaitlistError::RequestFailed { status: 500 }));
        form.email.insert_char('x');
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_button_label_follows_status() {
        let mut form = form_with("ada@example.com");
        assert_eq!(form.button_label(), "Secure Your Spot");
        form.begin_submit();
        assert_eq!(form.button_label(), "Securing...");
        assert_eq!(FormId::Hero.copy().button, "Join Waitlist");
    }

    #[test]
    fn test_empty_success_reply_per_form() {
        let mut hero = form_for(FormId::Hero, "ada@example.com");
        hero.begin_submit();
        hero.complete(&classify_response(FormId::Hero, StatusCode::NO_CONTENT, b""));
        assert_eq!(hero.status(), SubmissionStatus::Success);
        assert!(hero.email.text.is_empty());

        let mut main = form_for(FormId::Main, "ada@example.com");
        main.begin_submit();
        main.complete(&classify_response(FormId::Main, StatusCode::NO_CONTENT, b""));
        assert_eq!(main.status(), SubmissionStatus::Error);
        assert_eq!(main.email.text, "ada@example.com");
    }
}
