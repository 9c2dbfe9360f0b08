use crate::waitlist::{FormId, SubmitOutcome};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Carousel auto-advance
    CarouselTick,

    /// A waitlist submission finished
    WaitlistResponse {
        form: FormId,
        outcome: SubmitOutcome,
    },

    /// Current number of signups reported by the backend
    WaitlistCount(u64),

    /// Tick for UI refresh
    Tick,
}
