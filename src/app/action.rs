use crate::app::state::Section;
use crate::waitlist::FormId;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    SubmitWaitlist { form: FormId, email: String },
    RefreshCount,
    JumpTo(Section),
    Quit,
}
