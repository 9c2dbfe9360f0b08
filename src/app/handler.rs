use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

const SCROLL_STEP: i32 = 3;
const PAGE_STEP: i32 = 15;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CarouselTick => {
            state.carousel.advance();
            tracing::trace!(slide = state.carousel.index(), "carousel advanced");
            state.dirty = true;
            vec![]
        }
        AppEvent::WaitlistResponse { form, outcome } => {
            state.form_mut(form).complete(&outcome);
            state.dirty = true;
            if outcome.is_ok() && state.config.waitlist.show_count {
                vec![Action::RefreshCount]
            } else {
                vec![]
            }
        }
        AppEvent::WaitlistCount(count) => {
            state.waitlist_count = Some(count);
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // spinner on a busy submit button, headline gradient
            if state.any_submitting() || state.page.hero_visible {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.page.scroll_by(-SCROLL_STEP),
        MouseEventKind::ScrollDown => state.page.scroll_by(SCROLL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            match state.page.target_at(mouse.column, mouse.row) {
                Some(ClickTarget::Nav(section)) => return jump_to(state, section),
                Some(ClickTarget::Slide(index)) => {
                    state.focus = FocusPanel::Benefits;
                    if let Err(e) = state.carousel.select_slide(index) {
                        tracing::debug!(error = %e, "slide selection ignored");
                    }
                }
                None => {}
            }
        }
        _ => {}
    }
    vec![]
}

/// Nav link behaviour shared by F-keys and clicks. Links into a focusable
/// section move focus there too.
fn jump_to(state: &mut AppState, section: Section) -> Vec<Action> {
    match section {
        Section::Benefits => state.focus = FocusPanel::Benefits,
        Section::Waitlist => state.focus = FocusPanel::MainForm,
        _ => {}
    }
    vec![Action::JumpTo(section)]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    match key.code {
        // Sticky nav links
        KeyCode::F(1) => return jump_to(state, Section::Features),
        KeyCode::F(2) => return jump_to(state, Section::Benefits),
        KeyCode::F(3) => return jump_to(state, Section::Waitlist),
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![Action::JumpTo(state.focus.section())];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![Action::JumpTo(state.focus.section())];
        }
        KeyCode::PageUp => {
            state.page.scroll_by(-PAGE_STEP);
            return vec![];
        }
        KeyCode::PageDown => {
            state.page.scroll_by(PAGE_STEP);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::HeroForm | FocusPanel::MainForm => handle_form_key(state, key),
        FocusPanel::Benefits => handle_benefits_key(state, key),
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.page.scroll_by(-SCROLL_STEP);
            return vec![];
        }
        KeyCode::Down => {
            state.page.scroll_by(SCROLL_STEP);
            return vec![];
        }
        _ => {}
    }

    let Some(form) = state.focused_form_mut() else {
        return vec![];
    };
    if key.code == KeyCode::Enter {
        return match form.begin_submit() {
            Some(email) => {
                tracing::debug!(form = form.id.name(), "waitlist submit requested");
                vec![Action::SubmitWaitlist {
                    form: form.id,
                    email,
                }]
            }
            None => vec![],
        };
    }

    let input = &mut form.email;
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else {
                input.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_benefits_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left => state.carousel.select_prev(),
        KeyCode::Right => state.carousel.advance(),
        KeyCode::Up => state.page.scroll_by(-SCROLL_STEP),
        KeyCode::Down => state.page.scroll_by(SCROLL_STEP),
        // Indicator dots are numbered from 1
        KeyCode::Char(c) => {
            if let Some(n) = c.to_digit(10).filter(|n| *n >= 1) {
                if let Err(e) = state.carousel.select_slide(n as usize - 1) {
                    tracing::debug!(error = %e, "slide selection ignored");
                }
            }
        }
        _ => {}
    }
    vec![]
}
