//! Email field + submit button row shared by both page forms.

use crate::ui::theme::Theme;
use crate::waitlist::{SubmissionStatus, WaitlistForm};
use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const FIELD_WIDTH: usize = 34;

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Where the input row landed, so the renderer can place the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRow {
    /// Line index within the page.
    pub row: u16,
    /// Total display width of the row.
    pub width: u16,
    /// Display width before the field text starts.
    pub field_offset: u16,
    /// Cursor column within the field.
    pub cursor_col: u16,
}

/// Slice of `text` to show in a field `width` columns wide, keeping the
/// cursor (a byte offset) visible. Returns the slice and the cursor column
/// within it.
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let (before, after) = text.split_at(cursor);

    let mut start = cursor;
    let mut used = 0;
    for (i, c) in before.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        start = i;
    }
    let cursor_col = used;

    let mut shown = text[start..cursor].to_string();
    for c in after.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        shown.push(c);
    }
    (shown, cursor_col)
}

/// Build the input row for `form`. `row` is the page line it will occupy.
pub fn input_line(form: &WaitlistForm, focused: bool, tick: u64, row: u16) -> (Line<'static>, InputRow) {
    let copy = form.id.copy();
    let marker = if focused { "▶ " } else { "  " };

    let (field_text, field_style, cursor_col) = if form.email.text.is_empty() {
        (copy.placeholder.to_string(), Theme::placeholder(), 0)
    } else {
        let (shown, col) = visible_window(&form.email.text, form.email.cursor, FIELD_WIDTH);
        (shown, Theme::field(focused), col)
    };
    let pad = FIELD_WIDTH.saturating_sub(field_text.width());

    let busy = form.status() == SubmissionStatus::Submitting;
    let button = if busy {
        let frame = SPINNER[(tick % SPINNER.len() as u64) as usize];
        format!(" {} {} ", frame, form.button_label())
    } else {
        format!(" {} → ", form.button_label())
    };

    let spans = vec![
        Span::styled(marker, Theme::focus_marker()),
        Span::styled(" ", Theme::field(false)),
        Span::styled(field_text, field_style),
        Span::styled(" ".repeat(pad + 1), Theme::field(false)),
        Span::raw("  "),
        Span::styled(button, Theme::button(busy)),
    ];
    let line = Line::from(spans).centered();
    let info = InputRow {
        row,
        width: line.width() as u16,
        field_offset: (marker.width() + 1) as u16,
        cursor_col: cursor_col as u16,
    };
    (line, info)
}

/// Result message under the input row, if the form has one to show.
pub fn status_line(form: &WaitlistForm) -> Option<Line<'static>> {
    let message = form.status_message()?;
    let style = match form.status() {
        SubmissionStatus::Success => Theme::success(),
        SubmissionStatus::Duplicate => Theme::duplicate(),
        _ => Theme::error(),
    };
    Some(Line::from(Span::styled(message, style)).centered())
}
