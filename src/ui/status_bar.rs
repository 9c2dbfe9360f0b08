use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Counter or launch badge
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Style::default().fg(Color::White).bg(Theme::ACCENT),
    ));

    if state.any_submitting() {
        parts.push(Span::styled(" submitting… ", Theme::status_bar()));
    }

    parts.push(Span::styled(
        " Tab focus  PgUp/PgDn scroll  Ctrl-Q quit ",
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::HeroForm => "HERO FORM",
        FocusPanel::Benefits => "BENEFITS",
        FocusPanel::MainForm => "WAITLIST FORM",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_SOFT).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
