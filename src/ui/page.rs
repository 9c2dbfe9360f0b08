//! The scrolling landing page.
//!
//! Sections append lines to a [`PageBuilder`]. The page is laid out at a
//! fixed text width, so section offsets do not depend on the terminal size
//! and the event loop can resolve nav jumps without a render pass.

use crate::app::state::{AppState, FocusPanel, Section};
use crate::ui::form::{self, InputRow};
use crate::ui::{benefits, features, footer, hero, waitlist_section};
use crate::waitlist::FormId;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Column width body copy is wrapped to.
pub const TEXT_WIDTH: usize = 64;

/// Carousel indicator row: page line, total width, and the (offset, width)
/// of each dot within the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRow {
    pub row: u16,
    pub width: u16,
    pub dots: Vec<(u16, u16)>,
}

pub struct Page {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    inputs: Vec<(FormId, InputRow)>,
    indicator: Option<IndicatorRow>,
}

impl Page {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn anchor(&self, section: Section) -> u16 {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
            .unwrap_or(0)
    }

    pub fn input_row(&self, form: FormId) -> Option<InputRow> {
        self.inputs
            .iter()
            .find(|(id, _)| *id == form)
            .map(|(_, row)| *row)
    }

    pub fn indicator(&self) -> Option<&IndicatorRow> {
        self.indicator.as_ref()
    }
}

pub struct PageBuilder<'a> {
    pub state: &'a AppState,
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    inputs: Vec<(FormId, InputRow)>,
    indicator: Option<IndicatorRow>,
}

impl<'a> PageBuilder<'a> {
    fn new(state: &'a AppState) -> Self {
        Self {
            state,
            lines: Vec::new(),
            anchors: Vec::new(),
            inputs: Vec::new(),
            indicator: None,
        }
    }

    pub fn section(&mut self, section: Section) {
        self.anchors.push((section, self.lines.len() as u16));
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn gap(&mut self, n: usize) {
        for _ in 0..n {
            self.blank();
        }
    }

    /// Centered line in a single style.
    pub fn text(&mut self, text: impl Into<String>, style: Style) {
        self.push(Line::from(Span::styled(text.into(), style)).centered());
    }

    /// Word-wrapped, centered paragraph.
    pub fn paragraph(&mut self, text: &str, style: Style) {
        for line in wrap(text, TEXT_WIDTH) {
            self.text(line, style);
        }
    }

    /// Centered indicator line; `dots` as (offset, width) within it.
    pub fn indicator(&mut self, line: Line<'static>, dots: Vec<(u16, u16)>) {
        self.indicator = Some(IndicatorRow {
            row: self.lines.len() as u16,
            width: line.width() as u16,
            dots,
        });
        self.push(line.centered());
    }

    /// Input row, result message and footnote of one waitlist form.
    pub fn form(&mut self, id: FormId) {
        let state = self.state;
        let form = state.form(id);
        let focused = state.focus.form() == Some(id);
        let (line, info) = form::input_line(form, focused, state.tick_count, self.lines.len() as u16);
        self.push(line);
        self.inputs.push((id, info));
        self.blank();
        match form::status_line(form) {
            Some(line) => self.push(line),
            None => self.blank(),
        }
        self.text(id.copy().footnote, crate::ui::theme::Theme::muted());
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            anchors: self.anchors,
            inputs: self.inputs,
            indicator: self.indicator,
        }
    }
}

pub fn build(state: &AppState) -> Page {
    let mut page = PageBuilder::new(state);
    hero::build(&mut page);
    features::build(&mut page);
    benefits::build(&mut page);
    waitlist_section::build(&mut page);
    footer::build(&mut page);
    page.finish()
}

/// First page line of `section`.
pub fn anchor(state: &AppState, section: Section) -> u16 {
    build(state).anchor(section)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let page = build(state);
    let max_scroll = page.height().saturating_sub(area.height);
    let scroll = state.page.scroll.min(max_scroll);

    let focused_input = match state.focus {
        FocusPanel::HeroForm => page.input_row(FormId::Hero),
        FocusPanel::MainForm => page.input_row(FormId::Main),
        FocusPanel::Benefits => None,
    };

    frame.render_widget(Paragraph::new(page.lines).scroll((scroll, 0)), area);

    if let Some(input) = focused_input {
        if input.row >= scroll && input.row < scroll + area.height {
            let left = area.x + centered_offset(area.width, input.width);
            let x = left + input.field_offset + input.cursor_col;
            let y = area.y + input.row - scroll;
            if x < area.right() {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

/// Column where a centered line of `line_width` starts in an area
/// `area_width` wide, matching how `Paragraph` aligns it.
pub fn centered_offset(area_width: u16, line_width: u16) -> u16 {
    (area_width / 2).saturating_sub(line_width / 2)
}

/// Greedy word wrap by display width. Words longer than `width` get a line
/// of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
