use crate::carousel::Carousel;
use crate::config::AppConfig;
use crate::content;
use crate::waitlist::{FormId, WaitlistForm};
use anyhow::Result;
use ratatui::layout::{Position, Rect};

/// Top-level page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Benefits,
    Waitlist,
    Footer,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    HeroForm,
    Benefits,
    MainForm,
}

impl FocusPanel {
    pub fn section(self) -> Section {
        match self {
            FocusPanel::HeroForm => Section::Hero,
            FocusPanel::Benefits => Section::Benefits,
            FocusPanel::MainForm => Section::Waitlist,
        }
    }

    pub fn form(self) -> Option<FormId> {
        match self {
            FocusPanel::HeroForm => Some(FormId::Hero),
            FocusPanel::MainForm => Some(FormId::Main),
            FocusPanel::Benefits => None,
        }
    }
}

/// Something on screen that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Nav bar link
    Nav(Section),
    /// Carousel indicator dot
    Slide(usize),
}

/// Vertical scroll position of the page. Content and viewport heights, hero
/// visibility and click targets are refreshed by the renderer's measuring
/// pass before every draw.
#[derive(Debug, Default)]
pub struct PageState {
    pub scroll: u16,
    pub content_height: u16,
    pub viewport_height: u16,
    pub hero_visible: bool,
    pub click_targets: Vec<(Rect, ClickTarget)>,
}

impl PageState {
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    pub fn scroll_to(&mut self, line: u16) {
        self.scroll = line.min(self.max_scroll());
    }

    pub fn set_metrics(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Click target under screen cell (`column`, `row`).
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let pos = Position::new(column, row);
        self.click_targets
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub carousel: Carousel,
    pub hero_form: WaitlistForm,
    pub main_form: WaitlistForm,
    pub focus: FocusPanel,
    pub page: PageState,
    pub waitlist_count: Option<u64>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let carousel = Carousel::new(content::benefit_slides())?;
        Ok(Self {
            config,
            carousel,
            hero_form: WaitlistForm::new(FormId::Hero),
            main_form: WaitlistForm::new(FormId::Main),
            focus: FocusPanel::HeroForm,
            page: PageState::default(),
            waitlist_count: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        })
    }

    pub fn form(&self, id: FormId) -> &WaitlistForm {
        match id {
            FormId::Hero => &self.hero_form,
            FormId::Main => &self.main_form,
        }
    }

    pub fn form_mut(&mut self, id: FormId) -> &mut WaitlistForm {
        match id {
            FormId::Hero => &mut self.hero_form,
            FormId::Main => &mut self.main_form,
        }
    }

    /// The form under keyboard focus, if any.
    pub fn focused_form_mut(&mut self) -> Option<&mut WaitlistForm> {
        let id = self.focus.form()?;
        Some(self.form_mut(id))
    }

    pub fn any_submitting(&self) -> bool {
        self.hero_form.is_submitting() || self.main_form.is_submitting()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::HeroForm => FocusPanel::Benefits,
            FocusPanel::Benefits => FocusPanel::MainForm,
            FocusPanel::MainForm => FocusPanel::HeroForm,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::HeroForm => FocusPanel::MainForm,
            FocusPanel::Benefits => FocusPanel::HeroForm,
            FocusPanel::MainForm => FocusPanel::Benefits,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.waitlist_count {
            Some(count) if self.config.waitlist.show_count => {
                format!("{} on the waitlist", count)
            }
            _ => content::HERO_BADGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_input_editing() {
        let mut input = input("ada@example.com");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "da@example.com");
        input.move_end();
        input.delete_back();
        input.delete_back();
        assert_eq!(input.text, "da@example.c");
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.text, "da@example.Xc");
    }

    #[test]
    fn test_input_multibyte_cursor() {
        let mut input = input("zoë@example.com");
        input.move_home();
        input.move_right();
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, "zoë".len());
        input.delete_back();
        assert_eq!(input.text, "zo@example.com");
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = input("first second  ");
        input.delete_word_back();
        assert_eq!(input.text, "first ");
        input.delete_word_back();
        assert_eq!(input.text, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_focus_ring() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        assert_eq!(state.focus, FocusPanel::HeroForm);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Benefits);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::MainForm);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::HeroForm);
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::MainForm);
    }

    #[test]
    fn test_page_scroll_is_clamped() {
        let mut page = PageState::default();
        page.set_metrics(100, 30);
        page.scroll_by(-5);
        assert_eq!(page.scroll, 0);
        page.scroll_by(500);
        assert_eq!(page.scroll, 70);
        page.scroll_to(10);
        assert_eq!(page.scroll, 10);
        page.set_metrics(100, 95);
        assert_eq!(page.scroll, 5);
    }

    #[test]
    fn test_target_at_hits_cells() {
        let mut page = PageState::default();
        page.click_targets = vec![
            (Rect::new(10, 5, 3, 1), ClickTarget::Slide(0)),
            (Rect::new(0, 0, 8, 1), ClickTarget::Nav(Section::Features)),
        ];
        assert_eq!(page.target_at(12, 5), Some(ClickTarget::Slide(0)));
        assert_eq!(page.target_at(13, 5), None);
        assert_eq!(page.target_at(7, 0), Some(ClickTarget::Nav(Section::Features)));
        assert_eq!(page.target_at(7, 1), None);
    }

    #[test]
    fn test_status_line_shows_count() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        assert_eq!(state.status_line(), "LAUNCHING SOON");
        state.waitlist_count = Some(1200);
        assert_eq!(state.status_line(), "1200 on the waitlist");
        state.config.waitlist.show_count = false;
        assert_eq!(state.status_line(), "LAUNCHING SOON");
    }
}
