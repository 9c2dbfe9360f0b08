use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(249, 115, 22);
    pub const ACCENT_SOFT: Color = Color::Rgb(254, 215, 170);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 170);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 120);
    pub const BG_ELEVATED: Color = Color::Rgb(38, 38, 44);
    pub const BG_FIELD: Color = Color::Rgb(52, 52, 60);
    pub const SUCCESS: Color = Color::Rgb(90, 210, 130);
    pub const ERROR: Color = Color::Rgb(235, 90, 90);

    pub fn badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_accent() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn field(focused: bool) -> Style {
        let style = Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_FIELD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_FIELD)
    }

    pub fn button(busy: bool) -> Style {
        if busy {
            Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
        } else {
            Self::badge()
        }
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    pub fn duplicate() -> Style {
        Style::default().fg(Self::ACCENT_SOFT).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn dot_active() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn dot_inactive() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn focus_marker() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn nav_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
