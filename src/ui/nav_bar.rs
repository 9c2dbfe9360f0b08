use crate::app::state::{ClickTarget, Section};
use crate::content;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const BRAND_MARK: &str = " ◆ ";

const LINKS: [(&str, &str, Section); 3] = [
    ("F1", "Features", Section::Features),
    ("F2", "Benefits", Section::Benefits),
    ("F3", "Join Waitlist", Section::Waitlist),
];

fn link_spans(key: &str, label: &str) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", key), Theme::heading_accent().bg(Theme::BG_ELEVATED)),
        Span::styled(format!("{} ", label), Theme::nav_bar()),
    ]
}

fn link_width(key: &str, label: &str) -> usize {
    link_spans(key, label).iter().map(|s| s.content.width()).sum()
}

/// Column where the right-aligned links start, never over the brand.
fn links_start(width: u16) -> usize {
    let brand = BRAND_MARK.width() + content::BRAND.width();
    let links: usize = LINKS.iter().map(|(k, l, _)| link_width(k, l)).sum();
    (width as usize).saturating_sub(links).max(brand)
}

pub fn render(frame: &mut Frame, area: Rect) {
    let mut parts: Vec<Span> = vec![
        Span::styled(BRAND_MARK, Theme::heading_accent().bg(Theme::BG_ELEVATED)),
        Span::styled(content::BRAND, Theme::nav_bar().add_modifier(Modifier::BOLD)),
    ];

    // Pad between brand and links
    let brand: usize = parts.iter().map(|s| s.content.width()).sum();
    parts.push(Span::styled(
        " ".repeat(links_start(area.width) - brand),
        Theme::nav_bar(),
    ));
    for (key, label, _) in LINKS {
        parts.extend(link_spans(key, label));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Screen cells of each nav link within `area`.
pub fn link_targets(area: Rect) -> Vec<(Rect, ClickTarget)> {
    let mut targets = Vec::new();
    let mut x = area.x as usize + links_start(area.width);
    for (key, label, section) in LINKS {
        let width = link_width(key, label);
        let cell = Rect::new(x.min(u16::MAX as usize) as u16, area.y, width as u16, 1).intersection(area);
        if !cell.is_empty() {
            targets.push((cell, ClickTarget::Nav(section)));
        }
        x += width;
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_right_aligned() {
        let targets = link_targets(Rect::new(0, 0, 100, 1));
        let sections: Vec<_> = targets.iter().map(|(_, t)| *t).collect();
        assert_eq!(
            sections,
            vec![
                ClickTarget::Nav(Section::Features),
                ClickTarget::Nav(Section::Benefits),
                ClickTarget::Nav(Section::Waitlist),
            ]
        );
        let last = targets[2].0;
        assert_eq!(last.right(), 100);
        assert_eq!(targets[0].0.right(), targets[1].0.x);
    }

    #[test]
    fn test_narrow_bar_clips_links() {
        let targets = link_targets(Rect::new(0, 0, 30, 1));
        assert!(targets.iter().all(|(r, _)| r.right() <= 30));
        assert!(targets.len() < LINKS.len());
    }
}
