use crate::app::state::Section;
use crate::content;
use crate::ui::page::PageBuilder;
use crate::ui::theme::Theme;
use crate::waitlist::FormId;
use ratatui::prelude::*;

/// Sweep an orange gradient across the accent headline.
fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 4] = [
        (249.0, 115.0, 22.0),  // orange
        (251.0, 146.0, 60.0),  // light orange
        (253.0, 186.0, 116.0), // peach
        (234.0, 88.0, 12.0),   // burnt orange
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.15 - tick as f64 * 0.12).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

pub fn build(page: &mut PageBuilder) {
    let tick = page.state.tick_count;
    page.section(Section::Hero);
    page.gap(2);
    page.text(format!(" ▲ {} ", content::HERO_BADGE), Theme::badge());
    page.gap(2);
    for line in content::HERO_TITLE {
        page.text(line, Theme::heading());
    }

    let accent: Vec<Span<'static>> = content::HERO_TITLE_ACCENT
        .chars()
        .enumerate()
        .map(|(c, ch)| {
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(wave_color(c as u16, tick))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    page.push(Line::from(accent).centered());

    page.blank();
    page.paragraph(content::HERO_SUBTITLE, Theme::body());
    page.gap(2);
    page.form(FormId::Hero);
    page.gap(2);
}
