use crate::app::state::{FocusPanel, Section};
use crate::content::{self, Slide};
use crate::ui::page::{wrap, PageBuilder, TEXT_WIDTH};
use crate::ui::theme::Theme;
use ratatui::prelude::*;

fn slide_lines(slide: &Slide) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {} ", slide.label), Theme::badge())).centered(),
        Line::default(),
        Line::from(Span::styled(slide.title, Theme::heading())).centered(),
        Line::from(Span::styled(slide.title_accent, Theme::heading_accent())).centered(),
        Line::default(),
    ];
    for text in wrap(slide.description, TEXT_WIDTH) {
        lines.push(Line::from(Span::styled(text, Theme::body())).centered());
    }
    lines.push(Line::default());
    for point in slide.points {
        lines.push(
            Line::from(vec![
                Span::styled("✓ ", Theme::heading_accent()),
                Span::styled(*point, Theme::heading()),
            ])
            .centered(),
        );
    }
    lines
}

/// Indicator dots, one per slide; the current one drawn wide. Also returns
/// each dot's (offset, width) within the line.
fn indicator_line(current: usize, count: usize, focused: bool) -> (Line<'static>, Vec<(u16, u16)>) {
    let mut spans = Vec::with_capacity(count * 2 + 1);
    let mut dots = Vec::with_capacity(count);
    let mut col = 0u16;
    for i in 0..count {
        if i > 0 {
            spans.push(Span::raw(" "));
            col += 1;
        }
        let dot = if i == current {
            Span::styled("━━━", Theme::dot_active())
        } else {
            Span::styled("●", Theme::dot_inactive())
        };
        let width = dot.width() as u16;
        dots.push((col, width));
        col += width;
        spans.push(dot);
    }
    if focused {
        spans.push(Span::styled(
            format!("   ←/→ or 1-{}", count),
            Theme::muted(),
        ));
    }
    (Line::from(spans), dots)
}

pub fn build(page: &mut PageBuilder) {
    let carousel = &page.state.carousel;
    let focused = page.state.focus == FocusPanel::Benefits;

    // Reserve the height of the tallest slide so rotation never shifts the
    // sections below.
    let height = carousel
        .slides()
        .iter()
        .map(|s| slide_lines(s).len())
        .max()
        .unwrap_or(0);
    let mut lines = slide_lines(carousel.current());
    lines.resize(height, Line::default());
    let (indicator, dots) = indicator_line(carousel.index(), carousel.slide_count(), focused);

    page.section(Section::Benefits);
    page.blank();
    if focused {
        page.text("▼", Theme::focus_marker());
    } else {
        page.blank();
    }
    for line in lines {
        page.push(line);
    }
    page.blank();
    page.indicator(indicator, dots);
    page.gap(3);

    page.text(content::PROOF_TITLE, Theme::heading());
    page.blank();
    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (i, stat) in content::STATS.iter().enumerate() {
        if i > 0 {
            values.push(Span::raw("      "));
            labels.push(Span::raw("      "));
        }
        let width = stat.value.len().max(stat.label.len());
        values.push(Span::styled(
            format!("{:^width$}", stat.value, width = width),
            Theme::heading_accent(),
        ));
        labels.push(Span::styled(
            format!("{:^width$}", stat.label, width = width),
            Theme::body(),
        ));
    }
    page.push(Line::from(values).centered());
    page.push(Line::from(labels).centered());
    page.gap(3);
}
