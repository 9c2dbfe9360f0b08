use crate::app::state::Section;
use crate::content;
use crate::ui::page::PageBuilder;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

pub fn build(page: &mut PageBuilder) {
    page.section(Section::Features);
    page.blank();
    page.text(format!(" {} ", content::FEATURES_BADGE), Theme::badge());
    page.blank();
    page.text(content::FEATURES_TITLE, Theme::heading());
    page.text(content::FEATURES_TITLE_ACCENT, Theme::heading_accent());
    page.blank();
    page.paragraph(content::FEATURES_SUBTITLE, Theme::body());
    page.gap(2);

    for feature in content::features() {
        page.push(
            Line::from(vec![
                Span::styled(format!(" {} ", feature.icon), Theme::badge()),
                Span::raw(" "),
                Span::styled(feature.title, Theme::heading()),
            ])
            .centered(),
        );
        page.paragraph(feature.description, Theme::body());
        page.blank();
    }
    page.blank();
}
