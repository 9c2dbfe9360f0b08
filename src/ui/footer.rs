use crate::app::state::Section;
use crate::content;
use crate::ui::page::PageBuilder;
use crate::ui::theme::Theme;
use chrono::Datelike;

fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, content::BRAND)
}

pub fn build(page: &mut PageBuilder) {
    page.section(Section::Footer);
    page.text("─".repeat(40), Theme::muted());
    page.blank();
    page.text(content::BRAND, Theme::heading_accent());
    page.text(content::TAGLINE, Theme::body());
    page.blank();
    page.text(copyright(chrono::Local::now().year()), Theme::muted());
    page.blank();
}
