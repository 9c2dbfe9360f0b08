use crate::app::state::Section;
use crate::content;
use crate::ui::page::PageBuilder;
use crate::ui::theme::Theme;
use crate::waitlist::FormId;

pub fn build(page: &mut PageBuilder) {
    page.section(Section::Waitlist);
    page.blank();
    page.paragraph(content::WAITLIST_TITLE, Theme::heading());
    page.blank();
    page.paragraph(content::WAITLIST_SUBTITLE, Theme::body());
    page.gap(2);
    page.form(FormId::Main);
    page.gap(3);
}
