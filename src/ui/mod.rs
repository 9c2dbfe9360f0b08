mod benefits;
mod features;
mod footer;
mod form;
mod hero;
mod layout;
mod nav_bar;
pub mod page;
mod status_bar;
mod theme;
mod waitlist_section;

use crate::app::state::{AppState, ClickTarget, Section};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav_bar::render(frame, app_layout.nav_bar);
    page::render(frame, app_layout.page, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Record what the next draw on a terminal of size `area` will show: page
/// and viewport heights for scroll clamping, whether the hero is in view, and
/// where the clickable cells are.
pub fn measure(state: &mut AppState, area: Rect) {
    let built = page::build(state);
    let app_layout = layout::compute_layout(area);
    let viewport = app_layout.page;
    state.page.set_metrics(built.height(), viewport.height);

    let scroll = state.page.scroll;
    state.page.hero_visible = scroll < built.anchor(Section::Features);

    let mut targets = nav_bar::link_targets(app_layout.nav_bar);
    if let Some(indicator) = built.indicator() {
        if indicator.row >= scroll && indicator.row < scroll + viewport.height {
            let y = viewport.y + indicator.row - scroll;
            let left = viewport.x + page::centered_offset(viewport.width, indicator.width);
            for (i, (offset, width)) in indicator.dots.iter().enumerate() {
                let cell = Rect::new(left + offset, y, *width, 1).intersection(viewport);
                if !cell.is_empty() {
                    targets.push((cell, ClickTarget::Slide(i)));
                }
            }
        }
    }
    state.page.click_targets = targets;
}
