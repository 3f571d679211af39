//! Resource tabs widget
//!
//! One tab per configured resource; the active tab carries a `*` marker
//! while the buffer has unsaved changes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

use confdeck_app::AppState;

pub struct ResourceTabs<'a> {
    state: &'a AppState,
}

impl<'a> ResourceTabs<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        let active = self.state.session.active.as_ref();
        let dirty = self.state.session.is_dirty();
        self.state
            .resources
            .iter()
            .map(|resource| {
                let marker = if Some(resource) == active && dirty {
                    "*"
                } else {
                    ""
                };
                Line::from(format!(" {}{} ", resource, marker))
            })
            .collect()
    }

    fn selected_index(&self) -> Option<usize> {
        let active = self.state.session.active.as_ref()?;
        self.state.resources.iter().position(|r| r == active)
    }
}

impl Widget for ResourceTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.resources.is_empty() {
            return;
        }

        let tabs = Tabs::new(self.tab_titles())
            .select(self.selected_index())
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded_area, buf);
    }
}
