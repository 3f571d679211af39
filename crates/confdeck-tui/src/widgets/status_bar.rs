//! Bottom status line: operation status plus key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use confdeck_app::{AppState, EditPhase};

const KEY_HINTS: &str = "^S Save  ^U Revert  ^R Restart  ^N/^P Switch  ^Q Quit";

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_span(&self) -> Span<'static> {
        match self.state.session.phase() {
            EditPhase::Idle => Span::styled("IDLE", Style::default().fg(Color::DarkGray)),
            EditPhase::Clean => Span::styled("CLEAN", Style::default().fg(Color::Green)),
            EditPhase::Dirty => Span::styled(
                "DIRTY",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            EditPhase::Loading => Span::styled("LOADING", Style::default().fg(Color::Cyan)),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = &self.state.status;
        let status_style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::raw(" "),
            self.phase_span(),
            Span::raw(" "),
            Span::styled(status.text.clone(), status_style),
        ];

        // Right-align the key hints when there is room for them.
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let hints_width = KEY_HINTS.width() + 1;
        if (area.width as usize) > used + hints_width {
            let pad = area.width as usize - used - hints_width;
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use confdeck_app::{Message, SurfaceEdit};
    use confdeck_core::ResourceName;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        confdeck_app::update(
            &mut state,
            Message::SwitchResource {
                name: ResourceName::new("config.json").unwrap(),
            },
        );
        confdeck_app::update(
            &mut state,
            Message::LoadFinished {
                name: ResourceName::new("config.json").unwrap(),
                result: Ok("{}".to_string()),
            },
        );
        state
    }

    #[test]
    fn test_shows_status_and_phase() {
        let mut term = TestTerminal::new();
        let state = loaded_state();
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("CLEAN"));
        assert!(term.buffer_contains("Loaded config.json"));
        assert!(term.buffer_contains("^S Save"));
    }

    #[test]
    fn test_dirty_phase_shown_after_edit() {
        let mut term = TestTerminal::new();
        let mut state = loaded_state();
        state.session.surface_mut().edit(SurfaceEdit::Insert('x'));
        confdeck_app::update(&mut state, Message::SurfaceEdited);

        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("DIRTY"));
        assert!(term.buffer_contains("Unsaved changes"));
    }

    #[test]
    fn test_hints_dropped_on_narrow_terminal() {
        let mut term = TestTerminal::with_size(30, 2);
        let state = loaded_state();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(!term.buffer_contains("^Q Quit"));
    }
}
