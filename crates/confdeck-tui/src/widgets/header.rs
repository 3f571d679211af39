//! Top header line: app name, server, backend reachability

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line header widget
pub struct MainHeader<'a> {
    server_url: &'a str,
    backend_health: Option<bool>,
}

impl<'a> MainHeader<'a> {
    pub fn new(server_url: &'a str, backend_health: Option<bool>) -> Self {
        Self {
            server_url,
            backend_health,
        }
    }

    fn health_span(&self) -> Span<'static> {
        match self.backend_health {
            Some(true) => Span::styled("● online", Style::default().fg(Color::Green)),
            Some(false) => Span::styled("● unreachable", Style::default().fg(Color::Red)),
            None => Span::styled("○ probing", Style::default().fg(Color::DarkGray)),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                " ConfDeck ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.server_url.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            self.health_span(),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
