//! Editor viewport widget
//!
//! Renders the session's surface with a line-number gutter and keeps the
//! cursor inside the viewport by adjusting scroll offsets held in
//! [`EditorViewState`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use confdeck_app::Session;

/// Scroll offsets, persisted across renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorViewState {
    pub scroll_top: usize,
    pub scroll_left: usize,
}

impl EditorViewState {
    /// Keep (cursor_row, cursor_x) inside a viewport of the given size.
    fn ensure_visible(&mut self, cursor_row: usize, cursor_x: usize, height: usize, width: usize) {
        if cursor_row < self.scroll_top {
            self.scroll_top = cursor_row;
        }
        if height > 0 && cursor_row >= self.scroll_top + height {
            self.scroll_top = cursor_row + 1 - height;
        }
        if cursor_x < self.scroll_left {
            self.scroll_left = cursor_x;
        }
        if width > 0 && cursor_x >= self.scroll_left + width {
            self.scroll_left = cursor_x + 1 - width;
        }
    }
}

pub struct EditorView<'a> {
    session: &'a Session,
}

impl<'a> EditorView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn title(&self) -> String {
        match &self.session.active {
            Some(name) if self.session.is_dirty() => format!(" {}* ", name),
            Some(name) => format!(" {} ", name),
            None => " no resource ".to_string(),
        }
    }
}

/// Slice a line to the display columns [skip, skip + max). A wide char
/// straddling the left edge is replaced by a space to keep alignment.
fn visible_slice(line: &str, skip_cols: usize, max_cols: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if col + w <= skip_cols {
            col += w;
            continue;
        }
        if col < skip_cols {
            out.push(' ');
            col += w;
            continue;
        }
        if col + w > skip_cols + max_cols {
            break;
        }
        out.push(ch);
        col += w;
    }
    out
}

impl StatefulWidget for EditorView<'_> {
    type State = EditorViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut EditorViewState) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = self.session.surface().text();
        let lines: Vec<&str> = text.split('\n').collect();
        let (cursor_row, cursor_col) = self.session.surface().cursor();

        // Gutter sized to the widest line number.
        let gutter = lines.len().to_string().len().max(2) + 1;
        let text_width = (inner.width as usize).saturating_sub(gutter);

        let cursor_x: usize = lines
            .get(cursor_row)
            .map(|line| {
                line.chars()
                    .take(cursor_col)
                    .collect::<String>()
                    .width()
            })
            .unwrap_or(0);
        state.ensure_visible(cursor_row, cursor_x, inner.height as usize, text_width);

        for (screen_row, line_idx) in (state.scroll_top..lines.len())
            .take(inner.height as usize)
            .enumerate()
        {
            let number = format!("{:>width$} ", line_idx + 1, width = gutter - 1);
            let content = visible_slice(lines[line_idx], state.scroll_left, text_width);
            let rendered = Line::from(vec![
                Span::styled(number, Style::default().fg(Color::DarkGray)),
                Span::raw(content),
            ]);
            buf.set_line(inner.x, inner.y + screen_row as u16, &rendered, inner.width);
        }

        // Cursor cell, shown reversed.
        let cx = inner.x as usize + gutter + cursor_x.saturating_sub(state.scroll_left);
        let cy = inner.y as usize + cursor_row.saturating_sub(state.scroll_top);
        if cx < (inner.x + inner.width) as usize && cy < (inner.y + inner.height) as usize {
            buf.set_style(
                Rect::new(cx as u16, cy as u16, 1, 1),
                Style::default().add_modifier(Modifier::REVERSED),
            );
        }
    }
}
