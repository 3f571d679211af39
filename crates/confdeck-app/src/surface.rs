//! Text surface capability: the editable buffer behind the session
//!
//! The session controller treats the editing widget as an opaque
//! capability: read the whole text, replace the whole text, feed user
//! input through `edit`, ask where the cursor is. Everything else
//! (rendering, scrolling) lives in the TUI layer.
//!
//! `set_text` is the programmatic path (revert, load) and is never
//! attributed as a user edit; `edit` is the keystroke path and reports
//! whether the content actually mutated, so callers can emit at most one
//! change notification per real mutation. Dropping the boxed surface
//! releases it, which is how switching resources destroys the old surface
//! before binding a fresh one.

/// Lines jumped by PageUp/PageDown.
const PAGE_JUMP: usize = 20;

/// A single user input applied to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEdit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    /// Tab key: inserts two spaces.
    Indent,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    PageUp,
    PageDown,
}

/// Minimal capability contract of the editing widget.
pub trait TextSurface {
    /// Current content of the whole buffer.
    fn text(&self) -> String;

    /// Replace the whole buffer and reset the cursor. Programmatic:
    /// never counts as a user edit.
    fn set_text(&mut self, text: &str);

    /// Apply one user input. Returns `true` iff the content mutated
    /// (cursor motion alone returns `false`).
    fn edit(&mut self, edit: SurfaceEdit) -> bool;

    /// Cursor position as (row, column), both zero-based, column in chars.
    fn cursor(&self) -> (usize, usize);
}

/// Constructs a fresh surface for a newly loaded resource.
pub trait SurfaceFactory {
    fn create(&self, initial: &str) -> Box<dyn TextSurface>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Default implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Plain line-based edit buffer. No undo, no syntax awareness.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl EditBuffer {
    pub fn new(initial: &str) -> Self {
        Self {
            lines: split_lines(initial),
            row: 0,
            col: 0,
        }
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn clamped_col(&self) -> usize {
        self.col.min(self.line_len(self.row))
    }

    /// Byte offset of the clamped cursor column within the current line.
    fn byte_offset(&self) -> usize {
        let line = &self.lines[self.row];
        char_to_byte(line, self.clamped_col())
    }

    fn insert_str(&mut self, s: &str) {
        self.col = self.clamped_col();
        let at = self.byte_offset();
        self.lines[self.row].insert_str(at, s);
        self.col += s.chars().count();
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl TextSurface for EditBuffer {
    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.row = 0;
        self.col = 0;
    }

    fn edit(&mut self, edit: SurfaceEdit) -> bool {
        match edit {
            SurfaceEdit::Insert(c) => {
                if c.is_control() {
                    return false;
                }
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                true
            }
            SurfaceEdit::Indent => {
                self.insert_str("  ");
                true
            }
            SurfaceEdit::Newline => {
                self.col = self.clamped_col();
                let at = self.byte_offset();
                let rest = self.lines[self.row].split_off(at);
                self.lines.insert(self.row + 1, rest);
                self.row += 1;
                self.col = 0;
                true
            }
            SurfaceEdit::Backspace => {
                self.col = self.clamped_col();
                if self.col > 0 {
                    let start = char_to_byte(&self.lines[self.row], self.col - 1);
                    let end = char_to_byte(&self.lines[self.row], self.col);
                    self.lines[self.row].replace_range(start..end, "");
                    self.col -= 1;
                    true
                } else if self.row > 0 {
                    let removed = self.lines.remove(self.row);
                    self.row -= 1;
                    self.col = self.line_len(self.row);
                    self.lines[self.row].push_str(&removed);
                    true
                } else {
                    false
                }
            }
            SurfaceEdit::Delete => {
                self.col = self.clamped_col();
                if self.col < self.line_len(self.row) {
                    let start = char_to_byte(&self.lines[self.row], self.col);
                    let end = char_to_byte(&self.lines[self.row], self.col + 1);
                    self.lines[self.row].replace_range(start..end, "");
                    true
                } else if self.row + 1 < self.lines.len() {
                    let next = self.lines.remove(self.row + 1);
                    self.lines[self.row].push_str(&next);
                    true
                } else {
                    false
                }
            }
            SurfaceEdit::CursorLeft => {
                self.col = self.clamped_col();
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.line_len(self.row);
                }
                false
            }
            SurfaceEdit::CursorRight => {
                self.col = self.clamped_col();
                if self.col < self.line_len(self.row) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                false
            }
            SurfaceEdit::CursorUp => {
                self.row = self.row.saturating_sub(1);
                false
            }
            SurfaceEdit::CursorDown => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                }
                false
            }
            SurfaceEdit::CursorHome => {
                self.col = 0;
                false
            }
            SurfaceEdit::CursorEnd => {
                self.col = self.line_len(self.row);
                false
            }
            SurfaceEdit::PageUp => {
                self.row = self.row.saturating_sub(PAGE_JUMP);
                false
            }
            SurfaceEdit::PageDown => {
                self.row = (self.row + PAGE_JUMP).min(self.lines.len() - 1);
                false
            }
        }
    }

    fn cursor(&self) -> (usize, usize) {
        (self.row, self.clamped_col())
    }
}

/// Factory producing [`EditBuffer`] surfaces.
#[derive(Debug, Clone, Default)]
pub struct EditBufferFactory;

impl SurfaceFactory for EditBufferFactory {
    fn create(&self, initial: &str) -> Box<dyn TextSurface> {
        Box::new(EditBuffer::new(initial))
    }
}
