//! Key event handlers for UI modes
//!
//! Normal mode feeds non-chord keys straight into the surface and emits
//! `SurfaceEdited` only when the content actually mutated; dialog mode
//! resolves to the dialog's confirm/cancel messages.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::surface::SurfaceEdit;

/// Convert a key press into a follow-up message for the current UI mode.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C force-quits from anywhere, bypassing the discard gate.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => handle_dialog_key(state, key),
        UiMode::Normal => handle_normal_key(state, key),
    }
}

fn handle_dialog_key(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm.as_ref()?;
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => dialog.confirm_message(),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => dialog.cancel_message(),
        _ => None,
    }
}

fn handle_normal_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('s') => Some(Message::Save),
        InputKey::CharCtrl('u') => Some(Message::Revert),
        InputKey::CharCtrl('r') => Some(Message::Restart),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('n') => state
            .next_resource()
            .map(|name| Message::SwitchResource { name }),
        InputKey::CharCtrl('p') | InputKey::BackTab => state
            .prev_resource()
            .map(|name| Message::SwitchResource { name }),
        other => {
            let edit = key_to_edit(other)?;
            state
                .session
                .surface_mut()
                .edit(edit)
                .then_some(Message::SurfaceEdited)
        }
    }
}

/// Map editing keys onto surface inputs. Keys with no editing meaning
/// return `None` and are ignored.
fn key_to_edit(key: InputKey) -> Option<SurfaceEdit> {
    match key {
        InputKey::Char(c) => Some(SurfaceEdit::Insert(c)),
        InputKey::Enter => Some(SurfaceEdit::Newline),
        InputKey::Backspace => Some(SurfaceEdit::Backspace),
        InputKey::Delete => Some(SurfaceEdit::Delete),
        InputKey::Tab => Some(SurfaceEdit::Indent),
        InputKey::Up => Some(SurfaceEdit::CursorUp),
        InputKey::Down => Some(SurfaceEdit::CursorDown),
        InputKey::Left => Some(SurfaceEdit::CursorLeft),
        InputKey::Right => Some(SurfaceEdit::CursorRight),
        InputKey::Home => Some(SurfaceEdit::CursorHome),
        InputKey::End => Some(SurfaceEdit::CursorEnd),
        InputKey::PageUp => Some(SurfaceEdit::PageUp),
        InputKey::PageDown => Some(SurfaceEdit::PageDown),
        InputKey::Esc | InputKey::BackTab | InputKey::CharCtrl(_) => None,
    }
}
