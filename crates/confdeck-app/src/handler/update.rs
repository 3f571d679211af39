//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{edit, keys, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Edit Session Messages
        // ─────────────────────────────────────────────────────────
        Message::SwitchResource { name } => edit::handle_switch_resource(state, name),
        Message::ConfirmSwitch => edit::handle_confirm_switch(state),
        Message::CancelSwitch => edit::handle_cancel_switch(state),
        Message::SurfaceEdited => edit::handle_surface_edited(state),
        Message::Save => edit::handle_save(state),
        Message::Revert => edit::handle_revert(state),
        Message::Restart => edit::handle_restart(state),

        // ─────────────────────────────────────────────────────────
        // Backend Completion Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadFinished { name, result } => edit::handle_load_finished(state, name, result),
        Message::SaveFinished { name, result } => edit::handle_save_finished(state, name, result),
        Message::RestartFinished { result } => edit::handle_restart_finished(state, result),
        Message::HealthChecked { ok } => edit::handle_health_checked(state, ok),
    }
}
