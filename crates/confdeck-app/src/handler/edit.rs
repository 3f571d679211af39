//! Edit-session operation handlers
//!
//! The transition protocol among load, edit, validate, save, revert,
//! switch-resource, and restart. Every handler runs synchronously to
//! completion; network round-trips happen in spawned tasks that resolve
//! into the completion messages handled here.

use confdeck_core::prelude::*;
use confdeck_core::{ResourceName, StatusMessage};

use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Kick off a load round-trip for `name`.
///
/// Save/revert are disabled immediately, before the network resolves, so
/// no stale-state mutation can race an in-flight load.
pub(crate) fn start_load(state: &mut AppState, name: ResourceName) -> UpdateResult {
    state.session.begin_load();
    state.session.resync_after_save = false;
    state.set_status(format!("Loading {name}..."));
    UpdateResult::action(UpdateAction::SpawnTask(Task::Load { name }))
}

pub(crate) fn handle_switch_resource(state: &mut AppState, name: ResourceName) -> UpdateResult {
    if state.session.active.as_ref() == Some(&name) {
        return UpdateResult::none();
    }
    if state.session.is_dirty() {
        // Unsaved work: gate the switch behind an explicit confirmation.
        state.open_switch_confirm(name);
        return UpdateResult::none();
    }
    start_load(state, name)
}

pub(crate) fn handle_confirm_switch(state: &mut AppState) -> UpdateResult {
    state.close_dialog();
    match state.pending_switch.take() {
        Some(name) => start_load(state, name),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_cancel_switch(state: &mut AppState) -> UpdateResult {
    state.close_dialog();
    state.pending_switch = None;
    UpdateResult::none()
}

pub(crate) fn handle_surface_edited(state: &mut AppState) -> UpdateResult {
    if state.session.is_dirty() {
        state.set_status("Unsaved changes");
    } else {
        state.status = StatusMessage::cleared();
    }
    UpdateResult::none()
}

pub(crate) fn handle_save(state: &mut AppState) -> UpdateResult {
    if !state.session.can_mutate() {
        return UpdateResult::none();
    }

    // Validate before any network call; a malformed buffer stays in
    // place, dirty, for the user to fix.
    let content = state.session.surface().text();
    if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
        state.set_error(format!("Invalid JSON: {e}"));
        return UpdateResult::none();
    }

    let Some(name) = state.session.active.clone() else {
        state.set_error("No resource loaded");
        return UpdateResult::none();
    };

    state.set_status("Saving...");
    UpdateResult::action(UpdateAction::SpawnTask(Task::Save { name, content }))
}

pub(crate) fn handle_save_finished(
    state: &mut AppState,
    name: ResourceName,
    result: std::result::Result<(), String>,
) -> UpdateResult {
    match result {
        Ok(()) => {
            // Resync with the backend's canonical copy: it may have
            // normalized formatting, and the buffer must never silently
            // diverge from it.
            let target = state.session.active.clone().unwrap_or(name);
            let result = start_load(state, target);
            state.session.resync_after_save = true;
            result
        }
        Err(message) => {
            // Buffer stays dirty; the user retries manually.
            state.set_error(message);
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_load_finished(
    state: &mut AppState,
    name: ResourceName,
    result: std::result::Result<String, String>,
) -> UpdateResult {
    let resync = std::mem::take(&mut state.session.resync_after_save);
    match result {
        Ok(content) => {
            state.session.finish_load(name.clone(), content);
            if resync {
                state.set_status("Saved");
            } else {
                state.set_status(format!("Loaded {name}"));
            }
        }
        Err(message) => {
            warn!(resource = %name, "load failed: {message}");
            state.session.finish_load_failed(name);
            state.set_error(message);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_revert(state: &mut AppState) -> UpdateResult {
    if !state.session.can_mutate() {
        return UpdateResult::none();
    }
    state.session.revert();
    state.set_status("Reverted");
    UpdateResult::none()
}

pub(crate) fn handle_restart(state: &mut AppState) -> UpdateResult {
    state.set_status("Restarting...");
    UpdateResult::action(UpdateAction::SpawnTask(Task::Restart))
}

pub(crate) fn handle_restart_finished(
    state: &mut AppState,
    result: std::result::Result<(), String>,
) -> UpdateResult {
    match result {
        Ok(()) => state.set_status("Restarted"),
        Err(message) => state.set_error(message),
    }
    UpdateResult::none()
}

pub(crate) fn handle_health_checked(state: &mut AppState, ok: bool) -> UpdateResult {
    if !ok {
        warn!("backend health probe failed");
    }
    state.backend_health = Some(ok);
    UpdateResult::none()
}
