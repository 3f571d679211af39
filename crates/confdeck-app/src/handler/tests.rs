//! Tests for handler module

use super::{update, Task, UpdateAction, UpdateResult};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::session::EditPhase;
use crate::state::{AppState, UiMode};
use confdeck_core::ResourceName;

fn name(s: &str) -> ResourceName {
    ResourceName::new(s).unwrap()
}

/// Run a message plus all follow-ups, collecting the emitted actions
/// (mirrors what the event loop does).
fn process(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

/// Drive a full successful load of `n` with the given backend content.
fn load_ok(state: &mut AppState, n: &str, content: &str) {
    let result = update(
        state,
        Message::SwitchResource { name: name(n) },
    );
    assert!(
        matches!(
            result.action,
            Some(UpdateAction::SpawnTask(Task::Load { .. }))
        ),
        "switch to an unloaded resource must issue a load"
    );
    update(
        state,
        Message::LoadFinished {
            name: name(n),
            result: Ok(content.to_string()),
        },
    );
}

/// Simulate the user editing the buffer to exactly `text`.
fn edit_to(state: &mut AppState, text: &str) {
    state.session.surface_mut().set_text(text);
    update(state, Message::SurfaceEdited);
}

fn assert_no_result(result: &UpdateResult) {
    assert!(result.message.is_none());
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────────────────────
// Load / switch
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_load_success_binds_resource_clean() {
    // Scenario A
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");

    assert!(!state.session.is_dirty());
    assert_eq!(state.status.text, "Loaded config.json");
    assert!(!state.status.is_error);
    assert_eq!(state.session.surface().text(), "{\"a\":1}");
    assert_eq!(state.session.phase(), EditPhase::Clean);
}

#[test]
fn test_load_failure_leaves_empty_clean_session() {
    // Scenario E
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "previous content");

    update(
        &mut state,
        Message::SwitchResource {
            name: name("missing.json"),
        },
    );
    update(
        &mut state,
        Message::LoadFinished {
            name: name("missing.json"),
            result: Err("not found".to_string()),
        },
    );

    assert_eq!(state.status.text, "not found");
    assert!(state.status.is_error);
    assert_eq!(state.session.surface().text(), "");
    assert!(!state.session.is_dirty());
    assert_eq!(state.session.active, Some(name("missing.json")));

    // Save stays disabled against the empty session.
    let result = update(&mut state, Message::Save);
    assert_no_result(&result);
}

#[test]
fn test_load_disables_save_and_revert_while_in_flight() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");

    // Switch kicks off a load; the user types before it resolves.
    update(
        &mut state,
        Message::SwitchResource {
            name: name("queue.json"),
        },
    );
    assert_eq!(state.session.phase(), EditPhase::Loading);
    edit_to(&mut state, "{\"x\":1}");

    assert_no_result(&update(&mut state, Message::Save));
    assert_no_result(&update(&mut state, Message::Revert));
}

#[test]
fn test_switch_to_active_resource_is_noop() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    edit_to(&mut state, "{\"a\":2}");

    let result = update(
        &mut state,
        Message::SwitchResource {
            name: name("config.json"),
        },
    );
    assert_no_result(&result);
    assert!(state.confirm.is_none());
    assert!(state.session.is_dirty());
}

#[test]
fn test_dirty_switch_requires_confirmation() {
    // Scenario D
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    edit_to(&mut state, "{\"a\":2}");

    let result = update(
        &mut state,
        Message::SwitchResource {
            name: name("queue.json"),
        },
    );
    assert_no_result(&result);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert_eq!(state.pending_switch, Some(name("queue.json")));

    // Declined: everything untouched, no network call.
    let result = update(&mut state, Message::CancelSwitch);
    assert_no_result(&result);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.pending_switch.is_none());
    assert_eq!(state.session.active, Some(name("config.json")));
    assert_eq!(state.session.surface().text(), "{\"a\":2}");
    assert!(state.session.is_dirty());

    // Accepted: the load proceeds.
    update(
        &mut state,
        Message::SwitchResource {
            name: name("queue.json"),
        },
    );
    let result = update(&mut state, Message::ConfirmSwitch);
    match result.action {
        Some(UpdateAction::SpawnTask(Task::Load { name: n })) => {
            assert_eq!(n, name("queue.json"));
        }
        other => panic!("expected load task, got {other:?}"),
    }
}

#[test]
fn test_clean_switch_skips_confirmation() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");

    let result = update(
        &mut state,
        Message::SwitchResource {
            name: name("queue.json"),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::SpawnTask(Task::Load { .. }))
    ));
    assert!(state.confirm.is_none());
    assert!(state.status.text.starts_with("Loading"));
}

// ─────────────────────────────────────────────────────────────────────────
// Dirty tracking
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_dirty_is_always_derived_from_surface_text() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");

    edit_to(&mut state, "{\"a\":2}");
    assert_eq!(
        state.session.is_dirty(),
        state.session.surface().text() != state.session.synced_text
    );
    assert!(state.session.is_dirty());
    assert_eq!(state.status.text, "Unsaved changes");

    // Editing back to the synced text clears dirty without any save.
    edit_to(&mut state, "{\"a\":1}");
    assert!(!state.session.is_dirty());
    assert!(state.status.is_empty());
}

#[test]
fn test_typing_emits_surface_edited_only_on_mutation() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");

    let actions = process(&mut state, Message::Key(InputKey::Char('x')));
    assert!(actions.is_empty());
    assert!(state.session.is_dirty());
    assert_eq!(state.status.text, "Unsaved changes");

    // Pure cursor motion never reports a change.
    state.status = confdeck_core::StatusMessage::cleared();
    process(&mut state, Message::Key(InputKey::Left));
    assert!(state.status.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────
// Revert
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_revert_restores_synced_copy() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2}");

    let result = update(&mut state, Message::Revert);
    assert_no_result(&result);
    assert_eq!(state.session.surface().text(), "{\"a\":1}");
    assert!(!state.session.is_dirty());
    assert_eq!(state.status.text, "Reverted");
}

#[test]
fn test_revert_when_clean_is_noop() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    let status_before = state.status.clone();

    let result = update(&mut state, Message::Revert);
    assert_no_result(&result);
    assert_eq!(state.status, status_before);
    assert_eq!(state.session.surface().text(), "{\"a\":1}");
}

#[test]
fn test_load_then_revert_round_trip() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");

    update(&mut state, Message::Revert);
    assert!(!state.session.is_dirty());
    assert_eq!(state.session.surface().text(), "{\"a\":1}");
}

// ─────────────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_save_rejects_malformed_json_before_network() {
    // Scenario B
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2");

    let result = update(&mut state, Message::Save);
    assert!(result.action.is_none(), "no network call for invalid JSON");
    assert!(state.status.text.starts_with("Invalid"));
    assert!(state.status.is_error);
    assert!(state.session.is_dirty());
    assert_eq!(state.session.surface().text(), "{\"a\":2");
}

#[test]
fn test_save_resyncs_from_backend_after_success() {
    // Scenario C
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2}");

    let result = update(&mut state, Message::Save);
    match &result.action {
        Some(UpdateAction::SpawnTask(Task::Save { name: n, content })) => {
            assert_eq!(*n, name("config.json"));
            assert_eq!(content, "{\"a\":2}");
        }
        other => panic!("expected save task, got {other:?}"),
    }
    assert_eq!(state.status.text, "Saving...");

    // Backend accepted: the client re-loads the same resource.
    let result = update(
        &mut state,
        Message::SaveFinished {
            name: name("config.json"),
            result: Ok(()),
        },
    );
    match result.action {
        Some(UpdateAction::SpawnTask(Task::Load { name: n })) => {
            assert_eq!(n, name("config.json"));
        }
        other => panic!("expected resync load, got {other:?}"),
    }

    // The resync reports "Saved", not "Loaded".
    update(
        &mut state,
        Message::LoadFinished {
            name: name("config.json"),
            result: Ok("{\"a\":2}".to_string()),
        },
    );
    assert!(!state.session.is_dirty());
    assert_eq!(state.status.text, "Saved");
    assert_eq!(state.session.surface().text(), "{\"a\":2}");
}

#[test]
fn test_save_failure_keeps_buffer_dirty() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2}");
    update(&mut state, Message::Save);

    let result = update(
        &mut state,
        Message::SaveFinished {
            name: name("config.json"),
            result: Err("failed to write config.json: disk full".to_string()),
        },
    );
    assert_no_result(&result);
    assert_eq!(state.status.text, "failed to write config.json: disk full");
    assert!(state.status.is_error);
    assert!(state.session.is_dirty());
    assert_eq!(state.session.surface().text(), "{\"a\":2}");
}

#[test]
fn test_save_when_clean_is_noop() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    let result = update(&mut state, Message::Save);
    assert_no_result(&result);
}

#[test]
fn test_save_with_no_bound_resource_reports_error() {
    let mut state = AppState::new();
    edit_to(&mut state, "{}");
    assert!(state.session.is_dirty());

    let result = update(&mut state, Message::Save);
    assert!(result.action.is_none());
    assert!(state.status.is_error);
}

#[test]
fn test_failed_resync_clears_saved_flag() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2}");
    update(&mut state, Message::Save);
    update(
        &mut state,
        Message::SaveFinished {
            name: name("config.json"),
            result: Ok(()),
        },
    );

    // The resync itself fails: error status, empty session.
    update(
        &mut state,
        Message::LoadFinished {
            name: name("config.json"),
            result: Err("failed to read config.json".to_string()),
        },
    );
    assert!(state.status.is_error);
    assert!(!state.session.resync_after_save);

    // A later ordinary load reports "Loaded", never a stale "Saved".
    load_ok(&mut state, "queue.json", "[]");
    assert_eq!(state.status.text, "Loaded queue.json");
}

// ─────────────────────────────────────────────────────────────────────────
// Restart
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_restart_does_not_touch_session_text() {
    // Scenario F
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");
    edit_to(&mut state, "{\"a\":2}");

    let result = update(&mut state, Message::Restart);
    assert!(matches!(
        result.action,
        Some(UpdateAction::SpawnTask(Task::Restart))
    ));
    assert_eq!(state.status.text, "Restarting...");

    update(
        &mut state,
        Message::RestartFinished {
            result: Err("busy".to_string()),
        },
    );
    assert_eq!(state.status.text, "busy");
    assert!(state.status.is_error);
    assert_eq!(state.session.surface().text(), "{\"a\":2}");
    assert!(state.session.is_dirty());
    assert_eq!(state.session.synced_text, "{\"a\":1}");
}

#[test]
fn test_restart_success_status() {
    let mut state = AppState::new();
    update(&mut state, Message::Restart);
    update(&mut state, Message::RestartFinished { result: Ok(()) });
    assert_eq!(state.status.text, "Restarted");
    assert!(!state.status.is_error);
}

// ─────────────────────────────────────────────────────────────────────────
// Quit gate / health
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_gated_by_unsaved_changes() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    edit_to(&mut state, "{\"a\":2}");

    update(&mut state, Message::RequestQuit);
    assert!(!state.should_quit());
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    update(&mut state, Message::CancelQuit);
    assert!(!state.should_quit());
    assert_eq!(state.ui_mode, UiMode::Normal);

    update(&mut state, Message::RequestQuit);
    update(&mut state, Message::ConfirmQuit);
    assert!(state.should_quit());
}

#[test]
fn test_quit_without_changes_skips_dialog() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    update(&mut state, Message::RequestQuit);
    assert!(state.should_quit());
}

#[test]
fn test_health_result_never_touches_session() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{\"a\":1}");

    update(&mut state, Message::HealthChecked { ok: false });
    assert_eq!(state.backend_health, Some(false));
    assert_eq!(state.session.surface().text(), "{\"a\":1}");
    assert_eq!(state.status.text, "Loaded config.json");
}

// ─────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn test_ctrl_s_produces_save_message() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::CharCtrl('s')));
    assert!(matches!(result.message, Some(Message::Save)));
}

#[test]
fn test_ctrl_u_produces_revert_message() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(matches!(result.message, Some(Message::Revert)));
}

#[test]
fn test_ctrl_r_produces_restart_message() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::CharCtrl('r')));
    assert!(matches!(result.message, Some(Message::Restart)));
}

#[test]
fn test_ctrl_c_force_quits_even_when_dirty() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    edit_to(&mut state, "{\"a\":2}");

    process(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_n_cycles_resources() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");

    let result = update(&mut state, Message::Key(InputKey::CharCtrl('n')));
    match result.message {
        Some(Message::SwitchResource { name: n }) => {
            assert_eq!(n, name("queue.json"));
        }
        other => panic!("expected switch message, got {other:?}"),
    }
}

#[test]
fn test_dialog_keys_resolve_to_dialog_messages() {
    let mut state = AppState::new();
    load_ok(&mut state, "config.json", "{}");
    edit_to(&mut state, "{\"a\":2}");
    update(
        &mut state,
        Message::SwitchResource {
            name: name("queue.json"),
        },
    );
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    let result = update(&mut state, Message::Key(InputKey::Char('n')));
    assert!(matches!(result.message, Some(Message::CancelSwitch)));

    let result = update(&mut state, Message::Key(InputKey::Char('y')));
    assert!(matches!(result.message, Some(Message::ConfirmSwitch)));

    // Typing keys do not leak into the surface while the dialog is open.
    let text_before = state.session.surface().text();
    update(&mut state, Message::Key(InputKey::Char('x')));
    assert_eq!(state.session.surface().text(), text_before);
}
