//! Message types for the application (TEA pattern)

use confdeck_core::ResourceName;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (shows the discard confirmation when dirty)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Edit Session Messages
    // ─────────────────────────────────────────────────────────
    /// Bind a different resource to the surface (confirmation-gated
    /// when there are unsaved changes)
    SwitchResource { name: ResourceName },
    /// Proceed with the pending switch, discarding unsaved changes
    ConfirmSwitch,
    /// Abandon the pending switch, leaving the session untouched
    CancelSwitch,
    /// A keystroke actually mutated the surface content
    SurfaceEdited,
    /// Validate and submit the surface content to the backend
    Save,
    /// Reset the surface back to the last synced copy
    Revert,
    /// Ask the backend to restart its managed process
    Restart,

    // ─────────────────────────────────────────────────────────
    // Backend Completion Messages
    // ─────────────────────────────────────────────────────────
    /// A load round-trip resolved
    LoadFinished {
        name: ResourceName,
        result: Result<String, String>,
    },
    /// A save round-trip resolved
    SaveFinished {
        name: ResourceName,
        result: Result<(), String>,
    },
    /// A restart round-trip resolved
    RestartFinished { result: Result<(), String> },
    /// The startup health probe resolved
    HealthChecked { ok: bool },
}
