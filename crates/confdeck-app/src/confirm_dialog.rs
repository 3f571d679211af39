//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! confdeck-tui.

use confdeck_core::ResourceName;

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Ordered options: the confirming option first, the cancelling one
    /// second. Each carries the message dispatched when chosen.
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Gate for switching away from a dirty buffer
    pub fn discard_changes(target: &ResourceName) -> Self {
        Self::new(
            "Unsaved changes",
            format!("Switch to {} and lose your unsaved changes?", target),
            vec![
                ("Discard", Message::ConfirmSwitch),
                ("Keep editing", Message::CancelSwitch),
            ],
        )
    }

    /// Gate for quitting with a dirty buffer
    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit ConfDeck?",
            "You have unsaved changes.",
            vec![
                ("Quit", Message::ConfirmQuit),
                ("Cancel", Message::CancelQuit),
            ],
        )
    }

    /// Message dispatched when the user confirms.
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }

    /// Message dispatched when the user declines.
    pub fn cancel_message(&self) -> Option<Message> {
        self.options.get(1).map(|(_, msg)| msg.clone())
    }
}
