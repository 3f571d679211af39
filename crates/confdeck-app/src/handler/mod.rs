//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `edit`: Edit-session operation handlers (load/save/revert/switch/restart)
//! - `keys`: Key event handlers for UI modes

pub(crate) mod edit;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use confdeck_core::ResourceName;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task against the backend
    SpawnTask(Task),
}

/// Background tasks to spawn. Each resolves into exactly one completion
/// message fed back into the update loop.
#[derive(Debug, Clone)]
pub enum Task {
    /// Fetch a resource's content
    Load { name: ResourceName },
    /// Submit new content for a resource
    Save { name: ResourceName, content: String },
    /// Ask the backend to restart its managed process
    Restart,
    /// Probe backend reachability
    Health,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
