//! Backend capability trait
//!
//! The edit session talks to the backend through this seam only, so the
//! state machine can be exercised against an in-memory fake.

use confdeck_core::prelude::*;
use confdeck_core::ResourceName;

/// Backend transport operations.
///
/// Errors carry the backend-provided message when one exists, otherwise
/// the generic per-operation failure string; callers put the `Display`
/// output straight on the status line.
///
/// The event loop spawns these calls onto the runtime, so implementations
/// live behind the `Backend` (Send) variant of this trait.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// Fetch the current content of a named resource.
    async fn load(&self, name: &ResourceName) -> Result<String>;

    /// Submit new content for a named resource.
    async fn save(&self, name: &ResourceName, content: &str) -> Result<()>;

    /// Ask the backend to restart its managed process. Fire-and-forget
    /// from the session's point of view.
    async fn restart(&self) -> Result<()>;

    /// Probe backend reachability. Never an error: unreachable is `false`.
    async fn health(&self) -> bool;
}
