//! # confdeck-core - Core Domain Types
//!
//! Foundation crate for ConfDeck. Provides the resource-name type, the
//! status-line model, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).

pub mod error;
pub mod logging;
pub mod resource;
pub mod status;

/// Prelude for common imports used throughout all ConfDeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use resource::ResourceName;
pub use status::StatusMessage;
