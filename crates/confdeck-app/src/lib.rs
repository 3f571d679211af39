//! confdeck-app - Edit-session state machine for ConfDeck
//!
//! Implements the TEA (The Elm Architecture) pattern: a `Message` enum, a
//! pure `update` function over `AppState`, and `UpdateAction`s the event
//! loop performs against the backend. The text surface and the backend
//! are injected capabilities, so the whole state machine runs in tests
//! without a terminal or a network.

pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod session;
pub mod state;
pub mod surface;

// Re-export primary types
pub use confirm_dialog::ConfirmDialogState;
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use session::{EditPhase, Session};
pub use state::{AppPhase, AppState, UiMode};
pub use surface::{EditBuffer, EditBufferFactory, SurfaceEdit, SurfaceFactory, TextSurface};
