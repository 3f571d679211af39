//! TUI widgets

pub mod confirm_dialog;
pub mod editor_view;
pub mod header;
pub mod status_bar;
pub mod tabs;

pub use confirm_dialog::ConfirmDialog;
pub use editor_view::{EditorView, EditorViewState};
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use tabs::ResourceTabs;
