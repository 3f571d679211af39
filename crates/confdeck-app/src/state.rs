//! Application state (Model in TEA pattern)

use confdeck_core::{ResourceName, StatusMessage};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::session::Session;
use crate::surface::SurfaceFactory;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal editing view
    #[default]
    Normal,

    /// Confirmation dialog (discard-changes or quit gate)
    ConfirmDialog,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    /// The edit session (active resource, synced copy, surface).
    pub session: Session,

    /// Resource tabs, in display order.
    pub resources: Vec<ResourceName>,

    /// Active confirmation dialog, if any.
    pub confirm: Option<ConfirmDialogState>,

    /// Switch target stashed while the discard confirmation is open.
    pub pending_switch: Option<ResourceName>,

    /// Last user-facing status, overwritten by every operation.
    pub status: StatusMessage,

    /// Result of the startup health probe (`None` until it resolves).
    pub backend_health: Option<bool>,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let resources = settings.resource_names();
        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            session: Session::new(),
            resources,
            confirm: None,
            pending_switch: None,
            status: StatusMessage::cleared(),
            backend_health: None,
            settings,
        }
    }

    /// Construct with a custom surface factory (tests, alternate frontends).
    pub fn with_surface_factory(settings: Settings, factory: Box<dyn SurfaceFactory>) -> Self {
        let mut state = Self::with_settings(settings);
        state.session = Session::with_factory(factory);
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Quit, gated by the discard confirmation when the buffer is dirty.
    pub fn request_quit(&mut self) {
        if self.session.is_dirty() {
            self.confirm = Some(ConfirmDialogState::quit_confirmation());
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.close_dialog();
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.close_dialog();
    }

    /// Open the discard confirmation for a pending resource switch.
    pub fn open_switch_confirm(&mut self, target: ResourceName) {
        self.confirm = Some(ConfirmDialogState::discard_changes(&target));
        self.pending_switch = Some(target);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_dialog(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = StatusMessage::info(text);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = StatusMessage::error(text);
    }

    /// The tab after the active one, wrapping around.
    pub fn next_resource(&self) -> Option<ResourceName> {
        self.neighbor_resource(1)
    }

    /// The tab before the active one, wrapping around.
    pub fn prev_resource(&self) -> Option<ResourceName> {
        self.neighbor_resource(-1)
    }

    fn neighbor_resource(&self, step: isize) -> Option<ResourceName> {
        if self.resources.is_empty() {
            return None;
        }
        let len = self.resources.len() as isize;
        let current = self
            .session
            .active
            .as_ref()
            .and_then(|active| self.resources.iter().position(|r| r == active));
        let index = match current {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => 0,
        };
        self.resources.get(index as usize).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
