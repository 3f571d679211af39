//! Edit session state: the active resource and its dirty tracking

use std::fmt;

use confdeck_core::ResourceName;

use crate::surface::{EditBufferFactory, SurfaceFactory, TextSurface};

/// Observable state of the edit session.
///
/// Derived from the session fields on demand, never stored, so it can
/// not drift from the surface content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// No resource has been loaded yet.
    Idle,
    /// Surface text matches the last synced copy.
    Clean,
    /// Surface text diverges from the last synced copy.
    Dirty,
    /// A load round-trip is in flight.
    Loading,
}

/// The edit session: which resource is bound to the surface and what the
/// backend's copy of it looked like when we last synced.
pub struct Session {
    /// Resource currently bound to the surface. `None` until the first
    /// load resolves.
    pub active: Option<ResourceName>,

    /// Text as last confirmed equal to the backend's copy: set on
    /// successful load, save resync, or revert.
    pub synced_text: String,

    /// A load is in flight; save/revert stay disabled until it resolves.
    pub loading: bool,

    /// The in-flight load is the post-save resync; its success reports
    /// "Saved" instead of "Loaded {name}".
    pub resync_after_save: bool,

    surface: Box<dyn TextSurface>,
    factory: Box<dyn SurfaceFactory>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_factory(Box::new(EditBufferFactory))
    }

    /// Create a session with a custom surface factory (used by frontends
    /// and tests to substitute the editing widget).
    pub fn with_factory(factory: Box<dyn SurfaceFactory>) -> Self {
        let surface = factory.create("");
        Self {
            active: None,
            synced_text: String::new(),
            loading: false,
            resync_after_save: false,
            surface,
            factory,
        }
    }

    pub fn surface(&self) -> &dyn TextSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn TextSurface {
        self.surface.as_mut()
    }

    /// Derived dirty flag: surface text diverges from the synced copy.
    pub fn is_dirty(&self) -> bool {
        self.surface.text() != self.synced_text
    }

    /// Whether save/revert are currently available.
    pub fn can_mutate(&self) -> bool {
        !self.loading && self.is_dirty()
    }

    pub fn phase(&self) -> EditPhase {
        if self.loading {
            EditPhase::Loading
        } else if self.active.is_none() {
            EditPhase::Idle
        } else if self.is_dirty() {
            EditPhase::Dirty
        } else {
            EditPhase::Clean
        }
    }

    /// Mark a load round-trip as started. Save/revert are disabled from
    /// this point until the load resolves.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Bind a successfully loaded resource. The old surface is dropped
    /// and a fresh one constructed, so nothing from the previous resource
    /// can leak into the new one's dirty tracking.
    pub fn finish_load(&mut self, name: ResourceName, content: String) {
        self.surface = self.factory.create(&content);
        self.synced_text = content;
        self.active = Some(name);
        self.loading = false;
    }

    /// A failed load leaves a usable, clean, empty buffer rather than
    /// stale content from the previous resource.
    pub fn finish_load_failed(&mut self, name: ResourceName) {
        self.surface = self.factory.create("");
        self.synced_text = String::new();
        self.active = Some(name);
        self.loading = false;
    }

    /// Reset the surface back to the synced copy. Programmatic: not a
    /// user edit.
    pub fn revert(&mut self) {
        let text = self.synced_text.clone();
        self.surface.set_text(&text);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.active)
            .field("synced_bytes", &self.synced_text.len())
            .field("loading", &self.loading)
            .field("resync_after_save", &self.resync_after_save)
            .field("phase", &self.phase())
            .finish()
    }
}
