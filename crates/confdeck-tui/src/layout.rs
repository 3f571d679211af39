//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub editor: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Resource tabs
        Constraint::Min(5),    // Editor
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        editor: chunks[2],
        status: chunks[3],
    }
}
