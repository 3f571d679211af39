//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use confdeck_app::{AppState, UiMode};

use crate::layout;
use crate::widgets::{self, EditorViewState};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState, editor_state: &mut EditorViewState) {
    let area = frame.area();
    let areas = layout::create(area);

    let header = widgets::MainHeader::new(&state.settings.server.url, state.backend_health);
    frame.render_widget(header, areas.header);

    let tabs = widgets::ResourceTabs::new(state);
    frame.render_widget(tabs, areas.tabs);

    let editor = widgets::EditorView::new(&state.session);
    frame.render_stateful_widget(editor, areas.editor, editor_state);

    let status_bar = widgets::StatusBar::new(state);
    frame.render_widget(status_bar, areas.status);

    // Modal overlay
    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog) = &state.confirm {
            frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
        }
    }
}
