//! Main TUI runner - entry point and event loop
//!
//! The event loop drives the TEA cycle: terminal keys and backend
//! completion messages go through `handler::update`, and every
//! `UpdateAction` becomes a spawned tokio task that resolves into exactly
//! one completion message on the channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use confdeck_app::config::Settings;
use confdeck_app::handler::{Task, UpdateAction};
use confdeck_app::message::Message;
use confdeck_app::{handler, AppState};
use confdeck_client::Backend;
use confdeck_core::prelude::*;

use crate::widgets::EditorViewState;
use crate::{event, render, terminal};

/// Run the TUI application against the given backend
pub async fn run<B>(settings: Settings, backend: Arc<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    let mut editor_state = EditorViewState::default();

    // Unified message channel for backend completions
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Startup: probe backend reachability and open the first tab.
    spawn_task(Task::Health, msg_tx.clone(), backend.clone());
    if let Some(first) = state.resources.first().cloned() {
        process_message(
            &mut state,
            Message::SwitchResource { name: first },
            &msg_tx,
            &backend,
        );
    } else {
        state.set_error("No resources configured");
    }

    let result = run_loop(
        &mut term,
        &mut state,
        &mut editor_state,
        &mut msg_rx,
        &msg_tx,
        &backend,
    );

    // Restore terminal
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    editor_state: &mut EditorViewState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    while !state.should_quit() {
        // Process backend completion messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, backend);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state, editor_state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, backend);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, performing any
/// resulting actions and follow-up messages.
fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: Backend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(UpdateAction::SpawnTask(task)) = result.action {
            spawn_task(task, msg_tx.clone(), backend.clone());
        }

        msg = result.message;
    }
}

/// Spawn a backend task; its completion message is fed back into the
/// update loop. The channel closing during shutdown is not an error.
fn spawn_task<B>(task: Task, tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: Backend + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match task {
            Task::Load { name } => {
                let result = backend.load(&name).await.map_err(|e| e.to_string());
                Message::LoadFinished { name, result }
            }
            Task::Save { name, content } => {
                let result = backend
                    .save(&name, &content)
                    .await
                    .map_err(|e| e.to_string());
                Message::SaveFinished { name, result }
            }
            Task::Restart => Message::RestartFinished {
                result: backend.restart().await.map_err(|e| e.to_string()),
            },
            Task::Health => Message::HealthChecked {
                ok: backend.health().await,
            },
        };
        if tx.send(message).await.is_err() {
            debug!("event loop closed before task completion was delivered");
        }
    });
}
