use std::sync::atomic::Ordering;
use std::sync::Arc;

use codesnip_comment::{CommentServiceClient, CommentTemplate};
use codesnip_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod comment;
pub mod extract;

use comment::handle_comment_request;
use extract::handle_selection;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    overlay_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Initialize the comment-service client once, from config
    let (comment_client, comment_template) = {
        let config = state.config.read().await;
        if config.comment.enabled {
            (
                Some(CommentServiceClient::new(
                    config.comment.url.clone(),
                    config.comment.api_key.clone(),
                )),
                CommentTemplate::new(
                    config.comment.style.clone(),
                    config.comment.language_hint.clone(),
                ),
            )
        } else {
            (None, CommentTemplate::default_line())
        }
    };

    let _ = app_to_ui_tx.send(AppEvent::BackendReady).await;

    tracing::info!("backend event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_events(
            state.clone(),
            comment_client.as_ref(),
            &comment_template,
            &app_to_ui_tx,
            &overlay_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    comment_client: Option<&CommentServiceClient>,
    comment_template: &CommentTemplate,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    overlay_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {}
        AppEvent::TriggerCapture => {
            if state.capture_in_flight.swap(true, Ordering::SeqCst) {
                tracing::debug!("capture already in flight, ignoring trigger");
                return Ok(());
            }

            // Activate the overlay session, then tell the toolkit to show
            // the overlay surface.
            overlay_tx.send(AppEvent::UiEvent(UiEvent::Show)).await?;
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Show)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Select a region".to_string(),
                    capturing: true,
                })
                .await;
        }
        AppEvent::PointerInput(pointer) => {
            // Pointer events from the toolkit are routed to the overlay
            // session while a gesture is possible.
            overlay_tx.send(AppEvent::PointerInput(pointer)).await?;
        }
        AppEvent::SelectionPreview(rect) => {
            let _ = app_to_ui_tx.send(AppEvent::SelectionPreview(rect)).await;
        }
        AppEvent::SelectionMade(gesture) => {
            // Overlay teardown happens before the pipeline starts.
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Hide)).await;

            handle_selection(state.clone(), gesture, app_to_ui_tx).await?;
            state.capture_in_flight.store(false, Ordering::SeqCst);
        }
        AppEvent::SelectionCancelled => {
            state.capture_in_flight.store(false, Ordering::SeqCst);
            let _ = app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Hide)).await;
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: "Ready".to_string(),
                    capturing: false,
                })
                .await;
        }
        AppEvent::CommentRequest { code } => {
            handle_comment_request(code, comment_client, comment_template, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(_)
        | AppEvent::ShowExtraction(_)
        | AppEvent::ShowHighlighted { .. }
        | AppEvent::ShowCommented { .. }
        | AppEvent::StatusUpdate { .. }
        | AppEvent::BackendReady => {
            // UI-bound events, nothing to do in the backend
        }
    }

    Ok(())
}
