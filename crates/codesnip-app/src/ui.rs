use codesnip_core::SelectionTracker;
use codesnip_types::{AppEvent, ExtractionOutcome, PointerEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

/// One selection gesture per activation.
///
/// The overlay toolkit (external) must cover the full screen extent, stay
/// near-transparent, and grab pointer input exclusively while active; this
/// task owns the gesture state behind that surface. Activated by
/// `UiEvent::Show`; emits `SelectionMade` exactly once, then deactivates so
/// the overlay is gone before the pipeline runs.
pub async fn overlay_loop(
    overlay_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut session: Option<SelectionTracker> = None;

    loop {
        let event = overlay_rx.recv().await?;

        match event {
            AppEvent::UiEvent(UiEvent::Show) => {
                session = Some(SelectionTracker::new());
                tracing::debug!("overlay session activated");
            }
            AppEvent::UiEvent(UiEvent::Hide) => {
                session = None;
            }
            AppEvent::UiEvent(UiEvent::Close) => {
                tracing::info!("overlay session shutting down");
                return Ok(());
            }
            AppEvent::PointerInput(pointer) => {
                let Some(tracker) = session.as_mut() else {
                    continue;
                };

                match pointer {
                    PointerEvent::Pressed(point) => tracker.on_press(point),
                    PointerEvent::Moved(point) => {
                        if let Some(preview) = tracker.on_move(point) {
                            let _ = ui_to_app_tx
                                .send(AppEvent::SelectionPreview(preview))
                                .await;
                        }
                    }
                    PointerEvent::Released(point) => {
                        if let Some(gesture) = tracker.on_release(point) {
                            ui_to_app_tx.send(AppEvent::SelectionMade(gesture)).await?;
                            session = None;
                        }
                    }
                    PointerEvent::Cancelled => {
                        tracker.cancel();
                        ui_to_app_tx.send(AppEvent::SelectionCancelled).await?;
                        session = None;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Minimal presentation consumer: shows extraction outcomes on the
/// terminal. This is where the three-variant outcome gets its wording;
/// the backend never collapses failures into "no text".
pub async fn display_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;

        match event {
            AppEvent::ShowExtraction(outcome) => match outcome {
                ExtractionOutcome::Text(text) => {
                    println!("{text}");
                }
                ExtractionOutcome::NoTextRecognized => {
                    println!("Error: No text detected in selection.");
                }
                ExtractionOutcome::OperationFailed(reason) => {
                    println!("Error: {reason}.");
                }
            },
            AppEvent::ShowHighlighted { rendered, .. } => {
                println!("{rendered}");
            }
            AppEvent::ShowCommented { commented, .. } => {
                println!("{commented}");
            }
            AppEvent::StatusUpdate { status, capturing } => {
                tracing::info!(capturing, "status: {status}");
            }
            AppEvent::UiEvent(UiEvent::Close) => return Ok(()),
            _ => {}
        }
    }
}
