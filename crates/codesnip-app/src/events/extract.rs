use std::sync::Arc;

use codesnip_core::output::into_outcome;
use codesnip_ocr::{Extractor, TesseractEngine, XcapGrabber};
use codesnip_types::{AppEvent, ExtractionOutcome, SelectionGesture};
use kanal::AsyncSender;

use crate::state::AppState;

/// Run the capture-and-recognition pipeline for one finalized gesture and
/// deliver the tagged outcome. All pipeline failures are recovered here;
/// none crash the session and none are retried.
pub async fn handle_selection(
    state: Arc<AppState>,
    gesture: SelectionGesture,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (ocr_config, ui_config) = {
        let config = state.config.read().await;
        (config.ocr.clone(), config.ui.clone())
    };

    let display = state.display;
    let result = tokio::task::spawn_blocking(move || {
        let extractor = Extractor::new(
            display,
            XcapGrabber::new(),
            TesseractEngine::from_config(&ocr_config),
        );
        extractor.extract(&gesture)
    })
    .await;

    let outcome = match result {
        Ok(pipeline_result) => {
            if let Err(e) = &pipeline_result {
                tracing::error!("extraction failed: {e}");
            }
            into_outcome(pipeline_result)
        }
        Err(e) => {
            tracing::error!("extraction task panicked: {e}");
            ExtractionOutcome::OperationFailed("internal task failure".to_string())
        }
    };

    if let ExtractionOutcome::Text(text) = &outcome {
        tracing::debug!(chars = text.len(), "extraction succeeded");

        // Fire-and-forget: clipboard trouble must not lose the result.
        let payload = text.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = codesnip_io::clipboard::copy_text(&payload) {
                tracing::warn!("clipboard copy failed: {e}");
            }
        });

        if ui_config.highlight {
            let plain = text.clone();
            let theme = ui_config.theme.clone();
            let language = ui_config.highlight_language.clone();
            let rendered =
                tokio::task::spawn_blocking(move || {
                    codesnip_highlight::highlight_terminal(&plain, &language, &theme)
                })
                .await;

            match rendered {
                Ok(Ok(rendered)) => {
                    let _ = app_to_ui_tx
                        .send(AppEvent::ShowHighlighted {
                            plain: text.clone(),
                            rendered,
                        })
                        .await;
                }
                Ok(Err(e)) => tracing::warn!("highlighting failed: {e}"),
                Err(e) => tracing::warn!("highlighting task panicked: {e}"),
            }
        }
    }

    let _ = app_to_ui_tx
        .send(AppEvent::ShowExtraction(outcome))
        .await;
    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Ready".to_string(),
            capturing: false,
        })
        .await;

    Ok(())
}
