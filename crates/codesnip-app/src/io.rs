use std::sync::Arc;
use std::time::Duration;

use codesnip_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Global hotkey watcher: polls on a blocking thread and turns presses into
/// `TriggerCapture` events.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (ocr_enabled, delta_time) = {
        let config = state.config.read().await;
        (config.ocr.enabled, config.delta_time)
    };

    if !ocr_enabled {
        tracing::warn!("OCR disabled, hotkey watcher not started");
        cancel.cancelled().await;
        return Ok(());
    }

    let poll_interval = Duration::from_millis(delta_time);

    let handle = tokio::task::spawn_blocking(move || {
        let hotkey_manager = match codesnip_ocr::HotkeyManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                tracing::error!("Failed to create capture hotkey manager: {e}");
                return;
            }
        };

        tracing::info!("capture hotkey registered (Ctrl+Shift+G)");

        loop {
            if cancel.is_cancelled() {
                break;
            }

            if hotkey_manager.poll() {
                tracing::info!("capture hotkey pressed");
                if let Err(e) = event_tx.try_send(AppEvent::TriggerCapture) {
                    tracing::error!("Failed to send capture trigger: {e}");
                    break;
                }
            }

            std::thread::sleep(poll_interval);
        }

        tracing::info!("hotkey watcher stopping");
    });

    handle.await?;
    Ok(())
}
