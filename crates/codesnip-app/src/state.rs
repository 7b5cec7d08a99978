use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Context;
use codesnip_config::Config;
use codesnip_core::DisplayContext;
use codesnip_ocr::TesseractEngine;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Read-only after initialization; queried once from the display
    /// subsystem (or the config override).
    pub display: DisplayContext,
    /// Single active gesture at a time.
    pub capture_in_flight: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        if config.ocr.enabled {
            let version =
                TesseractEngine::probe().context("OCR engine unavailable at startup")?;
            tracing::info!("OCR engine resolved: {}", version.trim());
        }

        let display = codesnip_ocr::display_context(config.capture.scale_factor_override)
            .context("failed to resolve display scale factor")?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            display,
            capture_in_flight: AtomicBool::new(false),
        })
    }
}
