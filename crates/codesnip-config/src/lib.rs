use std::env;

use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::comment::CommentConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod capture;
pub mod comment;
pub mod ocr;
pub mod ui;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub ui: UiConfig,
    pub ocr: OcrConfig,
    pub comment: CommentConfig,

    /// Hotkey watcher poll interval, in milliseconds
    pub delta_time: u64,
}

impl Config {
    pub fn new() -> Self {
        let delta_time = env::var("DELTA_TIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50); // 50ms default

        Config {
            capture: CaptureConfig::new(),
            ui: UiConfig::new(),
            ocr: OcrConfig::new(),
            comment: CommentConfig::new(),

            delta_time,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
