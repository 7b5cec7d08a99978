use std::env;

use serde::{Deserialize, Serialize};

/// Display/capture settings. The scale factor is normally queried from the
/// display subsystem at startup; the override exists for environments where
/// that query misreports.
#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    pub scale_factor_override: Option<f64>,
}

impl CaptureConfig {
    pub fn new() -> Self {
        let scale_factor_override = env::var("CODESNIP_SCALE_FACTOR")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            scale_factor_override,
        }
    }
}
