use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "eng".to_string()
}

/// Page segmentation mode 6: assume a single uniform block of text.
/// Tuned for short monospaced code snippets.
fn default_psm() -> i32 {
    6
}

fn default_dpi() -> i32 {
    150
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_psm")]
    pub psm: i32,
    #[serde(default = "default_dpi")]
    pub dpi: i32,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language: default_language(),
            psm: default_psm(),
            dpi: default_dpi(),
        }
    }
}
