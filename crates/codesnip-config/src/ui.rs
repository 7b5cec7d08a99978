use serde::{Deserialize, Serialize};

fn default_highlight() -> bool {
    false
}

fn default_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_highlight_language() -> String {
    "rs".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Render a syntax-highlighted copy of successful extractions.
    #[serde(default = "default_highlight")]
    pub highlight: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// syntect language token for highlighting ("rs", "py", ...)
    #[serde(default = "default_highlight_language")]
    pub highlight_language: String,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            highlight: default_highlight(),
            theme: default_theme(),
            highlight_language: default_highlight_language(),
        }
    }
}
