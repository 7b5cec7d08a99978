use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_url() -> String {
    "http://localhost:8321/comment".to_string()
}

fn default_style() -> String {
    "line".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CommentConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Comment-service endpoint
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    /// "line", "block" or "doc"
    #[serde(default = "default_style")]
    pub style: String,
    /// Optional language hint forwarded with every request
    #[serde(default)]
    pub language_hint: String,
}

impl CommentConfig {
    pub fn new() -> Self {
        let api_key = env::var("COMMENT_API_KEY").unwrap_or_default();
        let url = env::var("COMMENT_SERVICE_URL").unwrap_or_else(|_| default_url());

        Self {
            enabled: default_enabled(),
            url,
            api_key,
            style: default_style(),
            language_hint: String::new(),
        }
    }
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            api_key: String::new(),
            style: default_style(),
            language_hint: String::new(),
        }
    }
}
